use anyhow::Error as Anyhow;
use clap::Parser;

mod actor;
mod build;
mod cli;
mod game;
mod io;
mod render;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
