use crate::actor::{Actor, ActorConfig, Random};
use crate::build::Build;
use crate::game::Game;
use crate::render::Ascii;
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::board::{Board, Setup, Variant};
use lib::rules::Die;
use std::num::NonZeroUsize;
use std::{cmp::min, io::stderr};
use tracing::{info, instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Command line interface.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// Number of players seated at the board.
    #[clap(short, long, default_value_t = 4)]
    players: u8,

    /// Number of figures per player.
    #[clap(short, long, default_value_t = 4)]
    figures: u8,

    /// Board variant.
    #[clap(long, default_value_t = Variant::Simple)]
    variant: Variant,

    /// Number of games to play.
    #[clap(short = 'n', long, default_value = "1")]
    games: NonZeroUsize,

    /// Fixed seed for dice and computer players, for reproducible games.
    #[clap(short, long)]
    seed: Option<u64>,

    /// One actor per seat, in seating order.
    ///
    /// If fewer actors than seats are given, the last one is repeated.
    #[clap(short, long, value_delimiter = ',', default_value = "random()")]
    actors: Vec<ActorConfig>,
}

/// Builds the actor for a seat, honoring the seed if one was given.
fn seat(config: ActorConfig, seed: Option<u64>) -> Result<Actor, Anyhow> {
    match (config, seed) {
        (ActorConfig::Random(), Some(s)) => Ok(Random::seeded(s).into()),
        (config, _) => config.build(),
    }
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let writer = layer()
            .pretty()
            .with_thread_names(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();

        let setup = Setup::new(self.players, self.figures, self.variant)?;
        let mut board = Board::new(setup);

        let mut configs = self.actors.clone();
        let last = *configs.last().context("at least one actor is required")?;
        configs.resize(self.players as usize, last);

        let seats = self.players as usize;
        let mut wins = vec![0usize; seats];

        for game in 0..self.games.get() {
            board.reset();

            // distinct streams per seat and per game
            let base = self.seed.map(|s| s.wrapping_add((game * 2 * seats) as u64));

            let actors = configs
                .iter()
                .enumerate()
                .map(|(i, &c)| seat(c, base.map(|s| s.wrapping_add(i as u64))))
                .collect::<Result<Vec<_>, _>>()?;

            let dice: Vec<_> = (0..seats)
                .map(|i| match base {
                    Some(s) => Die::seeded(s.wrapping_add((seats + i) as u64)),
                    None => Die::new(),
                })
                .collect();

            let winner = Game::new(actors, dice).play(&mut board)?;
            info!(game, %winner);
            wins[usize::from(winner.0)] += 1;

            println!("{}", Ascii(&board.placement()));
        }

        for player in board.players() {
            let won = wins[usize::from(player.id().0)];
            println!("{} ({}): {} of {} games", player.id(), player.name(), won, self.games);
        }

        Ok(())
    }
}
