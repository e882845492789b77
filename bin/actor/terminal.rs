use crate::actor::Choose;
use crate::io::Io;
use lib::board::{FigureId, Placement};
use std::io::{self, Read, Write};
use tracing::instrument;

/// An interactive player that prompts for a figure choice.
#[derive(Debug)]
pub struct Terminal<W: Write, R: Read> {
    io: Io<W, R>,
}

impl<W: Write, R: Read> Terminal<W, R> {
    pub fn new(io: Io<W, R>) -> Self {
        Terminal { io }
    }
}

impl<W: Write, R: Read> Choose for Terminal<W, R> {
    type Error = io::Error;

    #[instrument(level = "trace", skip(self, placement), err)]
    fn choose(
        &mut self,
        placement: &Placement,
        legal: &[FigureId],
    ) -> Result<Option<FigureId>, Self::Error> {
        if legal.is_empty() {
            return Ok(None);
        }

        self.io.send("choose a figure to move:")?;

        for (i, &figure) in legal.iter().enumerate() {
            self.io
                .send(format_args!("  [{}] {} ({})", i, figure, placement.spot(figure)))?;
        }

        self.io.flush()?;

        loop {
            let line = self.io.recv()?;

            match line.trim().parse::<usize>() {
                Ok(i) if i < legal.len() => return Ok(Some(legal[i])),
                _ => {
                    self.io
                        .send(format_args!("enter a number between 0 and {}", legal.len() - 1))?;
                    self.io.flush()?;
                }
            }
        }
    }
}
