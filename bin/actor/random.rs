use crate::actor::Choose;
use lib::board::{FigureId, Placement};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::convert::Infallible;

/// A computer player that picks any legal figure with uniform probability.
#[derive(Debug, Clone)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// A computer player seeded from entropy.
    pub fn new() -> Self {
        Random {
            rng: StdRng::from_entropy(),
        }
    }

    /// A computer player with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Random {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Random::new()
    }
}

impl Choose for Random {
    type Error = Infallible;

    fn choose(
        &mut self,
        _: &Placement,
        legal: &[FigureId],
    ) -> Result<Option<FigureId>, Self::Error> {
        Ok(legal.choose(&mut self.rng).copied())
    }
}
