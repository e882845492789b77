use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Trait for types that produce die rolls.
pub trait Roll {
    /// Roll once, yielding a value in `[1, 6]`.
    fn roll(&mut self) -> u8;
}

/// A fair six-sided die.
#[derive(Debug, Clone)]
pub struct Die {
    rng: StdRng,
}

impl Die {
    /// A die seeded from entropy.
    pub fn new() -> Self {
        Die {
            rng: StdRng::from_entropy(),
        }
    }

    /// A die with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Die {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Die {
    fn default() -> Self {
        Die::new()
    }
}

impl Roll for Die {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn rolls_stay_within_the_die_faces(seed: u64) {
        let mut die = Die::seeded(seed);

        for _ in 0..100 {
            let roll = die.roll();
            assert!((1..=6).contains(&roll));
        }
    }

    #[proptest]
    fn seeded_dice_are_reproducible(seed: u64) {
        let mut a = Die::seeded(seed);
        let mut b = Die::seeded(seed);

        for _ in 0..100 {
            assert_eq!(a.roll(), b.roll());
        }
    }
}
