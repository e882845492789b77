use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

/// The shape of the shared ring.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Variant {
    /// A small ring of five cells per player.
    #[display(fmt = "simple")]
    Simple,

    /// The classic board of forty cells.
    #[display(fmt = "standard")]
    Standard,

    /// The six-player board of forty-eight cells.
    #[display(fmt = "large")]
    Large,
}

impl Variant {
    /// The number of ring cells for the given player count.
    pub fn ring_size(&self, players: u8) -> usize {
        match self {
            Variant::Simple => 5 * players as usize,
            Variant::Standard => 40,
            Variant::Large => 48,
        }
    }
}

/// The reason why parsing [`Variant`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "expected one of `simple`, `standard`, or `large`")]
pub struct ParseVariantError;

impl FromStr for Variant {
    type Err = ParseVariantError;

    #[instrument(level = "trace", err)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Variant::Simple),
            "standard" => Ok(Variant::Standard),
            "large" => Ok(Variant::Large),
            _ => Err(ParseVariantError),
        }
    }
}

/// The reason why the board could not be constructed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[error(ignore)]
pub enum ConfigurationError {
    /// Fewer than two players were requested.
    #[display(fmt = "a game requires at least two players, got {}", _0)]
    NotEnoughPlayers(u8),

    /// A player commands no figures.
    #[display(fmt = "each player requires at least one figure")]
    NoFigures,

    /// The ring cannot be divided evenly among the players.
    #[display(fmt = "a ring of {} cells cannot be divided among {} players", ring, players)]
    UnevenRing { ring: usize, players: u8 },
}

/// Validated board sizing parameters.
///
/// A [`Setup`] can only be obtained through [`Setup::new`], so holding one
/// proves the parameters are consistent.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Setup {
    players: u8,
    figures: u8,
    variant: Variant,
}

impl Setup {
    /// Validates the given parameters.
    #[instrument(level = "trace", err)]
    pub fn new(players: u8, figures: u8, variant: Variant) -> Result<Self, ConfigurationError> {
        if players < 2 {
            return Err(ConfigurationError::NotEnoughPlayers(players));
        }

        if figures == 0 {
            return Err(ConfigurationError::NoFigures);
        }

        let ring = variant.ring_size(players);

        if ring % players as usize != 0 {
            return Err(ConfigurationError::UnevenRing { ring, players });
        }

        Ok(Setup {
            players,
            figures,
            variant,
        })
    }

    /// How many players are seated at the board.
    pub fn players(&self) -> u8 {
        self.players
    }

    /// How many figures each player commands.
    pub fn figures(&self) -> u8 {
        self.figures
    }

    /// The board variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The number of cells in the shared ring.
    pub fn ring_size(&self) -> usize {
        self.variant.ring_size(self.players)
    }
}

impl Default for Setup {
    fn default() -> Self {
        Setup {
            players: 4,
            figures: 4,
            variant: Variant::Simple,
        }
    }
}
