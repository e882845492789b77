use derive_more::{Display, Error, From};
use lib::board::{FigureId, Placement};
use serde::{Deserialize, Serialize};
use std::io::{self, Stdin, Stdout};
use std::str::FromStr;

mod random;
mod terminal;

pub use random::*;
pub use terminal::*;

/// Trait for types that choose which figure to move.
#[cfg_attr(test, mockall::automock(type Error = String;))]
pub trait Choose {
    /// The reason why no choice could be made.
    type Error;

    /// Pick one of the legal figures, or `None` only if there are none.
    fn choose(
        &mut self,
        placement: &Placement,
        legal: &[FigureId],
    ) -> Result<Option<FigureId>, Self::Error>;
}

/// The reason why the [`Actor`] failed to choose.
#[derive(Debug, Display, Error, From)]
pub enum ActorError {
    /// The terminal player could not be reached.
    #[display(fmt = "the terminal player failed")]
    Terminal(io::Error),
}

/// A generic decision provider.
#[derive(Debug, From)]
pub enum Actor {
    Random(Random),
    Terminal(Terminal<Stdout, Stdin>),
}

impl Choose for Actor {
    type Error = ActorError;

    fn choose(
        &mut self,
        placement: &Placement,
        legal: &[FigureId],
    ) -> Result<Option<FigureId>, Self::Error> {
        match self {
            Actor::Random(a) => Ok(a.choose(placement, legal).map_err(|e| -> ActorError { match e {} })?),
            Actor::Terminal(a) => Ok(a.choose(placement, legal)?),
        }
    }
}

/// Runtime configuration for an [`Actor`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum ActorConfig {
    /// A computer player choosing uniformly among the legal figures.
    #[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
    Random(),

    /// An interactive player on the standard streams.
    #[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
    Terminal(),
}

/// The reason why parsing [`ActorConfig`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse actor configuration")]
pub struct ParseActorConfigError(ron::de::SpannedError);

impl FromStr for ActorConfig {
    type Err = ParseActorConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_actor_config_is_an_identity(c: ActorConfig) {
        assert_eq!(c.to_string().parse(), Ok(c));
    }

    #[test]
    fn actor_config_accepts_plain_names() {
        assert_eq!("random()".parse(), Ok(ActorConfig::Random()));
        assert_eq!("terminal()".parse(), Ok(ActorConfig::Terminal()));
    }

    #[test]
    fn actor_config_rejects_unknown_names() {
        assert!("oracle()".parse::<ActorConfig>().is_err());
    }
}
