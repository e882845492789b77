use crate::actor::{Actor, ActorConfig, Random, Terminal};
use crate::io::Io;
use anyhow::Error as Anyhow;

/// Trait for types that encode runtime configuration.
pub trait Build {
    /// The type built from this configuration.
    type Output;

    /// Consume this configuration to build [`Build::Output`].
    fn build(self) -> Result<Self::Output, Anyhow>;
}

impl Build for ActorConfig {
    type Output = Actor;

    fn build(self) -> Result<Self::Output, Anyhow> {
        match self {
            ActorConfig::Random() => Ok(Random::new().into()),
            ActorConfig::Terminal() => Ok(Terminal::new(Io::stdio()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_config_builds_a_random_actor() {
        assert!(matches!(
            ActorConfig::Random().build().unwrap(),
            Actor::Random(_)
        ));
    }

    #[test]
    fn terminal_config_builds_a_terminal_actor() {
        assert!(matches!(
            ActorConfig::Terminal().build().unwrap(),
            Actor::Terminal(_)
        ));
    }
}
