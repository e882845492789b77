use crate::board::{CellId, Figure};
use derive_more::{Constructor, Display};

/// The identity of a seat at the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "player {}", _0)]
pub struct PlayerId(pub u8);

/// A seat at the board: a name, a roster of figures, and the private cells
/// the figures pass through.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) id: PlayerId,
    pub(crate) start: CellId,
    pub(crate) goal: CellId,
    pub(crate) figures: Vec<Figure>,
}

impl Player {
    /// The display name of this player.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The identity of this player.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The cell where this player's figures enter the ring.
    pub fn start(&self) -> CellId {
        self.start
    }

    /// The first cell of this player's goal lane.
    pub fn goal(&self) -> CellId {
        self.goal
    }

    /// This player's figures, in roster order.
    pub fn figures(&self) -> impl Iterator<Item = &Figure> {
        self.figures.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn player_id_displays_its_index(id: PlayerId) {
        assert_eq!(id.to_string(), format!("player {}", id.0));
    }
}
