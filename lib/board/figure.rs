use crate::board::{CellId, PlayerId};
use derive_more::{Constructor, Display};

/// Identifies one figure of one player.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "figure {} of {}", index, player)]
pub struct FigureId {
    pub player: PlayerId,
    pub index: u8,
}

/// One playable piece.
///
/// A figure is never destroyed; captured figures return to their house cell.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Figure {
    pub(crate) id: FigureId,
    pub(crate) cell: CellId,
    pub(crate) house: CellId,
}

impl Figure {
    /// The identity of this figure.
    pub fn id(&self) -> FigureId {
        self.id
    }

    /// The cell this figure currently stands on.
    pub fn cell(&self) -> CellId {
        self.cell
    }

    /// The house cell this figure starts at and returns to when captured.
    pub fn house(&self) -> CellId {
        self.house
    }
}
