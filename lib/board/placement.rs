use crate::board::{CellKind, FigureId, PlayerId};
use derive_more::Display;

/// Where a figure stands, in renderer-friendly terms.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Spot {
    /// Waiting in its house.
    #[display(fmt = "house")]
    House,

    /// On the shared ring, at this ring index.
    #[display(fmt = "ring cell {}", _0)]
    Ring(usize),

    /// In the goal lane, at this 0-indexed slot.
    #[display(fmt = "goal slot {}", _0)]
    Goal(usize),
}

/// A read-only snapshot of one cell.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CellSnapshot {
    /// The kind of the cell.
    pub kind: CellKind,

    /// The display label of the cell.
    pub label: i32,

    /// The fixed owner of the cell, if any.
    pub owner: Option<PlayerId>,

    /// The figures standing on the cell, in arrival order.
    pub residents: Vec<FigureId>,
}

/// A read-only snapshot of the whole board, sufficient for drawing.
///
/// The core never formats text; renderers consume this instead.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Placement {
    /// The ring cells, by ring index.
    pub ring: Vec<CellSnapshot>,

    /// Every figure's spot, by player and roster index.
    pub figures: Vec<Vec<Spot>>,
}

impl Placement {
    /// The spot of the given figure.
    pub fn spot(&self, figure: FigureId) -> Spot {
        self.figures[figure.player.0 as usize][figure.index as usize]
    }
}
