use crate::board::{Occupancy, PlayerId};
use derive_more::Display;

/// A handle to a cell of the board.
///
/// Successors are stored as handles into the board's cell table rather than
/// as references, so the ring involves no self-referential links.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[display(fmt = "cell #{}", _0)]
pub struct CellId(pub(crate) usize);

/// The kind of a board cell.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum CellKind {
    /// A shared cell of the ring.
    #[display(fmt = "track")]
    Track,

    /// The ring cell where one player's figures enter play.
    #[display(fmt = "start")]
    Start,

    /// A private holding cell for one not-yet-started figure.
    #[display(fmt = "house")]
    House,

    /// A private cell of one player's goal lane.
    #[display(fmt = "goal")]
    Goal,
}

/// A single cell of the board.
///
/// Topology is fixed at setup; only the occupancy changes afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Cell {
    pub(crate) kind: CellKind,
    pub(crate) label: i32,
    pub(crate) owner: Option<PlayerId>,
    pub(crate) successor: Option<CellId>,
    pub(crate) occupancy: Occupancy,
}

impl Cell {
    pub(crate) fn new(kind: CellKind, label: i32, owner: Option<PlayerId>) -> Self {
        Cell {
            kind,
            label,
            owner,
            successor: None,
            occupancy: Occupancy::default(),
        }
    }

    /// The kind of this cell.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// The display label of this cell.
    ///
    /// Ring cells are labeled by their ring index; house and goal cells use
    /// reserved negative ranges.
    pub fn label(&self) -> i32 {
        self.label
    }

    /// The player this cell belongs to, if any.
    ///
    /// Set for start, house, and goal cells; track cells belong to no one.
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// The next cell in sequence, if any.
    pub fn successor(&self) -> Option<CellId> {
        self.successor
    }

    /// The figures currently standing on this cell.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Whether this cell is part of the shared ring.
    pub fn on_ring(&self) -> bool {
        matches!(self.kind, CellKind::Track | CellKind::Start)
    }

    /// Whether this cell may only ever hold its owner's figures.
    pub fn is_private(&self) -> bool {
        matches!(self.kind, CellKind::House | CellKind::Goal)
    }
}
