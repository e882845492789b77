use crate::board::{FigureId, PlayerId};
use derive_more::{Display, Error};

/// A figure was pushed onto a private cell of another player.
///
/// This indicates a logic defect rather than a game event; correct callers
/// never trigger it.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "{} may not stand on a private cell of {}", figure, owner)]
#[error(ignore)]
pub struct OwnershipConflict {
    pub figure: FigureId,
    pub owner: PlayerId,
}

/// The figures currently standing on a cell.
///
/// All residents belong to the same player at any time; landing on a cell
/// held by another player is resolved as a capture before installation.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Occupancy {
    owner: Option<PlayerId>,
    residents: Vec<FigureId>,
}

impl Occupancy {
    /// The player whose figures stand here, or `None` when empty.
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// The resident figures, in arrival order.
    pub fn residents(&self) -> &[FigureId] {
        &self.residents
    }

    /// Whether no figure stands here.
    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    /// Whether a figure of `owner` may be installed without a capture.
    pub fn can_accept(&self, owner: PlayerId) -> bool {
        self.owner.map_or(true, |o| o == owner)
    }

    /// Installs a figure.
    ///
    /// The caller must have resolved captures and ownership conflicts first.
    pub(crate) fn push(&mut self, figure: FigureId) {
        debug_assert!(self.can_accept(figure.player));
        self.owner = Some(figure.player);
        self.residents.push(figure);
    }

    /// Removes a figure, clearing the owner once no resident remains.
    pub(crate) fn remove(&mut self, figure: FigureId) {
        self.residents.retain(|&f| f != figure);

        if self.residents.is_empty() {
            self.owner = None;
        }
    }

    /// Empties this cell entirely, used only on game reset.
    pub(crate) fn clear(&mut self) {
        self.owner = None;
        self.residents.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn empty_occupancy_has_no_owner(f: FigureId) {
        let o = Occupancy::default();
        assert!(o.is_empty());
        assert_eq!(o.owner(), None);
        assert!(o.can_accept(f.player));
    }

    #[proptest]
    fn push_installs_the_figure_and_its_owner(f: FigureId) {
        let mut o = Occupancy::default();
        o.push(f);
        assert_eq!(o.owner(), Some(f.player));
        assert_eq!(o.residents(), [f]);
    }

    #[proptest]
    fn removing_the_last_resident_clears_the_owner(f: FigureId) {
        let mut o = Occupancy::default();
        o.push(f);
        o.remove(f);
        assert!(o.is_empty());
        assert_eq!(o.owner(), None);
    }

    #[proptest]
    fn same_owner_figures_may_coexist(f: FigureId, #[strategy(0..=u8::MAX)] i: u8) {
        let g = FigureId::new(f.player, i);

        let mut o = Occupancy::default();
        o.push(f);
        o.push(g);

        assert_eq!(o.owner(), Some(f.player));
        assert!(o.residents().contains(&f));
        assert!(o.residents().contains(&g));
    }

    #[proptest]
    fn occupied_cell_only_accepts_its_owner(f: FigureId, p: PlayerId) {
        let mut o = Occupancy::default();
        o.push(f);
        assert_eq!(o.can_accept(p), f.player == p);
    }

    #[proptest]
    fn clear_empties_the_cell(f: FigureId) {
        let mut o = Occupancy::default();
        o.push(f);
        o.clear();
        assert_eq!(o, Occupancy::default());
    }
}
