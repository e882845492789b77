use crate::board::{Cell, CellId, CellKind, CellSnapshot, Figure, FigureId};
use crate::board::{OwnershipConflict, Placement, Player, PlayerId, Setup, Spot};
use derive_more::{Display, Error};
use tracing::instrument;

/// An attempt to move a figure in violation of its preconditions.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[error(ignore)]
pub enum InvalidMove {
    /// The figure is still in its house and may only enter at its start cell.
    #[display(fmt = "{} is still in its house", _0)]
    FigureInHouse(FigureId),

    /// The figure is already out of its house.
    #[display(fmt = "{} is already out of its house", _0)]
    FigureNotInHouse(FigureId),

    /// No cell lies the given number of steps ahead.
    #[display(fmt = "{} cannot advance {} steps", _0, _1)]
    NoDestination(FigureId, u8),

    /// The destination is held by a figure of the same player.
    #[display(fmt = "{} is blocked by a friendly figure", _0)]
    Blocked(FigureId),
}

/// The full state of the board: cells, players, and figures.
///
/// Topology is fixed once constructed; play only ever changes which figures
/// stand where.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    cells: Vec<Cell>,
    players: Vec<Player>,
    ring: usize,
    setup: Setup,
}

impl Board {
    /// Builds the board described by `setup`, every figure in its house.
    pub fn new(setup: Setup) -> Self {
        let ring = setup.ring_size();
        let players = setup.players() as usize;
        let figures = setup.figures() as usize;
        let gap = ring / players;

        let mut cells = Vec::with_capacity(ring + 2 * players * figures);

        for i in 0..ring {
            let (kind, owner) = if i % gap == 0 {
                (CellKind::Start, Some(PlayerId((i / gap) as u8)))
            } else {
                (CellKind::Track, None)
            };

            cells.push(Cell::new(kind, i as i32, owner));
        }

        for i in 0..ring {
            cells[i].successor = Some(CellId((i + 1) % ring));
        }

        let mut seats = Vec::with_capacity(players);

        for p in 0..players {
            let id = PlayerId(p as u8);
            let start = CellId(p * gap);

            let goal = cells.len();
            for g in 0..figures {
                let label = -101 - (p * figures + g) as i32;
                cells.push(Cell::new(CellKind::Goal, label, Some(id)));
            }

            for g in 0..figures - 1 {
                cells[goal + g].successor = Some(CellId(goal + g + 1));
            }

            let houses = cells.len();
            let mut roster = Vec::with_capacity(figures);
            for f in 0..figures {
                let label = -1 - (p * figures + f) as i32;
                let mut cell = Cell::new(CellKind::House, label, Some(id));
                cell.successor = Some(start);
                cells.push(cell);

                let house = CellId(houses + f);
                let figure = FigureId::new(id, f as u8);
                cells[house.0].occupancy.push(figure);

                roster.push(Figure {
                    id: figure,
                    cell: house,
                    house,
                });
            }

            seats.push(Player {
                name: format!("Player {}", p + 1),
                id,
                start,
                goal: CellId(goal),
                figures: roster,
            });
        }

        Board {
            cells,
            players: seats,
            ring,
            setup,
        }
    }

    /// The sizing parameters this board was built from.
    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    /// The number of cells in the shared ring.
    pub fn ring_size(&self) -> usize {
        self.ring
    }

    /// The handle of the ring cell at the given ring index.
    pub fn ring_cell(&self, index: usize) -> CellId {
        CellId(index % self.ring)
    }

    /// The cell behind a handle.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    /// Every cell of the board, ring first.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The players seated at the board.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// The player behind an identity.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.0 as usize]
    }

    /// The figure behind an identity.
    pub fn figure(&self, id: FigureId) -> &Figure {
        &self.players[id.player.0 as usize].figures[id.index as usize]
    }

    fn figure_mut(&mut self, id: FigureId) -> &mut Figure {
        &mut self.players[id.player.0 as usize].figures[id.index as usize]
    }

    /// Whether the figure is waiting in its house.
    pub fn in_house(&self, id: FigureId) -> bool {
        self.cell(self.figure(id).cell).kind() == CellKind::House
    }

    /// Whether the figure has reached the goal lane.
    pub fn in_goal(&self, id: FigureId) -> bool {
        self.cell(self.figure(id).cell).kind() == CellKind::Goal
    }

    /// Whether every figure of the player is waiting in its house.
    pub fn all_in_house(&self, id: PlayerId) -> bool {
        self.player(id).figures.iter().all(|f| self.in_house(f.id))
    }

    /// Whether every figure of the player has reached the goal lane.
    pub fn all_in_goal(&self, id: PlayerId) -> bool {
        self.player(id).figures.iter().all(|f| self.in_goal(f.id))
    }

    /// The cell `steps` successor hops ahead of `from`, for a figure of
    /// `mover`.
    ///
    /// While hopping along the ring, if the next hop would land exactly on
    /// the mover's own start cell and `allow_goal_entry` holds, the hop is
    /// redirected into the first cell of the mover's goal lane and the
    /// remaining steps follow the lane. Should the lane run out, the whole
    /// resolution is retried without goal entry, so excess steps carry the
    /// figure past its start and around the ring again.
    ///
    /// Returns `None` when no cell lies `steps` ahead, which only happens
    /// when `from` is a house cell or the hops exhaust the goal lane.
    pub fn resolve(
        &self,
        from: CellId,
        steps: u8,
        mover: PlayerId,
        allow_goal_entry: bool,
    ) -> Option<CellId> {
        match self.hop(from, steps, mover, allow_goal_entry) {
            None if allow_goal_entry => self.hop(from, steps, mover, false),
            destination => destination,
        }
    }

    fn hop(
        &self,
        from: CellId,
        steps: u8,
        mover: PlayerId,
        allow_goal_entry: bool,
    ) -> Option<CellId> {
        if steps > 0 && self.cell(from).kind() == CellKind::House {
            return None;
        }

        let start = self.player(mover).start;
        let goal = self.player(mover).goal;

        let mut cursor = from;
        for _ in 0..steps {
            cursor = match self.cell(cursor).successor() {
                Some(n) if allow_goal_entry && n == start && self.cell(cursor).on_ring() => goal,
                Some(n) => n,
                None => return None,
            };
        }

        Some(cursor)
    }

    /// Moves a figure to the given cell.
    ///
    /// Landing on a ring cell held by another player captures all of its
    /// residents, sending them back to their houses. Landing on a foreign
    /// private cell fails without mutating anything.
    #[instrument(level = "trace", skip(self), err)]
    pub fn relocate(&mut self, figure: FigureId, to: CellId) -> Result<(), OwnershipConflict> {
        let destination = self.cell(to);

        if destination.is_private() {
            if let Some(owner) = destination.owner() {
                if owner != figure.player {
                    return Err(OwnershipConflict { figure, owner });
                }
            }
        }

        self.install(figure, to);

        Ok(())
    }

    /// Enters a housed figure at its player's start cell.
    #[instrument(level = "trace", skip(self), err)]
    pub fn move_out_of_house(&mut self, figure: FigureId) -> Result<(), InvalidMove> {
        if !self.in_house(figure) {
            return Err(InvalidMove::FigureNotInHouse(figure));
        }

        let start = self.player(figure.player).start;
        self.install(figure, start);

        Ok(())
    }

    /// Advances a figure `steps` cells ahead, entering the goal lane when
    /// the hops pass the figure's own start cell.
    #[instrument(level = "trace", skip(self), err)]
    pub fn move_forward(&mut self, figure: FigureId, steps: u8) -> Result<(), InvalidMove> {
        if self.in_house(figure) {
            return Err(InvalidMove::FigureInHouse(figure));
        }

        let from = self.figure(figure).cell;

        let to = self
            .resolve(from, steps, figure.player, true)
            .ok_or(InvalidMove::NoDestination(figure, steps))?;

        let destination = self.cell(to);
        if destination.on_ring() && destination.occupancy().owner() == Some(figure.player) {
            return Err(InvalidMove::Blocked(figure));
        }

        self.install(figure, to);

        Ok(())
    }

    /// Installs a figure on a cell it is entitled to stand on, evicting any
    /// opposing residents to their houses first.
    ///
    /// Both sides of the move are updated before returning, so the figure's
    /// recorded cell and the occupancies always agree.
    fn install(&mut self, figure: FigureId, to: CellId) {
        debug_assert!(self.cell(to).occupancy().can_accept(figure.player) || self.cell(to).on_ring());

        let evicted: Vec<_> = match self.cell(to).occupancy().owner() {
            Some(owner) if owner != figure.player => self.cell(to).occupancy().residents().to_vec(),
            _ => Vec::new(),
        };

        for e in evicted {
            let house = self.figure(e).house;
            self.cells[to.0].occupancy.remove(e);
            self.figure_mut(e).cell = house;
            self.cells[house.0].occupancy.push(e);
        }

        let from = self.figure(figure).cell;
        self.cells[from.0].occupancy.remove(figure);
        self.figure_mut(figure).cell = to;
        self.cells[to.0].occupancy.push(figure);
    }

    /// Returns the board to its initial state, every figure in its house.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.occupancy.clear();
        }

        for p in 0..self.players.len() {
            for f in 0..self.players[p].figures.len() {
                let house = self.players[p].figures[f].house;
                self.players[p].figures[f].cell = house;
                self.cells[house.0].occupancy.push(self.players[p].figures[f].id);
            }
        }
    }

    /// A read-only snapshot of the board for external renderers.
    pub fn placement(&self) -> Placement {
        let ring = self.cells[..self.ring]
            .iter()
            .map(|c| CellSnapshot {
                kind: c.kind(),
                label: c.label(),
                owner: c.owner(),
                residents: c.occupancy().residents().to_vec(),
            })
            .collect();

        let figures = self
            .players
            .iter()
            .map(|p| p.figures.iter().map(|f| self.spot(f)).collect())
            .collect();

        Placement { ring, figures }
    }

    fn spot(&self, figure: &Figure) -> Spot {
        let cell = self.cell(figure.cell);

        match cell.kind() {
            CellKind::House => Spot::House,
            CellKind::Track | CellKind::Start => Spot::Ring(cell.label() as usize),
            CellKind::Goal => Spot::Goal(self.goal_slot(figure.id.player, figure.cell)),
        }
    }

    fn goal_slot(&self, player: PlayerId, cell: CellId) -> usize {
        let mut cursor = self.player(player).goal;
        let mut slot = 0;

        while cursor != cell {
            match self.cell(cursor).successor() {
                Some(n) => {
                    cursor = n;
                    slot += 1;
                }
                None => break,
            }
        }

        slot
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(Setup::default())
    }
}
