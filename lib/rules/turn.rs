use crate::board::{Board, FigureId, PlayerId};
use derive_more::Display;
use tracing::instrument;

/// How many consecutive roll attempts a player gets while all of their
/// figures are still housed.
pub const MAX_HOUSE_ROLLS: u8 = 3;

/// The last action taken within the current turn.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Action {
    /// The turn has not begun.
    #[default]
    #[display(fmt = "none")]
    None,

    /// The player rolled the die.
    #[display(fmt = "rolled")]
    Rolled,

    /// The player moved a figure.
    #[display(fmt = "moved")]
    Moved,

    /// The player won the game.
    #[display(fmt = "won")]
    Won,
}

/// The state machine governing one player's turn.
///
/// A move is only legal immediately after a roll, and the legality of a roll
/// depends on what happened before it, so both are answered here and nowhere
/// else. The state is explicit rather than hidden inside the board, which
/// keeps it inspectable between calls.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Turn {
    last: Action,
    rolls: u8,
}

impl Turn {
    /// A fresh turn, nothing rolled yet.
    pub fn new() -> Self {
        Turn::default()
    }

    /// The last action taken this turn.
    pub fn last_action(&self) -> Action {
        self.last
    }

    /// How many times the player has rolled while fully housed.
    pub fn consecutive_rolls(&self) -> u8 {
        self.rolls
    }

    /// Begins a new player's turn.
    pub fn reset(&mut self) {
        self.last = Action::None;
        self.rolls = 0;
    }

    /// Whether the player may roll the die now.
    ///
    /// A player who has moved this turn may not roll again. A player whose
    /// figures are all housed gets up to [`MAX_HOUSE_ROLLS`] attempts to
    /// roll the six they need; anyone else may roll as long as at least one
    /// figure has not reached the goal.
    #[instrument(level = "debug", skip(self, board), ret)]
    pub fn check_roll(&mut self, board: &Board, player: PlayerId) -> bool {
        if matches!(self.last, Action::Moved | Action::Won) {
            return false;
        }

        if board.all_in_house(player) {
            if self.rolls >= MAX_HOUSE_ROLLS {
                return false;
            }

            self.rolls += 1;
            self.last = Action::Rolled;
            return true;
        }

        if board.player(player).figures().any(|f| !board.in_goal(f.id())) {
            self.last = Action::Rolled;
            true
        } else {
            false
        }
    }

    /// The figures the player may move for the given roll.
    ///
    /// Yields nothing unless the immediately preceding action was a roll.
    /// A housed figure is legal only on a six; a figure on the ring or in
    /// the goal lane is legal if its destination resolves and is not held
    /// by a friendly figure on the ring. A non-empty answer commits the
    /// turn to a move.
    #[instrument(level = "debug", skip(self, board), ret)]
    pub fn check_move(&mut self, board: &Board, player: PlayerId, roll: u8) -> Vec<FigureId> {
        if self.last != Action::Rolled {
            return Vec::new();
        }

        let mut legal = Vec::new();

        for figure in board.player(player).figures() {
            let id = figure.id();

            if board.in_goal(id) {
                continue;
            }

            if board.in_house(id) {
                if roll == 6 {
                    legal.push(id);
                }

                continue;
            }

            if let Some(to) = board.resolve(figure.cell(), roll, player, true) {
                let destination = board.cell(to);

                if !destination.on_ring() || destination.occupancy().owner() != Some(player) {
                    legal.push(id);
                }
            }
        }

        if !legal.is_empty() {
            self.last = Action::Moved;
            self.rolls = 0;
        }

        legal
    }

    /// Whether the player has won.
    ///
    /// True once every figure of the player stands in the goal lane; the
    /// turn then ends terminally.
    #[instrument(level = "debug", skip(self, board), ret)]
    pub fn check_win(&mut self, board: &Board, player: PlayerId) -> bool {
        if board.all_in_goal(player) {
            self.last = Action::Won;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Setup, Variant};
    use test_strategy::proptest;

    fn board() -> Board {
        Board::new(Setup::new(4, 4, Variant::Simple).unwrap())
    }

    #[proptest]
    fn rolling_is_denied_while_fully_housed_after_three_attempts(
        #[strategy(0..4u8)] p: u8,
    ) {
        let board = board();
        let player = PlayerId(p);
        let mut turn = Turn::new();

        for _ in 0..MAX_HOUSE_ROLLS {
            assert!(turn.check_roll(&board, player));
        }

        assert!(!turn.check_roll(&board, player));

        turn.reset();
        assert!(turn.check_roll(&board, player));
    }

    #[proptest]
    fn housed_figures_only_move_on_a_six(#[strategy(1..6u8)] roll: u8) {
        let board = board();
        let player = PlayerId(0);
        let mut turn = Turn::new();

        assert!(turn.check_roll(&board, player));
        assert_eq!(turn.check_move(&board, player, roll), []);

        assert!(turn.check_roll(&board, player));
        let legal = turn.check_move(&board, player, 6);
        assert_eq!(legal.len(), 4);
        assert!(legal.iter().all(|f| f.player == player));
    }

    #[test]
    fn moves_are_only_legal_immediately_after_a_roll() {
        let board = board();
        let player = PlayerId(0);
        let mut turn = Turn::new();

        assert_eq!(turn.check_move(&board, player, 6), []);

        assert!(turn.check_roll(&board, player));
        assert_eq!(turn.check_move(&board, player, 6).len(), 4);

        // the legal answer committed the turn to a move
        assert_eq!(turn.check_move(&board, player, 6), []);
    }

    #[test]
    fn a_move_ends_the_rolling_phase() {
        let mut board = board();
        let player = PlayerId(0);
        let mut turn = Turn::new();

        assert!(turn.check_roll(&board, player));
        let legal = turn.check_move(&board, player, 6);
        board.move_out_of_house(legal[0]).unwrap();

        assert!(!turn.check_roll(&board, player));
    }

    #[test]
    fn an_empty_answer_does_not_commit_the_turn() {
        let board = board();
        let player = PlayerId(0);
        let mut turn = Turn::new();

        assert!(turn.check_roll(&board, player));
        assert_eq!(turn.check_move(&board, player, 3), []);
        assert_eq!(turn.last_action(), Action::Rolled);
        assert!(turn.check_roll(&board, player));
    }

    #[test]
    fn capturable_destinations_are_legal() {
        let mut board = board();
        let attacker = FigureId::new(PlayerId(0), 0);
        let victim = FigureId::new(PlayerId(1), 0);

        board.move_out_of_house(victim).unwrap();
        board.move_forward(victim, 3).unwrap();
        board.move_out_of_house(attacker).unwrap();
        board.move_forward(attacker, 5).unwrap();

        // attacker at ring 5, victim at ring 8
        let mut turn = Turn::new();
        assert!(turn.check_roll(&board, PlayerId(0)));
        assert!(turn.check_move(&board, PlayerId(0), 3).contains(&attacker));
    }

    #[test]
    fn friendly_destinations_are_not_legal() {
        let mut board = board();
        let first = FigureId::new(PlayerId(0), 0);
        let second = FigureId::new(PlayerId(0), 1);

        board.move_out_of_house(first).unwrap();
        board.move_forward(first, 3).unwrap();
        board.move_out_of_house(second).unwrap();

        // both figures of player 0 sit three cells apart
        let mut turn = Turn::new();
        assert!(turn.check_roll(&board, PlayerId(0)));

        let legal = turn.check_move(&board, PlayerId(0), 3);
        assert!(!legal.contains(&second));
        assert!(legal.contains(&first));
    }

    #[test]
    fn goal_figures_are_out_of_play() {
        let mut board = board();
        let player = PlayerId(0);

        for i in 0..4 {
            let figure = FigureId::new(player, i);
            let goal = board.player(player).goal();
            board.relocate(figure, goal).unwrap();
        }

        let mut turn = Turn::new();
        assert!(!turn.check_roll(&board, player));
        assert!(turn.check_win(&board, player));
        assert_eq!(turn.last_action(), Action::Won);
    }

    #[test]
    fn the_game_is_not_won_while_a_figure_remains_in_play() {
        let mut board = board();
        let player = PlayerId(0);

        for i in 1..4 {
            let figure = FigureId::new(player, i);
            let goal = board.player(player).goal();
            board.relocate(figure, goal).unwrap();
        }

        let mut turn = Turn::new();
        assert!(!turn.check_win(&board, player));
        assert_ne!(turn.last_action(), Action::Won);

        // the last figure may still roll and move
        assert!(turn.check_roll(&board, player));
        assert_eq!(turn.check_move(&board, player, 6).len(), 1);
    }

    #[test]
    fn a_fresh_game_plays_out_the_opening_scenario() {
        let mut board = board();
        let player = PlayerId(0);
        let mut turn = Turn::new();

        for p in board.players() {
            assert!(board.all_in_house(p.id()));
        }

        assert!(turn.check_roll(&board, player));
        assert_eq!(turn.check_move(&board, player, 3), []);

        assert!(turn.check_roll(&board, player));
        let legal = turn.check_move(&board, player, 6);
        assert_eq!(legal.len(), 4);

        board.move_out_of_house(legal[0]).unwrap();
        assert_eq!(
            board.figure(legal[0]).cell(),
            board.player(player).start()
        );

        // no intervening roll, so no further move is legal
        assert_eq!(turn.check_move(&board, player, 6), []);
    }
}
