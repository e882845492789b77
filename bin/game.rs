use crate::actor::Choose;
use derive_more::{Display, Error};
use lib::board::{Board, PlayerId};
use lib::rules::{Roll, Turn};
use tracing::{debug, info, instrument, warn};

/// The reason why the game was interrupted.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum GameInterrupted<E> {
    /// The decision provider for this player failed.
    #[display(fmt = "{} was unable to choose a figure", player)]
    Actor { player: PlayerId, source: E },

    /// The decision provider chose a figure outside the legal set.
    #[display(fmt = "{} violated the choice contract", player)]
    #[error(ignore)]
    Rogue { player: PlayerId },
}

/// A match between the players seated at a board.
///
/// One actor and one die per seat, in seating order.
#[derive(Debug)]
pub struct Game<A, D> {
    actors: Vec<A>,
    dice: Vec<D>,
}

impl<A: Choose, D: Roll> Game<A, D> {
    pub fn new(actors: Vec<A>, dice: Vec<D>) -> Self {
        Game { actors, dice }
    }

    /// Plays the board to completion and returns the winner.
    ///
    /// Turns rotate in seating order. Within a turn, a roll that yields no
    /// legal move ends the turn unless every figure is still housed, in
    /// which case the three-attempt budget of the rule engine governs.
    #[instrument(level = "debug", skip_all, err, ret)]
    pub fn play(&mut self, board: &mut Board) -> Result<PlayerId, GameInterrupted<A::Error>> {
        let players: Vec<_> = board.players().map(|p| p.id()).collect();

        debug_assert_eq!(players.len(), self.actors.len());
        debug_assert_eq!(players.len(), self.dice.len());

        let mut turn = Turn::new();

        loop {
            for (seat, &player) in players.iter().enumerate() {
                turn.reset();

                while turn.check_roll(board, player) {
                    let roll = self.dice[seat].roll();
                    debug!(%player, roll);

                    let legal = turn.check_move(board, player, roll);

                    if legal.is_empty() {
                        if board.all_in_house(player) {
                            continue;
                        } else {
                            break;
                        }
                    }

                    let placement = board.placement();

                    let choice = self.actors[seat]
                        .choose(&placement, &legal)
                        .map_err(|source| GameInterrupted::Actor { player, source })?;

                    let figure = match choice {
                        Some(f) if legal.contains(&f) => f,
                        choice => {
                            warn!(%player, ?choice, "not a member of the legal set");
                            return Err(GameInterrupted::Rogue { player });
                        }
                    };

                    let moved = if board.in_house(figure) {
                        board.move_out_of_house(figure)
                    } else {
                        board.move_forward(figure, roll)
                    };

                    if let Err(e) = moved {
                        warn!("{:?}", e);
                    }

                    if turn.check_win(board, player) {
                        info!(winner = %player);
                        return Ok(player);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::MockChoose;
    use lib::board::{FigureId, Setup, Variant};
    use mockall::mock;

    mock! {
        Die {}

        impl Roll for Die {
            fn roll(&mut self) -> u8;
        }
    }

    fn first_legal() -> MockChoose {
        let mut actor = MockChoose::new();
        actor
            .expect_choose()
            .returning(|_, legal| Ok(legal.first().copied()));
        actor
    }

    fn scripted(rolls: Vec<u8>) -> MockDie {
        let mut die = MockDie::new();
        let mut rolls = rolls.into_iter();
        die.expect_roll().returning(move || rolls.next().unwrap());
        die
    }

    fn constant(roll: u8) -> MockDie {
        let mut die = MockDie::new();
        die.expect_roll().return_const(roll);
        die
    }

    #[test]
    fn the_first_player_to_bring_every_figure_home_wins() {
        let mut board = Board::new(Setup::new(2, 1, Variant::Simple).unwrap());

        // player 0 exits, advances 6, and enters the goal lane on a 4,
        // while player 1 never rolls the 6 they need
        let actors = vec![first_legal(), first_legal()];
        let dice = vec![scripted(vec![6, 6, 4]), constant(3)];

        let mut game = Game::new(actors, dice);
        assert_eq!(game.play(&mut board), Ok(PlayerId(0)));
        assert!(board.all_in_goal(PlayerId(0)));
        assert!(board.all_in_house(PlayerId(1)));
    }

    #[test]
    fn a_failing_actor_interrupts_the_game() {
        let mut board = Board::new(Setup::new(2, 1, Variant::Simple).unwrap());

        let mut failing = MockChoose::new();
        failing
            .expect_choose()
            .returning(|_, _| Err("out of ideas".to_string()));

        let actors = vec![failing, first_legal()];
        let dice = vec![constant(6), constant(3)];

        let mut game = Game::new(actors, dice);

        assert_eq!(
            game.play(&mut board),
            Err(GameInterrupted::Actor {
                player: PlayerId(0),
                source: "out of ideas".to_string()
            })
        );
    }

    #[test]
    fn a_rogue_choice_interrupts_the_game() {
        let mut board = Board::new(Setup::new(2, 1, Variant::Simple).unwrap());

        let mut rogue = MockChoose::new();
        rogue
            .expect_choose()
            .returning(|_, _| Ok(Some(FigureId::new(PlayerId(1), 0))));

        let actors = vec![rogue, first_legal()];
        let dice = vec![constant(6), constant(3)];

        let mut game = Game::new(actors, dice);

        assert_eq!(
            game.play(&mut board),
            Err(GameInterrupted::Rogue {
                player: PlayerId(0)
            })
        );
    }
}
