//! The referee alternates turns, enforces move legality, and tallies the
//! final result.

use crate::display::DisplaySink;
use crate::sources::MoveSource;
use derive_more::{Display, Error};
use othello_engine::{Game, InvalidSizeError, Move, Player};
use std::fmt;

/// A named player. A side is bound to each contestant when the match starts
/// and never changes afterwards.
pub struct Contestant {
    pub name: String,
    source: Box<dyn MoveSource>,
}

impl Contestant {
    pub fn new(name: &str, source: Box<dyn MoveSource>) -> Self {
        Self {
            name: name.to_string(),
            source,
        }
    }
}

/// A fatal violation of the match rules.
#[derive(Clone, Debug, Eq, PartialEq, Display, Error)]
pub enum MatchError {
    /// A non-interactive source proposed a move that failed the legality
    /// check. Such sources promise never to do this, so the match aborts.
    #[display(fmt = "{}'s move source proposed the illegal move {}", name, mv)]
    RogueSource { name: String, mv: Move },
}

/// The final report of a finished match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Outcome {
    pub black: usize,
    pub white: usize,
    pub winner: Option<Player>,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(side) => writeln!(f, "Game over: {} wins!", side)?,
            None => writeln!(f, "Game over: it's a draw!")?,
        }
        write!(f, "Black {} : {} White", self.black, self.white)
    }
}

/// Runs one full game between two contestants.
///
/// The referee owns the board for the whole match: move sources only ever see
/// a shared reference, and nothing mutates the position between the legality
/// scan and the application of the chosen move.
pub struct Referee {
    game: Game,
    black: Contestant,
    white: Contestant,
    display: Box<dyn DisplaySink>,
}

impl Referee {
    /// Set up a match on a fresh `size`-edged board.
    /// The first contestant plays Black, the second White.
    pub fn new(
        black: Contestant,
        white: Contestant,
        display: Box<dyn DisplaySink>,
        size: usize,
    ) -> Result<Self, InvalidSizeError> {
        Ok(Self::from_game(Game::new(size)?, black, white, display))
    }

    /// Set up a match continuing from an arbitrary position.
    pub fn from_game(
        game: Game,
        black: Contestant,
        white: Contestant,
        display: Box<dyn DisplaySink>,
    ) -> Self {
        Self {
            game,
            black,
            white,
            display,
        }
    }

    /// Play the game to its natural end and report the outcome.
    ///
    /// An illegal proposal from an interactive source re-prompts the same
    /// side; from any other source it is a [`MatchError::RogueSource`].
    pub fn run(&mut self) -> Result<Outcome, MatchError> {
        self.display.show_board(&self.game.board);

        while !self.game.is_finished() {
            let side = self.game.active_player;
            let contestant = match side {
                Player::Black => &mut self.black,
                Player::White => &mut self.white,
            };

            if self.game.legal_moves().is_empty() {
                self.display.note(&format!(
                    "{} ({}) has no legal moves. Turn skipped.",
                    contestant.name, side
                ));
                self.game.apply_move(Move::Pass).unwrap();
                continue;
            }

            self.display
                .note(&format!("{}'s turn ({}).", contestant.name, side));

            loop {
                let mv = contestant.source.propose_move(&self.game);
                match self.game.apply_move(mv) {
                    Ok(()) => {
                        self.display.show_board(&self.game.board);
                        break;
                    }
                    Err(_) if contestant.source.is_interactive() => {
                        self.display.note("Illegal move. Try again.");
                    }
                    Err(_) => {
                        return Err(MatchError::RogueSource {
                            name: contestant.name.clone(),
                            mv,
                        });
                    }
                }
            }
        }

        let (black, white) = self.game.score();
        Ok(Outcome {
            black,
            white,
            winner: self.game.winner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::NullDisplay;
    use crate::sources::{HeuristicAi, RandomChoice};
    use othello_engine::Board;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A source for positions where no move should ever be requested.
    struct Unreachable;

    impl MoveSource for Unreachable {
        fn propose_move(&mut self, _game: &Game) -> Move {
            panic!("the referee requested a move in a finished game");
        }
    }

    /// A rogue source that always passes, even with moves available.
    struct AlwaysPass;

    impl MoveSource for AlwaysPass {
        fn propose_move(&mut self, _game: &Game) -> Move {
            Move::Pass
        }
    }

    #[test]
    fn finished_position_reports_without_move_requests() {
        let board: Board = "\
            ####\
            ####\
            OOOO\
            OOO#"
            .parse()
            .unwrap();
        let game = Game::from_position(board, Player::Black);
        let mut referee = Referee::from_game(
            game,
            Contestant::new("p1", Box::new(Unreachable)),
            Contestant::new("p2", Box::new(Unreachable)),
            Box::new(NullDisplay),
        );

        let outcome = referee.run().unwrap();
        assert_eq!(
            outcome,
            Outcome {
                black: 9,
                white: 7,
                winner: Some(Player::Black),
            }
        );
    }

    #[test]
    fn rogue_source_aborts_the_match() {
        let mut referee = Referee::new(
            Contestant::new("rogue", Box::new(AlwaysPass)),
            Contestant::new("p2", Box::new(Unreachable)),
            Box::new(NullDisplay),
            8,
        )
        .unwrap();

        assert_eq!(
            referee.run(),
            Err(MatchError::RogueSource {
                name: "rogue".to_string(),
                mv: Move::Pass,
            })
        );
    }

    #[test]
    fn random_match_runs_to_completion() {
        let mut referee = Referee::new(
            Contestant::new(
                "r1",
                Box::new(RandomChoice::new(StdRng::seed_from_u64(1))),
            ),
            Contestant::new(
                "r2",
                Box::new(RandomChoice::new(StdRng::seed_from_u64(2))),
            ),
            Box::new(NullDisplay),
            8,
        )
        .unwrap();

        let outcome = referee.run().unwrap();
        assert!(outcome.black + outcome.white <= 64);
        assert!(outcome.black + outcome.white >= 4);
        match outcome.winner {
            Some(Player::Black) => assert!(outcome.black > outcome.white),
            Some(Player::White) => assert!(outcome.white > outcome.black),
            None => assert_eq!(outcome.black, outcome.white),
        }
    }

    #[test]
    fn heuristic_match_runs_on_a_small_board() {
        let mut referee = Referee::new(
            Contestant::new("ai1", Box::new(HeuristicAi::new(StdRng::seed_from_u64(3)))),
            Contestant::new("ai2", Box::new(HeuristicAi::new(StdRng::seed_from_u64(4)))),
            Box::new(NullDisplay),
            6,
        )
        .unwrap();

        let outcome = referee.run().unwrap();
        assert!(outcome.black + outcome.white <= 36);
    }

    #[test]
    fn outcome_report_names_the_winner() {
        let outcome = Outcome {
            black: 40,
            white: 24,
            winner: Some(Player::Black),
        };
        let report = outcome.to_string();
        assert!(report.contains("Black wins"));
        assert!(report.contains("Black 40 : 24 White"));
    }
}
