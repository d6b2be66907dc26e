//! Move sources enable playing through different decision makers.
//!
//! Non-interactive sources promise to return a legal placement, or
//! [`Move::Pass`] exactly when the position offers none; the referee treats
//! anything else as a fatal contract violation.

mod heuristic;
mod human;
mod random;

pub use heuristic::HeuristicAi;
pub use human::HumanInput;
pub use random::RandomChoice;

use othello_engine::{Game, Move};

/// A way of choosing the next move for the active player.
pub trait MoveSource {
    /// Propose a move in `game` for the active player.
    fn propose_move(&mut self, game: &Game) -> Move;

    /// Whether this source can recover from a rejected move by being asked
    /// again. Only true for sources backed by a person.
    fn is_interactive(&self) -> bool {
        false
    }
}
