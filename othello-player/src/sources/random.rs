//! Uniform-random move selection.

use super::MoveSource;
use othello_engine::{Game, Move};
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks uniformly among the legal placements with an injected RNG,
/// so a seeded generator reproduces a whole game.
pub struct RandomChoice<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomChoice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSource for RandomChoice<R> {
    fn propose_move(&mut self, game: &Game) -> Move {
        match game.legal_moves().choose(&mut self.rng) {
            Some(&loc) => Move::Place(loc),
            None => Move::Pass,
        }
    }
}
