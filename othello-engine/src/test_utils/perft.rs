//! "Perft" performance test: count the number of game-tree leaves at a given
//! depth from the standard starting position. A forced pass counts as a ply
//! and a double pass ends the game. Pinning the known node counts exercises
//! the whole legality/flip/pass pipeline.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Game, Move};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&Game::default(), depth, false)
}

fn leaves_below(game: &Game, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves();
    if moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        let mut next = game.clone();
        next.apply_move(Move::Pass).unwrap();
        return leaves_below(&next, depth - 1, true);
    }

    moves
        .into_iter()
        .map(|mv| {
            let mut next = game.clone();
            next.apply_move(Move::Place(mv)).unwrap();
            leaves_below(&next, depth - 1, false)
        })
        .sum()
}
