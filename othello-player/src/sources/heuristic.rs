//! The positional heuristic opponent.
//!
//! Corner cells cannot be recaptured and outrank everything else; edge cells
//! outrank the interior. Within a tier the move flipping the most pieces
//! wins, and remaining ties are broken at random so the opponent cannot
//! exploit a fixed pattern.

use super::MoveSource;
use othello_engine::{Game, Location, Move};
use rand::seq::SliceRandom;
use rand::Rng;

pub struct HeuristicAi<R: Rng> {
    rng: R,
}

impl<R: Rng> HeuristicAi<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Among `candidates`, pick a maximal-flip move, breaking ties at random.
    /// `candidates` must be non-empty.
    fn best_by_flips(&mut self, game: &Game, candidates: &[Location]) -> Location {
        let flips = |loc: &Location| game.board.count_flips(*loc, game.active_player);
        let most = candidates.iter().map(flips).max().unwrap();
        let top: Vec<Location> = candidates
            .iter()
            .copied()
            .filter(|loc| flips(loc) == most)
            .collect();
        *top.choose(&mut self.rng).unwrap()
    }
}

impl<R: Rng> MoveSource for HeuristicAi<R> {
    fn propose_move(&mut self, game: &Game) -> Move {
        let legal = game.legal_moves();
        if legal.is_empty() {
            return Move::Pass;
        }

        let size = game.board.size();

        // Corners first. The border test below matches corners as well, but by
        // the time it runs, any corner move has already been taken.
        let corners: Vec<Location> = legal
            .iter()
            .copied()
            .filter(|loc| loc.is_corner(size))
            .collect();
        if !corners.is_empty() {
            return Move::Place(self.best_by_flips(game, &corners));
        }

        let edges: Vec<Location> = legal
            .iter()
            .copied()
            .filter(|loc| loc.is_edge(size))
            .collect();
        if !edges.is_empty() {
            return Move::Place(self.best_by_flips(game, &edges));
        }

        Move::Place(self.best_by_flips(game, &legal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_engine::{Board, Game, Player};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ai() -> HeuristicAi<StdRng> {
        HeuristicAi::new(StdRng::seed_from_u64(42))
    }

    #[test]
    fn corner_beats_bigger_edge_flip() {
        // Black can take the (0,0) corner for 2 flips, or the (7,6) edge
        // cell for 5. The corner must win.
        let board: Board = "\
            .OOX....\
            ........\
            ........\
            ........\
            ........\
            ........\
            ........\
            XOOOOO.."
            .parse()
            .unwrap();
        let game = Game::from_position(board, Player::Black);
        assert_eq!(
            game.legal_moves(),
            vec![Location::new(0, 0), Location::new(7, 6)]
        );
        assert_eq!(
            ai().propose_move(&game),
            Move::Place(Location::new(0, 0))
        );
    }

    #[test]
    fn edge_beats_bigger_interior_flip() {
        // No corner is available: the (0,5) edge cell flips 1, the (3,5)
        // interior cell flips 4. The edge must win.
        let board: Board = "\
            ...XO...\
            ........\
            ........\
            XOOOO...\
            ........\
            ........\
            ........\
            ........"
            .parse()
            .unwrap();
        let game = Game::from_position(board, Player::Black);
        assert_eq!(
            game.legal_moves(),
            vec![Location::new(0, 5), Location::new(3, 5)]
        );
        assert_eq!(
            ai().propose_move(&game),
            Move::Place(Location::new(0, 5))
        );
    }

    #[test]
    fn interior_tier_maximizes_flips() {
        // All candidates are interior; (3,5) flips 2 and the rest flip 1.
        let board: Board = "\
            ........\
            ........\
            ........\
            ..XOO...\
            ...X....\
            ...O....\
            ........\
            ........"
            .parse()
            .unwrap();
        let game = Game::from_position(board, Player::Black);
        assert_eq!(
            game.legal_moves(),
            vec![
                Location::new(2, 3),
                Location::new(2, 5),
                Location::new(3, 5),
                Location::new(6, 3)
            ]
        );
        assert_eq!(
            ai().propose_move(&game),
            Move::Place(Location::new(3, 5))
        );
    }

    #[test]
    fn opening_choice_is_legal_and_seed_stable() {
        let game = Game::default();
        let first = ai().propose_move(&game);
        match first {
            Move::Place(loc) => assert!(game.legal_moves().contains(&loc)),
            Move::Pass => panic!("passed with legal moves available"),
        }
        assert_eq!(ai().propose_move(&game), first);
    }

    #[test]
    fn passes_without_moves() {
        let board = "####OOOO####OOOO".parse().unwrap();
        let game = Game::from_position(board, Player::White);
        assert_eq!(ai().propose_move(&game), Move::Pass);
    }
}
