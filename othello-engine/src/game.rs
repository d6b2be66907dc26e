//! The validated game layer: players, moves, turn and termination logic.
//!
//! [`Game`] is the safe interface to the engine: every move goes through the
//! legality scan before it touches the board, so a position reached through
//! this type is always consistent.

use crate::{Board, InvalidSizeError, Location, DEFAULT_EDGE_LENGTH};
use derive_more::{Display, Error};
use std::fmt;

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::Black => "Black",
            Player::White => "White",
        })
    }
}

/// An action in a game: place a piece, or pass when no placement is available.
///
/// `Pass` is the explicit no-move sentinel; it is never encoded as a
/// coordinate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Move {
    Place(Location),
    Pass,
}

impl From<Location> for Move {
    fn from(loc: Location) -> Self {
        Self::Place(loc)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(loc) => loc.fmt(f),
            Move::Pass => f.write_str("pass"),
        }
    }
}

/// A move rejected by the legality check.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
#[display(fmt = "illegal move {} for {}", mv, side)]
pub struct IllegalMoveError {
    pub mv: Move,
    pub side: Player,
}

/// The complete state of an Othello game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    pub board: Board,
    pub active_player: Player,
    pub just_passed: bool,
}

impl Default for Game {
    /// The standard 8x8 starting position, Black to move.
    fn default() -> Self {
        Self::new(DEFAULT_EDGE_LENGTH).unwrap()
    }
}

impl Game {
    /// Start a game on a fresh `size`-edged board, Black to move.
    pub fn new(size: usize) -> Result<Self, InvalidSizeError> {
        Ok(Self::from_position(Board::new(size)?, Player::default()))
    }

    /// Adopt an arbitrary position with `active_player` to move.
    pub fn from_position(board: Board, active_player: Player) -> Self {
        Self {
            board,
            active_player,
            just_passed: false,
        }
    }

    /// Legal placements for the active player, in row-major order.
    pub fn legal_moves(&self) -> Vec<Location> {
        self.board.legal_moves(self.active_player)
    }

    /// Make a validated move for the active player and hand the turn over.
    ///
    /// A placement must pass the legality scan; `Move::Pass` is accepted only
    /// when the active player has no legal placement.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        let side = self.active_player;
        match mv {
            Move::Pass => {
                if !self.legal_moves().is_empty() {
                    return Err(IllegalMoveError { mv, side });
                }
                self.just_passed = true;
            }
            Move::Place(loc) => {
                if !self.board.is_legal(loc, side) {
                    return Err(IllegalMoveError { mv, side });
                }
                self.board.place(loc, side);
                self.just_passed = false;
            }
        }
        self.active_player = !side;
        Ok(())
    }

    /// Whether the game is over: neither side has a legal placement.
    pub fn is_finished(&self) -> bool {
        self.board.legal_moves(self.active_player).is_empty()
            && self.board.legal_moves(!self.active_player).is_empty()
    }

    /// Piece counts as (black, white).
    pub fn score(&self) -> (usize, usize) {
        (
            self.board.count_pieces(Player::Black),
            self.board.count_pieces(Player::White),
        )
    }

    /// The side holding strictly more pieces, or `None` for a draw.
    pub fn winner(&self) -> Option<Player> {
        let (black, white) = self.score();
        if black > white {
            Some(Player::Black)
        } else if white > black {
            Some(Player::White)
        } else {
            None
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        if self.just_passed {
            writeln!(f, "(Last move was a pass)")?;
        }
        write!(f, "{} to move", self.active_player)
    }
}
