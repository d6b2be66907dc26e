//! `othello-engine` is a complete Othello rules library for square boards of
//! any even edge length.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] holds the raw grid and implements the ray-scanning move logic.
//!    Its read-only scans are always safe, but [`Board::place`] is unchecked
//!    and may corrupt the position if its legality contract is not upheld.
//!  - [`Game`] is a safe interface which validates every move, tracks the
//!    active player and passes, and detects the end of the game.

pub mod test_utils;

mod board;
mod game;
mod location;

pub use board::*;
pub use game::*;
pub use location::*;

/// The edge length of a standard Othello board.
pub const DEFAULT_EDGE_LENGTH: usize = 8;
