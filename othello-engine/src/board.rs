//! The board grid and the ray-scanning move logic.
//!
//! Everything here except [`Board::place`] is read-only. `place` is unchecked:
//! it assumes the move already passed [`Board::is_legal`] and only re-walks the
//! rays to perform the flips. Use [`crate::Game`] for a validated interface.

use crate::{index_letter, Location, Player};
use derive_more::{Display, Error};
use std::fmt;

/// The eight scan directions as (row, col) unit offsets.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A square Othello board with a runtime-chosen edge length.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
}

/// A board dimension that cannot hold the 2x2 starting block.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
#[display(fmt = "board edge must be an even length of at least 2, got {}", size)]
pub struct InvalidSizeError {
    pub size: usize,
}

impl Board {
    /// Set up a fresh board: all cells empty except the center 2x2 block,
    /// White on the main diagonal and Black on the other.
    pub fn new(size: usize) -> Result<Self, InvalidSizeError> {
        if size < 2 || size % 2 != 0 {
            return Err(InvalidSizeError { size });
        }

        let mut board = Self {
            size,
            cells: vec![None; size * size],
        };
        let hi = size / 2;
        let lo = hi - 1;
        board.set(Location::new(lo, lo), Some(Player::White));
        board.set(Location::new(hi, hi), Some(Player::White));
        board.set(Location::new(lo, hi), Some(Player::Black));
        board.set(Location::new(hi, lo), Some(Player::Black));
        Ok(board)
    }

    /// The edge length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `loc` addresses a cell on this board.
    #[inline]
    pub fn in_bounds(&self, loc: Location) -> bool {
        loc.row < self.size && loc.col < self.size
    }

    /// The piece at `loc`, or `None` for an empty cell.
    /// Panics if `loc` is out of bounds.
    #[inline]
    pub fn piece_at(&self, loc: Location) -> Option<Player> {
        self.cells[loc.row * self.size + loc.col]
    }

    #[inline]
    fn set(&mut self, loc: Location, piece: Option<Player>) {
        let index = loc.row * self.size + loc.col;
        self.cells[index] = piece;
    }

    /// Whether the in-bounds cell at signed coordinates holds a `side` piece.
    #[inline]
    fn cell_holds(&self, row: isize, col: isize, side: Player) -> bool {
        row >= 0
            && col >= 0
            && (row as usize) < self.size
            && (col as usize) < self.size
            && self.cells[(row as usize) * self.size + (col as usize)] == Some(side)
    }

    /// Walk outward from `loc` along `dir` over the opponent's pieces.
    /// Returns the run length if the run is non-empty and bounded by one of
    /// `side`'s pieces, and 0 otherwise. This single termination rule backs
    /// [`Board::is_legal`], [`Board::count_flips`], and [`Board::place`].
    fn bounded_run(&self, loc: Location, dir: (isize, isize), side: Player) -> usize {
        let mut row = loc.row as isize + dir.0;
        let mut col = loc.col as isize + dir.1;
        let mut length = 0;

        while self.cell_holds(row, col, !side) {
            length += 1;
            row += dir.0;
            col += dir.1;
        }

        if length > 0 && self.cell_holds(row, col, side) {
            length
        } else {
            0
        }
    }

    /// Whether `side` may move at `loc`: an in-bounds empty cell with at least
    /// one direction holding a bounded opponent run.
    pub fn is_legal(&self, loc: Location, side: Player) -> bool {
        if !self.in_bounds(loc) || self.piece_at(loc).is_some() {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| self.bounded_run(loc, dir, side) > 0)
    }

    /// All legal moves for `side`, in row-major order (row ascending, then
    /// column ascending). The order is part of the contract: move listings and
    /// tie-breaking depend on it being reproducible.
    pub fn legal_moves(&self, side: Player) -> Vec<Location> {
        let mut moves = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let loc = Location::new(row, col);
                if self.is_legal(loc, side) {
                    moves.push(loc);
                }
            }
        }
        moves
    }

    /// How many opponent pieces a move at `loc` by `side` would flip.
    /// Agrees exactly with the set of cells [`Board::place`] flips.
    pub fn count_flips(&self, loc: Location, side: Player) -> usize {
        DIRECTIONS
            .iter()
            .map(|&dir| self.bounded_run(loc, dir, side))
            .sum()
    }

    /// Place a piece for `side` at `loc` and flip every bounded opponent run.
    ///
    /// Unchecked: the caller must have established [`Board::is_legal`].
    /// Placing on an occupied cell or one with no bounded run corrupts the
    /// position.
    pub fn place(&mut self, loc: Location, side: Player) {
        self.set(loc, Some(side));
        for &dir in DIRECTIONS.iter() {
            let length = self.bounded_run(loc, dir, side);
            let mut row = loc.row as isize;
            let mut col = loc.col as isize;
            for _ in 0..length {
                row += dir.0;
                col += dir.1;
                self.set(Location::new(row as usize, col as usize), Some(side));
            }
        }
    }

    /// Count the pieces on the board belonging to `side`.
    pub fn count_pieces(&self, side: Player) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(side)).count()
    }

    /// Count the empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }
}

/// Errors when parsing a board from its glyph string.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "glyph count is not the square of an even edge length")]
    BadLength,
    #[display(fmt = "unrecognized cell glyph")]
    BadGlyph,
}

/// Build a board from a flat glyph string in row-major order: `.` empty,
/// `X` or `#` Black, `O` White. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '.' => Ok(None),
                'X' | '#' => Ok(Some(Player::Black)),
                'O' => Ok(Some(Player::White)),
                _ => Err(ParseBoardError::BadGlyph),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let size = (cells.len() as f64).sqrt() as usize;
        if size == 0 || size * size != cells.len() || size % 2 != 0 {
            return Err(ParseBoardError::BadLength);
        }
        Ok(Self { size, cells })
    }
}

/// Render the grid with lettered row and column headers.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, " {}", index_letter(col).ok_or(fmt::Error)?)?;
        }
        for row in 0..self.size {
            write!(f, "\n {} ", index_letter(row).ok_or(fmt::Error)?)?;
            for col in 0..self.size {
                let glyph = match self.piece_at(Location::new(row, col)) {
                    None => '.',
                    Some(Player::Black) => '#',
                    Some(Player::White) => 'O',
                };
                write!(f, "{} ", glyph)?;
            }
        }
        Ok(())
    }
}
