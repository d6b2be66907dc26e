//! Code for working with [`Location`]s on the board.

use derive_more::{Display, Error};
use std::fmt::{self, Write};

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The letter labeling row or column `index`: 'A' for 0, up to 'Z'.
pub fn index_letter(index: usize) -> Option<char> {
    LETTERS.chars().nth(index)
}

/// A zero-based (row, col) coordinate on a board.
///
/// Locations carry no board size; whether one is in bounds is decided by the
/// [`crate::Board`] it is used against.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this location is one of the four corners of a `size`-edged board.
    pub fn is_corner(self, size: usize) -> bool {
        (self.row == 0 || self.row == size - 1) && (self.col == 0 || self.col == size - 1)
    }

    /// Whether this location lies on the outer border of a `size`-edged board.
    /// Corners satisfy this test too.
    pub fn is_edge(self, size: usize) -> bool {
        self.row == 0 || self.row == size - 1 || self.col == 0 || self.col == size - 1
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
#[display(fmt = "invalid location notation")]
pub struct ParseLocationError;

/// Build a [`Location`] from letter notation: row letter then column letter,
/// 'A' addressing index 0 ("CD" or "c d" is row 2, column 3).
/// Whitespace between the letters is allowed; case is ignored.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars().filter(|c| !c.is_whitespace());
        let row_char = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col_char = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        if chars.next() != None {
            return Err(ParseLocationError);
        }

        let row = LETTERS.find(row_char).ok_or(ParseLocationError)?;
        let col = LETTERS.find(col_char).ok_or(ParseLocationError)?;
        Ok(Self { row, col })
    }
}

/// Convert this [`Location`] into letter notation ("CD").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_str = index_letter(self.row).ok_or(fmt::Error)?;
        let col_str = index_letter(self.col).ok_or(fmt::Error)?;
        f.write_char(row_str)?;
        f.write_char(col_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("AA"), Ok(Location::new(0, 0)));
        assert_eq!(Location::from_str("cd"), Ok(Location::new(2, 3)));
        assert_eq!(Location::from_str("C D"), Ok(Location::new(2, 3)));
        assert_eq!(Location::from_str(" h a "), Ok(Location::new(7, 0)));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A"), Err(ParseLocationError));
        assert_eq!(Location::from_str("ABC"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A1"), Err(ParseLocationError));
        assert_eq!(Location::from_str("4 2"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location::new(0, 0).to_string(), "AA");
        assert_eq!(Location::new(7, 7).to_string(), "HH");
        assert_eq!(Location::from_str("E B").unwrap().to_string(), "EB");
    }

    #[test]
    fn corner_predicate() {
        assert!(Location::new(0, 0).is_corner(8));
        assert!(Location::new(0, 7).is_corner(8));
        assert!(Location::new(7, 0).is_corner(8));
        assert!(Location::new(7, 7).is_corner(8));
        assert!(!Location::new(0, 3).is_corner(8));
        assert!(!Location::new(3, 3).is_corner(8));
    }

    #[test]
    fn edge_predicate_includes_corners() {
        assert!(Location::new(0, 0).is_edge(8));
        assert!(Location::new(0, 3).is_edge(8));
        assert!(Location::new(3, 7).is_edge(8));
        assert!(Location::new(7, 4).is_edge(8));
        assert!(!Location::new(3, 3).is_edge(8));
        assert!(!Location::new(6, 6).is_edge(8));
    }
}
