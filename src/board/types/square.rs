//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Board width and height.
pub const BOARD_SIZE: usize = 5;
/// Number of squares on the board.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A square on the 5x5 board, stored as `row * 5 + col`.
///
/// Row 0 is black's back rank (printed as rank 5), row 4 is white's back
/// rank (rank 1). Columns map to files A-E from left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square((row * BOARD_SIZE + col) as u8))
        } else {
            None
        }
    }

    /// Offset this square by a (row, col) delta, returning `None` off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let r = self.row() as isize + dr;
        let c = self.col() as isize + dc;
        if r < 0 || c < 0 {
            return None;
        }
        Square::new(r as usize, c as usize)
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / BOARD_SIZE
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % BOARD_SIZE
    }

    /// Get the square's index (0-24, A5=0, B5=1, ..., E1=24)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Create a square from an index (0-24)
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        debug_assert!(idx < NUM_SQUARES);
        Square(idx as u8)
    }

    /// Rotate the square 180 degrees (A5 <-> E1)
    #[inline]
    #[must_use]
    pub const fn rotate(self) -> Self {
        Square((NUM_SQUARES - 1 - self.0 as usize) as u8)
    }

    /// Iterate over all 25 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).map(Square::from_index)
    }

    /// File letter, 'A'..='E'
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'A' + self.col() as u8) as char
    }

    /// Rank number as printed, 1..=5 (row 0 is rank 5)
    #[inline]
    #[must_use]
    pub const fn rank_number(self) -> usize {
        BOARD_SIZE - self.row()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_number())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= BOARD_SIZE {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square((row * BOARD_SIZE + col) as u8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parse file letter + rank digit, e.g. "B2" (case-insensitive file).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file.to_ascii_uppercase() {
            c @ 'A'..='E' => c as usize - 'A' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            r @ '1'..='5' => BOARD_SIZE - (r as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square((row * BOARD_SIZE + col) as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_maps_rank_five_to_row_zero() {
        let sq: Square = "A5".parse().unwrap();
        assert_eq!((sq.row(), sq.col()), (0, 0));
        let sq: Square = "b2".parse().unwrap();
        assert_eq!((sq.row(), sq.col()), (3, 1));
        assert_eq!(sq.to_string(), "B2");
    }

    #[test]
    fn test_rejects_off_board_notation() {
        assert!("F1".parse::<Square>().is_err());
        assert!("A6".parse::<Square>().is_err());
        assert!("A0".parse::<Square>().is_err());
        assert!("A".parse::<Square>().is_err());
        assert!("A12".parse::<Square>().is_err());
    }

    #[test]
    fn test_try_from_bounds() {
        assert!(Square::try_from((4, 4)).is_ok());
        assert_eq!(
            Square::try_from((5, 0)),
            Err(SquareError::RowOutOfBounds { row: 5 })
        );
        assert_eq!(
            Square::try_from((0, 7)),
            Err(SquareError::ColOutOfBounds { col: 7 })
        );
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 2), Square::new(1, 2));
        let far = Square::new(4, 4).unwrap();
        assert_eq!(far.offset(1, 0), None);
    }

    #[test]
    fn test_rotate() {
        let a5 = Square::new(0, 0).unwrap();
        assert_eq!(a5.rotate(), Square::new(4, 4).unwrap());
        let c3 = Square::new(2, 2).unwrap();
        assert_eq!(c3.rotate(), c3);
    }
}
