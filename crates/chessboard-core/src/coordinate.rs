//! Board coordinate representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when constructing a [`Coordinate`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("coordinate out of bounds: row {row}, col {col}")]
    OutOfBounds { row: i32, col: i32 },
}

/// A square on the 8x8 board, addressed by row and column.
///
/// Row 0 is the top of the board from White's point of view (rank 8) and
/// row 7 the bottom (rank 1). Column 0 is the a-file. Both fields are
/// always in 0..=7.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

#[derive(Serialize, Deserialize)]
struct RawCoordinate {
    row: i32,
    col: i32,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.row, raw.col)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(c: Coordinate) -> Self {
        RawCoordinate {
            row: c.row as i32,
            col: c.col as i32,
        }
    }
}

impl Coordinate {
    /// Creates a coordinate, rejecting rows or columns outside 0..=7.
    pub fn new(row: i32, col: i32) -> Result<Self, CoordinateError> {
        if Self::is_on_board(row, col) {
            Ok(Coordinate {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(CoordinateError::OutOfBounds { row, col })
        }
    }

    /// Returns true if (row, col) names a square on the board.
    #[inline]
    pub const fn is_on_board(row: i32, col: i32) -> bool {
        row >= 0 && row < 8 && col >= 0 && col < 8
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the coordinate shifted by the given deltas, or `None` if the
    /// result would leave the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i32 + d_row as i32;
        let col = self.col as i32 + d_col as i32;
        Self::new(row, col).ok()
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0u8..64).map(|i| Coordinate {
            row: i / 8,
            col: i % 8,
        })
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Coordinate {
            row: 7 - (rank - b'1'),
            col: file - b'a',
        })
    }

    /// Returns the file letter ('a'-'h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Returns the rank digit ('1'-'8').
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {} = {})", self.row, self.col, self.to_algebraic())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
