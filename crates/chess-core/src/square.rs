//! Board square representation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when building a [`Square`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareError {
    #[error("coordinate ({rank}, {file}) is off the board")]
    OffBoard { rank: i32, file: i32 },

    #[error("invalid square name: '{0}'")]
    InvalidName(String),
}

/// A square on the chess board, indexed 0-63.
///
/// Squares are indexed rank-major from White's side:
/// - rank 0 (White's back rank): a1 = 0, ..., h1 = 7
/// - rank 7 (Black's back rank): a8 = 56, ..., h8 = 63
///
/// Ranks and files are both 0-7. A `Square` is always on the board; off-board
/// coordinates are rejected at construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from rank and file (0-7 each).
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, as supplied by a host.
    pub fn from_coords(rank: i32, file: i32) -> Result<Self, SquareError> {
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Ok(Square((rank * 8 + file) as u8))
        } else {
            Err(SquareError::OffBoard { rank, file })
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from its coordinate name (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Square::new(rank - b'1', file - b'a')
    }

    /// Iterates over all 64 squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the rank (0-7).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Returns the file (0-7).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square `rank_delta` ranks and `file_delta` files away,
    /// or `None` if that falls off the board.
    #[inline]
    pub const fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Self> {
        let rank = self.rank() as i16 + rank_delta as i16;
        let file = self.file() as i16 + file_delta as i16;
        if rank < 0 || rank > 7 || file < 0 || file > 7 {
            None
        } else {
            Some(Square((rank * 8 + file) as u8))
        }
    }

    /// Returns the coordinate name for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }

    pub const A1: Square = Square(0);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s.trim()).ok_or_else(|| SquareError::InvalidName(s.to_string()))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
