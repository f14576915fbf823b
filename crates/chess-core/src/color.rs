//! The two sides and the board geometry that depends on them.

use std::fmt;

/// A side. White moves first and starts on ranks 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Index into per-color tables: 0 for White, 1 for Black.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sign of a forward rank step: +1 for White, -1 for Black.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Maps a rank counted from this side's edge of the board to an
    /// absolute rank. Ranks above 7 are not meaningful.
    #[inline]
    pub const fn relative_rank(self, rank: u8) -> u8 {
        match self {
            Color::White => rank,
            Color::Black => 7 - rank,
        }
    }

    /// Rank holding this side's king and officers at the start.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        self.relative_rank(0)
    }

    /// Rank this side's pawns start on. A pawn elsewhere has moved.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        self.relative_rank(1)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
