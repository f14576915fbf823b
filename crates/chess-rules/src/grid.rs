//! The 8×8 occupancy grid.

use chess_core::{Color, PieceKind, Square};

use crate::{Piece, PieceId};

/// What a grid cell holds: a piece's identity plus its immutable attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub id: PieceId,
    pub piece: Piece,
}

impl Occupant {
    #[inline]
    pub fn color(&self) -> Color {
        self.piece.color
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.piece.kind
    }

    /// True if this is a `kind` belonging to `color`.
    #[inline]
    pub fn is(&self, color: Color, kind: PieceKind) -> bool {
        self.piece.color == color && self.piece.kind == kind
    }
}

/// Occupancy of all 64 squares.
///
/// `Grid` is `Copy`, so a hypothetical move can be tried on a scratch copy
/// and thrown away; `self` is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Occupant>; 64],
}

impl Grid {
    /// Creates a grid with every cell empty.
    pub const fn empty() -> Self {
        Grid { cells: [None; 64] }
    }

    /// Returns the occupant of `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Occupant> {
        self.cells[sq.index() as usize]
    }

    /// Writes `occupant` into `sq`, returning whatever was there.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, occupant: Option<Occupant>) -> Option<Occupant> {
        std::mem::replace(&mut self.cells[sq.index() as usize], occupant)
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// True if `sq` holds a piece of the color opposing `us`.
    #[inline]
    pub fn is_enemy(&self, sq: Square, us: Color) -> bool {
        matches!(self.get(sq), Some(o) if o.color() != us)
    }

    /// True if `sq` holds a piece of color `us`.
    #[inline]
    pub fn is_friendly(&self, sq: Square, us: Color) -> bool {
        matches!(self.get(sq), Some(o) if o.color() == us)
    }

    /// Returns a copy of this grid with the piece on `from` moved to `to`.
    /// Whatever stood on `to` is gone from the copy.
    pub fn with_move(&self, from: Square, to: Square) -> Grid {
        let mut scratch = *self;
        let mover = scratch.set(from, None);
        scratch.set(to, mover);
        scratch
    }

    /// Iterates over occupied squares, a1 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|o| (sq, o)))
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}
