//! Piece handles.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use chess_core::{Color, PieceKind};

static NEXT_BOARD_ID: AtomicU32 = AtomicU32::new(0);

/// Identity of a board, stamped into every handle the board issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct BoardId(u32);

impl BoardId {
    pub(crate) fn fresh() -> Self {
        BoardId(NEXT_BOARD_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Opaque handle naming one piece on one board.
///
/// Handles are cheap to copy and stay valid for the lifetime of the board
/// that issued them, including after the piece leaves the grid. A clone of a
/// board accepts the handles of the board it was cloned from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    pub(crate) board: BoardId,
    pub(crate) index: u32,
}

impl fmt::Debug for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PieceId({}/{})", self.board.0, self.index)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// The immutable attributes of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
