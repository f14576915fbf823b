//! Piece movement rules.
//!
//! Every kind shares the same baseline before its own shape and path rule is
//! consulted:
//! 1. the target is on the board;
//! 2. the target is not the piece's own square;
//! 3. the target does not hold a piece of the mover's color;
//! 4. the move does not leave the mover's king in check.
//!
//! A move is legal iff the baseline holds and the kind's rule accepts it.

pub mod pawn;

mod leaper;
mod slider;

use chess_core::{PieceKind, Square};

use crate::attacks::is_square_attacked;
use crate::grid::{Grid, Occupant};

/// A candidate move of one piece, resolved against a grid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'a> {
    pub grid: &'a Grid,
    pub mover: Occupant,
    pub from: Square,
    pub to: Square,
}

impl Candidate<'_> {
    #[inline]
    pub fn rank_delta(&self) -> i8 {
        self.to.rank() as i8 - self.from.rank() as i8
    }

    #[inline]
    pub fn file_delta(&self) -> i8 {
        self.to.file() as i8 - self.from.file() as i8
    }
}

/// Returns true if `mover`, standing on `from`, may move to (`rank`, `file`).
///
/// `own_king` is the square of the mover's king on `grid`.
pub(crate) fn can_move(
    grid: &Grid,
    mover: Occupant,
    from: Square,
    own_king: Square,
    rank: i32,
    file: i32,
) -> bool {
    let Some(candidate) = is_move_valid_for_any_piece(grid, mover, from, own_king, rank, file)
    else {
        return false;
    };

    match mover.kind() {
        PieceKind::Pawn => pawn::can_move(&candidate),
        PieceKind::Knight => leaper::knight_can_move(&candidate),
        PieceKind::Bishop => slider::bishop_can_move(&candidate),
        PieceKind::Rook => slider::rook_can_move(&candidate),
        PieceKind::Queen => slider::queen_can_move(&candidate),
        PieceKind::King => leaper::king_can_move(&candidate),
    }
}

/// Applies the four baseline checks, returning the resolved candidate when
/// they all pass.
fn is_move_valid_for_any_piece(
    grid: &Grid,
    mover: Occupant,
    from: Square,
    own_king: Square,
    rank: i32,
    file: i32,
) -> Option<Candidate<'_>> {
    let to = Square::from_coords(rank, file).ok()?;

    if to == from {
        return None;
    }

    if grid.is_friendly(to, mover.color()) {
        return None;
    }

    if leaves_king_in_check(grid, mover, from, to, own_king) {
        return None;
    }

    Some(Candidate {
        grid,
        mover,
        from,
        to,
    })
}

/// Plays the move on a scratch copy of the grid and asks whether the mover's
/// king is attacked there.
fn leaves_king_in_check(
    grid: &Grid,
    mover: Occupant,
    from: Square,
    to: Square,
    own_king: Square,
) -> bool {
    let scratch = grid.with_move(from, to);
    let king_square = if mover.kind() == PieceKind::King {
        to
    } else {
        own_king
    };
    is_square_attacked(&scratch, king_square, mover.color())
}
