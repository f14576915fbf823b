//! Pawn movement.
//!
//! Pawns only ever advance toward the far rank. From the starting rank they
//! may advance one or two squares; afterwards one. A sideways step of one
//! file is allowed only as a capture. Promotion and en passant are not
//! modelled.

use chess_core::{Color, Square};

use super::Candidate;

/// True whenever the pawn is off its starting rank.
#[inline]
pub fn has_moved(color: Color, at: Square) -> bool {
    at.rank() != color.pawn_rank()
}

/// True if a rank change of `rank_delta` heads toward `color`'s far rank.
/// A zero delta is not progress.
#[inline]
pub fn is_moving_towards_promotion(color: Color, rank_delta: i8) -> bool {
    rank_delta.signum() == color.pawn_direction()
}

pub(crate) fn can_move(c: &Candidate<'_>) -> bool {
    let color = c.mover.color();
    let dr = c.rank_delta();
    let df = c.file_delta();

    if !is_moving_towards_promotion(color, dr) || df.abs() > 1 {
        return false;
    }

    let max_advance = if has_moved(color, c.from) { 1 } else { 2 };
    if dr.abs() > max_advance {
        return false;
    }

    if df != 0 {
        // Diagonal steps are captures: one rank, onto an enemy.
        return dr.abs() == 1 && c.grid.is_enemy(c.to, color);
    }

    if !c.grid.is_empty(c.to) {
        return false;
    }

    if dr.abs() == 2 {
        let Some(between) = c.from.offset(color.pawn_direction(), 0) else {
            return false;
        };
        return c.grid.is_empty(between);
    }

    true
}
