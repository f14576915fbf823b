//! Knight and king: fixed-distance movers with no path to check.

use super::Candidate;

pub(crate) fn knight_can_move(c: &Candidate<'_>) -> bool {
    matches!(
        (c.rank_delta().abs(), c.file_delta().abs()),
        (2, 1) | (1, 2)
    )
}

/// One square in any direction. Castling is not modelled.
pub(crate) fn king_can_move(c: &Candidate<'_>) -> bool {
    c.rank_delta().abs() <= 1 && c.file_delta().abs() <= 1
}
