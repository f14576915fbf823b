//! Bishop, rook and queen: pieces that travel along a line and are stopped
//! by anything standing strictly between source and destination.

use super::Candidate;

pub(crate) fn bishop_can_move(c: &Candidate<'_>) -> bool {
    is_diagonal(c) && path_is_clear(c)
}

pub(crate) fn rook_can_move(c: &Candidate<'_>) -> bool {
    is_orthogonal(c) && path_is_clear(c)
}

pub(crate) fn queen_can_move(c: &Candidate<'_>) -> bool {
    (is_diagonal(c) || is_orthogonal(c)) && path_is_clear(c)
}

fn is_diagonal(c: &Candidate<'_>) -> bool {
    c.rank_delta().abs() == c.file_delta().abs()
}

fn is_orthogonal(c: &Candidate<'_>) -> bool {
    (c.rank_delta() == 0) != (c.file_delta() == 0)
}

/// Walks the open interval between `from` and `to`. The destination itself
/// is never inspected. Only meaningful for straight or diagonal lines.
fn path_is_clear(c: &Candidate<'_>) -> bool {
    let step = (c.rank_delta().signum(), c.file_delta().signum());
    let mut cur = c.from.offset(step.0, step.1);
    while let Some(at) = cur {
        if at == c.to {
            return true;
        }
        if !c.grid.is_empty(at) {
            return false;
        }
        cur = at.offset(step.0, step.1);
    }
    // Ran off the board without meeting the destination: not on a line.
    false
}
