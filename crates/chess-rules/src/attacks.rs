//! Check detection.
//!
//! A square is attacked when any of five independent patterns finds an enemy
//! piece able to strike it: a pawn diagonal, a knight jump, a diagonal ray
//! ending on a bishop or queen, a straight ray ending on a rook or queen, or
//! an adjacent king. Rays stop at the first occupied cell whatever its color.

use chess_core::{Color, PieceKind, Square};
use tracing::trace;

use crate::Grid;

/// Knight jump offsets as (rank delta, file delta).
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// One-step offsets to the eight neighbouring squares.
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Returns true if a king of color `defender` standing on `sq` would be in
/// check on `grid`.
///
/// The square's own occupant is ignored; only the surrounding cells matter.
pub fn is_square_attacked(grid: &Grid, sq: Square, defender: Color) -> bool {
    let attacker = defender.opposite();

    let pattern = if attacked_by_pawn(grid, sq, defender) {
        "pawn"
    } else if attacked_by_knight(grid, sq, attacker) {
        "knight"
    } else if attacked_diagonally(grid, sq, attacker) {
        "diagonal"
    } else if attacked_orthogonally(grid, sq, attacker) {
        "orthogonal"
    } else if adjacent_to_enemy_king(grid, sq, attacker) {
        "king"
    } else {
        return false;
    };

    trace!(square = %sq, %defender, pattern, "square attacked");
    true
}

/// Enemy pawns strike from one rank ahead of the defender, one file to
/// either side.
fn attacked_by_pawn(grid: &Grid, sq: Square, defender: Color) -> bool {
    let forward = defender.pawn_direction();
    [-1, 1].into_iter().any(|df| {
        sq.offset(forward, df)
            .and_then(|from| grid.get(from))
            .is_some_and(|o| o.is(defender.opposite(), PieceKind::Pawn))
    })
}

fn attacked_by_knight(grid: &Grid, sq: Square, attacker: Color) -> bool {
    probe(grid, sq, &KNIGHT_OFFSETS, attacker, PieceKind::Knight)
}

fn adjacent_to_enemy_king(grid: &Grid, sq: Square, attacker: Color) -> bool {
    probe(grid, sq, &KING_OFFSETS, attacker, PieceKind::King)
}

fn attacked_diagonally(grid: &Grid, sq: Square, attacker: Color) -> bool {
    DIAGONALS.iter().any(|&dir| {
        first_blocker(grid, sq, dir)
            .is_some_and(|o| o.color() == attacker && o.kind().slides_diagonally())
    })
}

fn attacked_orthogonally(grid: &Grid, sq: Square, attacker: Color) -> bool {
    ORTHOGONALS.iter().any(|&dir| {
        first_blocker(grid, sq, dir)
            .is_some_and(|o| o.color() == attacker && o.kind().slides_orthogonally())
    })
}

/// Checks fixed offsets around `sq` for an `attacker` piece of `kind`.
fn probe(grid: &Grid, sq: Square, offsets: &[(i8, i8)], attacker: Color, kind: PieceKind) -> bool {
    offsets.iter().any(|&(dr, df)| {
        sq.offset(dr, df)
            .and_then(|from| grid.get(from))
            .is_some_and(|o| o.is(attacker, kind))
    })
}

/// Walks from `sq` in direction `dir` and returns the first occupant found
/// before the board edge.
fn first_blocker(grid: &Grid, sq: Square, (dr, df): (i8, i8)) -> Option<crate::Occupant> {
    let mut cur = sq.offset(dr, df);
    while let Some(at) = cur {
        if let Some(o) = grid.get(at) {
            return Some(o);
        }
        cur = at.offset(dr, df);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    /// Empty board with only the two kings on their home squares.
    fn kings_only() -> Board {
        Board::new()
    }

    fn white_king_in_check(board: &Board) -> bool {
        board.is_in_check(Color::White).unwrap()
    }

    #[test]
    fn quiet_kings_are_not_in_check() {
        let board = kings_only();
        assert!(!white_king_in_check(&board));
        assert!(!board.is_in_check(Color::Black).unwrap());
    }

    #[test]
    fn pawn_attacks_only_forward_diagonals() {
        let mut board = kings_only();
        let king = board.king(Color::White);
        board.place(king, sq("d4")).unwrap();

        let pawn = board.add_piece(Color::Black, PieceKind::Pawn, sq("c5")).unwrap();
        assert!(white_king_in_check(&board));

        board.place(pawn, sq("e5")).unwrap();
        assert!(white_king_in_check(&board));

        // Behind the king a black pawn threatens nothing.
        board.place(pawn, sq("c3")).unwrap();
        assert!(!white_king_in_check(&board));

        // Straight ahead is not an attack either.
        board.place(pawn, sq("d5")).unwrap();
        assert!(!white_king_in_check(&board));
    }

    #[test]
    fn black_king_is_attacked_by_pawns_below_it() {
        let mut board = kings_only();
        let king = board.king(Color::Black);
        board.place(king, sq("d5")).unwrap();
        let pawn = board.add_piece(Color::White, PieceKind::Pawn, sq("e4")).unwrap();
        assert!(board.is_in_check(Color::Black).unwrap());

        board.place(pawn, sq("e6")).unwrap();
        assert!(!board.is_in_check(Color::Black).unwrap());
    }

    #[test]
    fn friendly_pawn_is_not_an_attacker() {
        let mut board = kings_only();
        board.place(board.king(Color::White), sq("d4")).unwrap();
        board.add_piece(Color::White, PieceKind::Pawn, sq("c5")).unwrap();
        assert!(!white_king_in_check(&board));
    }

    #[test]
    fn knight_attacks_from_every_offset() {
        let mut board = kings_only();
        board.place(board.king(Color::White), sq("d4")).unwrap();
        let knight = board.add_piece(Color::Black, PieceKind::Knight, sq("a1")).unwrap();
        for target in ["e6", "c6", "e2", "c2", "f5", "b5", "f3", "b3"] {
            board.place(knight, sq(target)).unwrap();
            assert!(white_king_in_check(&board), "knight on {target}");
        }
        board.place(knight, sq("d6")).unwrap();
        assert!(!white_king_in_check(&board));
    }

    #[test]
    fn knight_near_the_edge_is_bounds_checked() {
        let mut board = kings_only();
        board.place(board.king(Color::White), sq("a1")).unwrap();
        board.add_piece(Color::Black, PieceKind::Knight, sq("b3")).unwrap();
        assert!(white_king_in_check(&board));
    }

    #[test]
    fn diagonal_attackers_and_blockers() {
        let mut board = kings_only();
        board.place(board.king(Color::White), sq("d4")).unwrap();
        let bishop = board.add_piece(Color::Black, PieceKind::Bishop, sq("g7")).unwrap();
        assert!(white_king_in_check(&board));

        for target in ["a7", "a1", "g1"] {
            board.place(bishop, sq(target)).unwrap();
            assert!(white_king_in_check(&board), "bishop on {target}");
        }

        // A friendly blocker shields the king.
        board.place(bishop, sq("g7")).unwrap();
        board.add_piece(Color::White, PieceKind::Knight, sq("f6")).unwrap();
        assert!(!white_king_in_check(&board));

        // So does an enemy piece that cannot move diagonally.
        board.lift(sq("f6"));
        board.add_piece(Color::Black, PieceKind::Rook, sq("e5")).unwrap();
        assert!(!white_king_in_check(&board));
    }

    #[test]
    fn queen_attacks_along_both_kinds_of_line() {
        let mut board = kings_only();
        board.place(board.king(Color::White), sq("d4")).unwrap();
        let queen = board.add_piece(Color::Black, PieceKind::Queen, sq("h8")).unwrap();
        assert!(white_king_in_check(&board));
        board.place(queen, sq("d7")).unwrap();
        assert!(white_king_in_check(&board));
        board.place(queen, sq("e6")).unwrap();
        assert!(!white_king_in_check(&board));
    }

    #[test]
    fn rook_on_open_file_gives_check_until_blocked() {
        let mut board = kings_only();
        board.lift(Square::E8);
        let rook = board.add_piece(Color::Black, PieceKind::Rook, Square::E8).unwrap();
        assert!(white_king_in_check(&board));

        board.add_piece(Color::White, PieceKind::Pawn, sq("e4")).unwrap();
        assert!(!white_king_in_check(&board));

        // Along the rank as well.
        board.place(rook, sq("a1")).unwrap();
        assert!(white_king_in_check(&board));
        board.add_piece(Color::Black, PieceKind::Bishop, sq("c1")).unwrap();
        assert!(!white_king_in_check(&board));
    }

    #[test]
    fn rook_does_not_attack_diagonally() {
        let mut board = kings_only();
        board.add_piece(Color::Black, PieceKind::Rook, sq("h4")).unwrap();
        assert!(!white_king_in_check(&board));
    }

    #[test]
    fn adjacent_kings_attack_each_other() {
        let mut board = kings_only();
        board.place(board.king(Color::Black), sq("e2")).unwrap();
        assert!(white_king_in_check(&board));
        assert!(board.is_in_check(Color::Black).unwrap());

        board.place(board.king(Color::Black), sq("e3")).unwrap();
        assert!(!white_king_in_check(&board));
    }

    #[test]
    fn attack_query_ignores_occupant_of_the_square() {
        let mut board = kings_only();
        board.add_piece(Color::Black, PieceKind::Rook, sq("a4")).unwrap();
        board.add_piece(Color::White, PieceKind::Pawn, sq("h4")).unwrap();
        let grid = *board.grid();
        assert!(is_square_attacked(&grid, sq("h4"), Color::White));
        assert!(!is_square_attacked(&grid, sq("h5"), Color::White));
    }
}
