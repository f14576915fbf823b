//! Property tests over positions reached by random play from the start.

use chess_core::{Color, PieceKind, Square};
use chess_rules::Board;
use proptest::prelude::*;

/// A random attempt: source square index plus a target that may be off the
/// board.
fn attempts() -> impl Strategy<Value = Vec<(u8, i32, i32)>> {
    prop::collection::vec((0u8..64, -2i32..10, -2i32..10), 0..60)
}

/// Plays the attempts that find a piece on their source square; illegal
/// ones are simply refused by the board.
fn reach(attempts: &[(u8, i32, i32)]) -> Board {
    let mut board = Board::new();
    board.setup_game();
    for &(from, rank, file) in attempts {
        let Some(piece) = Square::from_index(from).and_then(|sq| board.piece_at(sq)) else {
            continue;
        };
        board.attempt_move(piece, rank, file).unwrap();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn off_board_targets_are_never_legal(
        history in attempts(),
        rank in prop_oneof![-20i32..0, 8i32..20],
        file in -20i32..20,
    ) {
        let board = reach(&history);
        for (piece, _, _) in board.pieces() {
            prop_assert!(!board.can_move(piece, rank, file).unwrap());
            prop_assert!(!board.can_move(piece, file, rank).unwrap());
        }
    }

    #[test]
    fn null_move_is_never_legal(history in attempts()) {
        let board = reach(&history);
        for (piece, _, at) in board.pieces() {
            prop_assert!(!board.can_move(piece, at.rank() as i32, at.file() as i32).unwrap());
        }
    }

    #[test]
    fn never_lands_on_a_friend(history in attempts()) {
        let board = reach(&history);
        for (piece, info, _) in board.pieces() {
            for to in board.legal_targets(piece).unwrap() {
                let occupant = board.piece_at(to).map(|id| board.piece(id).unwrap());
                prop_assert!(occupant.map_or(true, |o| o.color != info.color));
            }
        }
    }

    #[test]
    fn legality_checks_leave_the_board_untouched(history in attempts()) {
        let board = reach(&history);
        let grid = *board.grid();
        let turn = board.turn_color();
        for (piece, _, _) in board.pieces() {
            board.legal_targets(piece).unwrap();
        }
        prop_assert_eq!(*board.grid(), grid);
        prop_assert_eq!(board.turn_color(), turn);
        prop_assert!(board.is_consistent());
    }

    #[test]
    fn attempt_flips_turn_exactly_when_committed(
        history in attempts(),
        from in 0u8..64,
        rank in -1i32..9,
        file in -1i32..9,
    ) {
        let mut board = reach(&history);
        let Some(piece) = Square::from_index(from).and_then(|sq| board.piece_at(sq)) else {
            return Ok(());
        };
        let before = board.clone();
        let legal = board.turn_color() == board.piece(piece).unwrap().color
            && board.can_move(piece, rank, file).unwrap();

        let committed = board.attempt_move(piece, rank, file).unwrap();
        prop_assert_eq!(committed, legal);
        if committed {
            prop_assert_eq!(board.turn_color(), before.turn_color().opposite());
            prop_assert_eq!(
                board.square_of(piece).ok(),
                Square::from_coords(rank, file).ok()
            );
        } else {
            prop_assert_eq!(board.grid(), before.grid());
            prop_assert_eq!(board.turn_color(), before.turn_color());
        }
        prop_assert!(board.is_consistent());
    }

    #[test]
    fn the_side_that_just_moved_is_never_in_check(history in attempts()) {
        let board = reach(&history);
        let mover = board.turn_color().opposite();
        prop_assert!(!board.is_in_check(mover).unwrap());
    }

    #[test]
    fn knights_reach_exactly_the_in_bounds_offsets_when_unobstructed(
        rank in 0u8..8,
        file in 0u8..8,
    ) {
        let mut board = Board::new();
        board.clear_board();
        // Kings in the far corners, away from every knight target.
        let at = Square::new(rank, file).unwrap();
        let (white_home, black_home) = if rank < 4 {
            (Square::H8, Square::A8)
        } else {
            (Square::H1, Square::A1)
        };
        board.place(board.king(Color::White), white_home).unwrap();
        board.place(board.king(Color::Black), black_home).unwrap();
        let knight = board.add_piece(Color::White, PieceKind::Knight, at).unwrap();

        let expected: Vec<Square> = Square::all()
            .filter(|to| {
                let dr = (to.rank() as i32 - rank as i32).abs();
                let df = (to.file() as i32 - file as i32).abs();
                (dr, df) == (1, 2) || (dr, df) == (2, 1)
            })
            .collect();
        let mut found = board.legal_targets(knight).unwrap();
        found.sort();
        prop_assert_eq!(found, expected);
    }
}
