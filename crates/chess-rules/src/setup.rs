//! The standard starting layout.

use chess_core::{Color, PieceKind, Square};

/// Back-rank order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The e-file square on `color`'s back rank.
pub(crate) fn king_home(color: Color) -> Square {
    match color {
        Color::White => Square::E1,
        Color::Black => Square::E8,
    }
}

/// All 32 pieces of the starting position, White first.
pub(crate) fn standard_layout() -> impl Iterator<Item = (Color, PieceKind, Square)> {
    Color::ALL.into_iter().flat_map(|color| {
        (0..8u8).flat_map(move |file| {
            let back = Square::new(color.back_rank(), file).map(|sq| (color, BACK_RANK[file as usize], sq));
            let pawn = Square::new(color.pawn_rank(), file).map(|sq| (color, PieceKind::Pawn, sq));
            back.into_iter().chain(pawn)
        })
    })
}
