//! Board contract errors.
//!
//! An illegal move is not an error: [`Board::can_move`](crate::Board::can_move)
//! and [`Board::attempt_move`](crate::Board::attempt_move) report it as
//! `Ok(false)`. The variants here are misuse of the board by its host.

use chess_core::{Color, Square};
use thiserror::Error;

use crate::PieceId;

/// Errors raised when a caller breaks the board's contract.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The piece occupies no cell, so it has no position.
    #[error("piece {0} is not on the board")]
    PieceOffBoard(PieceId),

    /// The handle was issued by a different board.
    #[error("piece {0} belongs to another board")]
    ForeignPiece(PieceId),

    /// A setup primitive targeted a cell that already holds a piece.
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    /// Kings are created with the board; a second one cannot be added.
    #[error("{0} already has a king")]
    ExtraKing(Color),
}
