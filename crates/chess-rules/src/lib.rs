//! Chess move-legality engine.
//!
//! This crate provides:
//! - [`Board`] - the authoritative board: occupancy, side to move, and an
//!   index of every piece's square
//! - per-kind movement rules behind a shared baseline (see [`rules`])
//! - check detection by ray casting and fixed-offset probing (see
//!   [`is_square_attacked`])
//!
//! Castling, en passant, promotion, and end-of-game detection are not part
//! of the rule set.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Square};
//! use chess_rules::Board;
//!
//! let mut board = Board::new();
//! board.setup_game();
//!
//! let pawn = board.piece_at(Square::from_algebraic("e2").unwrap()).unwrap();
//! assert!(board.can_move(pawn, 3, 4).unwrap());
//! assert!(!board.can_move(pawn, 4, 4).unwrap());
//!
//! assert!(board.attempt_move(pawn, 3, 4).unwrap());
//! assert_eq!(board.turn_color(), Color::Black);
//! ```
//!
//! # Concurrency
//!
//! [`Board::can_move`] takes `&self` and never mutates the board, while
//! [`Board::attempt_move`] takes `&mut self`. A host sharing one board
//! between threads wraps it in a `Mutex` or `RwLock`.

mod attacks;
mod board;
mod error;
mod grid;
mod piece;
pub mod rules;
mod setup;

pub use attacks::is_square_attacked;
pub use board::Board;
pub use error::BoardError;
pub use grid::{Grid, Occupant};
pub use piece::{Piece, PieceId};
