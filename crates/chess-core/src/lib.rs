//! Core types for chess.
//!
//! This crate provides the fundamental types shared by the rules engine and
//! its hosts:
//! - [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates, with bounds-checked construction

mod color;
mod piece;
mod square;

pub use color::Color;
pub use piece::PieceKind;
pub use square::{Square, SquareError};
