//! Core types for the chessboard rules engine.
//!
//! This crate provides the value types shared by the engine and its callers:
//! - [`Color`], [`PieceKind`] and [`Piece`] for piece representation
//! - [`Coordinate`] for validated (row, column) board squares
//! - [`Move`] and [`MoveKind`] for executed move records
//!
//! Every type derives `serde` traits so notation or persistence adapters can
//! be layered on top without touching the engine.

mod color;
mod coordinate;
mod mov;
mod piece;

pub use color::Color;
pub use coordinate::{Coordinate, CoordinateError};
pub use mov::{Move, MoveKind};
pub use piece::{Piece, PieceKind};
