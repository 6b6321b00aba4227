//! Chess rules engine.
//!
//! This crate provides:
//! - [`Position`] - a board snapshot: occupancy, side to move, en passant target
//! - [`movegen`] - pseudo-legal and legal move generation
//! - [`check`] - check, checkmate and stalemate detection
//! - [`Board`] - the game aggregate that validates and executes moves
//! - [`BoardDelegate`] - the observer notified while a move executes
//!
//! # Architecture
//!
//! Pseudo-legal generation knows nothing about check. Check detection reuses
//! its attack patterns, and the legal stage filters pseudo-legal moves by
//! simulating them on a scratch [`Position`]. [`Board`] sits on top and is
//! the only thing that mutates state.
//!
//! # Example
//!
//! ```
//! use chessboard_core::Coordinate;
//! use chessboard_engine::{Board, GameStatus};
//!
//! let mut board = Board::new();
//! let e2 = Coordinate::from_algebraic("e2").unwrap();
//! let e4 = Coordinate::from_algebraic("e4").unwrap();
//!
//! assert!(board.can_move(e2, e4));
//! let pawn = board.piece_at(e2).unwrap();
//! let record = board.move_piece(pawn, e2, e4).unwrap();
//! assert_eq!(record.to_string(), "e4");
//! assert_eq!(board.status(), GameStatus::Ongoing);
//! ```

mod board;
pub mod check;
mod delegate;
mod error;
pub mod movegen;
mod position;
mod status;

pub use board::Board;
pub use check::{has_no_legal_moves, is_in_check, is_square_attacked};
pub use delegate::{BoardDelegate, BoardEvent};
pub use error::{BoardError, IllegalMoveReason};
pub use movegen::{all_legal_moves, legal_moves, pseudo_legal_moves, Destinations};
pub use position::{MovePlan, Position};
pub use status::GameStatus;
