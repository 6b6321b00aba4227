//! Move generation.
//!
//! Generation is split into two stages that never call back into each other:
//! - [`pseudo_legal_moves`] follows movement patterns and occupancy only
//! - [`legal_moves`] adds castling and drops anything that leaves the
//!   mover's king in check, using [`crate::check`]
//!
//! Check detection depends on the attack patterns in [`attacks`], never on
//! the legal stage, which breaks the cycle between the two.

pub mod attacks;
mod legal;
pub mod perft;
mod pseudo;

use chessboard_core::Coordinate;
use std::collections::BTreeSet;

pub use legal::{all_legal_moves, legal_moves};
pub use pseudo::pseudo_legal_moves;

/// A set of destination squares.
///
/// Ordered by (row, col) so iteration is stable; the engine only ever uses
/// it for membership tests.
pub type Destinations = BTreeSet<Coordinate>;
