//! Error types for board operations.

use chessboard_core::Coordinate;
use std::fmt;
use thiserror::Error;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// No piece stands on the source square.
    EmptySquare,
    /// The piece supplied does not match the one on the source square.
    PieceMismatch,
    /// The piece belongs to the side not on move.
    WrongTurn,
    /// The destination is not among the piece's legal moves.
    Unreachable,
    /// The game has ended in checkmate or stalemate.
    GameOver,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IllegalMoveReason::EmptySquare => "no piece on source square",
            IllegalMoveReason::PieceMismatch => "piece does not match source square",
            IllegalMoveReason::WrongTurn => "not that side's turn",
            IllegalMoveReason::Unreachable => "destination is not a legal move",
            IllegalMoveReason::GameOver => "game is over",
        };
        f.write_str(text)
    }
}

/// Error type for board operations.
///
/// A correctly gated caller checks [`Board::can_move`](crate::Board::can_move)
/// first and never sees this.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("illegal move {from} -> {to}: {reason}")]
    IllegalMove {
        from: Coordinate,
        to: Coordinate,
        reason: IllegalMoveReason,
    },
}

impl BoardError {
    /// Returns the reason for an illegal move.
    pub fn reason(&self) -> IllegalMoveReason {
        match self {
            BoardError::IllegalMove { reason, .. } => *reason,
        }
    }
}
