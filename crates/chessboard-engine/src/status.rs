//! Game status reported after each move.

use crate::check::{has_no_legal_moves, is_in_check};
use crate::Position;
use chessboard_core::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Play continues and the side to move is not in check.
    Ongoing,
    /// The side to move is in check but has a way out.
    Check,
    /// The side to move is in check with no legal moves. Terminal.
    Checkmate,
    /// The side to move has no legal moves and is not in check. Terminal.
    Stalemate,
}

impl GameStatus {
    /// Evaluates the status for the side to move in `position`.
    pub fn of(position: &Position) -> Self {
        let side = position.next_turn;
        let in_check = is_in_check(position, side);
        match (in_check, has_no_legal_moves(position, side)) {
            (true, true) => GameStatus::Checkmate,
            (false, true) => GameStatus::Stalemate,
            (true, false) => GameStatus::Check,
            (false, false) => GameStatus::Ongoing,
        }
    }

    /// Returns true once no further moves are accepted.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    /// The winning color, given the side that is to move in this status.
    pub const fn winner(self, side_to_move: Color) -> Option<Color> {
        match self {
            GameStatus::Checkmate => Some(side_to_move.opposite()),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}
