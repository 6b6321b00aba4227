//! Move representation.

use crate::{Coordinate, Piece, PieceKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Special move types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Ordinary move or capture.
    Normal,
    /// Pawn advancing two squares from its starting row.
    DoubleStep,
    /// Pawn capturing a pawn that just double-stepped past it.
    EnPassant,
    /// Kingside castling (O-O).
    CastleKingside,
    /// Queenside castling (O-O-O).
    CastleQueenside,
}

impl MoveKind {
    /// Returns true if this is a castling move.
    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

/// A move as executed by the board.
///
/// Records are produced at the moment of execution and appended to the
/// board's history; the engine never changes them afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The piece as it stood before moving.
    pub piece: Piece,
    pub from: Coordinate,
    pub to: Coordinate,
    pub kind: MoveKind,
    /// The piece removed by this move, if any.
    pub captured: Option<Piece>,
    /// The piece that replaced a promoting pawn.
    pub promoted_to: Option<Piece>,
}

impl Move {
    /// Returns true if this move removed an enemy piece.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Short algebraic description used for move lists (e.g. "Nf3",
    /// "exd5", "O-O", "e8=Q").
    pub fn description(&self) -> String {
        match self.kind {
            MoveKind::CastleKingside => return "O-O".to_string(),
            MoveKind::CastleQueenside => return "O-O-O".to_string(),
            _ => {}
        }

        let mut s = String::from(self.piece.kind.algebraic_name());
        if self.captured.is_some() {
            if self.piece.kind == PieceKind::Pawn {
                s.push(self.from.file_char());
            }
            s.push('x');
        }
        s.push_str(&self.to.to_algebraic());
        if let Some(promoted) = self.promoted_to {
            s.push('=');
            s.push_str(promoted.kind.algebraic_name());
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
