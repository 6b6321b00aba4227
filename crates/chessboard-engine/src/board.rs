//! The mutable game aggregate.
//!
//! [`Board`] owns the current [`Position`], the executed move history and the
//! observer. It is the only mutable entity in the engine; everything else
//! works on borrowed snapshots. Mutation goes through [`Board::move_piece`],
//! which takes `&mut self`, so one game is never mutated from two places at
//! once. Callers sharing a board between threads wrap it in a `Mutex`.

use crate::check::is_in_check;
use crate::error::{BoardError, IllegalMoveReason};
use crate::movegen::{legal_moves, Destinations};
use crate::{BoardDelegate, GameStatus, Position};
use chessboard_core::{Color, Coordinate, Move, Piece};
use std::fmt;

/// A chess game in progress.
#[derive(Debug, Clone)]
pub struct Board<D = ()> {
    position: Position,
    history: Vec<Move>,
    status: GameStatus,
    delegate: D,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a game from the standard starting position with no observer.
    pub fn new() -> Self {
        Board::with_delegate(())
    }
}

impl<D: BoardDelegate> Board<D> {
    /// Creates a game from the standard starting position.
    pub fn with_delegate(delegate: D) -> Self {
        Board {
            position: Position::standard(),
            history: Vec::new(),
            status: GameStatus::Ongoing,
            delegate,
        }
    }

    /// Creates a game from an arbitrary position.
    ///
    /// The status is evaluated immediately, so a position with no legal
    /// moves starts out terminal.
    pub fn from_position(position: Position, delegate: D) -> Self {
        let status = GameStatus::of(&position);
        Board {
            position,
            history: Vec::new(),
            status,
            delegate,
        }
    }

    /// Returns the piece at the given square, if any.
    pub fn piece_at(&self, at: Coordinate) -> Option<Piece> {
        self.position.piece_at(at)
    }

    /// Iterates over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.position.pieces()
    }

    /// Returns the side to move.
    pub fn next_turn(&self) -> Color {
        self.position.next_turn
    }

    /// Returns the status for the side to move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves executed so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current snapshot.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns true if the king of `color` is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.position, color)
    }

    /// Returns the observer.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Returns the observer mutably.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Consumes the board, returning the observer.
    pub fn into_delegate(self) -> D {
        self.delegate
    }

    /// Material captured by `color`, in standard piece values.
    pub fn score(&self, color: Color) -> u32 {
        self.history
            .iter()
            .filter(|m| m.piece.color == color)
            .filter_map(|m| m.captured)
            .map(|p| p.kind.value())
            .sum()
    }

    /// Legal destinations from `from` if it holds a piece of the side to
    /// move, otherwise an empty set.
    pub fn valid_moves_from(&self, from: Coordinate) -> Destinations {
        match self.check_source(from) {
            Ok(_) => legal_moves(&self.position, from),
            Err(_) => Destinations::new(),
        }
    }

    /// Returns true if the piece on `from` may move to `to` now.
    pub fn can_move(&self, from: Coordinate, to: Coordinate) -> bool {
        self.check_source(from).is_ok() && legal_moves(&self.position, from).contains(&to)
    }

    fn check_source(&self, from: Coordinate) -> Result<Piece, IllegalMoveReason> {
        if self.status.is_terminal() {
            return Err(IllegalMoveReason::GameOver);
        }
        let piece = self
            .position
            .piece_at(from)
            .ok_or(IllegalMoveReason::EmptySquare)?;
        if piece.color != self.position.next_turn {
            return Err(IllegalMoveReason::WrongTurn);
        }
        Ok(piece)
    }

    /// Executes a move, notifying the delegate as it goes.
    ///
    /// `piece` must match the color and kind on `from`. The caller is
    /// expected to have checked [`can_move`](Self::can_move); anything it
    /// would reject fails with [`BoardError::IllegalMove`] and leaves the
    /// board untouched.
    pub fn move_piece(
        &mut self,
        piece: Piece,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<Move, BoardError> {
        let reject = |reason: IllegalMoveReason| {
            tracing::debug!(%from, %to, %reason, "rejected move");
            BoardError::IllegalMove { from, to, reason }
        };

        let current = self.check_source(from).map_err(reject)?;
        if !current.same_as(piece) {
            return Err(reject(IllegalMoveReason::PieceMismatch));
        }
        if !legal_moves(&self.position, from).contains(&to) {
            return Err(reject(IllegalMoveReason::Unreachable));
        }
        let plan = self
            .position
            .plan(from, to)
            .ok_or_else(|| reject(IllegalMoveReason::Unreachable))?;

        if let Some((at, captured)) = plan.capture {
            self.delegate.will_remove_piece(captured, at);
            self.position.remove(at);
        }

        self.position.remove(from);
        let moved = plan.piece.moved();
        self.position.place(to, moved);
        self.delegate.did_move_piece(moved, from, to);

        if let Some((rook_from, rook_to)) = plan.rook {
            if let Some(rook) = self.position.remove(rook_from) {
                let rook = rook.moved();
                self.position.place(rook_to, rook);
                self.delegate.did_move_piece(rook, rook_from, rook_to);
            }
        }

        if let Some((at, captured)) = plan.capture {
            self.delegate.did_remove_piece(captured, at);
        }

        if let Some(promoted) = plan.promotion {
            self.position.place(to, promoted);
            self.delegate.did_promote_piece(promoted, to);
        }

        let record = Move {
            piece: plan.piece,
            from,
            to,
            kind: plan.kind,
            captured: plan.capture.map(|(_, p)| p),
            promoted_to: plan.promotion,
        };
        self.history.push(record);

        self.position.finish_move(&plan);
        self.status = GameStatus::of(&self.position);

        tracing::debug!(
            ply = self.history.len(),
            mv = %record,
            next = %self.position.next_turn,
            status = %self.status,
            "move executed"
        );

        Ok(record)
    }
}

impl<D> fmt::Display for Board<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position)
    }
}
