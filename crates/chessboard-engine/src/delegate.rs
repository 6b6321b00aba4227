//! Observer contract for board changes.

use chessboard_core::{Coordinate, Piece};
use serde::{Deserialize, Serialize};

/// Receives notifications while [`Board::move_piece`](crate::Board::move_piece)
/// runs.
///
/// Calls are synchronous and arrive in this order for a single move:
/// `will_remove_piece` (captures only), `did_move_piece` (a second time for
/// the rook when castling), `did_remove_piece` (captures only), then
/// `did_promote_piece` (promotions only). Every method defaults to doing
/// nothing.
pub trait BoardDelegate {
    /// A piece now stands on `to`. `piece` is the stored copy, already
    /// flagged as moved.
    fn did_move_piece(&mut self, piece: Piece, from: Coordinate, to: Coordinate) {
        let _ = (piece, from, to);
    }

    /// A captured piece is about to be taken off `at`. The board has not
    /// changed yet.
    fn will_remove_piece(&mut self, piece: Piece, at: Coordinate) {
        let _ = (piece, at);
    }

    /// The captured piece that stood on `at` is gone.
    fn did_remove_piece(&mut self, piece: Piece, at: Coordinate) {
        let _ = (piece, at);
    }

    /// A pawn on `at` was replaced by `piece`.
    fn did_promote_piece(&mut self, piece: Piece, at: Coordinate) {
        let _ = (piece, at);
    }
}

/// Ignores every notification.
impl BoardDelegate for () {}

impl<D: BoardDelegate + ?Sized> BoardDelegate for &mut D {
    fn did_move_piece(&mut self, piece: Piece, from: Coordinate, to: Coordinate) {
        (**self).did_move_piece(piece, from, to)
    }

    fn will_remove_piece(&mut self, piece: Piece, at: Coordinate) {
        (**self).will_remove_piece(piece, at)
    }

    fn did_remove_piece(&mut self, piece: Piece, at: Coordinate) {
        (**self).did_remove_piece(piece, at)
    }

    fn did_promote_piece(&mut self, piece: Piece, at: Coordinate) {
        (**self).did_promote_piece(piece, at)
    }
}

impl<D: BoardDelegate + ?Sized> BoardDelegate for Box<D> {
    fn did_move_piece(&mut self, piece: Piece, from: Coordinate, to: Coordinate) {
        (**self).did_move_piece(piece, from, to)
    }

    fn will_remove_piece(&mut self, piece: Piece, at: Coordinate) {
        (**self).will_remove_piece(piece, at)
    }

    fn did_remove_piece(&mut self, piece: Piece, at: Coordinate) {
        (**self).did_remove_piece(piece, at)
    }

    fn did_promote_piece(&mut self, piece: Piece, at: Coordinate) {
        (**self).did_promote_piece(piece, at)
    }
}

/// A delegate notification captured as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    Moved {
        piece: Piece,
        from: Coordinate,
        to: Coordinate,
    },
    WillRemove {
        piece: Piece,
        at: Coordinate,
    },
    DidRemove {
        piece: Piece,
        at: Coordinate,
    },
    Promoted {
        piece: Piece,
        at: Coordinate,
    },
}

/// Records every notification in order.
impl BoardDelegate for Vec<BoardEvent> {
    fn did_move_piece(&mut self, piece: Piece, from: Coordinate, to: Coordinate) {
        self.push(BoardEvent::Moved { piece, from, to });
    }

    fn will_remove_piece(&mut self, piece: Piece, at: Coordinate) {
        self.push(BoardEvent::WillRemove { piece, at });
    }

    fn did_remove_piece(&mut self, piece: Piece, at: Coordinate) {
        self.push(BoardEvent::DidRemove { piece, at });
    }

    fn did_promote_piece(&mut self, piece: Piece, at: Coordinate) {
        self.push(BoardEvent::Promoted { piece, at });
    }
}
