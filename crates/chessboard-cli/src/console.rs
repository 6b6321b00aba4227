//! Board observer that narrates moves for the terminal.

use chessboard_core::{Color, Coordinate, Piece};
use chessboard_engine::BoardDelegate;

/// Collects a line of text per notification and keeps the captured pieces
/// of each side, so the driver can print them after a move.
#[derive(Debug, Default, Clone)]
pub struct Console {
    lines: Vec<String>,
    captured: Vec<Piece>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lines gathered since the last call and clears them.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// Pieces of `color` that have been taken off the board, in capture order.
    pub fn captured(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.captured.iter().copied().filter(move |p| p.color == color)
    }
}

impl BoardDelegate for Console {
    fn did_move_piece(&mut self, piece: Piece, from: Coordinate, to: Coordinate) {
        self.lines.push(format!("{piece} {from} -> {to}"));
    }

    fn will_remove_piece(&mut self, piece: Piece, at: Coordinate) {
        tracing::trace!(%at, "removing {piece}");
    }

    fn did_remove_piece(&mut self, piece: Piece, at: Coordinate) {
        self.captured.push(piece);
        self.lines.push(format!("{piece} captured on {at}"));
    }

    fn did_promote_piece(&mut self, piece: Piece, at: Coordinate) {
        self.lines.push(format!("promoted to {piece} on {at}"));
    }
}
