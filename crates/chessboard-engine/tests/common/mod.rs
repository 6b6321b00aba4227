//! Shared helpers for engine integration tests.

#![allow(dead_code)]

use chessboard_core::{Color, Coordinate, Piece, PieceKind};
use chessboard_engine::Position;

pub fn sq(s: &str) -> Coordinate {
    Coordinate::from_algebraic(s).unwrap_or_else(|| panic!("bad square {s}"))
}

/// Builds a position from a FEN-style placement field ("8/8/.../8").
///
/// Pawns off their starting row are marked as moved; everything else is
/// unmoved, so kings and rooks on their home squares may castle.
pub fn setup(placement: &str, next_turn: Color) -> Position {
    let mut position = Position::empty();
    position.next_turn = next_turn;
    for (row, rank) in placement.split('/').enumerate() {
        let mut col = 0i32;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as i32;
                continue;
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match c.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                other => panic!("bad piece {other}"),
            };
            let at = Coordinate::new(row as i32, col).unwrap();
            let mut piece = Piece::new(color, kind);
            if kind == PieceKind::Pawn && at.row() != color.pawn_row() {
                piece = piece.moved();
            }
            position.place(at, piece);
            col += 1;
        }
    }
    position
}
