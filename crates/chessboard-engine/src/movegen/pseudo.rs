//! Pseudo-legal move generation.
//!
//! Destinations here obey each piece's movement pattern and the occupancy
//! rules, but ignore whether the mover's king would be left in check. This
//! stage never consults check detection, so check detection can build on it.

use super::attacks::{attacks_from, pawn_attacks};
use super::Destinations;
use crate::Position;
use chessboard_core::{Coordinate, Piece, PieceKind};

/// Returns the pseudo-legal destinations of the piece on `from`.
///
/// Empty squares yield an empty set. Castling is not included; it needs
/// check detection and is added by the legal stage.
pub fn pseudo_legal_moves(position: &Position, from: Coordinate) -> Destinations {
    let Some(piece) = position.piece_at(from) else {
        return Destinations::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(position, from, piece),
        _ => attacks_from(position, from)
            .into_iter()
            .filter(|&to| !matches!(position.piece_at(to), Some(p) if p.color == piece.color))
            .collect(),
    }
}

fn pawn_moves(position: &Position, from: Coordinate, pawn: Piece) -> Destinations {
    let mut moves = Destinations::new();
    let dir = pawn.color.pawn_direction();

    // Pushes are blocked by any occupant
    if let Some(one) = from.offset(dir, 0).filter(|&c| position.piece_at(c).is_none()) {
        moves.insert(one);
        if !pawn.has_moved && from.row() == pawn.color.pawn_row() {
            if let Some(two) = from.offset(2 * dir, 0).filter(|&c| position.piece_at(c).is_none()) {
                moves.insert(two);
            }
        }
    }

    for to in pawn_attacks(from, pawn.color) {
        if position.is_enemy(to, pawn.color) || is_en_passant_target(position, from, to, pawn) {
            moves.insert(to);
        }
    }

    moves
}

/// The target must be the square behind an enemy pawn that sits beside us.
fn is_en_passant_target(position: &Position, from: Coordinate, to: Coordinate, pawn: Piece) -> bool {
    if position.en_passant != Some(to) || position.piece_at(to).is_some() {
        return false;
    }
    Coordinate::new(from.row() as i32, to.col() as i32)
        .ok()
        .and_then(|beside| position.piece_at(beside))
        .is_some_and(|p| p.kind == PieceKind::Pawn && p.color != pawn.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessboard_core::Color;

    fn sq(s: &str) -> Coordinate {
        Coordinate::from_algebraic(s).unwrap()
    }

    fn set(squares: &[&str]) -> Destinations {
        squares.iter().map(|s| sq(s)).collect()
    }

    #[test]
    fn pawn_single_and_double_step_from_start() {
        let pos = Position::standard();
        assert_eq!(pseudo_legal_moves(&pos, sq("e2")), set(&["e3", "e4"]));
        assert_eq!(pseudo_legal_moves(&pos, sq("d7")), set(&["d6", "d5"]));
    }

    #[test]
    fn pawn_double_step_requires_unmoved_pawn() {
        let mut pos = Position::empty();
        pos.place(sq("e2"), Piece::new(Color::White, PieceKind::Pawn).moved());
        assert_eq!(pseudo_legal_moves(&pos, sq("e2")), set(&["e3"]));
    }

    #[test]
    fn pawn_blocked_by_any_piece() {
        let mut pos = Position::standard();
        pos.place(sq("e3"), Piece::new(Color::Black, PieceKind::Knight));
        // Blocked forward, but the knight on e3 is not diagonal so no capture either
        assert!(pseudo_legal_moves(&pos, sq("e2")).is_empty());
        // d2 and f2 can capture it
        assert!(pseudo_legal_moves(&pos, sq("d2")).contains(&sq("e3")));
        assert!(pseudo_legal_moves(&pos, sq("f2")).contains(&sq("e3")));
    }

    #[test]
    fn pawn_double_step_blocked_on_landing_square() {
        let mut pos = Position::standard();
        pos.place(sq("e4"), Piece::new(Color::Black, PieceKind::Pawn));
        assert_eq!(pseudo_legal_moves(&pos, sq("e2")), set(&["e3"]));
    }

    #[test]
    fn knights_skip_own_pieces() {
        let pos = Position::standard();
        assert_eq!(pseudo_legal_moves(&pos, sq("g1")), set(&["f3", "h3"]));
    }

    #[test]
    fn sliders_blocked_at_start() {
        let pos = Position::standard();
        assert!(pseudo_legal_moves(&pos, sq("a1")).is_empty());
        assert!(pseudo_legal_moves(&pos, sq("c8")).is_empty());
        assert!(pseudo_legal_moves(&pos, sq("d1")).is_empty());
    }

    #[test]
    fn rook_captures_enemy_but_not_friend() {
        let mut pos = Position::empty();
        pos.place(sq("a1"), Piece::new(Color::White, PieceKind::Rook));
        pos.place(sq("a3"), Piece::new(Color::Black, PieceKind::Pawn));
        pos.place(sq("c1"), Piece::new(Color::White, PieceKind::Knight));
        assert_eq!(pseudo_legal_moves(&pos, sq("a1")), set(&["a2", "a3", "b1"]));
    }

    #[test]
    fn en_passant_target_included() {
        let mut pos = Position::empty();
        pos.place(sq("e5"), Piece::new(Color::White, PieceKind::Pawn).moved());
        pos.place(sq("d5"), Piece::new(Color::Black, PieceKind::Pawn).moved());
        pos.en_passant = Some(sq("d6"));
        assert_eq!(pseudo_legal_moves(&pos, sq("e5")), set(&["d6", "e6"]));

        pos.en_passant = None;
        assert_eq!(pseudo_legal_moves(&pos, sq("e5")), set(&["e6"]));
    }

    #[test]
    fn empty_square_has_no_moves() {
        let pos = Position::standard();
        assert!(pseudo_legal_moves(&pos, sq("e4")).is_empty());
    }
}
