//! Legal move generation.
//!
//! Filters pseudo-legal destinations by playing each one on a scratch copy
//! of the position and discarding those that leave the mover in check.

use super::pseudo::pseudo_legal_moves;
use super::Destinations;
use crate::check::{is_in_check, is_square_attacked};
use crate::position::KING_COL;
use crate::Position;
use chessboard_core::{Color, Coordinate, Piece, PieceKind};

/// Returns the legal destinations of the piece on `from`.
///
/// This does not look at whose turn it is; callers gate on that.
pub fn legal_moves(position: &Position, from: Coordinate) -> Destinations {
    let Some(piece) = position.piece_at(from) else {
        return Destinations::new();
    };

    let mut candidates = pseudo_legal_moves(position, from);
    if piece.kind == PieceKind::King {
        candidates.extend(castling_moves(position, from, piece));
    }

    candidates.retain(|&to| leaves_king_safe(position, from, to, piece));
    tracing::trace!(%from, piece = %piece, count = candidates.len(), "legal moves");
    candidates
}

/// Returns every legal (from, to) pair for `color`, in square order.
pub fn all_legal_moves(position: &Position, color: Color) -> Vec<(Coordinate, Coordinate)> {
    position
        .pieces_of(color)
        .flat_map(|(from, _)| legal_moves(position, from).into_iter().map(move |to| (from, to)))
        .collect()
}

fn leaves_king_safe(position: &Position, from: Coordinate, to: Coordinate, piece: Piece) -> bool {
    let Some(plan) = position.plan(from, to) else {
        return false;
    };
    let mut scratch = position.clone();
    scratch.apply(&plan);
    !is_in_check(&scratch, piece.color)
}

/// Castling destinations for an unmoved king on its home square.
///
/// Requires an unmoved rook of the same color in the corner, empty squares
/// between them, and no attacked square on the king's path, including the
/// square it starts from.
fn castling_moves(position: &Position, from: Coordinate, king: Piece) -> Destinations {
    let mut moves = Destinations::new();
    if king.has_moved || from.row() != king.color.back_row() || from.col() != KING_COL {
        return moves;
    }
    let enemy = king.color.opposite();

    for (step, rook_col) in [(1i8, 7i32), (-1i8, 0i32)] {
        let Ok(rook_square) = Coordinate::new(from.row() as i32, rook_col) else {
            continue;
        };
        let rook_ready = matches!(
            position.piece_at(rook_square),
            Some(p) if p.kind == PieceKind::Rook && p.color == king.color && !p.has_moved
        );
        if !rook_ready {
            continue;
        }

        let lo = from.col().min(rook_square.col()) + 1;
        let hi = from.col().max(rook_square.col());
        let path_clear = (lo..hi).all(|col| {
            Coordinate::new(from.row() as i32, col as i32)
                .map(|c| position.piece_at(c).is_none())
                .unwrap_or(false)
        });
        if !path_clear {
            continue;
        }

        let king_path = [from.offset(0, 0), from.offset(0, step), from.offset(0, 2 * step)];
        let path_safe = king_path
            .iter()
            .all(|sq| matches!(sq, Some(c) if !is_square_attacked(position, *c, enemy)));
        if path_safe {
            if let Some(to) = from.offset(0, 2 * step) {
                moves.insert(to);
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Coordinate {
        Coordinate::from_algebraic(s).unwrap()
    }

    fn castling_setup() -> Position {
        let mut pos = Position::empty();
        pos.place(sq("e1"), Piece::new(Color::White, PieceKind::King));
        pos.place(sq("a1"), Piece::new(Color::White, PieceKind::Rook));
        pos.place(sq("h1"), Piece::new(Color::White, PieceKind::Rook));
        pos.place(sq("e8"), Piece::new(Color::Black, PieceKind::King));
        pos
    }

    #[test]
    fn startpos_has_twenty_moves() {
        let pos = Position::standard();
        assert_eq!(all_legal_moves(&pos, Color::White).len(), 20);
        assert_eq!(all_legal_moves(&pos, Color::Black).len(), 20);
    }

    #[test]
    fn castles_both_sides_when_clear() {
        let pos = castling_setup();
        let moves = legal_moves(&pos, sq("e1"));
        assert!(moves.contains(&sq("g1")));
        assert!(moves.contains(&sq("c1")));
    }

    #[test]
    fn no_castling_after_rook_moved() {
        let mut pos = castling_setup();
        pos.place(sq("h1"), Piece::new(Color::White, PieceKind::Rook).moved());
        let moves = legal_moves(&pos, sq("e1"));
        assert!(!moves.contains(&sq("g1")));
        assert!(moves.contains(&sq("c1")));
    }

    #[test]
    fn no_castling_after_king_moved() {
        let mut pos = castling_setup();
        pos.place(sq("e1"), Piece::new(Color::White, PieceKind::King).moved());
        let moves = legal_moves(&pos, sq("e1"));
        assert!(!moves.contains(&sq("g1")));
        assert!(!moves.contains(&sq("c1")));
    }

    #[test]
    fn no_castling_through_attacked_square() {
        let mut pos = castling_setup();
        pos.place(sq("f8"), Piece::new(Color::Black, PieceKind::Rook));
        let moves = legal_moves(&pos, sq("e1"));
        assert!(!moves.contains(&sq("g1")));
        assert!(moves.contains(&sq("c1")));
    }

    #[test]
    fn no_castling_out_of_check() {
        let mut pos = castling_setup();
        pos.place(sq("e5"), Piece::new(Color::Black, PieceKind::Rook));
        let moves = legal_moves(&pos, sq("e1"));
        assert!(!moves.contains(&sq("g1")));
        assert!(!moves.contains(&sq("c1")));
    }

    #[test]
    fn queenside_castling_blocked_by_knight_on_b1() {
        let mut pos = castling_setup();
        pos.place(sq("b1"), Piece::new(Color::White, PieceKind::Knight));
        let moves = legal_moves(&pos, sq("e1"));
        assert!(!moves.contains(&sq("c1")));
        assert!(moves.contains(&sq("g1")));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let mut pos = Position::empty();
        pos.place(sq("e1"), Piece::new(Color::White, PieceKind::King).moved());
        pos.place(sq("e2"), Piece::new(Color::White, PieceKind::Knight));
        pos.place(sq("e8"), Piece::new(Color::Black, PieceKind::Rook));
        pos.place(sq("a8"), Piece::new(Color::Black, PieceKind::King));
        assert!(legal_moves(&pos, sq("e2")).is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut pos = Position::empty();
        pos.place(sq("e1"), Piece::new(Color::White, PieceKind::King).moved());
        pos.place(sq("d8"), Piece::new(Color::Black, PieceKind::Rook));
        pos.place(sq("h8"), Piece::new(Color::Black, PieceKind::King));
        let moves = legal_moves(&pos, sq("e1"));
        assert!(!moves.contains(&sq("d1")));
        assert!(!moves.contains(&sq("d2")));
        assert!(moves.contains(&sq("f1")));
    }

    #[test]
    fn legal_moves_never_leave_mover_in_check() {
        let pos = Position::standard();
        for (from, to) in all_legal_moves(&pos, Color::White) {
            let mut scratch = pos.clone();
            scratch.apply(&pos.plan(from, to).unwrap());
            assert!(!is_in_check(&scratch, Color::White));
        }
    }
}
