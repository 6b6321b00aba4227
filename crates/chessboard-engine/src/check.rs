//! Check, checkmate and stalemate detection.
//!
//! Attacks are found by looking outward from the target square with the
//! same movement patterns the generator uses: a knight on X attacks Y
//! exactly when a knight on Y would attack X, and likewise for every other
//! piece once pawn direction is reversed. That symmetry makes the lookup
//! equivalent to asking whether any enemy pseudo-legal move lands on the
//! square, which is how check is defined.

use crate::movegen::attacks::{
    jumps, pawn_attacks, ray, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};
use crate::movegen::legal_moves;
use crate::Position;
use chessboard_core::{Color, Coordinate, PieceKind};

/// Returns true if any piece of `by_color` attacks `sq`.
pub fn is_square_attacked(position: &Position, sq: Coordinate, by_color: Color) -> bool {
    let holds = |at: Coordinate, kinds: &[PieceKind]| {
        matches!(position.piece_at(at), Some(p) if p.color == by_color && kinds.contains(&p.kind))
    };

    if pawn_attacks(sq, by_color.opposite()).any(|at| holds(at, &[PieceKind::Pawn])) {
        return true;
    }
    if jumps(sq, &KNIGHT_OFFSETS).any(|at| holds(at, &[PieceKind::Knight])) {
        return true;
    }
    if jumps(sq, &KING_OFFSETS).any(|at| holds(at, &[PieceKind::King])) {
        return true;
    }

    let orthogonal = [PieceKind::Rook, PieceKind::Queen];
    if ROOK_DIRECTIONS
        .iter()
        .filter_map(|&dir| ray(position, sq, dir).last())
        .any(|at| holds(at, &orthogonal))
    {
        return true;
    }

    let diagonal = [PieceKind::Bishop, PieceKind::Queen];
    BISHOP_DIRECTIONS
        .iter()
        .filter_map(|&dir| ray(position, sq, dir).last())
        .any(|at| holds(at, &diagonal))
}

/// Returns true if the king of `color` is attacked.
///
/// A position without that king is never in check.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    position
        .king_square(color)
        .is_some_and(|king| is_square_attacked(position, king, color.opposite()))
}

/// Returns true if no piece of `color` has a legal move.
pub fn has_no_legal_moves(position: &Position, color: Color) -> bool {
    position
        .pieces_of(color)
        .all(|(from, _)| legal_moves(position, from).is_empty())
}
