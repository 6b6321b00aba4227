//! Movement patterns shared by move generation and check detection.

use super::Destinations;
use crate::Position;
use chessboard_core::{Color, Coordinate, PieceKind};

/// Knight jumps as (row, col) deltas.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King steps as (row, col) deltas.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Orthogonal ray directions.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Returns the ray directions for a sliding piece kind.
pub fn slider_directions(kind: PieceKind) -> &'static [(i8, i8)] {
    const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
        (-1, 0),
        (1, 0),
        (0, -1),
        (0, 1),
        (-1, -1),
        (-1, 1),
        (1, -1),
        (1, 1),
    ];
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    }
}

/// Walks from `from` in one direction, yielding each square up to and
/// including the first occupied one.
pub fn ray(
    position: &Position,
    from: Coordinate,
    (d_row, d_col): (i8, i8),
) -> impl Iterator<Item = Coordinate> + '_ {
    let mut next = from.offset(d_row, d_col);
    let mut blocked = false;
    std::iter::from_fn(move || {
        if blocked {
            return None;
        }
        let sq = next?;
        blocked = position.piece_at(sq).is_some();
        next = sq.offset(d_row, d_col);
        Some(sq)
    })
}

/// Applies fixed offsets, dropping those that leave the board.
pub fn jumps(from: Coordinate, offsets: &[(i8, i8)]) -> impl Iterator<Item = Coordinate> + '_ {
    offsets.iter().filter_map(move |&(dr, dc)| from.offset(dr, dc))
}

/// The two forward diagonals a pawn of `color` attacks from `from`.
pub fn pawn_attacks(from: Coordinate, color: Color) -> impl Iterator<Item = Coordinate> {
    let dir = color.pawn_direction();
    [-1i8, 1]
        .into_iter()
        .filter_map(move |dc| from.offset(dir, dc))
}

/// Squares threatened by the piece on `from`, whoever occupies them.
///
/// Pawns threaten their forward diagonals even when empty. Sliders include
/// the first blocker in each direction. Castling never attacks.
pub fn attacks_from(position: &Position, from: Coordinate) -> Destinations {
    let Some(piece) = position.piece_at(from) else {
        return Destinations::new();
    };
    if piece.kind.is_slider() {
        return slider_directions(piece.kind)
            .iter()
            .flat_map(|&dir| ray(position, from, dir))
            .collect();
    }
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece.color).collect(),
        PieceKind::Knight => jumps(from, &KNIGHT_OFFSETS).collect(),
        _ => jumps(from, &KING_OFFSETS).collect(),
    }
}
