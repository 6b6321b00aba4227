//! Board snapshot consumed by move generation.

use chessboard_core::{Color, Coordinate, MoveKind, Piece, PieceKind};
use std::fmt;

/// Back-row layout from the a-file to the h-file.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on.
pub(crate) const KING_COL: u8 = 4;

/// Square occupancy plus the state move generation needs beyond it.
///
/// Every square holds at most one piece by construction: each is a single
/// `Option<Piece>` cell, and every write goes through [`Position::set`],
/// which replaces the occupant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    squares: [[Option<Piece>; 8]; 8],

    /// The side to move.
    pub next_turn: Color,

    /// Square behind a pawn that double-stepped on the previous move.
    pub en_passant: Option<Coordinate>,
}

/// Everything a move does, resolved before any square is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    /// The piece as it stands on `from`.
    pub piece: Piece,
    pub from: Coordinate,
    pub to: Coordinate,
    pub kind: MoveKind,
    /// The captured piece and the square it actually stands on. For en
    /// passant this differs from `to`.
    pub capture: Option<(Coordinate, Piece)>,
    /// Rook relocation for castling.
    pub rook: Option<(Coordinate, Coordinate)>,
    /// Replacement piece for a pawn reaching the far row.
    pub promotion: Option<Piece>,
}

impl Position {
    /// Creates an empty board with White to move.
    pub fn empty() -> Self {
        Position {
            squares: [[None; 8]; 8],
            next_turn: Color::White,
            en_passant: None,
        }
    }

    /// Creates the standard starting position.
    pub fn standard() -> Self {
        let mut position = Position::empty();
        for color in Color::ALL {
            for (col, kind) in BACK_ROW.iter().enumerate() {
                position.squares[color.back_row() as usize][col] = Some(Piece::new(color, *kind));
            }
            for col in 0..8 {
                position.squares[color.pawn_row() as usize][col] =
                    Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        position
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, at: Coordinate) -> Option<Piece> {
        self.squares[at.row() as usize][at.col() as usize]
    }

    /// Writes a square, replacing whatever stood there.
    #[inline]
    pub fn set(&mut self, at: Coordinate, piece: Option<Piece>) {
        self.squares[at.row() as usize][at.col() as usize] = piece;
    }

    /// Places a piece on a square.
    #[inline]
    pub fn place(&mut self, at: Coordinate, piece: Piece) {
        self.set(at, Some(piece));
    }

    /// Removes and returns the piece on a square.
    #[inline]
    pub fn remove(&mut self, at: Coordinate) -> Option<Piece> {
        let piece = self.piece_at(at);
        self.set(at, None);
        piece
    }

    /// Iterates over every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(move |c| self.piece_at(c).map(|p| (c, p)))
    }

    /// Iterates over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Returns the square of the given color's king.
    pub fn king_square(&self, color: Color) -> Option<Coordinate> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(c, _)| c)
    }

    /// Returns true if the square holds a piece of the opposite color.
    #[inline]
    pub fn is_enemy(&self, at: Coordinate, color: Color) -> bool {
        matches!(self.piece_at(at), Some(p) if p.color != color)
    }

    /// Resolves what moving `from -> to` would do.
    ///
    /// Returns `None` when `from` is empty or `to` holds a piece of the
    /// mover's own color. Legality is not checked here.
    pub fn plan(&self, from: Coordinate, to: Coordinate) -> Option<MovePlan> {
        let piece = self.piece_at(from)?;
        if let Some(occupant) = self.piece_at(to) {
            if occupant.color == piece.color {
                return None;
            }
        }

        let d_row = to.row() as i8 - from.row() as i8;
        let d_col = to.col() as i8 - from.col() as i8;

        let mut plan = MovePlan {
            piece,
            from,
            to,
            kind: MoveKind::Normal,
            capture: self.piece_at(to).map(|captured| (to, captured)),
            rook: None,
            promotion: None,
        };

        match piece.kind {
            PieceKind::Pawn => {
                if d_row.abs() == 2 {
                    plan.kind = MoveKind::DoubleStep;
                } else if d_col != 0 && plan.capture.is_none() && self.en_passant == Some(to) {
                    let victim_square = Coordinate::new(from.row() as i32, to.col() as i32).ok()?;
                    let victim = self.piece_at(victim_square)?;
                    plan.kind = MoveKind::EnPassant;
                    plan.capture = Some((victim_square, victim));
                }
                if to.row() == piece.color.promotion_row() {
                    plan.promotion = Some(Piece::new(piece.color, PieceKind::Queen).moved());
                }
            }
            PieceKind::King if d_row == 0 && d_col.abs() == 2 => {
                let step = d_col.signum();
                let rook_col = if step > 0 { 7 } else { 0 };
                let rook_from = Coordinate::new(from.row() as i32, rook_col).ok()?;
                let rook_to = from.offset(0, step)?;
                plan.kind = if step > 0 {
                    MoveKind::CastleKingside
                } else {
                    MoveKind::CastleQueenside
                };
                plan.rook = Some((rook_from, rook_to));
            }
            _ => {}
        }

        Some(plan)
    }

    /// Performs a planned move in one step. Used for scratch simulation.
    pub fn apply(&mut self, plan: &MovePlan) {
        if let Some((at, _)) = plan.capture {
            self.remove(at);
        }
        self.remove(plan.from);
        self.place(plan.to, plan.promotion.unwrap_or(plan.piece.moved()));
        if let Some((rook_from, rook_to)) = plan.rook {
            if let Some(rook) = self.remove(rook_from) {
                self.place(rook_to, rook.moved());
            }
        }
        self.finish_move(plan);
    }

    /// Updates the en passant target and hands the turn to the other side.
    pub(crate) fn finish_move(&mut self, plan: &MovePlan) {
        self.en_passant = if plan.kind == MoveKind::DoubleStep {
            plan.from.offset(plan.piece.color.pawn_direction(), 0)
        } else {
            None
        };
        self.next_turn = plan.piece.color.opposite();
    }

    /// Renders an 8x8 diagram, row 0 first, with rank and file labels.
    pub fn diagram(&self, unicode: bool) -> String {
        let mut out = String::new();
        for row in 0..8u8 {
            out.push((b'8' - row) as char);
            out.push(' ');
            for col in 0..8u8 {
                let c = match self.squares[row as usize][col as usize] {
                    Some(p) if unicode => p.symbol(),
                    Some(p) => p.to_char(),
                    None => '.',
                };
                out.push(c);
                if col < 7 {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h");
        out
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagram(false))
    }
}
