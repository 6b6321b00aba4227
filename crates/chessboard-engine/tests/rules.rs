//! End-to-end rule scenarios driven through the public board API.

mod common;

use chessboard_core::{Color, Coordinate, MoveKind, Piece, PieceKind};
use chessboard_engine::{
    all_legal_moves, is_in_check, Board, BoardDelegate, BoardEvent, GameStatus,
    IllegalMoveReason, Position,
};
use common::{setup, sq};

fn play<D: BoardDelegate>(board: &mut Board<D>, from: &str, to: &str) {
    let piece = board
        .piece_at(sq(from))
        .unwrap_or_else(|| panic!("no piece on {from}"));
    board
        .move_piece(piece, sq(from), sq(to))
        .unwrap_or_else(|e| panic!("{from}{to}: {e}"));
}

fn piece(color: Color, kind: PieceKind) -> Piece {
    Piece::new(color, kind)
}

#[test]
fn fools_mate_is_checkmate_and_blocks_further_moves() {
    let mut board = Board::new();
    play(&mut board, "f2", "f3");
    play(&mut board, "e7", "e5");
    play(&mut board, "g2", "g4");
    assert_eq!(board.status(), GameStatus::Ongoing);
    play(&mut board, "d8", "h4");

    assert_eq!(board.status(), GameStatus::Checkmate);
    assert_eq!(board.status().winner(board.next_turn()), Some(Color::Black));
    assert!(board.is_in_check(Color::White));
    assert!(all_legal_moves(board.position(), Color::White).is_empty());

    for (from, _) in board.pieces().collect::<Vec<_>>() {
        assert!(board.valid_moves_from(from).is_empty());
    }
    let king = board.piece_at(sq("e1")).unwrap();
    let err = board.move_piece(king, sq("e1"), sq("f2")).unwrap_err();
    assert_eq!(err.reason(), IllegalMoveReason::GameOver);
}

#[test]
fn scholars_mate() {
    let mut board = Board::new();
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
        ("h5", "f7"),
    ] {
        play(&mut board, from, to);
    }
    assert_eq!(board.status(), GameStatus::Checkmate);
    assert_eq!(board.history().last().unwrap().description(), "Qxf7");
    assert_eq!(board.score(Color::White), 1);
}

#[test]
fn check_is_reported_and_must_be_answered() {
    let mut board = Board::new();
    play(&mut board, "e2", "e4");
    play(&mut board, "f7", "f6");
    play(&mut board, "d1", "h5");
    assert_eq!(board.status(), GameStatus::Check);
    // Only g6 blocks; the king has no flight square
    let moves = all_legal_moves(board.position(), Color::Black);
    assert_eq!(moves, vec![(sq("g7"), sq("g6"))]);
    play(&mut board, "g7", "g6");
    assert_eq!(board.status(), GameStatus::Ongoing);
}

#[test]
fn injected_stalemate() {
    let position = setup("7k/5Q2/6K1/8/8/8/8/8", Color::Black);
    let mut board = Board::from_position(position, ());
    assert_eq!(board.status(), GameStatus::Stalemate);
    assert!(!board.is_in_check(Color::Black));
    assert_eq!(board.status().winner(Color::Black), None);

    let king = board.piece_at(sq("h8")).unwrap();
    let err = board.move_piece(king, sq("h8"), sq("g8")).unwrap_err();
    assert_eq!(err.reason(), IllegalMoveReason::GameOver);
}

#[test]
fn stalemate_reached_by_play() {
    let position = setup("7k/8/5QK1/8/8/8/8/8", Color::White);
    let mut board = Board::from_position(position, ());
    assert_eq!(board.status(), GameStatus::Ongoing);
    play(&mut board, "f6", "f7");
    assert_eq!(board.status(), GameStatus::Stalemate);
}

#[test]
fn en_passant_removes_the_passed_pawn() {
    let mut board = Board::with_delegate(Vec::<BoardEvent>::new());
    play(&mut board, "e2", "e4");
    play(&mut board, "a7", "a6");
    play(&mut board, "e4", "e5");
    play(&mut board, "d7", "d5");

    assert!(board.valid_moves_from(sq("e5")).contains(&sq("d6")));
    board.delegate_mut().clear();
    let pawn = board.piece_at(sq("e5")).unwrap();
    let record = board.move_piece(pawn, sq("e5"), sq("d6")).unwrap();

    assert_eq!(record.kind, MoveKind::EnPassant);
    assert_eq!(record.description(), "exd6");
    assert_eq!(board.piece_at(sq("d5")), None);
    assert_eq!(
        board.piece_at(sq("d6")).map(|p| (p.color, p.kind)),
        Some((Color::White, PieceKind::Pawn))
    );

    let black_pawn = piece(Color::Black, PieceKind::Pawn).moved();
    let events = board.delegate();
    assert_eq!(events.len(), 3);
    assert_eq!(
        events[0],
        BoardEvent::WillRemove {
            piece: black_pawn,
            at: sq("d5")
        }
    );
    assert!(matches!(events[1], BoardEvent::Moved { from, to, .. } if from == sq("e5") && to == sq("d6")));
    assert_eq!(
        events[2],
        BoardEvent::DidRemove {
            piece: black_pawn,
            at: sq("d5")
        }
    );
}

#[test]
fn en_passant_expires_after_one_move() {
    let mut board = Board::new();
    play(&mut board, "e2", "e4");
    play(&mut board, "a7", "a6");
    play(&mut board, "e4", "e5");
    play(&mut board, "d7", "d5");
    play(&mut board, "h2", "h3");
    play(&mut board, "a6", "a5");
    assert!(!board.can_move(sq("e5"), sq("d6")));
}

#[test]
fn en_passant_needs_a_double_step() {
    let mut board = Board::new();
    play(&mut board, "e2", "e4");
    play(&mut board, "d7", "d6");
    play(&mut board, "e4", "e5");
    play(&mut board, "d6", "d5");
    assert!(!board.can_move(sq("e5"), sq("d6")));
}

#[test]
fn promotion_by_advance() {
    let position = setup("8/P7/8/8/8/7k/8/4K3", Color::White);
    let mut board = Board::from_position(position, Vec::<BoardEvent>::new());
    play(&mut board, "a7", "a8");

    let queen = piece(Color::White, PieceKind::Queen).moved();
    assert_eq!(board.piece_at(sq("a8")), Some(queen));
    let record = board.history()[0];
    assert_eq!(record.promoted_to, Some(queen));
    assert_eq!(record.piece.kind, PieceKind::Pawn);
    assert_eq!(record.description(), "a8=Q");

    let promotions = board
        .delegate()
        .iter()
        .filter(|e| matches!(e, BoardEvent::Promoted { .. }))
        .count();
    assert_eq!(promotions, 1);
    assert_eq!(
        board.delegate().last(),
        Some(&BoardEvent::Promoted {
            piece: queen,
            at: sq("a8")
        })
    );
}

#[test]
fn promotion_by_capture_reports_every_step() {
    let position = setup("r7/1P6/8/8/8/7k/8/4K3", Color::White);
    let mut board = Board::from_position(position, Vec::<BoardEvent>::new());
    play(&mut board, "b7", "a8");

    let queen = piece(Color::White, PieceKind::Queen).moved();
    let rook = piece(Color::Black, PieceKind::Rook);
    let kinds: Vec<&str> = board
        .delegate()
        .iter()
        .map(|e| match e {
            BoardEvent::WillRemove { .. } => "will_remove",
            BoardEvent::Moved { .. } => "moved",
            BoardEvent::DidRemove { .. } => "did_remove",
            BoardEvent::Promoted { .. } => "promoted",
        })
        .collect();
    assert_eq!(kinds, ["will_remove", "moved", "did_remove", "promoted"]);
    assert_eq!(board.piece_at(sq("a8")), Some(queen));
    assert_eq!(board.history()[0].captured, Some(rook));
    assert_eq!(board.history()[0].description(), "bxa8=Q");
    assert_eq!(board.score(Color::White), 5);
}

#[test]
fn black_promotes_on_row_seven() {
    let position = setup("4k3/8/8/8/8/8/2p5/7K", Color::Black);
    let mut board = Board::from_position(position, ());
    play(&mut board, "c2", "c1");
    assert_eq!(
        board.piece_at(sq("c1")).map(|p| (p.color, p.kind)),
        Some((Color::Black, PieceKind::Queen))
    );
}

#[test]
fn queenside_castling_through_play() {
    let mut board = Board::new();
    for (from, to) in [
        ("d2", "d4"),
        ("d7", "d5"),
        ("b1", "c3"),
        ("b8", "c6"),
        ("c1", "f4"),
        ("c8", "f5"),
        ("d1", "d2"),
        ("d8", "d7"),
    ] {
        play(&mut board, from, to);
    }
    assert!(board.can_move(sq("e1"), sq("c1")));
    play(&mut board, "e1", "c1");
    assert_eq!(board.history().last().unwrap().kind, MoveKind::CastleQueenside);
    assert_eq!(
        board.piece_at(sq("d1")).map(|p| p.kind),
        Some(PieceKind::Rook)
    );
    assert!(board.can_move(sq("e8"), sq("c8")));
}

#[test]
fn king_that_moved_back_cannot_castle() {
    let mut board = Board::new();
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("g8", "f6"),
        ("f1", "e2"),
        ("f8", "e7"),
        ("e1", "f1"),
        ("e8", "f8"),
        ("f1", "e1"),
        ("f8", "e8"),
    ] {
        play(&mut board, from, to);
    }
    assert!(!board.can_move(sq("e1"), sq("g1")));
}

#[test]
fn every_legal_move_keeps_the_king_safe() {
    let position = setup(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        Color::White,
    );
    for (from, to) in all_legal_moves(&position, Color::White) {
        let mut scratch: Position = position.clone();
        scratch.apply(&position.plan(from, to).unwrap());
        assert!(!is_in_check(&scratch, Color::White), "{from}{to}");
    }
}

#[test]
fn coordinates_outside_the_board_are_rejected() {
    assert!(Coordinate::new(-1, 0).is_err());
    assert!(Coordinate::new(0, 8).is_err());
    assert!(Coordinate::new(7, 7).is_ok());
}
