use super::*;

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    // Starting position has 20 legal moves
    assert_eq!(pos.legal_moves().len(), 20);
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.status(), GameStatus::Ongoing);
}

#[test]
fn test_kiwipete_moves_with_short_fen() {
    // Kiwipete without move counters
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    assert_eq!(pos.legal_moves().len(), 48);
}

#[test]
fn test_invalid_fen_is_rejected() {
    let err = Position::from_fen("not a fen").unwrap_err();
    assert!(matches!(err, RulesError::InvalidFen { .. }));
}

#[test]
fn test_fen_round_trip_startpos() {
    let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    assert_eq!(Position::startpos().to_fen(), start);
    assert_eq!(Position::from_fen(start).unwrap().to_string(), start);
}

#[test]
fn test_piece_at_reads_both_colors() {
    let pos = Position::startpos();
    assert_eq!(
        pos.piece_at(coord_to_sq("e1").unwrap()),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        pos.piece_at(coord_to_sq("d8").unwrap()),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    assert_eq!(pos.piece_at(coord_to_sq("e4").unwrap()), None);
    assert_eq!(pos.piece_at(64), None);
}

#[test]
fn test_make_unmake_restores_position() {
    let mut pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    let before = pos.to_fen();
    for mv in pos.legal_moves() {
        let undo = pos.make_move(mv).unwrap();
        assert_eq!(pos.side_to_move(), Color::Black);
        pos.unmake_move(mv, undo);
        assert_eq!(pos.to_fen(), before);
    }
}

#[test]
fn test_make_move_rejects_illegal_move() {
    let mut pos = Position::startpos();
    let mv: Move = "e2e5".parse().unwrap();
    let err = pos.make_move(mv).unwrap_err();
    assert!(matches!(err, RulesError::IllegalMove { .. }));
    assert_eq!(pos.to_fen(), Position::startpos().to_fen());
}

#[test]
fn test_capture_detection() {
    // White pawn on e4 can take d5
    let pos = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let capture: Move = "e4d5".parse().unwrap();
    let push: Move = "e4e5".parse().unwrap();
    assert!(pos.is_capture(capture));
    assert!(!pos.is_capture(push));
}

#[test]
fn test_castling_is_not_a_capture() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    // cozy-chess encodes O-O as king takes rook
    let castle: Move = "e1h1".parse().unwrap();
    assert!(pos.legal_moves().contains(&castle));
    assert!(!pos.is_capture(castle));
}

#[test]
fn test_checkmate_status() {
    // Scholar's mate, black to move
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .unwrap();
    assert_eq!(pos.status(), GameStatus::Checkmate);
    assert!(pos.is_checkmate());
    assert!(pos.is_game_over());
    assert!(!pos.is_draw());
    assert!(pos.legal_moves().is_empty());
}
