use super::*;
use chess_core::Position;

fn eval_fen(eval: ClassicalEval, fen: &str) -> i32 {
    eval.evaluate(&Position::from_fen(fen).unwrap())
}

#[test]
fn test_startpos_is_balanced() {
    let pos = Position::startpos();
    assert_eq!(ClassicalEval::material_only().evaluate(&pos), 0);
    assert_eq!(ClassicalEval::default().evaluate(&pos), 0);
}

#[test]
fn test_material_sign_convention() {
    // White is a queen up
    let white_up = "4k3/8/8/8/8/8/8/3QK3 w - - 0 1";
    // Black is a queen up
    let black_up = "3qk3/8/8/8/8/8/8/4K3 w - - 0 1";

    assert_eq!(eval_fen(ClassicalEval::material_only(), white_up), 900);
    assert_eq!(eval_fen(ClassicalEval::material_only(), black_up), -900);
}

#[test]
fn test_score_ignores_side_to_move() {
    let white_to_move = "4k3/8/8/8/8/8/3P4/3QK3 w - - 0 1";
    let black_to_move = "4k3/8/8/8/8/8/3P4/3QK3 b - - 0 1";

    let eval = ClassicalEval::default();
    assert_eq!(eval_fen(eval, white_to_move), eval_fen(eval, black_to_move));
}

#[test]
fn test_mirrored_positions_negate() {
    // Same structure with colors swapped and the board flipped
    let white = "4k3/8/8/8/3N4/8/4P3/4K3 w - - 0 1";
    let black = "4k3/4p3/8/3n4/8/8/8/4K3 w - - 0 1";

    let eval = ClassicalEval::default();
    assert_eq!(eval_fen(eval, white), -eval_fen(eval, black));
    assert!(eval_fen(eval, white) > 0);
}

#[test]
fn test_positional_term_prefers_central_knight() {
    let rim = "4k3/8/8/8/N7/8/8/4K3 w - - 0 1";
    let center = "4k3/8/8/8/3N4/8/8/4K3 w - - 0 1";

    let material = ClassicalEval::material_only();
    assert_eq!(eval_fen(material, rim), eval_fen(material, center));

    let positional = ClassicalEval::default();
    assert!(eval_fen(positional, center) > eval_fen(positional, rim));
}

#[test]
fn test_black_tables_are_mirrored() {
    // Advanced pawns on the seventh rank from each side's perspective
    let white = "4k3/4P3/8/8/8/8/8/4K3 w - - 0 1";
    let black = "4k3/8/8/8/8/8/4p3/4K3 w - - 0 1";

    let eval = ClassicalEval::default();
    assert_eq!(eval_fen(eval, white), -eval_fen(eval, black));
    assert_eq!(
        pst::bonus(chess_core::Piece::new(Color::White, PieceKind::Pawn), 52),
        pst::bonus(chess_core::Piece::new(Color::Black, PieceKind::Pawn), 12)
    );
}

#[test]
fn test_evaluation_is_deterministic() {
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    let first = evaluate(&pos);
    for _ in 0..10 {
        assert_eq!(evaluate(&pos), first);
    }
}

#[test]
fn test_closure_evaluator() {
    let constant = |_: &Position| 42;
    assert_eq!(constant.evaluate(&Position::startpos()), 42);
}
