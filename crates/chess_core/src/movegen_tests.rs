use super::*;
use crate::rules::apply_move;

fn pos(c: &str) -> Position {
    Position::from_coord(c).unwrap()
}

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

fn lone(size: u8, at: Position, kind: PieceKind) -> Board {
    let mut b = Board::new(size);
    b.place(at, kind, Color::White).unwrap();
    b
}

#[test]
fn test_empty_square_has_no_moves() {
    let b = Board::new(8);
    assert!(pseudo_legal_moves(&b, pos("e4")).is_empty());
    assert!(attacked_squares(&b, pos("e4")).is_empty());
}

#[test]
fn test_knight_moves() {
    assert_eq!(pseudo_legal_moves(&lone(8, pos("e4"), PieceKind::Knight), pos("e4")).len(), 8);
    let corner = pseudo_legal_moves(&lone(8, pos("a1"), PieceKind::Knight), pos("a1"));
    let targets: Vec<Position> = corner.iter().map(|m| m.to).collect();
    assert_eq!(targets.len(), 2);
    assert!(targets.contains(&pos("c2")));
    assert!(targets.contains(&pos("b3")));
}

#[test]
fn test_king_moves() {
    assert_eq!(pseudo_legal_moves(&lone(8, pos("e4"), PieceKind::King), pos("e4")).len(), 8);
    assert_eq!(pseudo_legal_moves(&lone(8, pos("a1"), PieceKind::King), pos("a1")).len(), 3);
}

#[test]
fn test_sliders_on_empty_board() {
    assert_eq!(pseudo_legal_moves(&lone(8, pos("e4"), PieceKind::Rook), pos("e4")).len(), 14);
    assert_eq!(pseudo_legal_moves(&lone(8, pos("e4"), PieceKind::Bishop), pos("e4")).len(), 13);
    assert_eq!(pseudo_legal_moves(&lone(8, pos("e4"), PieceKind::Queen), pos("e4")).len(), 27);
    // Larger boards only change edge clipping.
    assert_eq!(pseudo_legal_moves(&lone(10, pos("e5"), PieceKind::Queen), pos("e5")).len(), 35);
}

#[test]
fn test_slider_stops_at_friend_and_captures_enemy() {
    // Rook a1, friendly knight a4, enemy bishop d1
    let b = board("4k3/8/8/8/N7/8/8/R2b3K w - - 0 1");
    let moves = pseudo_legal_moves(&b, pos("a1"));
    let targets: Vec<Position> = moves.iter().map(|m| m.to).collect();
    assert!(targets.contains(&pos("a2")));
    assert!(targets.contains(&pos("a3")));
    assert!(!targets.contains(&pos("a4")));
    assert!(!targets.contains(&pos("a5")));
    assert!(targets.contains(&pos("c1")));
    assert!(!targets.contains(&pos("e1")));
    assert_eq!(moves.len(), 5);

    let capture = moves.iter().find(|m| m.to == pos("d1")).unwrap();
    assert_eq!(capture.captured.map(|p| p.kind), Some(PieceKind::Bishop));
    assert!(moves.iter().filter(|m| m.to != pos("d1")).all(|m| m.captured.is_none()));
}

#[test]
fn test_pawn_single_and_double_step() {
    let b = Board::standard();
    let moves = pseudo_legal_moves(&b, pos("e2"));
    let targets: Vec<Position> = moves.iter().map(|m| m.to).collect();
    assert_eq!(targets, vec![pos("e3"), pos("e4")]);

    let black = pseudo_legal_moves(&b, pos("d7"));
    let targets: Vec<Position> = black.iter().map(|m| m.to).collect();
    assert_eq!(targets, vec![pos("d6"), pos("d5")]);
}

#[test]
fn test_pawn_double_step_blocked() {
    // Blocker on the destination only
    let b = board("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
    assert_eq!(pseudo_legal_moves(&b, pos("e2")).len(), 1);
    // Blocker directly ahead stops both steps
    let b = board("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    assert!(pseudo_legal_moves(&b, pos("e2")).is_empty());
}

#[test]
fn test_pawn_start_rank_on_small_board() {
    // 5x5: black pawns start on rank index 3
    let b = board("k4/2p2/5/2P2/4K w - - 0 1");
    let black: Vec<Position> = pseudo_legal_moves(&b, Position::new(2, 3))
        .iter()
        .map(|m| m.to)
        .collect();
    assert_eq!(black, vec![Position::new(2, 2)]);
}

#[test]
fn test_double_step_promotes_on_4x4() {
    // Start rank plus two is the far rank on a 4x4 board.
    let b = board("3k/4/P3/K3 w - - 0 1");
    let moves = pseudo_legal_moves(&b, Position::new(0, 1));
    assert_eq!(moves.len(), 5);
    let far: Vec<&Move> = moves.iter().filter(|m| m.to == Position::new(0, 3)).collect();
    assert_eq!(far.len(), 4);
    let kinds: Vec<PieceKind> = far.iter().filter_map(|m| m.promo).collect();
    assert_eq!(kinds, PieceKind::PROMOTIONS.to_vec());
    let single = moves.iter().find(|m| m.to == Position::new(0, 2)).unwrap();
    assert_eq!(single.promo, None);

    let legal: Vec<Move> = crate::rules::legal_moves(&b, Color::White)
        .into_iter()
        .filter(|m| m.from == Position::new(0, 1) && m.to.rank == 3)
        .collect();
    assert_eq!(legal.len(), 4);

    // Same for black: the double step from rank index 2 lands on rank 0.
    let b = board("3k/p3/4/3K b - - 0 1");
    let moves = pseudo_legal_moves(&b, Position::new(0, 2));
    assert_eq!(moves.iter().filter(|m| m.to.rank == 0).count(), 4);
    assert!(moves.iter().filter(|m| m.to.rank == 0).all(|m| m.promo.is_some()));
}

#[test]
fn test_promotion_expands_to_four_moves() {
    let b = board("3r1r2/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    let moves = pseudo_legal_moves(&b, pos("e7"));
    assert_eq!(moves.len(), 12);
    assert!(moves.iter().all(|m| m.promo.is_some()));

    for to in [pos("d8"), pos("e8"), pos("f8")] {
        let kinds: Vec<PieceKind> = moves
            .iter()
            .filter(|m| m.to == to)
            .filter_map(|m| m.promo)
            .collect();
        assert_eq!(kinds, PieceKind::PROMOTIONS.to_vec());
    }
    let captures = moves.iter().filter(|m| m.captured.is_some()).count();
    assert_eq!(captures, 8);
}

#[test]
fn test_black_promotion_rank() {
    let b = board("4k3/8/8/8/8/8/p7/4K3 b - - 0 1");
    let moves = pseudo_legal_moves(&b, pos("a2"));
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.to == pos("a1")));
}

#[test]
fn test_pawn_attacks_ignore_occupancy() {
    let b = board("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    let attacked = attacked_squares(&b, pos("e2"));
    assert_eq!(attacked, vec![pos("d3"), pos("f3")]);
    // ...while no diagonal move exists without a target.
    assert!(pseudo_legal_moves(&b, pos("e2")).iter().all(|m| m.to.file == 4));

    let edge = board("4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
    assert_eq!(attacked_squares(&edge, pos("a2")), vec![pos("b3")]);
}

#[test]
fn test_non_pawn_attacks_match_destinations() {
    let b = board("4k3/8/8/3p4/8/1N6/8/4K3 w - - 0 1");
    let mut from_moves: Vec<Position> = pseudo_legal_moves(&b, pos("b3")).iter().map(|m| m.to).collect();
    let mut attacked = attacked_squares(&b, pos("b3"));
    from_moves.sort();
    attacked.sort();
    assert_eq!(from_moves, attacked);
    assert!(attacked.contains(&pos("d4")));
}

#[test]
fn test_en_passant_after_double_step() {
    let mut b = board("4k3/8/8/8/4p3/8/3P4/4K3 w - - 0 1");
    assert_eq!(pseudo_legal_moves(&b, pos("e4")).len(), 1);

    let double = Move::new(pos("d2"), pos("d4"));
    apply_move(&mut b, &double, Color::White);

    let moves = pseudo_legal_moves(&b, pos("e4"));
    let ep: Vec<&Move> = moves.iter().filter(|m| m.is_en_passant).collect();
    assert_eq!(ep.len(), 1);
    assert_eq!(ep[0].to, pos("d3"));
    assert_eq!(ep[0].captured.map(|p| (p.kind, p.color)), Some((PieceKind::Pawn, Color::White)));
}

#[test]
fn test_en_passant_expires() {
    let mut b = board("4k3/8/8/8/4p3/8/3P4/4K3 w - - 0 1");
    apply_move(&mut b, &Move::new(pos("d2"), pos("d4")), Color::White);
    apply_move(&mut b, &Move::new(pos("e8"), pos("d8")), Color::Black);
    apply_move(&mut b, &Move::new(pos("e1"), pos("f1")), Color::White);
    let moves = pseudo_legal_moves(&b, pos("e4"));
    assert!(moves.iter().all(|m| !m.is_en_passant));
}

#[test]
fn test_single_step_gives_no_en_passant() {
    let mut b = board("4k3/8/8/8/4p3/3P4/8/4K3 w - - 0 1");
    apply_move(&mut b, &Move::new(pos("d3"), pos("d4")), Color::White);
    assert!(pseudo_legal_moves(&b, pos("e4")).iter().all(|m| !m.is_en_passant));
}
