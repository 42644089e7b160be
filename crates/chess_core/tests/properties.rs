//! Seeded random playouts checking rules invariants on every visited position.

use rand::prelude::*;
use rand::rngs::StdRng;

use chess_core::*;

const PLAYOUTS: u64 = 24;
const MAX_PLIES: usize = 120;

fn playout_positions(seed: u64, start: Board) -> Vec<(Board, Color)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = start;
    let mut color = Color::White;
    let mut seen = Vec::new();
    for _ in 0..MAX_PLIES {
        seen.push((board.clone(), color));
        let moves = legal_moves(&board, color);
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        apply_move(&mut board, mv, color);
        color = color.other();
    }
    seen
}

fn all_positions() -> Vec<(Board, Color)> {
    let mut out = Vec::new();
    for seed in 0..PLAYOUTS {
        out.extend(playout_positions(seed, Board::standard()));
    }
    let small = Board::from_fen("rnbqk/ppppp/5/PPPPP/RNBQK w - - 0 1").unwrap();
    let wide = Board::from_fen("r4k3r/pppppppppp/10/10/10/10/10/10/PPPPPPPPPP/R4K3R w KQkq - 0 1")
        .unwrap();
    for seed in 0..4 {
        out.extend(playout_positions(1000 + seed, small.clone()));
        out.extend(playout_positions(2000 + seed, wide.clone()));
    }
    out
}

#[test]
fn legal_moves_are_pseudo_legal_or_castles() {
    for (board, color) in all_positions() {
        let mut pseudo = Vec::new();
        for (from, _) in board.pieces_of(color) {
            pseudo_legal_moves_into(&board, from, &mut pseudo);
        }
        for mv in legal_moves(&board, color) {
            assert!(
                mv.is_castle || pseudo.contains(&mv),
                "{mv} is neither pseudo-legal nor a castle\n{board}"
            );
            assert!(!board.has_friendly_piece(mv.to, color), "{mv} lands on a friend\n{board}");
        }
    }
}

#[test]
fn legal_moves_never_leave_king_in_check() {
    for (board, color) in all_positions() {
        for mv in legal_moves(&board, color) {
            let mut child = board.clone();
            apply_move(&mut child, &mv, color);
            assert!(!is_in_check(&child, color), "{mv} leaves {color} in check\n{board}");
        }
    }
}

#[test]
fn mate_and_stalemate_are_exclusive() {
    for (board, color) in all_positions() {
        let mut copy = board.clone();
        let rules = RulesEngine::new(&mut copy);
        let mate = rules.is_checkmate(color);
        let stale = rules.is_stalemate(color);
        assert!(!(mate && stale));
        if mate || stale {
            assert!(rules.legal_moves(color).is_empty());
        }
    }
}

#[test]
fn reverse_attack_lookup_matches_attack_sets() {
    for (board, color) in all_positions().into_iter().step_by(7) {
        let n = board.size() as i8;
        let enemy: Vec<Position> = board.pieces_of(color.other()).map(|(p, _)| p).collect();
        for rank in 0..n {
            for file in 0..n {
                let target = Position::new(file, rank);
                if board.has_enemy_piece(target, color) {
                    continue;
                }
                let by_union = enemy
                    .iter()
                    .any(|&from| attacked_squares(&board, from).contains(&target));
                assert_eq!(
                    is_position_attacked(&board, target, color),
                    by_union,
                    "attack mismatch on {target} for {color}\n{board}"
                );
            }
        }
    }
}

#[test]
fn mirrored_positions_have_equal_move_counts() {
    for (mut board, color) in all_positions().into_iter().step_by(5) {
        // Colors swap along with the ranks so castling state carries over.
        board.set_last_move(None);
        let n = board.size() as i8;
        let mut mirror = Board::new(board.size());
        for (pos, pc) in board.pieces() {
            let flipped = Piece {
                color: pc.color.other(),
                ..pc
            };
            mirror.set_piece(Position::new(pos.file, n - 1 - pos.rank), Some(flipped));
        }
        assert_eq!(
            legal_moves(&board, color).len(),
            legal_moves(&mirror, color.other()).len(),
            "mirror mismatch\n{board}"
        );
    }
}
