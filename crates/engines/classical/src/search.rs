//! Root scoring for both search modes.
//!
//! Look-ahead never touches the caller's board: every simulated move is
//! applied to a clone.

use chess_core::{apply_move, is_in_check, legal_moves, Board, Color, Move};

use crate::eval::evaluate;

/// Score of being checkmated at the root; mates found `ply` plies deep are
/// worth `MATE_SCORE - ply` so shorter mates win ties.
pub const MATE_SCORE: i32 = 100_000;

const INF: i32 = i32::MAX / 2;

fn child(board: &Board, mv: &Move, color: Color) -> Board {
    let mut next = board.clone();
    apply_move(&mut next, mv, color);
    next
}

/// Exact minimax score of every root move, searched `depth` plies deep.
///
/// Each root move gets its own full window, so alpha-beta pruning inside
/// the subtrees cannot change any root score.
pub(crate) fn score_minimax(
    board: &Board,
    color: Color,
    moves: &[Move],
    depth: u8,
    nodes: &mut u64,
) -> Vec<(Move, i32)> {
    moves
        .iter()
        .map(|mv| {
            let next = child(board, mv, color);
            let score = -negamax(&next, color.other(), depth.saturating_sub(1), 1, -INF, INF, nodes);
            (*mv, score)
        })
        .collect()
}

/// Static evaluation one ply ahead, from the mover's side.
pub(crate) fn score_single_ply(
    board: &Board,
    color: Color,
    moves: &[Move],
    nodes: &mut u64,
) -> Vec<(Move, i32)> {
    moves
        .iter()
        .map(|mv| {
            *nodes += 1;
            (*mv, evaluate(&child(board, mv, color), color))
        })
        .collect()
}

fn negamax(
    board: &Board,
    color: Color,
    depth: u8,
    ply: i32,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    let moves = legal_moves(board, color);
    if moves.is_empty() {
        if is_in_check(board, color) {
            return -(MATE_SCORE - ply);
        }
        return 0;
    }
    if depth == 0 {
        return evaluate(board, color);
    }

    let mut best = -INF;
    for mv in &moves {
        let next = child(board, mv, color);
        let score = -negamax(&next, color.other(), depth - 1, ply + 1, -beta, -alpha, nodes);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
