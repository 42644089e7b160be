use crate::{board::Board, rules, types::Color};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, with
/// `color` to move first.
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = rules::legal_moves(board, color);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let mut child = board.clone();
        rules::apply_move(&mut child, mv, color);
        nodes += perft(&child, color.other(), depth - 1);
    }
    nodes
}

/// Per-root-move node counts, handy when tracking down a miscount.
pub fn divide(board: &Board, color: Color, depth: u8) -> Vec<(String, u64)> {
    rules::legal_moves(board, color)
        .iter()
        .map(|mv| {
            let mut child = board.clone();
            rules::apply_move(&mut child, mv, color);
            let count = perft(&child, color.other(), depth.saturating_sub(1));
            (mv.to_string(), count)
        })
        .collect()
}
