//! Static evaluation: material plus a small positional term.

use chess_core::{is_in_check, Board, Color, PieceKind, Position};

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

const CENTER_BONUS: i32 = 10;
const PAWN_ADVANCE_PER_RANK: i32 = 5;
const CHECK_BONUS: i32 = 50;

pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Evaluates `board` from `perspective`'s point of view.
///
/// Returns a score in centipawns:
/// - Positive = good for `perspective`
/// - Negative = bad for `perspective`
///
/// Each piece contributes its material value, a bonus when it stands in the
/// central region, and (for pawns) a bonus per rank advanced. A side in check
/// is penalised.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    let size = board.size();
    let mut score = 0i32;

    for (pos, pc) in board.pieces() {
        let mut value = piece_value(pc.kind);
        if in_center(pos, size) {
            value += CENTER_BONUS;
        }
        if pc.kind == PieceKind::Pawn {
            value += pawn_advancement(pos, pc.color, size);
        }
        if pc.color == perspective {
            score += value;
        } else {
            score -= value;
        }
    }

    if is_in_check(board, perspective) {
        score -= CHECK_BONUS;
    }
    if is_in_check(board, perspective.other()) {
        score += CHECK_BONUS;
    }
    score
}

/// Central region: files and ranks in `size/4 ..= size-1-size/4`.
fn in_center(pos: Position, size: u8) -> bool {
    let lo = (size / 4) as i8;
    let hi = size as i8 - 1 - lo;
    (lo..=hi).contains(&pos.file) && (lo..=hi).contains(&pos.rank)
}

fn pawn_advancement(pos: Position, color: Color, size: u8) -> i32 {
    let ranks = match color {
        Color::White => pos.rank as i32,
        Color::Black => size as i32 - 1 - pos.rank as i32,
    };
    ranks * PAWN_ADVANCE_PER_RANK
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
