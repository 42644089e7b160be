//! Pseudo-legal move and attack generation.
//!
//! Nothing here checks king safety; that filtering belongs to
//! [`crate::rules`].

use crate::{board::Board, types::*};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Pseudo-legal moves of the piece on `from` (empty if the square is empty).
pub fn pseudo_legal_moves(board: &Board, from: Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    pseudo_legal_moves_into(board, from, &mut out);
    out
}

/// Appends the pseudo-legal moves of the piece on `from` to `out`.
pub fn pseudo_legal_moves_into(board: &Board, from: Position, out: &mut Vec<Move>) {
    let Some(pc) = board.piece_at(from) else {
        return;
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
        PieceKind::Knight => gen_leaper(board, from, pc.color, &KNIGHT_OFFSETS, out),
        PieceKind::Bishop => gen_slider(board, from, pc.color, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(board, from, pc.color, &ORTHOGONALS, out),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, &ORTHOGONALS, out);
            gen_slider(board, from, pc.color, &DIAGONALS, out);
        }
        PieceKind::King => gen_leaper(board, from, pc.color, &KING_OFFSETS, out),
    }
}

/// Squares the piece on `from` threatens.
///
/// Same as the pseudo-legal destinations except for pawns, which threaten
/// both forward diagonals whether or not anything stands there.
pub fn attacked_squares(board: &Board, from: Position) -> Vec<Position> {
    let Some(pc) = board.piece_at(from) else {
        return Vec::new();
    };
    if pc.kind == PieceKind::Pawn {
        let dir = pc.color.pawn_direction();
        return [-1, 1]
            .into_iter()
            .map(|df| from.offset(df, dir))
            .filter(|&to| board.contains(to))
            .collect();
    }
    pseudo_legal_moves(board, from)
        .into_iter()
        .map(|mv| mv.to)
        .collect()
}

fn push_promotions(mv: Move, out: &mut Vec<Move>) {
    for pk in PieceKind::PROMOTIONS {
        out.push(Move {
            promo: Some(pk),
            ..mv
        });
    }
}

fn gen_pawn(board: &Board, from: Position, c: Color, out: &mut Vec<Move>) {
    let size = board.size();
    let dir = c.pawn_direction();
    let promo_rank = c.promotion_rank(size);

    // forward 1
    let to = from.offset(0, dir);
    if board.contains(to) && !board.has_piece(to) {
        if to.rank == promo_rank {
            push_promotions(Move::new(from, to), out);
        } else {
            out.push(Move::new(from, to));

            // forward 2 from start; on a 4x4 board this already reaches the far rank
            let to2 = from.offset(0, 2 * dir);
            if from.rank == c.pawn_start_rank(size) && board.contains(to2) && !board.has_piece(to2)
            {
                if to2.rank == promo_rank {
                    push_promotions(Move::new(from, to2), out);
                } else {
                    out.push(Move::new(from, to2));
                }
            }
        }
    }

    // captures
    for df in [-1, 1] {
        let to = from.offset(df, dir);
        if let Some(target) = board.piece_at(to)
            && target.color != c
        {
            let mv = Move::capture(from, to, target);
            if to.rank == promo_rank {
                push_promotions(mv, out);
            } else {
                out.push(mv);
            }
        }
    }

    if let Some(mv) = en_passant(board, from, c) {
        out.push(mv);
    }
}

/// En passant is available only right after an enemy pawn double step that
/// landed beside this pawn.
fn en_passant(board: &Board, from: Position, c: Color) -> Option<Move> {
    let last = board.last_move()?;
    if last.to.rank != from.rank
        || (last.to.file - from.file).abs() != 1
        || last.from.file != last.to.file
        || (last.to.rank - last.from.rank).abs() != 2
    {
        return None;
    }
    let victim = board.piece_at(last.to)?;
    if victim.kind != PieceKind::Pawn || victim.color == c {
        return None;
    }
    let to = Position::new(last.to.file, from.rank + c.pawn_direction());
    if !board.contains(to) || board.has_piece(to) {
        return None;
    }
    Some(Move {
        is_en_passant: true,
        ..Move::capture(from, to, victim)
    })
}

fn gen_leaper(board: &Board, from: Position, c: Color, offsets: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in offsets {
        let to = from.offset(df, dr);
        if !board.contains(to) {
            continue;
        }
        match board.piece_at(to) {
            None => out.push(Move::new(from, to)),
            Some(pc) if pc.color != c => out.push(Move::capture(from, to, pc)),
            _ => {}
        }
    }
}

fn gen_slider(board: &Board, from: Position, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in dirs {
        let mut to = from.offset(df, dr);
        while board.contains(to) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::capture(from, to, pc));
                    break;
                }
                _ => break,
            }
            to = to.offset(df, dr);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
