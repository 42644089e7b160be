//! Legality filtering, move execution and check/mate/stalemate queries.

use crate::{
    board::Board,
    movegen::{DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS, pseudo_legal_moves_into},
    trace::{RejectReason, RulesEvent, RulesObserver, TRACING_OBSERVER},
    types::*,
};

/// Rules engine bound to one live board.
///
/// The engine has no state of its own: every query is a function of the
/// board it wraps. Speculative work (legality checks) happens on clones, so
/// only [`RulesEngine::execute_move`] ever touches the bound board.
pub struct RulesEngine<'b> {
    board: &'b mut Board,
    observer: &'b dyn RulesObserver,
}

impl<'b> RulesEngine<'b> {
    /// Binds the engine to `board`, logging through `tracing`.
    pub fn new(board: &'b mut Board) -> Self {
        Self::with_observer(board, &TRACING_OBSERVER)
    }

    pub fn with_observer(board: &'b mut Board, observer: &'b dyn RulesObserver) -> Self {
        Self { board, observer }
    }

    pub fn board(&self) -> &Board {
        self.board
    }

    /// All legal moves for `color`, grouped by source piece in board-scan
    /// order, followed by castling moves.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        collect_legal(self.board, color, self.observer)
    }

    /// Legal moves of the piece standing on `from`.
    pub fn legal_moves_from(&self, from: Position) -> Vec<Move> {
        match self.board.piece_at(from) {
            Some(pc) => {
                let mut moves = self.legal_moves(pc.color);
                moves.retain(|mv| mv.from == from);
                moves
            }
            None => Vec::new(),
        }
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        in_check_observed(self.board, color, self.observer)
    }

    pub fn is_position_attacked(&self, pos: Position, defender: Color) -> bool {
        is_position_attacked(self.board, pos, defender)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && self.legal_moves(color).is_empty()
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && self.legal_moves(color).is_empty()
    }

    /// Applies `mv` to the bound board and returns the piece it captured.
    ///
    /// Legality is not re-validated; callers execute moves taken from
    /// [`RulesEngine::legal_moves`]. An empty source square is a no-op.
    pub fn execute_move(&mut self, mv: &Move, color: Color) -> Option<Piece> {
        if !self.board.has_piece(mv.from) {
            self.observer.on_event(&RulesEvent::MissingPiece { mv });
            return None;
        }
        let captured = apply_move(self.board, mv, color);
        let kind_color = |p: Option<Piece>| p.map(|p| (p.kind, p.color));
        if kind_color(captured) != kind_color(mv.captured) {
            self.observer.on_event(&RulesEvent::CaptureMismatch {
                mv,
                found: captured,
            });
        }
        self.observer.on_event(&RulesEvent::Executed {
            mv,
            color,
            captured,
        });
        captured
    }
}

/// Legal moves for `color` on `board`; see [`RulesEngine::legal_moves`].
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    collect_legal(board, color, &TRACING_OBSERVER)
}

fn collect_legal(board: &Board, color: Color, observer: &dyn RulesObserver) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(64);
    for (from, _) in board.pieces_of(color) {
        pseudo_legal_moves_into(board, from, &mut pseudo);
    }

    let mut legal = Vec::with_capacity(pseudo.len());
    for mv in pseudo {
        if board.has_friendly_piece(mv.to, color) {
            observer.on_event(&RulesEvent::Rejected {
                mv: &mv,
                color,
                reason: RejectReason::FriendlyFire,
            });
            continue;
        }

        let mut sim = board.clone();
        apply_move(&mut sim, &mv, color);
        if in_check_observed(&sim, color, observer) {
            observer.on_event(&RulesEvent::Rejected {
                mv: &mv,
                color,
                reason: RejectReason::LeavesKingInCheck,
            });
            continue;
        }
        legal.push(mv);
    }

    legal.extend(castling_moves(board, color));
    legal
}

/// Whether `color`'s king is attacked. A board without that king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    in_check_observed(board, color, &TRACING_OBSERVER)
}

fn in_check_observed(board: &Board, color: Color, observer: &dyn RulesObserver) -> bool {
    match board.find_king(color) {
        Some(ksq) => is_position_attacked(board, ksq, color),
        None => {
            observer.on_event(&RulesEvent::MissingKing { color });
            false
        }
    }
}

/// Whether any piece of `defender`'s opponent attacks `target`.
///
/// Looks outward from `target` for each attacker pattern instead of
/// generating every enemy piece's attack set. For an empty target or one
/// held by `defender` this agrees with testing `target` against
/// [`crate::movegen::attacked_squares`] of every enemy piece.
pub fn is_position_attacked(board: &Board, target: Position, defender: Color) -> bool {
    let by = defender.other();
    let holds = |pos: Position, kinds: &[PieceKind]| {
        matches!(board.piece_at(pos), Some(pc) if pc.color == by && kinds.contains(&pc.kind))
    };

    // Pawn attacks: a pawn one step "behind" the target, diagonally.
    let dir = by.pawn_direction();
    if [-1, 1]
        .into_iter()
        .any(|df| holds(target.offset(df, -dir), &[PieceKind::Pawn]))
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(df, dr)| holds(target.offset(df, dr), &[PieceKind::Knight]))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|&(df, dr)| holds(target.offset(df, dr), &[PieceKind::King]))
    {
        return true;
    }

    let rays: [(&[(i8, i8)], [PieceKind; 2]); 2] = [
        (&DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
        (&ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
    ];
    for (dirs, sliders) in rays {
        for &(df, dr) in dirs {
            let mut pos = target.offset(df, dr);
            while board.contains(pos) {
                if board.has_piece(pos) {
                    if holds(pos, &sliders) {
                        return true;
                    }
                    break;
                }
                pos = pos.offset(df, dr);
            }
        }
    }

    false
}

/// Castling moves for `color`: at most one toward each corner rook of the
/// home rank.
fn castling_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::new();
    let Some(king_pos) = board.find_king(color) else {
        return out;
    };
    let unmoved = board.piece_at(king_pos).is_some_and(|k| !k.has_moved);
    if !unmoved || king_pos.rank != color.home_rank(board.size()) {
        return out;
    }
    if is_position_attacked(board, king_pos, color) {
        return out;
    }

    let last_file = board.size() as i8 - 1;
    for (rook_file, dir) in [(last_file, 1), (0, -1)] {
        if can_castle(board, king_pos, rook_file, dir, color) {
            out.push(Move {
                is_castle: true,
                ..Move::new(king_pos, king_pos.offset(2 * dir, 0))
            });
        }
    }
    out
}

fn can_castle(board: &Board, king_pos: Position, rook_file: i8, dir: i8, color: Color) -> bool {
    let rook_pos = Position::new(rook_file, king_pos.rank);
    match board.piece_at(rook_pos) {
        Some(pc) if pc.kind == PieceKind::Rook && pc.color == color && !pc.has_moved => {}
        _ => return false,
    }
    // The king's two-square path must lie strictly between king and rook.
    if (rook_file - king_pos.file) * dir < 3 {
        return false;
    }

    let mut f = king_pos.file + dir;
    while f != rook_file {
        if board.has_piece(Position::new(f, king_pos.rank)) {
            return false;
        }
        f += dir;
    }

    // Neither the square passed over nor the destination may be attacked.
    (1..=2).all(|step| !is_position_attacked(board, king_pos.offset(step * dir, 0), color))
}

/// Mechanically applies `mv` to `board` and returns the captured piece.
///
/// Does nothing when the source square is empty. The capture is re-derived
/// from the board rather than trusted from the move record.
pub fn apply_move(board: &mut Board, mv: &Move, color: Color) -> Option<Piece> {
    let mut piece = board.remove_piece(mv.from)?;

    let captured = if mv.is_en_passant {
        board.remove_piece(Position::new(mv.to.file, mv.from.rank))
    } else {
        board.remove_piece(mv.to)
    };

    if mv.is_castle {
        let rank = mv.from.rank;
        let dir: i8 = if mv.to.file > mv.from.file { 1 } else { -1 };
        let rook_from = if dir > 0 {
            Position::new(board.size() as i8 - 1, rank)
        } else {
            Position::new(0, rank)
        };
        if let Some(mut rook) = board.remove_piece(rook_from) {
            rook.has_moved = true;
            board.set_piece(mv.from.offset(dir, 0), Some(rook));
        }
    }

    piece.has_moved = true;
    let placed = match mv.promo {
        Some(kind) => Piece {
            kind,
            color,
            has_moved: true,
        },
        None => piece,
    };
    board.set_piece(mv.to, Some(placed));
    board.set_last_move(Some(*mv));

    captured
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
