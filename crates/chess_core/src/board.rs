use std::fmt;

use crate::error::{BoardError, FenError};
use crate::types::*;

pub const MIN_BOARD_SIZE: u8 = 4;
pub const MAX_BOARD_SIZE: u8 = 26;

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// An N x N mailbox board plus the last move played on it (for en passant).
///
/// Squares are stored rank-major in a flat vector, so `clone` is a single
/// allocation and a cloned board shares nothing with the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u8,
    squares: Vec<Option<Piece>>,
    last_move: Option<Move>,
}

impl Board {
    /// Empty board of `size` x `size` squares.
    ///
    /// # Panics
    /// If `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(size: u8) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
        );
        Self {
            size,
            squares: vec![None; size as usize * size as usize],
            last_move: None,
        }
    }

    /// The standard 8x8 initial position.
    pub fn standard() -> Self {
        let mut b = Board::new(8);
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            let f = f as i8;
            b.set_piece(Position::new(f, 0), Some(Piece::new(kind, Color::White)));
            b.set_piece(Position::new(f, 1), Some(Piece::new(PieceKind::Pawn, Color::White)));
            b.set_piece(Position::new(f, 6), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            b.set_piece(Position::new(f, 7), Some(Piece::new(kind, Color::Black)));
        }
        b
    }

    /// Board part of a FEN string; see [`parse_fen`].
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen).map(|(board, _)| board)
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    fn index(&self, pos: Position) -> usize {
        pos.rank as usize * self.size as usize + pos.file as usize
    }

    #[inline]
    fn position_of(&self, idx: usize) -> Position {
        let n = self.size as usize;
        Position::new((idx % n) as i8, (idx / n) as i8)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.is_valid(self.size)
    }

    /// Piece on `pos`; `None` for empty or off-board squares.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if !self.contains(pos) {
            return None;
        }
        self.squares[self.index(pos)]
    }

    /// # Panics
    /// If `pos` is off the board.
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        assert!(self.contains(pos), "set_piece: {pos:?} is off the board");
        let idx = self.index(pos);
        self.squares[idx] = piece;
    }

    pub fn remove_piece(&mut self, pos: Position) -> Option<Piece> {
        if !self.contains(pos) {
            return None;
        }
        let idx = self.index(pos);
        self.squares[idx].take()
    }

    /// Checked setup call: places an unmoved piece.
    pub fn place(&mut self, pos: Position, kind: PieceKind, color: Color) -> Result<(), BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds {
                pos,
                size: self.size,
            });
        }
        self.set_piece(pos, Some(Piece::new(kind, color)));
        Ok(())
    }

    pub fn has_piece(&self, pos: Position) -> bool {
        self.piece_at(pos).is_some()
    }

    pub fn has_enemy_piece(&self, pos: Position, color: Color) -> bool {
        matches!(self.piece_at(pos), Some(pc) if pc.color != color)
    }

    pub fn has_friendly_piece(&self, pos: Position, color: Color) -> bool {
        matches!(self.piece_at(pos), Some(pc) if pc.color == color)
    }

    /// All pieces in board-scan order (rank by rank, file by file).
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, sq)| sq.map(|pc| (self.position_of(i), pc)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, pc)| pc.color == color)
    }

    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    pub fn set_last_move(&mut self, mv: Option<Move>) {
        self.last_move = mv;
    }

    pub fn clear(&mut self) {
        self.squares.iter_mut().for_each(|sq| *sq = None);
        self.last_move = None;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..self.size as i8).rev() {
            for file in 0..self.size as i8 {
                if file > 0 {
                    f.write_str(" ")?;
                }
                let c = self
                    .piece_at(Position::new(file, rank))
                    .map_or('.', |pc| pc.symbol());
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses a Forsyth-Edwards string into a board and the side to move.
///
/// The board size is the number of ranks. Castling letters refer to the
/// corner rooks of each home rank and are translated into `has_moved` flags;
/// an en passant target becomes the board's last move (the enemy double step).
/// Move clocks are accepted and ignored.
pub fn parse_fen(fen: &str) -> Result<(Board, Color), FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let board_part = *parts.first().ok_or(FenError::Empty)?;
    let stm_part = parts.get(1).copied().unwrap_or("w");
    let castle_part = parts.get(2).copied().unwrap_or("-");
    let ep_part = parts.get(3).copied().unwrap_or("-");

    let ranks: Vec<&str> = board_part.split('/').collect();
    let n = ranks.len();
    if !(MIN_BOARD_SIZE as usize..=MAX_BOARD_SIZE as usize).contains(&n) {
        return Err(FenError::BadSize(n));
    }
    let size = n as u8;
    let mut board = Board::new(size);

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = (n - 1 - rank_idx) as i8;
        let mut file = 0usize;
        let mut empty_run = 0usize;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                // the run never exceeds n here, so this cannot overflow
                empty_run = empty_run * 10 + d as usize;
                if file + empty_run > n {
                    return Err(FenError::RankWidth {
                        rank: rank as usize + 1,
                        found: file + empty_run,
                        expected: n,
                    });
                }
                continue;
            }
            file += empty_run;
            empty_run = 0;
            let kind = PieceKind::from_letter(ch).ok_or(FenError::BadPiece(ch))?;
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            if file >= n {
                return Err(FenError::RankWidth {
                    rank: rank as usize + 1,
                    found: file + 1,
                    expected: n,
                });
            }
            board.set_piece(Position::new(file as i8, rank), Some(Piece::new(kind, color)));
            file += 1;
        }
        file += empty_run;
        if file != n {
            return Err(FenError::RankWidth {
                rank: rank as usize + 1,
                found: file,
                expected: n,
            });
        }
    }

    let side_to_move = match stm_part {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::BadSide(other.to_string())),
    };

    // [color][0 = kingside / high file, 1 = queenside / file 0]
    let mut rights = [[false; 2]; 2];
    if castle_part != "-" {
        for c in castle_part.chars() {
            match c {
                'K' => rights[0][0] = true,
                'Q' => rights[0][1] = true,
                'k' => rights[1][0] = true,
                'q' => rights[1][1] = true,
                _ => return Err(FenError::BadCastling(c)),
            }
        }
    }
    apply_moved_flags(&mut board, &rights);

    if ep_part != "-" {
        let last = en_passant_origin(&board, ep_part, side_to_move.other())?;
        board.set_last_move(Some(last));
    }

    Ok((board, side_to_move))
}

fn apply_moved_flags(board: &mut Board, rights: &[[bool; 2]; 2]) {
    let n = board.size() as i8;
    let placed: Vec<(Position, Piece)> = board.pieces().collect();
    for (pos, mut pc) in placed {
        let home = pc.color.home_rank(board.size());
        let [kingside, queenside] = rights[pc.color.idx()];
        pc.has_moved = match pc.kind {
            PieceKind::King => !(pos.rank == home && (kingside || queenside)),
            PieceKind::Rook if pos == Position::new(n - 1, home) => !kingside,
            PieceKind::Rook if pos == Position::new(0, home) => !queenside,
            PieceKind::Rook => true,
            PieceKind::Pawn => pos.rank != pc.color.pawn_start_rank(board.size()),
            _ => false,
        };
        board.set_piece(pos, Some(pc));
    }
}

/// Rebuilds the double step that produced the en passant target `coord`.
fn en_passant_origin(board: &Board, coord: &str, mover: Color) -> Result<Move, FenError> {
    let bad = || FenError::InvalidEnPassant(coord.to_string());
    let target = Position::from_coord(coord).ok_or_else(bad)?;
    let size = board.size();
    let dir = mover.pawn_direction();
    if !board.contains(target) || target.rank != mover.pawn_start_rank(size) + dir {
        return Err(bad());
    }
    let from = Position::new(target.file, target.rank - dir);
    let to = Position::new(target.file, target.rank + dir);
    match board.piece_at(to) {
        Some(pc) if pc.kind == PieceKind::Pawn && pc.color == mover => Ok(Move::new(from, to)),
        _ => Err(bad()),
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
