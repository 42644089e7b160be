use thiserror::Error;

use crate::types::{Color, Position};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position {pos:?} is outside the {size}x{size} board")]
    OutOfBounds { pos: Position, size: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("empty FEN")]
    Empty,
    #[error("board size {0} is not supported")]
    BadSize(usize),
    #[error("rank {rank} describes {found} files, expected {expected}")]
    RankWidth {
        rank: usize,
        found: usize,
        expected: usize,
    },
    #[error("invalid piece character '{0}'")]
    BadPiece(char),
    #[error("invalid side to move '{0}'")]
    BadSide(String),
    #[error("invalid castling character '{0}'")]
    BadCastling(char),
    #[error("invalid en passant square '{0}'")]
    InvalidEnPassant(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,
    #[error("{from}{to} is not a legal move for {color}")]
    IllegalMove {
        from: Position,
        to: Position,
        color: Color,
    },
}
