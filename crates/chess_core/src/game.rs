//! Turn-taking wrapper around a live board.

use crate::{
    board::{Board, parse_fen},
    error::{FenError, GameError},
    rules::RulesEngine,
    types::*,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// Owns the live board, the side to move, and the history of played moves.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<Move>,
    status: GameStatus,
}

impl Game {
    pub fn new(board: Board, side_to_move: Color) -> Self {
        for color in Color::BOTH {
            if board.find_king(color).is_none() {
                tracing::warn!(%color, "game started without a king; that side can never be in check");
            }
        }
        let mut game = Self {
            board,
            side_to_move,
            history: Vec::new(),
            status: GameStatus::Ongoing,
        };
        game.refresh_status();
        game
    }

    pub fn standard() -> Self {
        Self::new(Board::standard(), Color::White)
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let (board, side_to_move) = parse_fen(fen)?;
        Ok(Self::new(board, side_to_move))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        crate::rules::legal_moves(&self.board, self.side_to_move)
    }

    /// Legal moves of the side to move that start on `from`.
    pub fn legal_moves_from(&self, from: Position) -> Vec<Move> {
        let mut moves = self.legal_moves();
        moves.retain(|mv| mv.from == from);
        moves
    }

    /// Resolves a from/to request to a full legal move.
    ///
    /// Promotions expand into one move per piece kind; with no `promo`
    /// requested the queen promotion is chosen.
    pub fn find_move(&self, from: Position, to: Position, promo: Option<PieceKind>) -> Option<Move> {
        let candidates: Vec<Move> = self
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from == from && mv.to == to)
            .collect();
        let wanted = promo.unwrap_or(PieceKind::Queen);
        candidates
            .iter()
            .find(|mv| mv.promo.is_none() || mv.promo == Some(wanted))
            .copied()
    }

    /// Plays `mv` for the side to move if it is one of the legal moves.
    pub fn play(&mut self, mv: &Move) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let legal = self.legal_moves();
        if !legal.contains(mv) {
            return Err(GameError::IllegalMove {
                from: mv.from,
                to: mv.to,
                color: self.side_to_move,
            });
        }
        self.commit(mv);
        Ok(())
    }

    /// Plays the legal move matching `from`/`to`, see [`Game::find_move`].
    pub fn play_coords(
        &mut self,
        from: Position,
        to: Position,
        promo: Option<PieceKind>,
    ) -> Result<Move, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let mv = self.find_move(from, to, promo).ok_or(GameError::IllegalMove {
            from,
            to,
            color: self.side_to_move,
        })?;
        self.commit(&mv);
        Ok(mv)
    }

    fn commit(&mut self, mv: &Move) {
        let mover = self.side_to_move;
        RulesEngine::new(&mut self.board).execute_move(mv, mover);
        self.history.push(*mv);
        self.side_to_move = mover.other();
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        let color = self.side_to_move;
        let rules = RulesEngine::new(&mut self.board);
        self.status = if rules.is_checkmate(color) {
            GameStatus::Checkmate {
                winner: color.other(),
            }
        } else if rules.is_stalemate(color) {
            GameStatus::Stalemate
        } else {
            GameStatus::Ongoing
        };
        if self.status.is_over() {
            tracing::info!(status = ?self.status, plies = self.history.len(), "game over");
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
