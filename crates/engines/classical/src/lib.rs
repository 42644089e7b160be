//! Classical Chess Engine
//!
//! Alpha-beta minimax (or single-ply heuristic scoring) over cloned boards,
//! with material plus simple positional evaluation.

mod config;
mod eval;
mod search;

use chess_core::{legal_moves, Board, Color, Engine, Move, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

pub use config::{ConfigError, SearchConfig, SearchMode};
pub use eval::{evaluate, piece_value};
pub use search::MATE_SCORE;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 8;

/// Computer opponent.
///
/// Holds only its settings and a seeded RNG; the board is passed in per
/// call and never modified.
#[derive(Debug, Clone)]
pub struct SearchAi {
    config: SearchConfig,
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl SearchAi {
    /// Minimax opponent at `difficulty` (clamped to the supported range).
    pub fn new(difficulty: u8) -> Self {
        Self::with_config(SearchConfig {
            difficulty,
            ..SearchConfig::default()
        })
    }

    pub fn with_config(mut config: SearchConfig) -> Self {
        config.difficulty = config.difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            rng,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn difficulty(&self) -> u8 {
        self.config.difficulty
    }

    /// Clamps `level` into `MIN_DIFFICULTY..=MAX_DIFFICULTY`.
    pub fn set_difficulty(&mut self, level: u8) {
        self.config.difficulty = level.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Best move for `color`, or `None` when `color` has no legal move
    /// (checkmate or stalemate).
    pub fn find_best_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        self.search(board, color).best_move
    }

    /// Every legal root move with its score from `color`'s side, in
    /// generation order.
    pub fn score_moves(&mut self, board: &Board, color: Color) -> Vec<(Move, i32)> {
        let moves = legal_moves(board, color);
        self.nodes = 0;
        self.score(board, color, &moves)
    }

    fn score(&mut self, board: &Board, color: Color, moves: &[Move]) -> Vec<(Move, i32)> {
        match self.config.mode {
            SearchMode::Minimax => {
                search::score_minimax(board, color, moves, self.config.difficulty, &mut self.nodes)
            }
            SearchMode::Heuristic => search::score_single_ply(board, color, moves, &mut self.nodes),
        }
    }

    /// Picks from scored moves according to mode and `randomize`.
    fn select(&mut self, scored: &[(Move, i32)]) -> Option<(Move, i32)> {
        let best = scored.iter().map(|&(_, s)| s).max()?;
        if !self.config.randomize {
            return scored.iter().find(|&&(_, s)| s == best).copied();
        }

        let pool: Vec<(Move, i32)> = match self.config.mode {
            SearchMode::Minimax => scored.iter().filter(|&&(_, s)| s == best).copied().collect(),
            SearchMode::Heuristic => {
                let mut ranked = scored.to_vec();
                // Stable: equal scores keep generation order.
                ranked.sort_by(|a, b| b.1.cmp(&a.1));
                let k = (MAX_DIFFICULTY + 1 - self.config.difficulty) as usize;
                ranked.truncate(k);
                ranked
            }
        };
        pool.choose(&mut self.rng).copied()
    }
}

impl Default for SearchAi {
    fn default() -> Self {
        Self::with_config(SearchConfig::default())
    }
}

impl Engine for SearchAi {
    fn search(&mut self, board: &Board, color: Color) -> SearchResult {
        self.nodes = 0;
        debug!(
            %color,
            mode = ?self.config.mode,
            difficulty = self.config.difficulty,
            "search started"
        );

        let moves = legal_moves(board, color);
        match moves.as_slice() {
            [] => {
                debug!(%color, "no legal moves");
                return SearchResult {
                    best_move: None,
                    score: 0,
                    depth: 0,
                    nodes: 0,
                };
            }
            [only] => {
                debug!(%color, mv = %only, "forced move");
                return SearchResult {
                    best_move: Some(*only),
                    score: 0,
                    depth: 0,
                    nodes: 0,
                };
            }
            _ => {}
        }

        let scored = self.score(board, color, &moves);
        let picked = self.select(&scored);
        let depth = match self.config.mode {
            SearchMode::Minimax => self.config.difficulty,
            SearchMode::Heuristic => 1,
        };
        if let Some((mv, score)) = picked {
            debug!(%color, mv = %mv, score, nodes = self.nodes, depth, "move selected");
        }

        SearchResult {
            best_move: picked.map(|(mv, _)| mv),
            score: picked.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        match self.config.mode {
            SearchMode::Minimax => "Classical minimax",
            SearchMode::Heuristic => "Classical heuristic",
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.rng = StdRng::seed_from_u64(self.config.seed);
    }

    fn set_difficulty(&mut self, level: u8) {
        SearchAi::set_difficulty(self, level);
    }
}
