pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod trace;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::{attacked_squares, pseudo_legal_moves, pseudo_legal_moves_into};
pub use perft::{divide, perft};
pub use rules::*;
pub use trace::{RejectReason, RulesEvent, RulesObserver, TracingObserver};
pub use types::*;

// =============================================================================
// Engine trait, implemented by move-search opponents
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the searching side's perspective
    pub score: i32,
    /// Search depth used (0 when the move was forced or none exists)
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that all move-search opponents implement.
///
/// Engines only read the board they are given; any look-ahead happens on
/// clones. The caller executes the returned move through the rules engine.
pub trait Engine {
    /// Picks a move for `color` on `board`.
    fn search(&mut self, board: &Board, color: Color) -> SearchResult;

    /// Returns the engine's name for reports and logs
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Adjusts playing strength; engines clamp to their own range.
    fn set_difficulty(&mut self, _level: u8) {}
}
