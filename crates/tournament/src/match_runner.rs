//! Match runner for playing games between engines

use chess_core::{Color, Engine, Game, GameStatus, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::results::{GameRecord, GameResult, MatchResult, Termination};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum plies per game before declaring draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Log each finished game at info level
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        self.run_match_recorded(engine1, engine2).0
    }

    /// Like [`MatchRunner::run_match`], also returning every game played.
    pub fn run_match_recorded(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> (MatchResult, Vec<GameRecord>) {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let (white_result, termination, moves) = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            let game_result = if engine1_white {
                white_result
            } else {
                white_result.flipped()
            };
            result.record(game_result);

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    engine1_color = if engine1_white { "W" } else { "B" },
                    result = ?game_result,
                    ?termination,
                    plies = moves.len(),
                    wins = result.wins,
                    losses = result.losses,
                    draws = result.draws,
                    "game finished"
                );
            }

            games.push(GameRecord {
                engine1_white,
                result: game_result,
                termination,
                moves: moves.iter().map(Move::to_string).collect(),
            });
        }

        (result, games)
    }

    /// Play a single game from the standard position.
    ///
    /// Returns the result from white's perspective, how the game ended and
    /// the moves played.
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> (GameResult, Termination, Vec<Move>) {
        let mut game = Game::standard();
        white.new_game();
        black.new_game();

        while !game.is_over() {
            if game.history().len() >= self.config.max_plies as usize {
                return (GameResult::Draw, Termination::MaxPlies, game.history().to_vec());
            }

            let color = game.side_to_move();
            let engine: &mut dyn Engine = match color {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let search = engine.search(game.board(), color);
            debug!(
                engine = engine.name(),
                %color,
                mv = ?search.best_move.map(|m| m.to_string()),
                score = search.score,
                nodes = search.nodes,
                "engine replied"
            );

            let Some(mv) = search.best_move else {
                return (GameResult::Draw, Termination::NoMove, game.history().to_vec());
            };
            if let Err(err) = game.play(&mv) {
                warn!(engine = engine.name(), %err, "engine forfeits");
                let result = match color {
                    Color::White => GameResult::Loss,
                    Color::Black => GameResult::Win,
                };
                return (result, Termination::IllegalMove, game.history().to_vec());
            }
        }

        let outcome = match game.status() {
            GameStatus::Checkmate { winner } => {
                let result = match winner {
                    Color::White => GameResult::Win,
                    Color::Black => GameResult::Loss,
                };
                (result, Termination::Checkmate)
            }
            GameStatus::Stalemate => (GameResult::Draw, Termination::Stalemate),
            GameStatus::Ongoing => (GameResult::Draw, Termination::NoMove),
        };
        (outcome.0, outcome.1, game.history().to_vec())
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    max_plies: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        max_plies,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
