//! Match results storage and reporting

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TournamentError;
use crate::match_runner::MatchConfig;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other side.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    /// Ply limit reached, scored as a draw
    MaxPlies,
    /// Engine offered a move the rules engine rejected; that side loses
    IllegalMove,
    /// Engine returned no move in an ongoing game
    NoMove,
}

/// One played game, from engine1's perspective
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub engine1_white: bool,
    pub result: GameResult,
    pub termination: Termination,
    /// Moves in coordinate notation ("e2e4", "e7e8q")
    pub moves: Vec<String>,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Complete match report, saved as JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub config: MatchConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    pub fn new(engine1: &str, engine2: &str, config: MatchConfig, games: Vec<GameRecord>) -> Self {
        let mut result = MatchResult::new();
        for game in &games {
            result.record(game.result);
        }
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            config,
            result,
            games,
        }
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| TournamentError::io(path, e))
    }

    /// Load report from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} vs {} ===\n\n", self.engine1, self.engine2));
        report.push_str(&format!(
            "Config: {} games, {} plies max\n\n",
            self.config.num_games, self.config.max_plies
        ));

        report.push_str(&format!(
            "{:<6} {:<6} {:<8} {:<14} {:>6}\n",
            "Game", "Color", "Result", "Termination", "Plies"
        ));
        report.push_str(&"-".repeat(44));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            let color = if game.engine1_white { "W" } else { "B" };
            let outcome = match game.result {
                GameResult::Win => "1-0",
                GameResult::Loss => "0-1",
                GameResult::Draw => "1/2",
            };
            report.push_str(&format!(
                "{:<6} {:<6} {:<8} {:<14} {:>6}\n",
                i + 1,
                color,
                outcome,
                format!("{:?}", game.termination),
                game.moves.len()
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
