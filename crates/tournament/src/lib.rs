//! Tournament Runner for ML-chess
//!
//! This crate provides infrastructure for:
//! - Playing self-play matches between search opponents
//! - Loading match and opponent settings from TOML
//! - Saving per-game JSON reports
//!
//! # Usage
//!
//! ```bash
//! # Difficulty 3 minimax against difficulty 1
//! cargo run -p tournament -- match --white 3 --black 1 --games 4
//!
//! # Everything from a config file, report written as JSON
//! RUST_LOG=tournament=debug cargo run -p tournament -- match --config match.toml --out report.json
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
