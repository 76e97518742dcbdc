//! Self-play harness for the chess rules engine
//!
//! This crate provides infrastructure for:
//! - Running matches between automated opponents
//! - Recording every game's moves and ending
//! - Saving match reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Ten games between two seeded random engines
//! cargo run -p selfplay -- match random:1 random:2 --games 10
//!
//! # Settings from a file, report written to disk
//! cargo run -p selfplay -- match random random --config selfplay.toml --report out.json
//! ```

mod cli;
mod config;
mod error;
mod match_runner;
mod results;

pub use cli::*;
pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;

use chess_rules::Engine;
use random_engine::RandomEngine;

/// Build an engine from a spec string: `random` or `random:<seed>`.
/// Without an explicit seed, `fallback_seed` is used when given.
pub fn create_engine(spec: &str, fallback_seed: Option<u64>) -> Result<Box<dyn Engine>> {
    let mut parts = spec.splitn(2, ':');
    let kind = parts.next().unwrap_or_default().to_lowercase();
    let seed = match parts.next() {
        Some(s) => Some(
            s.parse::<u64>()
                .map_err(|_| SelfPlayError::UnknownEngine(spec.to_string()))?,
        ),
        None => fallback_seed,
    };

    match kind.as_str() {
        "random" | "rand" => Ok(Box::new(match seed {
            Some(s) => RandomEngine::with_seed(s),
            None => RandomEngine::new(),
        })),
        _ => Err(SelfPlayError::UnknownEngine(spec.to_string())),
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
    runner.run_match(engine1, engine2).result
}
