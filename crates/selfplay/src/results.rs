//! Match report storage and formatting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::MatchConfig;
use crate::error::Result;
use crate::match_runner::{GameRecord, MatchResult};

/// Complete record of one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub config: MatchConfig,
    /// Totals from engine1's perspective
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    pub fn new(engine1: &str, engine2: &str, config: MatchConfig) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            config,
            result: MatchResult::new(),
            games: Vec::new(),
        }
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load report from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            self.engine1, self.engine2
        ));
        report.push_str(&format!(
            "Config: {} games, {} plies max\n\n",
            self.config.num_games, self.config.max_plies
        ));

        report.push_str(&format!(
            "{:<4} {:<16} {:<16} {:>6} {:>6}\n",
            "#", "White", "Black", "Result", "Plies"
        ));
        report.push_str(&"-".repeat(52));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            report.push_str(&format!(
                "{:<4} {:<16} {:<16} {:>6} {:>6}\n",
                i + 1,
                game.white,
                game.black,
                game.score_str(),
                game.plies
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

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
