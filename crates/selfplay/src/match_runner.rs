//! Match runner for playing games between automated opponents

use chess_rules::{engine_move, Color, Engine, GameState, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::results::MatchReport;

/// Result of a single game from one side's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
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

    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEnd {
    Checkmate { winner: Color },
    Stalemate,
    /// Ply limit reached; scored as a draw
    PlyLimit,
    /// The engine on turn returned no move in a live position
    NoMove { side: Color },
}

/// One finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub end: GameEnd,
    pub plies: usize,
    /// Moves in engine notation, e.g. `e2e4`, `Qd8h4#`
    pub moves: Vec<String>,
}

impl GameRecord {
    /// Result from white's perspective
    pub fn white_result(&self) -> GameResult {
        match self.end {
            GameEnd::Checkmate {
                winner: Color::White,
            } => GameResult::Win,
            GameEnd::Checkmate {
                winner: Color::Black,
            } => GameResult::Loss,
            GameEnd::NoMove { side: Color::White } => GameResult::Loss,
            GameEnd::NoMove { side: Color::Black } => GameResult::Win,
            GameEnd::Stalemate | GameEnd::PlyLimit => GameResult::Draw,
        }
    }

    /// Short score string: `1-0`, `0-1` or `1/2`
    pub fn score_str(&self) -> &'static str {
        match self.white_result() {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2",
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
    /// Results in the report are from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchReport {
        let mut report = MatchReport::new(engine1.name(), engine2.name(), self.config.clone());

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };

            let game_result = if engine1_white {
                record.white_result()
            } else {
                record.white_result().flipped()
            };
            report.result.record(game_result);

            info!(
                game = game_num + 1,
                outcome = record.score_str(),
                plies = record.plies,
                "game finished"
            );
            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                println!(
                    "Game {}/{}: {} ({}) in {} plies - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    record.score_str(),
                    color,
                    record.plies,
                    report.result.wins,
                    report.result.losses,
                    report.result.draws
                );
            }
            report.games.push(record);
        }

        report
    }

    /// Play a single game from the initial position
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameRecord {
        let mut state = GameState::new();
        white.new_game();
        black.new_game();

        let end = loop {
            if let Some(outcome) = state.outcome() {
                break match outcome {
                    Outcome::Checkmate { winner } => GameEnd::Checkmate { winner },
                    Outcome::Stalemate => GameEnd::Stalemate,
                };
            }
            if state.move_history.len() >= self.config.max_plies as usize {
                break GameEnd::PlyLimit;
            }

            let side = state.current_turn;
            let engine: &mut dyn Engine = match side {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let next = engine_move(&state, engine);
            if next.move_history.len() == state.move_history.len() {
                debug!(%side, "engine returned no move");
                break GameEnd::NoMove { side };
            }
            state = next;
        };

        GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            end,
            plies: state.move_history.len(),
            moves: state.move_history.iter().map(|m| m.to_string()).collect(),
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
