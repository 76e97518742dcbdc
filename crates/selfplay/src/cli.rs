//! Command-line options for `selfplay match`

use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

use crate::config::MatchConfig;
use crate::error::{Result, SelfPlayError};

/// Parsed `match` arguments; flags left unset fall back to the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchArgs {
    pub engine1: String,
    pub engine2: String,
    pub config_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub num_games: Option<u32>,
    pub max_plies: Option<u32>,
    pub seed: Option<u64>,
}

impl MatchArgs {
    /// Parses `<engine1> <engine2> [flags]`. Unknown flags and malformed
    /// values are logged and skipped.
    pub fn parse(args: &[String]) -> Result<Self> {
        let [engine1, engine2, rest @ ..] = args else {
            return Err(SelfPlayError::Usage(
                "match requires two engine specifications".to_string(),
            ));
        };
        let mut parsed = MatchArgs {
            engine1: engine1.clone(),
            engine2: engine2.clone(),
            ..Default::default()
        };

        let mut i = 0;
        while i < rest.len() {
            let flag = rest[i].as_str();
            match (flag, rest.get(i + 1)) {
                ("--games" | "-g", Some(v)) => {
                    parsed.num_games = parse_value(flag, v);
                    i += 1;
                }
                ("--max-plies" | "-p", Some(v)) => {
                    parsed.max_plies = parse_value(flag, v);
                    i += 1;
                }
                ("--seed" | "-s", Some(v)) => {
                    parsed.seed = parse_value(flag, v);
                    i += 1;
                }
                ("--config" | "-c", Some(v)) => {
                    parsed.config_path = Some(PathBuf::from(v));
                    i += 1;
                }
                ("--report" | "-r", Some(v)) => {
                    parsed.report_path = Some(PathBuf::from(v));
                    i += 1;
                }
                (other, _) => warn!(arg = other, "ignoring unrecognised argument"),
            }
            i += 1;
        }
        Ok(parsed)
    }

    /// Loads the config file if one was given, then applies flag overrides.
    pub fn resolve_config(&self) -> Result<MatchConfig> {
        let mut config = match &self.config_path {
            Some(path) => MatchConfig::load(path)?,
            None => MatchConfig::default(),
        };
        if let Some(n) = self.num_games {
            config.num_games = n;
        }
        if let Some(n) = self.max_plies {
            config.max_plies = n;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn parse_value<T: FromStr>(flag: &str, value: &str) -> Option<T> {
    match value.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(flag, value, "ignoring malformed value");
            None
        }
    }
}
