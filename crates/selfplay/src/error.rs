//! Error types for the self-play harness

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelfPlayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parsing failed: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    #[error("usage: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, SelfPlayError>;
