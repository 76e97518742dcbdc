//! Error types for the rules engine

use thiserror::Error;

use crate::types::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

pub type Result<T> = std::result::Result<T, RulesError>;
