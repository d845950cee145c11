//! Error types for memory-match.

use thiserror::Error;

use crate::core::Symbol;

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while building a game configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("symbol set is empty")]
    NoSymbols,

    #[error("pair count must be at least 1")]
    NoPairs,

    #[error("pair count {pairs} exceeds the {symbols} available symbols")]
    TooManyPairs { pairs: usize, symbols: usize },

    #[error("duplicate symbol {0}")]
    DuplicateSymbol(Symbol),

    #[error("board must have at least one column")]
    NoColumns,
}
