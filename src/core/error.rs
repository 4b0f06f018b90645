//! Error types for configuration and game input.
//!
//! Gameplay itself is total over well-formed state; errors only appear at
//! the boundaries where callers hand the engine raw values.

use thiserror::Error;

use crate::cards::Symbol;

/// Rejected game configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("symbol set is empty")]
    EmptySymbols,

    #[error("symbol {0} appears more than once")]
    DuplicateSymbol(Symbol),

    #[error("grid must have at least one column")]
    ZeroColumns,
}

/// Rejected game input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("card index {index} is out of range for a deck of {len}")]
    CardOutOfRange { index: usize, len: usize },
}
