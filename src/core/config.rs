//! Game configuration.
//!
//! A game is configured once at construction:
//! - The symbol set (one pair of cards per symbol)
//! - Grid width used by renderers
//! - Resolution delay
//!
//! The timer always ticks once per second of game clock.
//!
//! Defaults reproduce the classic six-fruit board.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::Symbol;

/// Symbols used when no custom set is given.
pub const DEFAULT_SYMBOLS: [&str; 6] = ["🍎", "🍌", "🍒", "🍇", "🍉", "🍓"];

/// Default grid width.
pub const DEFAULT_COLUMNS: usize = 3;

/// Delay between the second reveal and its resolution.
pub const DEFAULT_RESOLVE_DELAY_MS: u64 = 1000;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Distinct symbols; the deck holds each exactly twice.
    pub symbols: Vec<Symbol>,

    /// Number of grid columns when rendering.
    pub columns: usize,

    /// Milliseconds between the second reveal and resolution.
    pub resolve_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| Symbol::new(*s)).collect(),
            columns: DEFAULT_COLUMNS,
            resolve_delay_ms: DEFAULT_RESOLVE_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Create a config with the given symbols and default timings.
    pub fn with_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the grid width.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the resolution delay.
    #[must_use]
    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay_ms = duration_ms(delay);
        self
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.symbols.len() * 2
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::EmptySymbols);
        }

        let mut seen = FxHashSet::default();
        for symbol in &self.symbols {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol.clone()));
            }
        }

        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }

        Ok(())
    }
}

/// Whole milliseconds in a duration, saturating.
pub(crate) fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
