//! Game configuration.
//!
//! A `GameConfig` fixes everything a session needs to deal rounds:
//! - the symbol set and how many of its symbols are used per round
//! - the board width used to lay cards out
//! - how long mismatched cards stay face up
//! - an optional RNG seed for reproducible decks
//!
//! Configurations come from `GameConfigBuilder`, which validates the
//! combination once so the rules can assume a well-formed setup.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Symbol;
use crate::error::{ConfigError, Result};

/// The eight faces of the default 4x4 board.
pub const DEFAULT_SYMBOLS: [&str; 8] = ["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼"];

/// Default number of board columns.
pub const DEFAULT_COLUMNS: usize = 4;

/// Default time mismatched cards stay face up, in milliseconds.
pub const DEFAULT_FLIP_BACK_DELAY_MS: u64 = 1000;

/// Validated configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Distinct face values to deal from.
    pub symbols: Vec<Symbol>,

    /// Pairs per round. The first `pair_count` symbols are used.
    pub pair_count: usize,

    /// Board width for layout.
    pub columns: usize,

    /// How long a mismatched pair stays revealed.
    pub flip_back_delay_ms: u64,

    /// RNG seed. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }

    /// Symbols dealt in each round.
    #[must_use]
    pub fn round_symbols(&self) -> &[Symbol] {
        &self.symbols[..self.pair_count]
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Flip-back delay as a `Duration`.
    #[must_use]
    pub fn flip_back_delay(&self) -> Duration {
        Duration::from_millis(self.flip_back_delay_ms)
    }

    /// Check that this configuration can deal a round.
    pub fn validate(&self) -> Result<()> {
        if self.symbols.is_empty() {
            return Err(ConfigError::NoSymbols);
        }
        if self.pair_count == 0 {
            return Err(ConfigError::NoPairs);
        }
        if self.pair_count > self.symbols.len() {
            return Err(ConfigError::TooManyPairs {
                pairs: self.pair_count,
                symbols: self.symbols.len(),
            });
        }
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }

        let mut seen = FxHashSet::default();
        for symbol in &self.symbols {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol.clone()));
            }
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|&s| Symbol::from(s)).collect(),
            pair_count: DEFAULT_SYMBOLS.len(),
            columns: DEFAULT_COLUMNS,
            flip_back_delay_ms: DEFAULT_FLIP_BACK_DELAY_MS,
            seed: None,
        }
    }
}

/// Builder for creating a `GameConfig`.
///
/// ```
/// use memory_match::core::GameConfig;
///
/// let config = GameConfig::builder()
///     .symbols(["A", "B", "C"])
///     .pair_count(2)
///     .columns(2)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.card_count(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct GameConfigBuilder {
    config: GameConfig,
    pair_count_set: bool,
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            pair_count_set: false,
        }
    }
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the symbol set.
    ///
    /// Unless `pair_count` is also set, every symbol is used.
    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.config.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    pub fn pair_count(mut self, count: usize) -> Self {
        self.config.pair_count = count;
        self.pair_count_set = true;
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.config.columns = columns;
        self
    }

    pub fn flip_back_delay_ms(mut self, millis: u64) -> Self {
        self.config.flip_back_delay_ms = millis;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate and produce the configuration.
    pub fn build(mut self) -> Result<GameConfig> {
        if !self.pair_count_set {
            self.config.pair_count = self.config.symbols.len();
        }
        self.config.validate()?;
        Ok(self.config)
    }
}
