//! Core game types: cards, configuration, RNG, round state and outcomes.
//!
//! Everything here is independent of how cards are drawn or animated.
//! Presentation code reads `RoundView` snapshots and reacts to the
//! `Selection` returned by each click.

pub mod card;
pub mod config;
pub mod outcome;
pub mod rng;
pub mod state;

pub use card::{Card, CardId, CardStatus, Symbol};
pub use config::{GameConfig, GameConfigBuilder, DEFAULT_COLUMNS, DEFAULT_FLIP_BACK_DELAY_MS, DEFAULT_SYMBOLS};
pub use outcome::{FlipResolution, IgnoreReason, PendingFlip, RoundComplete, Selection};
pub use rng::GameRng;
pub use state::{CardView, Round, RoundId, RoundView};
