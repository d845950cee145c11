//! # memory-match
//!
//! A memory-matching card game engine.
//!
//! A grid of face-down cards is revealed two at a time. Matching pairs
//! stay face up, mismatches flip back after a delay, and the round ends
//! when every pair is found. Moves are counted along the way.
//!
//! ## Design Principles
//!
//! 1. **Rules without presentation**: `Round` is a pure state machine.
//!    It never sleeps, draws, or spawns timers.
//!
//! 2. **Deferred work as data**: a mismatch returns a `PendingFlip` the
//!    presentation layer schedules and hands back. Restarting changes the
//!    round identity, so a late flip cannot touch the new round.
//!
//! 3. **Deterministic when seeded**: decks come from a seedable
//!    ChaCha RNG, so a session can be replayed exactly.
//!
//! ## Modules
//!
//! - `core`: Cards, configuration, RNG, round state, outcomes
//! - `game`: Sessions with restart
//! - `terminal`: Line-oriented terminal front-end
//! - `error`: Configuration errors

pub mod core;
pub mod error;
pub mod game;
pub mod terminal;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, CardStatus, CardView, FlipResolution, GameConfig, GameConfigBuilder, GameRng,
    IgnoreReason, PendingFlip, Round, RoundComplete, RoundId, RoundView, Selection, Symbol,
};

pub use crate::error::ConfigError;

pub use crate::game::MemoryGame;
