//! Outcomes reported back to the presentation layer.
//!
//! Selecting a card never fails. It either changes the round or is
//! ignored, and the caller learns which through `Selection`. A mismatch
//! hands back a `PendingFlip`: the deferred action the caller must
//! schedule and later return to the game once the delay has elapsed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::card::CardId;
use super::state::RoundId;

/// Why a selection changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A pair is still being resolved.
    Locked,
    /// The card is already face up in the current attempt.
    AlreadyRevealed,
    /// The card belongs to a found pair.
    AlreadyMatched,
    /// No card at that position.
    OutOfRange,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IgnoreReason::Locked => "board is locked",
            IgnoreReason::AlreadyRevealed => "card is already revealed",
            IgnoreReason::AlreadyMatched => "card is already matched",
            IgnoreReason::OutOfRange => "no card at that position",
        };
        f.write_str(text)
    }
}

/// Signal that every pair in a round has been found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundComplete {
    pub round: RoundId,
    /// Final move count.
    pub moves: u32,
}

/// Deferred resolution of a mismatched pair.
///
/// Carries the identity of the round that produced it, so handing it to
/// a later round does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingFlip {
    pub round: RoundId,
    pub cards: [CardId; 2],
    /// How long the caller should wait before resolving.
    pub delay: Duration,
}

/// Result of a single `select_card` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of an attempt turned face up.
    Revealed(CardId),
    /// Second card completed a pair.
    Matched {
        first: CardId,
        second: CardId,
        /// Present when this pair finished the round.
        completed: Option<RoundComplete>,
    },
    /// Second card did not match. The board stays locked until the
    /// returned flip is resolved.
    Mismatched(PendingFlip),
}

impl Selection {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Selection::Ignored(_))
    }

    /// The round-complete signal, if this selection produced one.
    #[must_use]
    pub fn completed(&self) -> Option<RoundComplete> {
        match self {
            Selection::Matched { completed, .. } => *completed,
            _ => None,
        }
    }

    /// The deferred flip, if this selection produced one.
    #[must_use]
    pub fn pending_flip(&self) -> Option<PendingFlip> {
        match self {
            Selection::Mismatched(pending) => Some(*pending),
            _ => None,
        }
    }
}

/// Result of handing a `PendingFlip` back to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipResolution {
    /// Both cards turned face down and the board unlocked.
    FlippedBack([CardId; 2]),
    /// The flip belongs to a discarded round or was already applied.
    Stale,
}
