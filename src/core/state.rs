//! Round state: the deck and everything needed to judge a pair.
//!
//! ## Round
//!
//! One play-through from shuffle to all-pairs-matched:
//! - Deck of `2 * pair_count` cards, each symbol exactly twice
//! - Selection buffer (zero, one or two revealed cards)
//! - Move and matched-pair counters
//! - Lock flag, set while a pair is being resolved
//!
//! ## RoundView
//!
//! Read-only snapshot for rendering. Face-down cards never expose their
//! symbol through a view.
//!
//! All transitions assume a single owning thread. Timers that resolve a
//! mismatch must post the `PendingFlip` back to that thread.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardId, CardStatus, Symbol};
use super::outcome::{FlipResolution, IgnoreReason, PendingFlip, RoundComplete, Selection};
use super::rng::GameRng;

/// Identity of a round within a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl RoundId {
    /// Create a new round ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The ID of the round dealt after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// State of one round.
#[derive(Clone, Debug)]
pub struct Round {
    id: RoundId,
    cards: Vec<Card>,
    selection: SmallVec<[CardId; 2]>,
    moves: u32,
    matched_pairs: usize,
    pair_count: usize,
    locked: bool,
    complete: bool,
    flip_back_delay: Duration,
}

impl Round {
    /// Deal a new round from the first `pair_count` symbols.
    ///
    /// # Panics
    ///
    /// Panics if `pair_count` is zero or exceeds the number of symbols.
    #[must_use]
    pub fn new(
        id: RoundId,
        symbols: &[Symbol],
        pair_count: usize,
        flip_back_delay: Duration,
        rng: &mut GameRng,
    ) -> Self {
        assert!(pair_count > 0, "Must deal at least 1 pair");
        assert!(
            pair_count <= symbols.len(),
            "Cannot deal {} pairs from {} symbols",
            pair_count,
            symbols.len()
        );

        let mut faces: Vec<Symbol> = symbols[..pair_count]
            .iter()
            .flat_map(|symbol| [symbol.clone(), symbol.clone()])
            .collect();
        rng.shuffle(&mut faces);

        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(index, symbol)| Card::new(CardId::new(index as u32), symbol))
            .collect();

        tracing::info!(round = id.0, pairs = pair_count, "dealt new round");

        Self {
            id,
            cards,
            selection: SmallVec::new(),
            moves: 0,
            matched_pairs: 0,
            pair_count,
            locked: false,
            complete: false,
            flip_back_delay,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Completed two-card selections so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// True while a pair is being resolved.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// True once every pair has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Cards revealed in the current attempt.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// Status of a single card.
    #[must_use]
    pub fn status(&self, card: CardId) -> Option<CardStatus> {
        self.cards.get(card.index()).map(|c| c.status)
    }

    /// The full deck, face-down symbols included.
    ///
    /// Rendering code should go through `view` instead.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.cards
    }

    // === Transitions ===

    /// Turn a card face up and, if it completes an attempt, judge the pair.
    pub fn select_card(&mut self, card: CardId) -> Selection {
        if self.locked {
            tracing::trace!(round = self.id.0, card = card.0, "selection ignored: locked");
            return Selection::Ignored(IgnoreReason::Locked);
        }

        let Some(target) = self.cards.get_mut(card.index()) else {
            tracing::trace!(round = self.id.0, card = card.0, "selection ignored: out of range");
            return Selection::Ignored(IgnoreReason::OutOfRange);
        };

        let reason = match target.status {
            CardStatus::Hidden => None,
            CardStatus::Revealed => Some(IgnoreReason::AlreadyRevealed),
            CardStatus::Matched => Some(IgnoreReason::AlreadyMatched),
        };
        if let Some(reason) = reason {
            tracing::trace!(round = self.id.0, card = card.0, %reason, "selection ignored");
            return Selection::Ignored(reason);
        }

        target.status = CardStatus::Revealed;
        self.selection.push(card);
        tracing::debug!(round = self.id.0, card = card.0, "card revealed");

        if self.selection.len() < 2 {
            return Selection::Revealed(card);
        }

        self.locked = true;
        self.moves += 1;
        self.judge_pair()
    }

    fn judge_pair(&mut self) -> Selection {
        let (first, second) = (self.selection[0], self.selection[1]);

        if !self.cards[first.index()].matches(&self.cards[second.index()]) {
            tracing::debug!(
                round = self.id.0,
                first = first.0,
                second = second.0,
                moves = self.moves,
                "pair mismatched"
            );
            return Selection::Mismatched(PendingFlip {
                round: self.id,
                cards: [first, second],
                delay: self.flip_back_delay,
            });
        }

        self.cards[first.index()].status = CardStatus::Matched;
        self.cards[second.index()].status = CardStatus::Matched;
        self.matched_pairs += 1;
        self.selection.clear();
        self.locked = false;

        tracing::debug!(
            round = self.id.0,
            first = first.0,
            second = second.0,
            matched = self.matched_pairs,
            moves = self.moves,
            "pair matched"
        );

        let completed = if self.matched_pairs == self.pair_count {
            self.complete = true;
            tracing::info!(round = self.id.0, moves = self.moves, "round complete");
            Some(RoundComplete {
                round: self.id,
                moves: self.moves,
            })
        } else {
            None
        };

        Selection::Matched {
            first,
            second,
            completed,
        }
    }

    /// Apply a deferred flip-back.
    ///
    /// Only a flip issued by this round for the pair currently on the
    /// board takes effect; anything else is reported as stale.
    pub fn resolve(&mut self, pending: &PendingFlip) -> FlipResolution {
        if pending.round != self.id || !self.locked || self.selection.as_slice() != pending.cards {
            tracing::debug!(
                round = self.id.0,
                pending_round = pending.round.0,
                "stale flip ignored"
            );
            return FlipResolution::Stale;
        }

        for card in pending.cards {
            self.cards[card.index()].status = CardStatus::Hidden;
        }
        self.selection.clear();
        self.locked = false;

        tracing::debug!(
            round = self.id.0,
            first = pending.cards[0].0,
            second = pending.cards[1].0,
            "mismatched pair flipped back"
        );

        FlipResolution::FlippedBack(pending.cards)
    }

    // === Views ===

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView {
            round: self.id,
            cards: self.cards.iter().map(CardView::from).collect(),
            moves: self.moves,
            matched_pairs: self.matched_pairs,
            pair_count: self.pair_count,
            locked: self.locked,
            complete: self.complete,
        }
    }
}

/// What the presentation layer may see of a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub status: CardStatus,
    /// `None` while the card is face down.
    pub symbol: Option<Symbol>,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            status: card.status,
            symbol: (!card.is_hidden()).then(|| card.symbol.clone()),
        }
    }
}

/// Read-only snapshot of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub round: RoundId,
    pub cards: Vec<CardView>,
    pub moves: u32,
    pub matched_pairs: usize,
    pub pair_count: usize,
    pub locked: bool,
    pub complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(names: &[&str]) -> Vec<Symbol> {
        names.iter().map(|&s| Symbol::from(s)).collect()
    }

    fn deal(names: &[&str], seed: u64) -> Round {
        let mut rng = GameRng::new(seed);
        Round::new(RoundId::new(1), &symbols(names), names.len(), Duration::from_millis(10), &mut rng)
    }

    /// Positions of the two cards carrying `symbol`.
    fn pair_of(round: &Round, symbol: &str) -> (CardId, CardId) {
        let ids: Vec<_> = round
            .deck()
            .iter()
            .filter(|c| c.symbol.as_str() == symbol)
            .map(|c| c.id)
            .collect();
        (ids[0], ids[1])
    }

    #[test]
    fn test_new_round_deals_each_symbol_twice() {
        let round = deal(&["A", "B", "C"], 42);

        assert_eq!(round.deck().len(), 6);
        for name in ["A", "B", "C"] {
            assert_eq!(round.deck().iter().filter(|c| c.symbol.as_str() == name).count(), 2);
        }
        assert!(round.deck().iter().all(Card::is_hidden));
        assert_eq!(round.moves(), 0);
        assert!(!round.is_locked());
        assert!(round.selection().is_empty());
    }

    #[test]
    fn test_new_round_uses_symbol_prefix() {
        let mut rng = GameRng::new(1);
        let round = Round::new(
            RoundId::new(1),
            &symbols(&["A", "B", "C"]),
            2,
            Duration::ZERO,
            &mut rng,
        );

        assert_eq!(round.deck().len(), 4);
        assert!(round.deck().iter().all(|c| c.symbol.as_str() != "C"));
    }

    #[test]
    #[should_panic(expected = "Cannot deal")]
    fn test_new_round_rejects_too_many_pairs() {
        let mut rng = GameRng::new(1);
        let _ = Round::new(RoundId::new(1), &symbols(&["A"]), 2, Duration::ZERO, &mut rng);
    }

    #[test]
    #[should_panic(expected = "at least 1 pair")]
    fn test_new_round_rejects_zero_pairs() {
        let mut rng = GameRng::new(1);
        let _ = Round::new(RoundId::new(1), &symbols(&["A"]), 0, Duration::ZERO, &mut rng);
    }

    #[test]
    fn test_first_card_only_reveals() {
        let mut round = deal(&["A", "B"], 42);

        let selection = round.select_card(CardId::new(0));

        assert_eq!(selection, Selection::Revealed(CardId::new(0)));
        assert_eq!(round.status(CardId::new(0)), Some(CardStatus::Revealed));
        assert_eq!(round.moves(), 0);
        assert!(!round.is_locked());
    }

    #[test]
    fn test_reselecting_revealed_card_is_ignored() {
        let mut round = deal(&["A", "B"], 42);

        round.select_card(CardId::new(0));
        let selection = round.select_card(CardId::new(0));

        assert_eq!(selection, Selection::Ignored(IgnoreReason::AlreadyRevealed));
        assert_eq!(round.selection(), &[CardId::new(0)]);
        assert_eq!(round.moves(), 0);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut round = deal(&["A", "B"], 42);

        assert_eq!(
            round.select_card(CardId::new(4)),
            Selection::Ignored(IgnoreReason::OutOfRange)
        );
        assert_eq!(round.status(CardId::new(4)), None);
    }

    #[test]
    fn test_match_marks_both_and_unlocks() {
        let mut round = deal(&["A", "B"], 42);
        let (a1, a2) = pair_of(&round, "A");

        round.select_card(a1);
        let selection = round.select_card(a2);

        assert_eq!(
            selection,
            Selection::Matched {
                first: a1,
                second: a2,
                completed: None
            }
        );
        assert_eq!(round.status(a1), Some(CardStatus::Matched));
        assert_eq!(round.status(a2), Some(CardStatus::Matched));
        assert_eq!(round.matched_pairs(), 1);
        assert_eq!(round.moves(), 1);
        assert!(!round.is_locked());
        assert!(round.selection().is_empty());
    }

    #[test]
    fn test_mismatch_locks_until_resolved() {
        let mut round = deal(&["A", "B"], 42);
        let (a, _) = pair_of(&round, "A");
        let (b, _) = pair_of(&round, "B");

        round.select_card(a);
        let pending = round.select_card(b).pending_flip().unwrap();

        assert!(round.is_locked());
        assert_eq!(round.moves(), 1);
        assert_eq!(pending.cards, [a, b]);
        assert_eq!(pending.delay, Duration::from_millis(10));

        assert_eq!(round.resolve(&pending), FlipResolution::FlippedBack([a, b]));
        assert_eq!(round.status(a), Some(CardStatus::Hidden));
        assert_eq!(round.status(b), Some(CardStatus::Hidden));
        assert!(!round.is_locked());
        assert!(round.selection().is_empty());
    }

    #[test]
    fn test_resolve_twice_is_stale() {
        let mut round = deal(&["A", "B"], 42);
        let (a, _) = pair_of(&round, "A");
        let (b, _) = pair_of(&round, "B");

        round.select_card(a);
        let pending = round.select_card(b).pending_flip().unwrap();

        round.resolve(&pending);
        round.select_card(a);

        assert_eq!(round.resolve(&pending), FlipResolution::Stale);
        assert_eq!(round.status(a), Some(CardStatus::Revealed));
    }

    #[test]
    fn test_resolve_from_other_round_is_stale() {
        let mut round = deal(&["A", "B"], 42);
        let (a, _) = pair_of(&round, "A");
        let (b, _) = pair_of(&round, "B");

        round.select_card(a);
        let mut pending = round.select_card(b).pending_flip().unwrap();
        pending.round = RoundId::new(99);

        assert_eq!(round.resolve(&pending), FlipResolution::Stale);
        assert!(round.is_locked());
    }

    #[test]
    fn test_flip_from_identical_earlier_round_is_stale() {
        let mut rng_old = GameRng::new(42);
        let mut rng_new = GameRng::new(42);
        let names = symbols(&["A", "B"]);
        let mut old = Round::new(RoundId::new(1), &names, 2, Duration::ZERO, &mut rng_old);
        let mut new = Round::new(RoundId::new(2), &names, 2, Duration::ZERO, &mut rng_new);
        assert_eq!(old.deck(), new.deck());

        let (a, _) = pair_of(&old, "A");
        let (b, _) = pair_of(&old, "B");

        old.select_card(a);
        let stale = old.select_card(b).pending_flip().unwrap();
        new.select_card(a);
        let fresh = new.select_card(b).pending_flip().unwrap();
        assert_eq!(stale.cards, fresh.cards);

        assert_eq!(new.resolve(&stale), FlipResolution::Stale);
        assert!(new.is_locked());
        assert_eq!(new.selection(), &[a, b]);
        assert_eq!(new.status(a), Some(CardStatus::Revealed));
        assert_eq!(new.status(b), Some(CardStatus::Revealed));

        assert_eq!(new.resolve(&fresh), FlipResolution::FlippedBack([a, b]));
    }

    #[test]
    fn test_view_hides_face_down_symbols() {
        let mut round = deal(&["A", "B"], 42);
        let (a, _) = pair_of(&round, "A");

        round.select_card(a);
        let view = round.view();

        assert_eq!(view.cards.len(), 4);
        for card in &view.cards {
            if card.id == a {
                assert_eq!(card.symbol, Some(Symbol::from("A")));
            } else {
                assert_eq!(card.status, CardStatus::Hidden);
                assert_eq!(card.symbol, None);
            }
        }
    }

    #[test]
    fn test_round_id_next() {
        assert_eq!(RoundId::new(4).next(), RoundId::new(5));
    }
}
