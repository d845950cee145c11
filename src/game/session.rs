//! Game session: a configuration, an RNG and the round being played.

use crate::core::{
    CardId, FlipResolution, GameConfig, GameRng, PendingFlip, Round, RoundId, RoundView, Selection,
};

/// A running memory game.
///
/// Owns exactly one `Round` at a time. Restarting replaces it with a
/// freshly dealt round under a new `RoundId`, which makes every
/// `PendingFlip` from earlier rounds stale.
///
/// ```
/// use memory_match::core::{CardId, GameConfig, Selection};
/// use memory_match::MemoryGame;
///
/// let config = GameConfig::builder().symbols(["A", "B"]).seed(1).build().unwrap();
/// let mut game = MemoryGame::new(config);
///
/// assert_eq!(game.select_card(CardId::new(0)), Selection::Revealed(CardId::new(0)));
/// assert_eq!(game.round().moves(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct MemoryGame {
    config: GameConfig,
    rng: GameRng,
    round: Round,
}

impl MemoryGame {
    /// Start a session and deal its first round.
    ///
    /// # Panics
    ///
    /// Panics if `config` does not pass `GameConfig::validate`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid game config: {err}");
        }

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        tracing::debug!(seed = rng.seed(), "starting game session");

        let round = Self::deal(&config, RoundId::new(1), &mut rng);

        Self { config, rng, round }
    }

    fn deal(config: &GameConfig, id: RoundId, rng: &mut GameRng) -> Round {
        Round::new(
            id,
            config.round_symbols(),
            config.pair_count,
            config.flip_back_delay(),
            rng,
        )
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the session RNG, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The round being played.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Snapshot of the current round for rendering.
    #[must_use]
    pub fn view(&self) -> RoundView {
        self.round.view()
    }

    /// Discard the current round and deal a new one.
    ///
    /// Any pending flip from the discarded round becomes stale.
    pub fn restart(&mut self) -> RoundId {
        let id = self.round.id().next();
        if self.round.is_locked() {
            tracing::debug!(round = self.round.id().0, "restarting with a flip pending");
        }
        self.round = Self::deal(&self.config, id, &mut self.rng);
        id
    }

    /// Select a card in the current round.
    pub fn select_card(&mut self, card: CardId) -> Selection {
        self.round.select_card(card)
    }

    /// Hand a deferred flip back once its delay has elapsed.
    pub fn resolve(&mut self, pending: &PendingFlip) -> FlipResolution {
        self.round.resolve(pending)
    }
}

impl Default for MemoryGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
