//! Single-game driver.
//!
//! A game moves through `GamePhase`:
//!
//! ```text
//! Ready -> Playing { round } (n_rounds times) -> Validated -> Scored
//!                                      \-> Failed
//! ```
//!
//! Every random draw goes through the `GameRng` passed in by the caller, so
//! a game is fully reproducible from its generator.

use std::sync::Arc;

use super::strategy::PlayStrategy;
use crate::cards::{BonusCard, CardCatalog, MainCard};
use crate::core::{DeckKind, Error, GameRng, Result, SimulationConfig};
use crate::field::PlayerField;
use crate::scoring::final_score;

/// Where a game currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Fresh decks and an empty field.
    Ready,
    /// `round` main cards played so far.
    Playing { round: usize },
    /// Final field passed validation.
    Validated,
    /// Final score computed.
    Scored(u64),
    /// A round or the final validation failed.
    Failed,
}

/// Everything a strategy may look at and change during a round.
#[derive(Clone, Debug)]
pub struct SoloState {
    field: PlayerField,
    main_deck: Vec<MainCard>,
    bonus_deck: Vec<BonusCard>,
    use_bonus_cards: bool,
}

impl SoloState {
    /// Empty field with the given decks, in the given order.
    #[must_use]
    pub fn new(
        field: PlayerField,
        main_deck: Vec<MainCard>,
        bonus_deck: Vec<BonusCard>,
        use_bonus_cards: bool,
    ) -> Self {
        Self {
            field,
            main_deck,
            bonus_deck,
            use_bonus_cards,
        }
    }

    #[must_use]
    pub fn field(&self) -> &PlayerField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut PlayerField {
        &mut self.field
    }

    /// Main cards not drawn yet.
    #[must_use]
    pub fn main_deck(&self) -> &[MainCard] {
        &self.main_deck
    }

    /// Bonus cards not drawn yet.
    #[must_use]
    pub fn bonus_deck(&self) -> &[BonusCard] {
        &self.bonus_deck
    }

    #[must_use]
    pub fn use_bonus_cards(&self) -> bool {
        self.use_bonus_cards
    }

    /// Remove a uniformly random card from the main deck.
    pub fn draw_random_main(&mut self, rng: &mut GameRng) -> Result<MainCard> {
        rng.take_random(&mut self.main_deck)
            .ok_or(Error::DeckExhausted(DeckKind::Main))
    }

    /// Remove a uniformly random card from the bonus deck.
    pub fn draw_random_bonus(&mut self, rng: &mut GameRng) -> Result<BonusCard> {
        rng.take_random(&mut self.bonus_deck)
            .ok_or(Error::DeckExhausted(DeckKind::Bonus))
    }

    /// Remove the main card at `index` (deck order).
    pub fn take_main(&mut self, index: usize) -> Result<MainCard> {
        if index >= self.main_deck.len() {
            return Err(Error::DeckExhausted(DeckKind::Main));
        }
        Ok(self.main_deck.remove(index))
    }

    /// Remove the bonus card at `index` (deck order).
    pub fn take_bonus(&mut self, index: usize) -> Result<BonusCard> {
        if index >= self.bonus_deck.len() {
            return Err(Error::DeckExhausted(DeckKind::Bonus));
        }
        Ok(self.bonus_deck.remove(index))
    }
}

/// Plays solo games with a given strategy against a shared catalog.
#[derive(Clone, Debug)]
pub struct SoloPlay<S: PlayStrategy> {
    catalog: Arc<CardCatalog>,
    strategy: S,
    config: SimulationConfig,
    state: SoloState,
    phase: GamePhase,
}

impl<S: PlayStrategy> SoloPlay<S> {
    /// Create a driver. Fails if the configuration cannot be played with
    /// this catalog.
    pub fn new(catalog: Arc<CardCatalog>, strategy: S, config: SimulationConfig) -> Result<Self> {
        config.validate(&catalog)?;
        let state = SoloState::new(
            PlayerField::new(config.n_rounds),
            Vec::new(),
            Vec::new(),
            config.use_bonus_cards,
        );
        Ok(Self {
            catalog,
            strategy,
            config,
            state,
            phase: GamePhase::Ready,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<CardCatalog> {
        &self.catalog
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The current (or last played) field.
    #[must_use]
    pub fn field(&self) -> &PlayerField {
        &self.state.field
    }

    #[must_use]
    pub fn state(&self) -> &SoloState {
        &self.state
    }

    /// Start a new game: empty field, freshly shuffled decks.
    pub fn reset(&mut self, rng: &mut GameRng) {
        let mut main_deck = self.catalog.main_deck();
        rng.shuffle(&mut main_deck);

        let bonus_deck = if self.config.use_bonus_cards {
            let mut deck = self.catalog.bonus_deck();
            rng.shuffle(&mut deck);
            deck
        } else {
            Vec::new()
        };

        self.state = SoloState::new(
            PlayerField::new(self.config.n_rounds),
            main_deck,
            bonus_deck,
            self.config.use_bonus_cards,
        );
        self.phase = GamePhase::Ready;
    }

    /// Let the strategy play one round.
    pub fn play_round(&mut self, rng: &mut GameRng) -> Result<()> {
        if let Err(err) = self.strategy.play_round(&mut self.state, rng) {
            self.phase = GamePhase::Failed;
            return Err(err);
        }
        self.phase = GamePhase::Playing {
            round: self.state.field.rounds_played(),
        };
        Ok(())
    }

    /// Play a full game and return its score.
    ///
    /// An invalid final field aborts the game with [`Error::InvalidField`].
    pub fn play(&mut self, rng: &mut GameRng) -> Result<u64> {
        self.reset(rng);
        for _ in 0..self.config.n_rounds {
            self.play_round(rng)?;
        }

        if let Err(err) = self.state.field.check_final(self.config.use_bonus_cards) {
            self.phase = GamePhase::Failed;
            return Err(err);
        }
        self.phase = GamePhase::Validated;

        let score = final_score(&self.state.field);
        self.phase = GamePhase::Scored(score);
        Ok(score)
    }
}
