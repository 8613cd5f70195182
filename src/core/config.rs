//! Simulation configuration.
//!
//! `SimulationConfig` carries everything a solo game and a batch of games
//! need besides the card catalog and the random generator:
//! - round count (length of a complete field)
//! - whether bonus cards are drawn and validated
//! - log verbosity of the batch runner
//! - what to do when a trial ends with an invalid field

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use crate::cards::CardCatalog;

/// Default number of rounds in a game.
pub const DEFAULT_ROUNDS: usize = 8;

/// How a batch reacts to a trial whose final field fails validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the batch and return the validation error.
    #[default]
    Abort,
    /// Log the failure, count it in the report and keep going.
    Count,
}

/// Configuration for solo games and simulation batches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Main cards per complete field.
    pub n_rounds: usize,

    /// Draw bonus cards on ascending plays and validate their count.
    pub use_bonus_cards: bool,

    /// 0 = silent, 1 = batch header and summary, 2+ = one line per trial.
    pub verbose: u8,

    /// Batch behavior on invalid final fields.
    pub failure_policy: FailurePolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_rounds: DEFAULT_ROUNDS,
            use_bonus_cards: true,
            verbose: 1,
            failure_policy: FailurePolicy::Abort,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, n_rounds: usize) -> Self {
        self.n_rounds = n_rounds;
        self
    }

    /// Enable or disable bonus cards.
    #[must_use]
    pub fn with_bonus_cards(mut self, use_bonus_cards: bool) -> Self {
        self.use_bonus_cards = use_bonus_cards;
        self
    }

    /// Set log verbosity.
    #[must_use]
    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the batch failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Check the configuration against the catalog it will be played with.
    ///
    /// Running more rounds than there are main cards would exhaust the main
    /// deck. With bonus cards on, a game may ascend on every play after the
    /// first, so the bonus deck needs `n_rounds - 1` cards.
    pub fn validate(&self, catalog: &CardCatalog) -> Result<()> {
        if self.n_rounds == 0 {
            return Err(Error::Config("n_rounds must be at least 1".into()));
        }
        if self.n_rounds > catalog.main_cards().len() {
            return Err(Error::Config(format!(
                "n_rounds ({}) exceeds the {} available main cards",
                self.n_rounds,
                catalog.main_cards().len()
            )));
        }
        let bonus_needed = self.n_rounds.saturating_sub(1);
        if self.use_bonus_cards && catalog.bonus_cards().len() < bonus_needed {
            return Err(Error::Config(format!(
                "bonus cards enabled but only {} of the {} bonus cards a game may need are available",
                catalog.bonus_cards().len(),
                bonus_needed
            )));
        }
        Ok(())
    }
}
