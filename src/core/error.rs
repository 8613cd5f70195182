//! Error type shared by the whole crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::cards::CardId;

/// Which deck a draw was attempted from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckKind {
    Main,
    Bonus,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::Main => write!(f, "main"),
            DeckKind::Bonus => write!(f, "bonus"),
        }
    }
}

/// Errors raised while loading cards, configuring or running simulations.
#[derive(Debug, Error)]
pub enum Error {
    /// End-of-game validation failed. Fatal for the current trial.
    #[error(
        "invalid final field: {main_cards}/{n_rounds} main cards, \
         {bonus_held} bonus cards held but {bonus_gained} gained"
    )]
    InvalidField {
        main_cards: usize,
        n_rounds: usize,
        bonus_gained: usize,
        bonus_held: usize,
    },

    #[error("cannot draw from the {0} deck: it is empty")]
    DeckExhausted(DeckKind),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed card records in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {kind} card id {id}")]
    DuplicateCard { kind: DeckKind, id: CardId },

    #[error("the {0} card collection is empty")]
    EmptyCatalog(DeckKind),

    /// Card counts or weights so large that a field drawn from the catalog
    /// could overflow pool totals or the score.
    #[error("{kind} card id {id} overflows the catalog's pool totals or maximum score")]
    ValueOverflow { kind: DeckKind, id: CardId },
}

impl Error {
    /// True for the per-trial validation failure a batch may choose to count.
    #[must_use]
    pub fn is_invalid_field(&self) -> bool {
        matches!(self, Error::InvalidField { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_message() {
        let err = Error::InvalidField {
            main_cards: 7,
            n_rounds: 8,
            bonus_gained: 3,
            bonus_held: 2,
        };
        assert!(err.is_invalid_field());
        assert_eq!(
            err.to_string(),
            "invalid final field: 7/8 main cards, 2 bonus cards held but 3 gained"
        );
    }

    #[test]
    fn test_deck_exhausted_message() {
        let err = Error::DeckExhausted(DeckKind::Bonus);
        assert!(!err.is_invalid_field());
        assert_eq!(err.to_string(), "cannot draw from the bonus deck: it is empty");
    }
}
