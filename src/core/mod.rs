//! Core types: RNG, configuration, errors.
//!
//! These are shared by every other module and know nothing about scoring.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{FailurePolicy, SimulationConfig, DEFAULT_ROUNDS};
pub use error::{DeckKind, Error, Result};
pub use rng::{GameRng, GameRngState};
