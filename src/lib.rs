//! # faraway-sim
//!
//! Scoring engine and Monte Carlo simulator for a solo card-drafting game.
//!
//! ## Scoring Rules
//!
//! 1. **Reverse Evaluation**: Main cards are scored last-played first. A
//!    card only sees resources of itself, cards played after it, and bonus
//!    cards.
//!
//! 2. **Prerequisites Gate Scoring**: A main card whose rock/animal/vegetal
//!    minimums are not met by that pool scores nothing.
//!
//! 3. **Bonus Cards Always Score**: Bonus cards are gained on ascending
//!    plays and score against the pool of every card.
//!
//! ## Architecture
//!
//! - **Flat Records**: Assets, prerequisites, rewards and pool totals are
//!   independent records with explicit projections between them.
//!
//! - **Explicit Randomness**: Every draw goes through a caller-owned
//!   `GameRng`; each trial of a batch runs on its own fork.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `resources`: Resource counters
//! - `cards`: Card definitions, catalog, JSON loader
//! - `scoring`: Aggregation, prerequisites, rewards, field evaluation
//! - `field`: Player field and bonus bookkeeping
//! - `sim`: Strategies, solo driver, batch runner

pub mod core;
pub mod resources;
pub mod cards;
pub mod scoring;
pub mod field;
pub mod sim;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    DeckKind, Error, FailurePolicy, GameRng, GameRngState, Result, SimulationConfig,
};

pub use crate::resources::{Assets, Prerequisites, Resource, Rewards, SummedAssets};

pub use crate::cards::{BonusCard, Card, CardCatalog, CardId, MainCard};

pub use crate::scoring::{
    aggregate, aggregate_cards, final_score, satisfies, score_breakdown, value, ScoreBreakdown,
};

pub use crate::field::PlayerField;

pub use crate::sim::{
    GamePhase, PlayStrategy, RandomStrategy, SimulationReport, SimulationStats, SoloPlay,
    SoloState, StrategyKind,
};
