//! Simulation driver: solo games and Monte Carlo batches.
//!
//! ## Overview
//!
//! - **PlayStrategy**: Picks the card(s) played each round
//! - **SoloPlay**: Runs one game through its phases and scores it
//! - **run_simulations**: Plays many games and reports statistics
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use faraway_sim::cards::load_catalog;
//! use faraway_sim::core::{GameRng, SimulationConfig};
//! use faraway_sim::sim::{RandomStrategy, SoloPlay};
//!
//! let catalog = Arc::new(load_catalog(main_path, bonus_path)?);
//! let mut game = SoloPlay::new(catalog, RandomStrategy, SimulationConfig::default())?;
//!
//! let report = game.run_simulations(1_000, &mut GameRng::new(42))?;
//! println!("mean {:.2}", report.stats.mean);
//! ```

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod runner;
pub mod solo;
pub mod stats;
pub mod strategy;

pub use runner::{BestField, SimulationReport};
pub use solo::{GamePhase, SoloPlay, SoloState};
pub use stats::{score_histogram, SimulationStats};
pub use strategy::{PlayStrategy, RandomStrategy, StrategyKind};
