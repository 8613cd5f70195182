//! Parallel batch runner (feature `parallel`).
//!
//! Trial generators are forked from the batch generator up front, in trial
//! order, and outcomes are folded back in trial order. The report is
//! therefore identical to [`SoloPlay::run_simulations`] with the same seed,
//! apart from timing.

use std::time::Instant;

use rayon::prelude::*;

use super::runner::{log_header, Batch, SimulationReport};
use super::solo::SoloPlay;
use super::strategy::PlayStrategy;
use crate::core::{GameRng, Result};
use crate::field::PlayerField;

impl<S> SoloPlay<S>
where
    S: PlayStrategy + Clone + Send + Sync,
{
    /// [`SoloPlay::run_simulations`] spread over the rayon thread pool.
    pub fn run_simulations_parallel(
        &self,
        trials: usize,
        rng: &mut GameRng,
    ) -> Result<SimulationReport> {
        let config = self.config().clone();
        let strategy = self.strategy().name();
        log_header(strategy, &config, trials, rng.seed());

        let started = Instant::now();
        let trial_rngs: Vec<GameRng> = (0..trials).map(|_| rng.fork()).collect();

        let outcomes: Vec<(Result<u64>, PlayerField)> = trial_rngs
            .into_par_iter()
            .map(|mut trial_rng| {
                let mut game = self.clone();
                let outcome = game.play(&mut trial_rng);
                (outcome, game.field().clone())
            })
            .collect();

        let mut batch = Batch::new(trials, &config);
        for (trial, (outcome, field)) in outcomes.into_iter().enumerate() {
            batch.record(trial, outcome, || field)?;
        }

        Ok(batch.finish(strategy, &config, rng.seed(), trials, started))
    }
}
