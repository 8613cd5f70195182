//! Monte Carlo batch runner.
//!
//! Every trial plays on its own generator forked from the batch generator,
//! so a batch is reproducible from one seed and trials never share random
//! state.
//!
//! Invalid final fields are handled by `FailurePolicy`: `Abort` returns the
//! first `Error::InvalidField`, `Count` logs it and keeps going. Any other
//! error (an exhausted deck) always aborts the batch.

use std::time::Instant;

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::solo::SoloPlay;
use super::stats::{score_histogram, SimulationStats};
use super::strategy::PlayStrategy;
use crate::core::{FailurePolicy, GameRng, Result, SimulationConfig};
use crate::field::PlayerField;
use crate::scoring::{score_breakdown, ScoreBreakdown};

/// Highest scoring field of a batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BestField {
    /// Index of the trial that produced it.
    pub trial: usize,
    pub score: u64,
    pub field: PlayerField,
    pub breakdown: ScoreBreakdown,
}

/// Result of a batch.
#[derive(Clone, Debug, Serialize)]
pub struct SimulationReport {
    pub strategy: &'static str,
    pub config: SimulationConfig,
    /// Seed of the batch generator; replaying it reproduces the batch.
    pub seed: u64,
    /// Trials requested.
    pub trials: usize,
    /// Scores of successful trials, in trial order.
    pub scores: Vec<u64>,
    /// Trials dropped for an invalid final field.
    pub failures: usize,
    pub stats: SimulationStats,
    /// First trial reaching the maximum score.
    pub best: Option<BestField>,
}

impl SimulationReport {
    #[must_use]
    pub fn histogram(&self) -> FxHashMap<u64, usize> {
        score_histogram(&self.scores)
    }
}

/// Accumulates trial outcomes in trial order.
pub(crate) struct Batch {
    scores: Vec<u64>,
    failures: usize,
    best: Option<(usize, u64, PlayerField)>,
    policy: FailurePolicy,
    verbose: u8,
}

impl Batch {
    pub(crate) fn new(trials: usize, config: &SimulationConfig) -> Self {
        Self {
            scores: Vec::with_capacity(trials),
            failures: 0,
            best: None,
            policy: config.failure_policy,
            verbose: config.verbose,
        }
    }

    /// Record one trial. `field` is only called for a new best score.
    pub(crate) fn record<F>(&mut self, trial: usize, outcome: Result<u64>, field: F) -> Result<()>
    where
        F: FnOnce() -> PlayerField,
    {
        match outcome {
            Ok(score) => {
                if self.verbose > 1 {
                    log::info!("simulation {} completed: score {}", trial + 1, score);
                }
                self.scores.push(score);
                if self.best.as_ref().map_or(true, |(_, best, _)| score > *best) {
                    self.best = Some((trial, score, field()));
                }
                Ok(())
            }
            Err(err) if err.is_invalid_field() && self.policy == FailurePolicy::Count => {
                log::warn!("simulation {} dropped: {}", trial + 1, err);
                self.failures += 1;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    pub(crate) fn finish(
        self,
        strategy: &'static str,
        config: &SimulationConfig,
        seed: u64,
        trials: usize,
        started: Instant,
    ) -> SimulationReport {
        let stats = SimulationStats::from_scores(&self.scores, started.elapsed());
        let best = self.best.map(|(trial, score, field)| BestField {
            trial,
            score,
            breakdown: score_breakdown(&field),
            field,
        });

        let report = SimulationReport {
            strategy,
            config: config.clone(),
            seed,
            trials,
            scores: self.scores,
            failures: self.failures,
            stats,
            best,
        };
        if config.verbose > 0 {
            log_summary(&report);
        }
        report
    }
}

pub(crate) fn log_header(strategy: &str, config: &SimulationConfig, trials: usize, seed: u64) {
    if config.verbose == 0 {
        return;
    }
    log::info!("running {} simulations (seed {})", trials, seed);
    log::info!("player type: {}", strategy);
    log::info!("using bonus cards: {}", config.use_bonus_cards);
    log::info!("rounds: {}", config.n_rounds);
}

fn log_summary(report: &SimulationReport) {
    let stats = &report.stats;
    if stats.is_empty() {
        log::warn!("no simulation completed ({} failures)", report.failures);
        return;
    }
    log::info!("average score: {:.3}", stats.mean);
    log::info!("minimum score: {}", stats.min);
    log::info!("maximum score: {}", stats.max);
    if report.failures > 0 {
        log::info!("invalid fields dropped: {}", report.failures);
    }
    log::info!("{:.0} games/s", stats.games_per_second());
    if let Some(best) = &report.best {
        log::info!("best card set (trial {}): {}", best.trial + 1, best.field);
        log::debug!("best score breakdown:\n{}", best.breakdown);
    }
}

impl<S: PlayStrategy> SoloPlay<S> {
    /// Play `trials` games and collect statistics.
    pub fn run_simulations(&mut self, trials: usize, rng: &mut GameRng) -> Result<SimulationReport> {
        let config = self.config().clone();
        let strategy = self.strategy().name();
        log_header(strategy, &config, trials, rng.seed());

        let started = Instant::now();
        let mut batch = Batch::new(trials, &config);
        for trial in 0..trials {
            let mut trial_rng = rng.fork();
            let outcome = self.play(&mut trial_rng);
            batch.record(trial, outcome, || self.field().clone())?;
        }

        Ok(batch.finish(strategy, &config, rng.seed(), trials, started))
    }
}
