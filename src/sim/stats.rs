//! Score statistics of a simulation batch.

use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Summary statistics over the scores of successful trials.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Successful trials.
    pub count: usize,

    pub mean: f64,

    /// Population standard deviation.
    pub std_dev: f64,

    pub min: u64,

    pub max: u64,

    /// Upper median.
    pub median: u64,

    /// Wall time of the whole batch (microseconds).
    pub time_us: u64,
}

impl SimulationStats {
    /// Compute statistics; all zero for an empty batch.
    #[must_use]
    pub fn from_scores(scores: &[u64], elapsed: Duration) -> Self {
        let time_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        if scores.is_empty() {
            return Self {
                time_us,
                ..Self::default()
            };
        }

        let count = scores.len();
        let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / count as f64;
        let variance = scores
            .iter()
            .map(|&s| (s as f64 - mean).powi(2))
            .sum::<f64>()
            / count as f64;

        let mut sorted = scores.to_vec();
        sorted.sort_unstable();

        Self {
            count,
            mean,
            std_dev: variance.sqrt(),
            min: sorted[0],
            max: sorted[count - 1],
            median: sorted[count / 2],
            time_us,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Trials per second of wall time.
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.count as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

/// Number of trials per distinct score.
#[must_use]
pub fn score_histogram(scores: &[u64]) -> FxHashMap<u64, usize> {
    let mut histogram = FxHashMap::default();
    for &score in scores {
        *histogram.entry(score).or_insert(0) += 1;
    }
    histogram
}
