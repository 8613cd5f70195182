//! Simulation bindings for Python.

use pyo3::prelude::*;

use crate::core::GameRng;
use crate::scoring::score_breakdown;
use crate::sim::{SoloPlay, StrategyKind};

use super::py_core::{PyCardCatalog, PySimulationConfig};

/// Python wrapper for a solo game driver.
#[pyclass(name = "SoloPlay")]
pub struct PySoloPlay(SoloPlay<StrategyKind>);

#[pymethods]
impl PySoloPlay {
    /// Create a driver for the given catalog.
    ///
    /// # Arguments
    /// - catalog: Loaded CardCatalog
    /// - config: SimulationConfig (default: SimulationConfig())
    /// - player_type: Strategy name (default: "random")
    #[new]
    #[pyo3(signature = (catalog, config = None, player_type = "random"))]
    fn new(
        catalog: PyRef<'_, PyCardCatalog>,
        config: Option<PySimulationConfig>,
        player_type: &str,
    ) -> PyResult<Self> {
        let strategy: StrategyKind = player_type.parse()?;
        let config = config.map(|c| c.0).unwrap_or_default();
        Ok(Self(SoloPlay::new(catalog.0.clone(), strategy, config)?))
    }

    /// Play one game with the given seed and return its score.
    fn play(&mut self, seed: u64) -> PyResult<u64> {
        Ok(self.0.play(&mut GameRng::new(seed))?)
    }

    /// Play a batch and return the score of every successful trial.
    fn run_simulations(&mut self, n_simulations: usize, seed: u64) -> PyResult<Vec<u64>> {
        let report = self.0.run_simulations(n_simulations, &mut GameRng::new(seed))?;
        Ok(report.scores)
    }

    /// Ids of the main cards of the last game, in play order.
    fn main_card_ids(&self) -> Vec<u32> {
        self.0.field().main_cards().iter().map(|c| c.id.0).collect()
    }

    /// Ids of the bonus cards of the last game.
    fn bonus_card_ids(&self) -> Vec<u32> {
        self.0.field().bonus_cards().iter().map(|c| c.id.0).collect()
    }

    /// Points of each card of the last game, as (id, kind, points).
    fn breakdown(&self) -> Vec<(u32, String, u64)> {
        score_breakdown(self.0.field())
            .cards
            .iter()
            .map(|c| (c.id.0, format!("{:?}", c.kind).to_lowercase(), c.points))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!("SoloPlay(player_type={})", self.0.strategy())
    }
}
