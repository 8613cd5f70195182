//! Python bindings for the simulator.
//!
//! # Quick Start
//!
//! ```python
//! import faraway_sim as fs
//!
//! catalog = fs.CardCatalog.load("data/main_cards.json", "data/bonus_cards.json")
//! config = fs.SimulationConfig(n_rounds=8, use_bonus_cards=True)
//!
//! game = fs.SoloPlay(catalog, config, player_type="random")
//! scores = game.run_simulations(10_000, seed=42)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_sim;

pub use py_core::*;
pub use py_sim::*;

/// faraway_sim: scoring engine and Monte Carlo simulator.
#[pymodule]
fn faraway_sim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCardCatalog>()?;
    m.add_class::<PySimulationConfig>()?;
    m.add_class::<PySoloPlay>()?;
    Ok(())
}
