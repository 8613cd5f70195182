//! Catalog and configuration bindings for Python.

use std::path::PathBuf;
use std::sync::Arc;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{catalog_from_json, load_catalog, load_main_only, CardCatalog};
use crate::core::{Error, FailurePolicy, SimulationConfig};

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for CardCatalog.
#[pyclass(name = "CardCatalog")]
#[derive(Clone, Debug)]
pub struct PyCardCatalog(pub Arc<CardCatalog>);

#[pymethods]
impl PyCardCatalog {
    /// Load main (and optionally bonus) card records from JSON files.
    ///
    /// A catalog without bonus cards only plays with `use_bonus_cards=False`.
    #[staticmethod]
    #[pyo3(signature = (main_path, bonus_path = None))]
    fn load(main_path: PathBuf, bonus_path: Option<PathBuf>) -> PyResult<Self> {
        let catalog = match bonus_path {
            Some(bonus_path) => load_catalog(&main_path, &bonus_path)?,
            None => load_main_only(&main_path)?,
        };
        Ok(Self(Arc::new(catalog)))
    }

    /// Parse main and bonus card records from JSON strings.
    #[staticmethod]
    fn from_json(main_json: &str, bonus_json: &str) -> PyResult<Self> {
        Ok(Self(Arc::new(catalog_from_json(main_json, bonus_json)?)))
    }

    #[getter]
    fn n_main_cards(&self) -> usize {
        self.0.main_cards().len()
    }

    #[getter]
    fn n_bonus_cards(&self) -> usize {
        self.0.bonus_cards().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "CardCatalog(main={}, bonus={})",
            self.0.main_cards().len(),
            self.0.bonus_cards().len()
        )
    }
}

/// Python wrapper for SimulationConfig.
#[pyclass(name = "SimulationConfig")]
#[derive(Clone, Debug)]
pub struct PySimulationConfig(pub SimulationConfig);

#[pymethods]
impl PySimulationConfig {
    /// Create a new simulation configuration.
    ///
    /// # Arguments
    /// - n_rounds: Main cards per complete field (default: 8)
    /// - use_bonus_cards: Draw and validate bonus cards (default: True)
    /// - verbose: 0 silent, 1 summary, 2 per trial (default: 0)
    /// - count_failures: Count invalid fields instead of aborting (default: False)
    #[new]
    #[pyo3(signature = (n_rounds = 8, use_bonus_cards = true, verbose = 0, count_failures = false))]
    fn new(n_rounds: usize, use_bonus_cards: bool, verbose: u8, count_failures: bool) -> Self {
        let policy = if count_failures {
            FailurePolicy::Count
        } else {
            FailurePolicy::Abort
        };
        Self(
            SimulationConfig::default()
                .with_rounds(n_rounds)
                .with_bonus_cards(use_bonus_cards)
                .with_verbose(verbose)
                .with_failure_policy(policy),
        )
    }

    #[getter]
    fn n_rounds(&self) -> usize {
        self.0.n_rounds
    }

    #[getter]
    fn use_bonus_cards(&self) -> bool {
        self.0.use_bonus_cards
    }

    #[getter]
    fn verbose(&self) -> u8 {
        self.0.verbose
    }

    fn __repr__(&self) -> String {
        format!(
            "SimulationConfig(n_rounds={}, use_bonus_cards={}, verbose={})",
            self.0.n_rounds, self.0.use_bonus_cards, self.0.verbose
        )
    }
}
