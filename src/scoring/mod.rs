//! Scoring engine.
//!
//! - `aggregate`: pool totals of a set of cards
//! - `satisfies`: prerequisite check against pool totals
//! - `value`: points of a reward weighting against pool totals
//! - `final_score` / `score_breakdown`: reverse-order field evaluation

pub mod aggregate;
pub mod evaluator;
pub mod validate;
pub mod value;

pub use aggregate::{aggregate, aggregate_cards};
pub use evaluator::{final_score, score_breakdown, CardKind, CardScore, ScoreBreakdown};
pub use validate::satisfies;
pub use value::{checked_value, value};
