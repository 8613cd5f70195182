//! Card system: definitions, catalog, and loader.
//!
//! ## Key Types
//!
//! - `CardId`: Card number, compared for play order
//! - `Card`: Trait shared by main and bonus cards
//! - `MainCard`: Played once per round, gated by prerequisites
//! - `BonusCard`: Gained on ascending plays, always scores
//! - `CardCatalog`: Immutable collections the decks are copied from

pub mod catalog;
pub mod definition;
pub mod loader;

pub use catalog::CardCatalog;
pub use definition::{BonusCard, Card, CardId, MainCard};
pub use loader::{catalog_from_json, load_catalog, load_main_only};
