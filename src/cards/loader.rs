//! JSON catalog loader.
//!
//! Each collection is a JSON array of card records. Loading is all or
//! nothing: unreadable files, unknown keys, negative counts, duplicate ids
//! or an empty main collection abort the load.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::catalog::CardCatalog;
use super::definition::{BonusCard, MainCard};
use crate::core::{DeckKind, Error, Result};

/// Default location of the main card records.
pub const DEFAULT_MAIN_CARDS: &str = "data/main_cards.json";

/// Default location of the bonus card records.
pub const DEFAULT_BONUS_CARDS: &str = "data/bonus_cards.json";

/// Load both collections from disk.
pub fn load_catalog(main_path: &Path, bonus_path: &Path) -> Result<CardCatalog> {
    let main = load_main_cards(main_path)?;
    let bonus = load_bonus_cards(bonus_path)?;
    log::debug!(
        "loaded {} main cards from {} and {} bonus cards from {}",
        main.len(),
        main_path.display(),
        bonus.len(),
        bonus_path.display()
    );
    CardCatalog::new(main, bonus)
}

/// Load main cards only; bonus play must then be disabled.
pub fn load_main_only(main_path: &Path) -> Result<CardCatalog> {
    CardCatalog::new(load_main_cards(main_path)?, Vec::new())
}

pub fn load_main_cards(path: &Path) -> Result<Vec<MainCard>> {
    let cards: Vec<MainCard> = load_json(path)?;
    if cards.is_empty() {
        return Err(Error::EmptyCatalog(DeckKind::Main));
    }
    Ok(cards)
}

pub fn load_bonus_cards(path: &Path) -> Result<Vec<BonusCard>> {
    load_json(path)
}

/// Parse both collections from in-memory JSON.
pub fn catalog_from_json(main_json: &str, bonus_json: &str) -> Result<CardCatalog> {
    let main: Vec<MainCard> = parse_json(main_json, Path::new("<main cards>"))?;
    if main.is_empty() {
        return Err(Error::EmptyCatalog(DeckKind::Main));
    }
    let bonus: Vec<BonusCard> = parse_json(bonus_json, Path::new("<bonus cards>"))?;
    CardCatalog::new(main, bonus)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&raw, path)
}

fn parse_json<T: DeserializeOwned>(raw: &str, origin: &Path) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| Error::Parse {
        path: origin.to_path_buf(),
        source,
    })
}
