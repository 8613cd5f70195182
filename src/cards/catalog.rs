//! Card catalog: the immutable main and bonus card collections.
//!
//! A `CardCatalog` is built once (usually by the JSON loader) and shared
//! read-only, typically behind an `Arc`, by every game that draws from it.
//!
//! Construction also bounds the card values: the pool of the whole catalog
//! must fit `u32` counts and the score of every card against that pool
//! must fit a `u64`. Any field drawn from the catalog holds a subset of its
//! cards, so neither aggregation nor scoring of such a field can overflow.

use rustc_hash::FxHashMap;

use super::definition::{BonusCard, Card, CardId, MainCard};
use crate::core::{DeckKind, Error, Result};
use crate::resources::{Assets, SummedAssets};
use crate::scoring::checked_value;

/// Both card collections, in catalog order, with id lookup.
///
/// ## Example
///
/// ```
/// use faraway_sim::cards::{BonusCard, CardCatalog, CardId, MainCard};
///
/// let catalog = CardCatalog::new(
///     vec![MainCard::new(CardId::new(1)), MainCard::new(CardId::new(2))],
///     vec![BonusCard::new(CardId::new(1))],
/// )
/// .unwrap();
///
/// assert_eq!(catalog.main_cards().len(), 2);
/// assert!(catalog.main_card(CardId::new(2)).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    main: Vec<MainCard>,
    bonus: Vec<BonusCard>,
    main_index: FxHashMap<CardId, usize>,
    bonus_index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Build a catalog, rejecting duplicate ids within a collection and
    /// card values that could overflow scoring.
    pub fn new(main: Vec<MainCard>, bonus: Vec<BonusCard>) -> Result<Self> {
        let main_index = index_by_id(main.iter().map(|c| c.id), DeckKind::Main)?;
        let bonus_index = index_by_id(bonus.iter().map(|c| c.id), DeckKind::Bonus)?;
        check_value_bounds(&main, &bonus)?;

        Ok(Self {
            main,
            bonus,
            main_index,
            bonus_index,
        })
    }

    /// Main cards in catalog order.
    #[must_use]
    pub fn main_cards(&self) -> &[MainCard] {
        &self.main
    }

    /// Bonus cards in catalog order.
    #[must_use]
    pub fn bonus_cards(&self) -> &[BonusCard] {
        &self.bonus
    }

    #[must_use]
    pub fn main_card(&self, id: CardId) -> Option<&MainCard> {
        self.main_index.get(&id).map(|&i| &self.main[i])
    }

    #[must_use]
    pub fn bonus_card(&self, id: CardId) -> Option<&BonusCard> {
        self.bonus_index.get(&id).map(|&i| &self.bonus[i])
    }

    /// Fresh copy of the main deck, in catalog order.
    #[must_use]
    pub fn main_deck(&self) -> Vec<MainCard> {
        self.main.clone()
    }

    /// Fresh copy of the bonus deck, in catalog order.
    #[must_use]
    pub fn bonus_deck(&self) -> Vec<BonusCard> {
        self.bonus.clone()
    }
}

fn index_by_id(
    ids: impl Iterator<Item = CardId>,
    kind: DeckKind,
) -> Result<FxHashMap<CardId, usize>> {
    let mut index = FxHashMap::default();
    for (position, id) in ids.enumerate() {
        if index.insert(id, position).is_some() {
            return Err(Error::DuplicateCard { kind, id });
        }
    }
    Ok(index)
}

/// Every card of the catalog, tagged with its collection.
fn all_cards<'a>(
    main: &'a [MainCard],
    bonus: &'a [BonusCard],
) -> impl Iterator<Item = (DeckKind, &'a dyn Card)> {
    main.iter()
        .map(|c| (DeckKind::Main, c as &dyn Card))
        .chain(bonus.iter().map(|c| (DeckKind::Bonus, c as &dyn Card)))
}

fn check_value_bounds(main: &[MainCard], bonus: &[BonusCard]) -> Result<()> {
    let mut pool = Assets::default();
    for (kind, card) in all_cards(main, bonus) {
        pool = pool
            .checked_add(card.assets())
            .ok_or(Error::ValueOverflow { kind, id: card.id() })?;
    }

    // Upper bound of any field's score: every card valued against the
    // full pool, prerequisites ignored.
    let totals = SummedAssets::from(pool);
    let mut max_score: u64 = 0;
    for (kind, card) in all_cards(main, bonus) {
        max_score = checked_value(card.rewards(), &totals)
            .and_then(|points| max_score.checked_add(points))
            .ok_or(Error::ValueOverflow { kind, id: card.id() })?;
    }
    Ok(())
}
