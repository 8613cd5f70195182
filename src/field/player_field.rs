//! A player's field: played main cards, gained bonus cards, and the
//! bookkeeping tying the two together.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{BonusCard, MainCard};
use crate::core::{Error, Result, DEFAULT_ROUNDS};
use crate::resources::SummedAssets;
use crate::scoring::aggregate;

/// Cards a player has on the table.
///
/// Main cards are kept in play order; bonus card order is irrelevant for
/// scoring. Both use persistent vectors so cloning a field to keep a
/// snapshot (e.g. the best field of a batch) is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerField {
    main_cards: Vector<MainCard>,
    bonus_cards: Vector<BonusCard>,
    n_rounds: usize,
}

impl Default for PlayerField {
    fn default() -> Self {
        Self::new(DEFAULT_ROUNDS)
    }
}

impl PlayerField {
    /// Empty field for a game of `n_rounds` rounds.
    #[must_use]
    pub fn new(n_rounds: usize) -> Self {
        Self {
            main_cards: Vector::new(),
            bonus_cards: Vector::new(),
            n_rounds,
        }
    }

    /// Field with the given cards already played.
    #[must_use]
    pub fn from_cards(main_cards: Vec<MainCard>, bonus_cards: Vec<BonusCard>, n_rounds: usize) -> Self {
        Self {
            main_cards: main_cards.into_iter().collect(),
            bonus_cards: bonus_cards.into_iter().collect(),
            n_rounds,
        }
    }

    /// Play a main card after every card played so far.
    pub fn play_main(&mut self, card: MainCard) {
        self.main_cards.push_back(card);
    }

    pub fn gain_bonus(&mut self, card: BonusCard) {
        self.bonus_cards.push_back(card);
    }

    #[must_use]
    pub fn main_cards(&self) -> &Vector<MainCard> {
        &self.main_cards
    }

    #[must_use]
    pub fn bonus_cards(&self) -> &Vector<BonusCard> {
        &self.bonus_cards
    }

    #[must_use]
    pub fn n_rounds(&self) -> usize {
        self.n_rounds
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.main_cards.len()
    }

    /// Totals of every main and bonus card on the field.
    #[must_use]
    pub fn summed_assets(&self) -> SummedAssets {
        aggregate(
            self.main_cards
                .iter()
                .map(|c| &c.assets)
                .chain(self.bonus_cards.iter().map(|c| &c.assets)),
        )
    }

    /// True if the most recent main card has a strictly higher id than the
    /// one played before it.
    #[must_use]
    pub fn last_play_ascends(&self) -> bool {
        let n = self.main_cards.len();
        n >= 2 && self.main_cards[n - 1].id > self.main_cards[n - 2].id
    }

    /// Bonus cards to draw after the latest play: map tokens on the field
    /// plus one after an ascending play, otherwise none.
    #[must_use]
    pub fn bonus_cards_to_draw_now(&self) -> u32 {
        if self.last_play_ascends() {
            self.summed_assets().resources().map + 1
        } else {
            0
        }
    }

    /// Number of strictly ascending adjacent pairs in play order.
    #[must_use]
    pub fn bonus_cards_gained(&self) -> usize {
        self.main_cards
            .iter()
            .zip(self.main_cards.iter().skip(1))
            .filter(|(earlier, later)| later.id > earlier.id)
            .count()
    }

    /// True if the bonus cards held match the ascending plays.
    #[must_use]
    pub fn validate_bonus_count(&self) -> bool {
        self.bonus_cards_gained() == self.bonus_cards.len()
    }

    /// True if the field is a legal end-of-game field.
    #[must_use]
    pub fn validate_final(&self, use_bonus_cards: bool) -> bool {
        self.main_cards.len() == self.n_rounds && (!use_bonus_cards || self.validate_bonus_count())
    }

    /// [`PlayerField::validate_final`], reporting the offending counts.
    pub fn check_final(&self, use_bonus_cards: bool) -> Result<()> {
        if self.validate_final(use_bonus_cards) {
            return Ok(());
        }
        Err(Error::InvalidField {
            main_cards: self.main_cards.len(),
            n_rounds: self.n_rounds,
            bonus_gained: self.bonus_cards_gained(),
            bonus_held: self.bonus_cards.len(),
        })
    }
}

impl std::fmt::Display for PlayerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field {}/{} rounds", self.main_cards.len(), self.n_rounds)?;
        for card in &self.main_cards {
            write!(f, "\n  {}", card)?;
        }
        for card in &self.bonus_cards {
            write!(f, "\n  {}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::resources::{Assets, Resource};

    fn mains(ids: &[u32]) -> Vec<MainCard> {
        ids.iter().map(|&id| MainCard::new(CardId::new(id))).collect()
    }

    fn bonuses(n: u32) -> Vec<BonusCard> {
        (1..=n).map(|id| BonusCard::new(CardId::new(id))).collect()
    }

    #[test]
    fn test_bonus_cards_gained() {
        let field = PlayerField::from_cards(mains(&[3, 5, 2, 8]), vec![], 4);
        assert_eq!(field.bonus_cards_gained(), 2);

        assert_eq!(PlayerField::new(8).bonus_cards_gained(), 0);
        assert_eq!(PlayerField::from_cards(mains(&[9, 4, 1]), vec![], 3).bonus_cards_gained(), 0);
    }

    #[test]
    fn test_equal_ids_are_not_ascending() {
        let field = PlayerField::from_cards(mains(&[4, 4]), vec![], 2);
        assert_eq!(field.bonus_cards_gained(), 0);
        assert!(!field.last_play_ascends());
    }

    #[test]
    fn test_bonus_cards_to_draw_now() {
        let mut cards = mains(&[2, 6]);
        cards[0].assets = Assets::new().with(Resource::Map, 1);
        let bonus = vec![BonusCard::new(CardId::new(1)).with_assets(Assets::new().with(Resource::Map, 1))];

        let ascending = PlayerField::from_cards(cards.clone(), bonus.clone(), 8);
        assert_eq!(ascending.bonus_cards_to_draw_now(), 3);

        cards.reverse();
        let descending = PlayerField::from_cards(cards, bonus, 8);
        assert_eq!(descending.bonus_cards_to_draw_now(), 0);
    }

    #[test]
    fn test_single_card_draws_nothing() {
        let field = PlayerField::from_cards(mains(&[1]), vec![], 8);
        assert_eq!(field.bonus_cards_to_draw_now(), 0);
    }

    #[test]
    fn test_validate_final() {
        let short = PlayerField::from_cards(mains(&[1, 2, 3, 4, 5, 6, 7]), bonuses(6), 8);
        assert!(!short.validate_final(true));
        assert!(!short.validate_final(false));

        let full = PlayerField::from_cards(mains(&[1, 2, 3, 4, 5, 6, 7, 8]), bonuses(7), 8);
        assert!(full.validate_final(true));
        assert!(full.check_final(true).is_ok());

        let missing_bonus = PlayerField::from_cards(mains(&[1, 2, 3, 4, 5, 6, 7, 8]), bonuses(5), 8);
        assert!(!missing_bonus.validate_final(true));
        assert!(missing_bonus.validate_final(false));
    }

    #[test]
    fn test_check_final_reports_counts() {
        let field = PlayerField::from_cards(mains(&[3, 5, 2]), bonuses(1), 8);

        match field.check_final(true) {
            Err(Error::InvalidField {
                main_cards,
                n_rounds,
                bonus_gained,
                bonus_held,
            }) => {
                assert_eq!((main_cards, n_rounds, bonus_gained, bonus_held), (3, 8, 1, 1));
            }
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut field = PlayerField::from_cards(mains(&[1]), vec![], 8);
        let snapshot = field.clone();
        field.play_main(MainCard::new(CardId::new(2)));

        assert_eq!(snapshot.rounds_played(), 1);
        assert_eq!(field.rounds_played(), 2);
    }
}
