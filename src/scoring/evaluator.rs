//! Final score of a completed field.
//!
//! Main cards are scored in reverse play order. When a main card is
//! scored, the pool holds that card, every card played after it, and all
//! bonus cards; cards played earlier never count towards it. Bonus cards
//! are scored last, unconditionally, against the pool of every card.
//!
//! A field with no main cards scores its bonus cards against the pool of
//! the bonus cards alone.

use serde::Serialize;
use smallvec::SmallVec;

use super::aggregate::aggregate_cards;
use super::validate::satisfies;
use super::value::value;
use crate::cards::CardId;
use crate::field::PlayerField;
use crate::resources::SummedAssets;

/// Whether a scored card was a main or a bonus card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Main,
    Bonus,
}

/// Contribution of one card to the final score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardScore {
    pub id: CardId,
    pub kind: CardKind,
    /// Always true for bonus cards.
    pub prerequisites_met: bool,
    pub points: u64,
}

/// Per-card contributions: main cards in play order, then bonus cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub cards: SmallVec<[CardScore; 16]>,
    /// Totals of every main and bonus card.
    pub final_pool: SummedAssets,
}

impl ScoreBreakdown {
    /// Same value as [`final_score`].
    #[must_use]
    pub fn total(&self) -> u64 {
        self.cards.iter().map(|c| c.points).sum()
    }

    #[must_use]
    pub fn main_points(&self) -> u64 {
        self.points_of(CardKind::Main)
    }

    #[must_use]
    pub fn bonus_points(&self) -> u64 {
        self.points_of(CardKind::Bonus)
    }

    fn points_of(&self, kind: CardKind) -> u64 {
        self.cards
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.points)
            .sum()
    }
}

impl std::fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for card in &self.cards {
            let marker = match (card.kind, card.prerequisites_met) {
                (CardKind::Bonus, _) => "bonus",
                (CardKind::Main, true) => "main",
                (CardKind::Main, false) => "main (unmet)",
            };
            writeln!(f, "  {:>3} {:<12} {:>4}", card.id.0, marker, card.points)?;
        }
        write!(f, "  total {} | pool {}", self.total(), self.final_pool)
    }
}

/// Total score of a field.
pub fn final_score(field: &PlayerField) -> u64 {
    let mut total = 0;
    evaluate(field, |card| total += card.points);
    total
}

/// [`final_score`] with the contribution of every card.
pub fn score_breakdown(field: &PlayerField) -> ScoreBreakdown {
    let mut cards = SmallVec::new();
    let final_pool = evaluate(field, |card| cards.push(card));

    // Main cards were visited last-played first.
    let mains = field.main_cards().len();
    cards[..mains].reverse();

    ScoreBreakdown { cards, final_pool }
}

/// Walk the field in scoring order, reporting each card's contribution.
/// Returns the final pool.
fn evaluate<F: FnMut(CardScore)>(field: &PlayerField, mut record: F) -> SummedAssets {
    let mut pool = aggregate_cards(field.bonus_cards());

    for card in field.main_cards().iter().rev() {
        pool.add_assets(&card.assets);
        let prerequisites_met = satisfies(&card.prerequisites, &pool);
        let points = if prerequisites_met {
            value(&card.rewards, &pool)
        } else {
            0
        };
        record(CardScore {
            id: card.id,
            kind: CardKind::Main,
            prerequisites_met,
            points,
        });
    }

    for bonus in field.bonus_cards() {
        record(CardScore {
            id: bonus.id,
            kind: CardKind::Bonus,
            prerequisites_met: true,
            points: value(&bonus.rewards, &pool),
        });
    }

    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{BonusCard, MainCard};
    use crate::resources::{Assets, Prerequisites, Resource, Rewards};

    fn main(id: u32) -> MainCard {
        MainCard::new(CardId::new(id))
    }

    #[test]
    fn test_single_flat_card() {
        let field = PlayerField::from_cards(vec![main(5).with_rewards(Rewards::flat(3))], vec![], 1);
        assert_eq!(final_score(&field), 3);
    }

    #[test]
    fn test_earlier_cards_do_not_feed_later_scoring() {
        // Played first: provides a rock. Played second: needs a rock.
        let rock_giver = main(1).with_assets(Assets::new().with(Resource::Rock, 1));
        let needs_rock = main(2)
            .with_prerequisites(Prerequisites::new(1, 0, 0))
            .with_rewards(Rewards::flat(5));

        let forward = PlayerField::from_cards(vec![rock_giver, needs_rock], vec![], 2);
        assert_eq!(final_score(&forward), 0);

        let backward = PlayerField::from_cards(vec![needs_rock, rock_giver], vec![], 2);
        assert_eq!(final_score(&backward), 5);
    }

    #[test]
    fn test_rewards_count_only_later_cards() {
        let night_counter = main(1)
            .with_assets(Assets::new().with(Resource::Night, 1))
            .with_rewards(Rewards::new().with(Resource::Night, 2));
        let night = main(2).with_assets(Assets::new().with(Resource::Night, 1));

        // Counter first sees both nights; counter last sees only its own.
        let first = PlayerField::from_cards(vec![night_counter, night], vec![], 2);
        let last = PlayerField::from_cards(vec![night, night_counter], vec![], 2);
        assert_eq!(final_score(&first), 4);
        assert_eq!(final_score(&last), 2);
    }

    #[test]
    fn test_bonus_cards_available_to_every_main_card() {
        let needs_animal = main(1)
            .with_prerequisites(Prerequisites::new(0, 1, 0))
            .with_rewards(Rewards::flat(4));
        let animal = BonusCard::new(CardId::new(1)).with_assets(Assets::new().with(Resource::Animal, 1));

        let field = PlayerField::from_cards(vec![needs_animal, main(2)], vec![animal], 2);
        assert_eq!(final_score(&field), 4);
    }

    #[test]
    fn test_bonus_cards_score_against_final_pool() {
        let early_red = main(1).with_assets(Assets::new().with(Resource::Red, 1));
        let late_red = main(2).with_assets(Assets::new().with(Resource::Red, 1));
        let per_red = BonusCard::new(CardId::new(9)).with_rewards(Rewards::new().with(Resource::Red, 3));

        let field = PlayerField::from_cards(vec![early_red, late_red], vec![per_red], 2);
        assert_eq!(final_score(&field), 6);
    }

    #[test]
    fn test_no_main_cards_scores_bonus_pool() {
        let bonus = vec![
            BonusCard::new(CardId::new(1)).with_assets(Assets::new().with(Resource::Map, 2)),
            BonusCard::new(CardId::new(2))
                .with_rewards(Rewards::new().with(Resource::Map, 1).with_flat(1)),
        ];

        let field = PlayerField::from_cards(vec![], bonus, 0);
        assert_eq!(final_score(&field), 3);
        assert_eq!(score_breakdown(&field).final_pool.get(Resource::Map), 2);
    }

    #[test]
    fn test_breakdown_matches_final_score() {
        let cards = vec![
            main(4)
                .with_assets(Assets::new().with(Resource::Green, 1))
                .with_rewards(Rewards::new().with(Resource::Green, 2)),
            main(7)
                .with_prerequisites(Prerequisites::new(2, 0, 0))
                .with_rewards(Rewards::flat(10)),
            main(9).with_assets(Assets::new().with(Resource::Green, 1)),
        ];
        let bonus = vec![BonusCard::new(CardId::new(3)).with_rewards(Rewards::flat(1))];
        let field = PlayerField::from_cards(cards, bonus, 3);

        let breakdown = score_breakdown(&field);
        let ids: Vec<u32> = breakdown.cards.iter().map(|c| c.id.0).collect();

        assert_eq!(ids, vec![4, 7, 9, 3]);
        assert!(!breakdown.cards[1].prerequisites_met);
        assert_eq!(breakdown.main_points(), 4);
        assert_eq!(breakdown.bonus_points(), 1);
        assert_eq!(breakdown.total(), final_score(&field));
    }
}
