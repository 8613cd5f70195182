//! Scoring engine tests: pool aggregation, prerequisite gating, reward
//! values, and reverse-order field evaluation.

use faraway_sim::{
    aggregate, final_score, satisfies, score_breakdown, value, Assets, BonusCard, CardId,
    MainCard, PlayerField, Prerequisites, Resource, Rewards, SummedAssets,
};
use proptest::prelude::*;

fn main_card(id: u32) -> MainCard {
    MainCard::new(CardId(id))
}

fn bonus_card(id: u32) -> BonusCard {
    BonusCard::new(CardId(id))
}

fn field(main: Vec<MainCard>, bonus: Vec<BonusCard>) -> PlayerField {
    let n = main.len();
    PlayerField::from_cards(main, bonus, n)
}

fn arb_assets() -> impl Strategy<Value = Assets> {
    prop::array::uniform9(0u32..6).prop_map(|c| Assets {
        red: c[0],
        green: c[1],
        blue: c[2],
        yellow: c[3],
        rock: c[4],
        animal: c[5],
        vegetal: c[6],
        night: c[7],
        map: c[8],
    })
}

fn arb_rewards() -> impl Strategy<Value = Rewards> {
    (arb_assets(), 0u32..4, 0u32..8)
        .prop_map(|(weights, all_4_colors, flat)| Rewards::from_parts(weights, all_4_colors, flat))
}

fn arb_prerequisites() -> impl Strategy<Value = Prerequisites> {
    (0u32..4, 0u32..4, 0u32..4).prop_map(|(r, a, v)| Prerequisites::new(r, a, v))
}

// =============================================================================
// Field Evaluation Tests
// =============================================================================

#[test]
fn test_single_flat_card() {
    let card = main_card(1).with_rewards(Rewards::flat(3));
    assert_eq!(final_score(&field(vec![card], vec![])), 3);
}

#[test]
fn test_empty_field_scores_zero() {
    assert_eq!(final_score(&PlayerField::new(8)), 0);
}

#[test]
fn test_earlier_cards_do_not_feed_prerequisites() {
    let rock = main_card(1).with_assets(Assets::new().with(Resource::Rock, 1));
    let gated = main_card(2)
        .with_prerequisites(Prerequisites::new(1, 0, 0))
        .with_rewards(Rewards::flat(5));

    // Rock played after the gated card: the gated card sees it.
    assert_eq!(final_score(&field(vec![gated, rock], vec![])), 5);
    // Rock played before: it is not in the gated card's pool.
    assert_eq!(final_score(&field(vec![rock, gated], vec![])), 0);
}

#[test]
fn test_card_sees_its_own_assets() {
    let card = main_card(4)
        .with_assets(Assets::new().with(Resource::Animal, 1).with(Resource::Night, 2))
        .with_prerequisites(Prerequisites::new(0, 1, 0))
        .with_rewards(Rewards::new().with(Resource::Night, 3));
    assert_eq!(final_score(&field(vec![card], vec![])), 6);
}

// =============================================================================
// Bonus Card Tests
// =============================================================================

#[test]
fn test_bonus_cards_feed_every_main_card() {
    let gated = main_card(1)
        .with_prerequisites(Prerequisites::new(0, 0, 2))
        .with_rewards(Rewards::flat(7));
    let bonus = bonus_card(1).with_assets(Assets::new().with(Resource::Vegetal, 2));
    assert_eq!(final_score(&field(vec![gated], vec![bonus])), 7);
}

#[test]
fn test_bonus_cards_score_against_full_pool() {
    let first = main_card(1).with_assets(Assets::new().with(Resource::Night, 1));
    let second = main_card(2).with_assets(Assets::new().with(Resource::Night, 2));
    let bonus = bonus_card(3)
        .with_assets(Assets::new().with(Resource::Night, 1))
        .with_rewards(Rewards::new().with(Resource::Night, 2));

    // 2 * (1 + 2 + 1)
    assert_eq!(final_score(&field(vec![first, second], vec![bonus])), 8);
}

#[test]
fn test_bonus_only_field_scores_against_bonus_pool() {
    let bonus = bonus_card(1)
        .with_assets(Assets::new().with(Resource::Map, 2))
        .with_rewards(Rewards::new().with(Resource::Map, 3).with_flat(1));
    assert_eq!(final_score(&PlayerField::from_cards(vec![], vec![bonus], 8)), 7);
}

// =============================================================================
// Aggregate and Breakdown Tests
// =============================================================================

#[test]
fn test_all_4_colors_counts_complete_sets() {
    let colors = [Resource::Red, Resource::Green, Resource::Blue, Resource::Yellow];
    let mut cards: Vec<MainCard> = colors
        .iter()
        .enumerate()
        .map(|(i, &c)| main_card(i as u32 + 1).with_assets(Assets::new().with(c, 2)))
        .collect();
    cards[0] = cards[0].with_assets(Assets::new().with(Resource::Red, 1));
    let scorer = main_card(9).with_rewards(Rewards::new().with_all_4_colors(5));
    cards.insert(0, scorer);

    // min(1, 2, 2, 2) = 1 set
    assert_eq!(final_score(&field(cards, vec![])), 5);
}

#[test]
fn test_breakdown_matches_final_score() {
    let rock = main_card(6).with_assets(Assets::new().with(Resource::Rock, 2));
    let gated = main_card(3)
        .with_prerequisites(Prerequisites::new(2, 0, 0))
        .with_rewards(Rewards::new().with(Resource::Rock, 4));
    let unmet = main_card(8)
        .with_prerequisites(Prerequisites::new(0, 1, 0))
        .with_rewards(Rewards::flat(10));
    let bonus = bonus_card(2).with_rewards(Rewards::flat(2));
    let f = field(vec![gated, rock, unmet], vec![bonus]);

    let breakdown = score_breakdown(&f);
    assert_eq!(breakdown.total(), final_score(&f));
    assert_eq!(breakdown.main_points(), 8);
    assert_eq!(breakdown.bonus_points(), 2);

    let ids: Vec<u32> = breakdown.cards.iter().map(|c| c.id.0).collect();
    assert_eq!(ids, vec![3, 6, 8, 2]);
    assert!(!breakdown.cards[2].prerequisites_met);
    assert_eq!(breakdown.final_pool.get(Resource::Rock), 2);
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Prerequisites hold exactly when every gated resource meets its minimum.
    #[test]
    fn prop_satisfies_iff_every_minimum_met(
        prereq in arb_prerequisites(),
        assets in arb_assets(),
    ) {
        let totals = SummedAssets::from(assets);
        let expected = totals.get(Resource::Rock) >= prereq.rock
            && totals.get(Resource::Animal) >= prereq.animal
            && totals.get(Resource::Vegetal) >= prereq.vegetal;
        prop_assert_eq!(satisfies(&prereq, &totals), expected);
    }

    /// No prerequisites are always satisfied.
    #[test]
    fn prop_empty_prerequisites_always_hold(assets in arb_assets()) {
        prop_assert!(satisfies(&Prerequisites::default(), &SummedAssets::from(assets)));
    }

    /// Aggregation is independent of grouping and order.
    #[test]
    fn prop_aggregate_is_associative(
        cards in prop::collection::vec(arb_assets(), 0..10),
        split in 0usize..10,
    ) {
        let split = split.min(cards.len());
        let whole = aggregate(&cards);
        let parts = aggregate(&cards[..split]).combine(&aggregate(&cards[split..]));
        prop_assert_eq!(whole, parts);

        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(aggregate(&reversed), whole);
    }

    /// The color-set total is the minimum of the four colors.
    #[test]
    fn prop_all_4_colors_is_min_color(cards in prop::collection::vec(arb_assets(), 0..8)) {
        let totals = aggregate(&cards);
        let expected = Resource::COLORS
            .iter()
            .map(|&c| totals.get(c))
            .min()
            .unwrap_or(0);
        prop_assert_eq!(totals.all_4_colors(), expected);
        prop_assert_eq!(totals.flat(), 1);
    }

    /// Rewards are linear in their weights.
    #[test]
    fn prop_value_is_linear(
        a in arb_rewards(),
        b in arb_rewards(),
        assets in arb_assets(),
    ) {
        let totals = SummedAssets::from(assets);
        let sum = Rewards::from_parts(
            a.resource_weights() + b.resource_weights(),
            a.all_4_colors + b.all_4_colors,
            a.flat + b.flat,
        );
        prop_assert_eq!(value(&sum, &totals), value(&a, &totals) + value(&b, &totals));
    }

    /// Empty rewards are worth nothing against any pool.
    #[test]
    fn prop_zero_rewards_are_worthless(assets in arb_assets()) {
        prop_assert_eq!(value(&Rewards::default(), &SummedAssets::from(assets)), 0);
    }

    /// Appending a card with no assets and no rewards never changes the score.
    #[test]
    fn prop_inert_card_keeps_score(
        assets in prop::collection::vec(arb_assets(), 1..8),
        rewards in prop::collection::vec(arb_rewards(), 1..8),
    ) {
        let cards: Vec<MainCard> = assets
            .iter()
            .zip(rewards.iter())
            .enumerate()
            .map(|(i, (a, r))| main_card(i as u32 + 1).with_assets(*a).with_rewards(*r))
            .collect();
        let before = final_score(&field(cards.clone(), vec![]));

        let mut extended = cards;
        extended.insert(0, main_card(100));
        prop_assert_eq!(final_score(&field(extended, vec![])), before);
    }
}
