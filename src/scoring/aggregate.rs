//! Asset aggregation.

use crate::cards::Card;
use crate::resources::{Assets, SummedAssets};

/// Sum asset counts into pool totals.
///
/// Rewards are never summed. An empty input gives all-zero totals (with
/// `flat` still 1).
pub fn aggregate<'a, I>(assets: I) -> SummedAssets
where
    I: IntoIterator<Item = &'a Assets>,
{
    SummedAssets::from(assets.into_iter().sum::<Assets>())
}

/// [`aggregate`] over the assets of a collection of cards.
pub fn aggregate_cards<'a, C, I>(cards: I) -> SummedAssets
where
    C: Card + 'a,
    I: IntoIterator<Item = &'a C>,
{
    aggregate(cards.into_iter().map(|card| card.assets()))
}
