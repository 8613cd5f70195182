//! Reward computation.

use crate::resources::{Rewards, SummedAssets};

/// Points a reward weighting is worth against pool totals.
///
/// Sum of `weight * total` over every resource, plus the `all_4_colors`
/// weight times the number of complete color sets, plus the flat amount
/// (the pool's `flat` total is always 1).
pub fn value(rewards: &Rewards, totals: &SummedAssets) -> u64 {
    let per_resource: u64 = rewards
        .resource_weights()
        .iter()
        .map(|(resource, weight)| u64::from(weight) * u64::from(totals.get(resource)))
        .sum();

    per_resource
        + u64::from(rewards.all_4_colors) * u64::from(totals.all_4_colors())
        + u64::from(rewards.flat) * u64::from(totals.flat())
}

/// [`value`] with overflow checks, `None` if the points do not fit a `u64`.
pub fn checked_value(rewards: &Rewards, totals: &SummedAssets) -> Option<u64> {
    let derived = [
        (rewards.all_4_colors, totals.all_4_colors()),
        (rewards.flat, totals.flat()),
    ];
    rewards
        .resource_weights()
        .iter()
        .map(|(resource, weight)| (weight, totals.get(resource)))
        .chain(derived)
        .try_fold(0u64, |sum, (weight, total)| {
            sum.checked_add(u64::from(weight).checked_mul(u64::from(total))?)
        })
}
