//! Prerequisite validation.

use crate::resources::{Prerequisites, SummedAssets};

/// True when the pool meets every minimum of `prereq`.
///
/// All-zero prerequisites are met by any pool.
pub fn satisfies(prereq: &Prerequisites, totals: &SummedAssets) -> bool {
    prereq
        .iter()
        .all(|(resource, minimum)| totals.get(resource) >= minimum)
}
