//! Aggregated resource totals of a pool of cards.

use serde::Serialize;

use super::{Assets, Resource};

/// Totals of a pool of cards.
///
/// Besides the nine resource totals this exposes two derived values:
/// `all_4_colors` (minimum of the four color totals) and `flat`, which is
/// always 1 so that a flat reward weight counts exactly once. Both are
/// computed, never stored independently, so they cannot drift from the
/// resource totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SummedAssets {
    resources: Assets,
}

impl SummedAssets {
    /// Totals of an empty pool.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The nine resource totals.
    #[must_use]
    pub fn resources(&self) -> &Assets {
        &self.resources
    }

    #[must_use]
    pub fn get(&self, resource: Resource) -> u32 {
        self.resources.get(resource)
    }

    #[must_use]
    pub fn all_4_colors(&self) -> u32 {
        self.resources.min_color()
    }

    /// Always 1.
    #[must_use]
    pub const fn flat(&self) -> u32 {
        1
    }

    /// Totals of the union of both pools: resources are added, derived
    /// values follow from the combined resources.
    #[must_use]
    pub fn combine(&self, other: &SummedAssets) -> SummedAssets {
        SummedAssets::from(self.resources + other.resources)
    }

    /// Add one card's assets to these totals.
    pub fn add_assets(&mut self, assets: &Assets) {
        self.resources += assets;
    }
}

impl From<Assets> for SummedAssets {
    fn from(resources: Assets) -> Self {
        Self { resources }
    }
}

impl std::fmt::Display for SummedAssets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} all_4_colors={}", self.resources, self.all_4_colors())
    }
}
