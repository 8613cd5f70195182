//! Card definitions - static card data.
//!
//! Cards are created once by the catalog loader and never change
//! afterwards. Decks and fields hold copies.

use serde::{Deserialize, Serialize};

use crate::resources::{Assets, Prerequisites, Rewards};

/// Card number.
///
/// Only compared for play order (ascending plays earn bonus cards); it is
/// unique within one collection but main and bonus ids may overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Anything that contributes assets to the pool and scores from it.
pub trait Card {
    fn id(&self) -> CardId;

    fn assets(&self) -> &Assets;

    fn rewards(&self) -> &Rewards;
}

/// A card played once per round. Scores only if its prerequisites are met.
///
/// ## Example
///
/// ```
/// use faraway_sim::cards::{CardId, MainCard};
/// use faraway_sim::resources::{Assets, Prerequisites, Resource, Rewards};
///
/// let card = MainCard::new(CardId::new(12))
///     .with_assets(Assets::new().with(Resource::Rock, 1))
///     .with_prerequisites(Prerequisites::new(2, 0, 0))
///     .with_rewards(Rewards::new().with(Resource::Night, 3));
///
/// assert_eq!(card.prerequisites.rock, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MainCard {
    pub id: CardId,
    #[serde(default)]
    pub assets: Assets,
    #[serde(default)]
    pub rewards: Rewards,
    #[serde(default)]
    pub prerequisites: Prerequisites,
}

impl MainCard {
    /// A card with no assets, rewards or prerequisites.
    #[must_use]
    pub fn new(id: CardId) -> Self {
        Self {
            id,
            assets: Assets::default(),
            rewards: Rewards::default(),
            prerequisites: Prerequisites::default(),
        }
    }

    #[must_use]
    pub fn with_assets(mut self, assets: Assets) -> Self {
        self.assets = assets;
        self
    }

    #[must_use]
    pub fn with_rewards(mut self, rewards: Rewards) -> Self {
        self.rewards = rewards;
        self
    }

    #[must_use]
    pub fn with_prerequisites(mut self, prerequisites: Prerequisites) -> Self {
        self.prerequisites = prerequisites;
        self
    }
}

impl Card for MainCard {
    fn id(&self) -> CardId {
        self.id
    }

    fn assets(&self) -> &Assets {
        &self.assets
    }

    fn rewards(&self) -> &Rewards {
        &self.rewards
    }
}

impl std::fmt::Display for MainCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:<3} [{}] scores {}", self.id.0, self.assets, self.rewards)?;
        if !self.prerequisites.is_empty() {
            let needs: Vec<String> = self
                .prerequisites
                .iter()
                .filter(|(_, min)| *min > 0)
                .map(|(r, min)| format!("{}={}", r, min))
                .collect();
            write!(f, " if {}", needs.join(" "))?;
        }
        Ok(())
    }
}

/// A card gained out of band. Always scores against the final pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BonusCard {
    pub id: CardId,
    #[serde(default)]
    pub assets: Assets,
    #[serde(default)]
    pub rewards: Rewards,
}

impl BonusCard {
    #[must_use]
    pub fn new(id: CardId) -> Self {
        Self {
            id,
            assets: Assets::default(),
            rewards: Rewards::default(),
        }
    }

    #[must_use]
    pub fn with_assets(mut self, assets: Assets) -> Self {
        self.assets = assets;
        self
    }

    #[must_use]
    pub fn with_rewards(mut self, rewards: Rewards) -> Self {
        self.rewards = rewards;
        self
    }
}

impl Card for BonusCard {
    fn id(&self) -> CardId {
        self.id
    }

    fn assets(&self) -> &Assets {
        &self.assets
    }

    fn rewards(&self) -> &Rewards {
        &self.rewards
    }
}

impl std::fmt::Display for BonusCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "*{:<3} [{}] scores {}", self.id.0, self.assets, self.rewards)
    }
}
