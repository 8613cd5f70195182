//! Resource types a card can carry.

use serde::{Deserialize, Serialize};

/// One of the nine countable resources.
///
/// Four colors, three prerequisite resources, and two special tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Red,
    Green,
    Blue,
    Yellow,
    Rock,
    Animal,
    Vegetal,
    Night,
    Map,
}

impl Resource {
    /// Every resource, in declaration order.
    pub const ALL: [Resource; 9] = [
        Resource::Red,
        Resource::Green,
        Resource::Blue,
        Resource::Yellow,
        Resource::Rock,
        Resource::Animal,
        Resource::Vegetal,
        Resource::Night,
        Resource::Map,
    ];

    /// The four colors whose minimum forms the `all_4_colors` aggregate.
    pub const COLORS: [Resource; 4] = [
        Resource::Red,
        Resource::Green,
        Resource::Blue,
        Resource::Yellow,
    ];

    /// Resources a main card may require.
    pub const PREREQUISITES: [Resource; 3] =
        [Resource::Rock, Resource::Animal, Resource::Vegetal];

    /// Lowercase name, as used in card records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Resource::Red => "red",
            Resource::Green => "green",
            Resource::Blue => "blue",
            Resource::Yellow => "yellow",
            Resource::Rock => "rock",
            Resource::Animal => "animal",
            Resource::Vegetal => "vegetal",
            Resource::Night => "night",
            Resource::Map => "map",
        }
    }

    #[must_use]
    pub fn is_color(self) -> bool {
        Self::COLORS.contains(&self)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
