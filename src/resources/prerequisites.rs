//! Minimum pool requirements of a main card.

use serde::{Deserialize, Serialize};

use super::Resource;

/// Minimum rock/animal/vegetal totals a main card needs to score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Prerequisites {
    pub rock: u32,
    pub animal: u32,
    pub vegetal: u32,
}

impl Prerequisites {
    #[must_use]
    pub fn new(rock: u32, animal: u32, vegetal: u32) -> Self {
        Self {
            rock,
            animal,
            vegetal,
        }
    }

    /// Requirement for `resource`, or `None` if it cannot be required.
    #[must_use]
    pub fn get(&self, resource: Resource) -> Option<u32> {
        match resource {
            Resource::Rock => Some(self.rock),
            Resource::Animal => Some(self.animal),
            Resource::Vegetal => Some(self.vegetal),
            _ => None,
        }
    }

    /// Iterate `(resource, minimum)` over the three prerequisite resources.
    pub fn iter(&self) -> impl Iterator<Item = (Resource, u32)> + '_ {
        Resource::PREREQUISITES
            .into_iter()
            .filter_map(move |r| self.get(r).map(|min| (r, min)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, min)| min == 0)
    }
}
