//! Scoring weights of a card.

use serde::{Deserialize, Serialize};

use super::{Assets, Resource};

/// How a card scores: one weight per resource, a weight on the
/// `all_4_colors` aggregate, and a flat amount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rewards {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub yellow: u32,
    pub rock: u32,
    pub animal: u32,
    pub vegetal: u32,
    pub night: u32,
    pub map: u32,
    pub all_4_colors: u32,
    pub flat: u32,
}

impl Rewards {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewards worth a fixed amount.
    #[must_use]
    pub fn flat(points: u32) -> Self {
        Self {
            flat: points,
            ..Self::default()
        }
    }

    /// Set the weight of one resource (builder pattern).
    #[must_use]
    pub fn with(self, resource: Resource, weight: u32) -> Self {
        let weights = self.resource_weights().with(resource, weight);
        Self::from_parts(weights, self.all_4_colors, self.flat)
    }

    /// Set the `all_4_colors` weight.
    #[must_use]
    pub fn with_all_4_colors(mut self, weight: u32) -> Self {
        self.all_4_colors = weight;
        self
    }

    /// Set the flat amount.
    #[must_use]
    pub fn with_flat(mut self, points: u32) -> Self {
        self.flat = points;
        self
    }

    /// Build from per-resource weights plus the two derived weights.
    #[must_use]
    pub fn from_parts(weights: Assets, all_4_colors: u32, flat: u32) -> Self {
        Self {
            red: weights.red,
            green: weights.green,
            blue: weights.blue,
            yellow: weights.yellow,
            rock: weights.rock,
            animal: weights.animal,
            vegetal: weights.vegetal,
            night: weights.night,
            map: weights.map,
            all_4_colors,
            flat,
        }
    }

    /// Per-resource weights, without the derived ones.
    #[must_use]
    pub fn resource_weights(&self) -> Assets {
        Assets {
            red: self.red,
            green: self.green,
            blue: self.blue,
            yellow: self.yellow,
            rock: self.rock,
            animal: self.animal,
            vegetal: self.vegetal,
            night: self.night,
            map: self.map,
        }
    }

    #[must_use]
    pub fn get(&self, resource: Resource) -> u32 {
        self.resource_weights().get(resource)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resource_weights().is_empty() && self.all_4_colors == 0 && self.flat == 0
    }
}

impl std::fmt::Display for Rewards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let weights = self.resource_weights();
        let mut parts: Vec<String> = weights
            .iter()
            .filter(|(_, w)| *w > 0)
            .map(|(r, w)| format!("{}x{}", w, r))
            .collect();
        if self.all_4_colors > 0 {
            parts.push(format!("{}xall_4_colors", self.all_4_colors));
        }
        if self.flat > 0 {
            parts.push(format!("+{}", self.flat));
        }
        if parts.is_empty() {
            f.write_str("-")
        } else {
            f.write_str(&parts.join(" "))
        }
    }
}
