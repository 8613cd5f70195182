//! Per-card resource counts.

use serde::{Deserialize, Serialize};

use super::Resource;

/// What a card contributes to the pool: one count per resource.
///
/// Missing keys in a card record default to 0; unknown keys are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Assets {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub yellow: u32,
    pub rock: u32,
    pub animal: u32,
    pub vegetal: u32,
    pub night: u32,
    pub map: u32,
}

impl Assets {
    /// All-zero counts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one count (builder pattern).
    #[must_use]
    pub fn with(mut self, resource: Resource, count: u32) -> Self {
        *self.slot_mut(resource) = count;
        self
    }

    /// Count for one resource.
    #[must_use]
    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Red => self.red,
            Resource::Green => self.green,
            Resource::Blue => self.blue,
            Resource::Yellow => self.yellow,
            Resource::Rock => self.rock,
            Resource::Animal => self.animal,
            Resource::Vegetal => self.vegetal,
            Resource::Night => self.night,
            Resource::Map => self.map,
        }
    }

    fn slot_mut(&mut self, resource: Resource) -> &mut u32 {
        match resource {
            Resource::Red => &mut self.red,
            Resource::Green => &mut self.green,
            Resource::Blue => &mut self.blue,
            Resource::Yellow => &mut self.yellow,
            Resource::Rock => &mut self.rock,
            Resource::Animal => &mut self.animal,
            Resource::Vegetal => &mut self.vegetal,
            Resource::Night => &mut self.night,
            Resource::Map => &mut self.map,
        }
    }

    /// Iterate `(resource, count)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Resource, u32)> + '_ {
        Resource::ALL.into_iter().map(move |r| (r, self.get(r)))
    }

    /// Minimum over the four colors.
    #[must_use]
    pub fn min_color(&self) -> u32 {
        Resource::COLORS
            .into_iter()
            .map(|r| self.get(r))
            .min()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, count)| count == 0)
    }

    /// Resource-wise sum, or `None` if any count overflows.
    #[must_use]
    pub fn checked_add(&self, other: &Assets) -> Option<Assets> {
        let mut sum = *self;
        for resource in Resource::ALL {
            *sum.slot_mut(resource) = self.get(resource).checked_add(other.get(resource))?;
        }
        Some(sum)
    }
}

impl std::ops::AddAssign<&Assets> for Assets {
    fn add_assign(&mut self, other: &Assets) {
        for resource in Resource::ALL {
            *self.slot_mut(resource) += other.get(resource);
        }
    }
}

impl std::ops::Add for Assets {
    type Output = Assets;

    fn add(mut self, other: Assets) -> Assets {
        self += &other;
        self
    }
}

impl<'a> std::iter::Sum<&'a Assets> for Assets {
    fn sum<I: Iterator<Item = &'a Assets>>(iter: I) -> Self {
        iter.fold(Assets::default(), |mut acc, assets| {
            acc += assets;
            acc
        })
    }
}

impl std::fmt::Display for Assets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (resource, count) in self.iter().filter(|(_, c)| *c > 0) {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", resource, count)?;
            first = false;
        }
        if first {
            f.write_str("-")?;
        }
        Ok(())
    }
}
