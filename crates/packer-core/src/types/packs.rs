//! Quantities, pack sizes, and the pack-size → count result mapping.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The quantity held by a single pack. Always positive in a valid catalog.
pub type PackSize = u32;

/// A target, a remaining amount, or (once ≤ 0) an overshoot.
pub type Quantity = i64;

/// Mapping from pack size to the number of packs of that size to ship.
///
/// Ordered by pack size so iteration and serialization are deterministic.
/// Serializes as a JSON object keyed by the stringified pack size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredPacks(BTreeMap<PackSize, u64>);

impl RequiredPacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` packs of `size`. Zero counts leave no entry behind.
    pub fn add(&mut self, size: PackSize, count: u64) {
        if count == 0 {
            return;
        }
        *self.0.entry(size).or_insert(0) += count;
    }

    /// Sum counts per pack size from `other` into `self`.
    pub fn merge(&mut self, other: &RequiredPacks) {
        for (&size, &count) in &other.0 {
            self.add(size, count);
        }
    }

    /// Count for a pack size, or 0 when absent.
    pub fn get(&self, size: PackSize) -> u64 {
        self.0.get(&size).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PackSize, u64)> + '_ {
        self.0.iter().map(|(&size, &count)| (size, count))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct pack sizes in the result.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Total number of packs across all sizes.
    pub fn total_packs(&self) -> u64 {
        self.0.values().sum()
    }

    /// Total quantity shipped: Σ size × count.
    pub fn shipped_quantity(&self) -> u128 {
        self.0
            .iter()
            .map(|(&size, &count)| u128::from(size) * u128::from(count))
            .sum()
    }
}

impl FromIterator<(PackSize, u64)> for RequiredPacks {
    fn from_iter<I: IntoIterator<Item = (PackSize, u64)>>(iter: I) -> Self {
        let mut packs = Self::new();
        for (size, count) in iter {
            packs.add(size, count);
        }
        packs
    }
}

impl<const N: usize> From<[(PackSize, u64); N]> for RequiredPacks {
    fn from(entries: [(PackSize, u64); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl fmt::Display for RequiredPacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (size, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{size}: {count}")?;
        }
        f.write_str("}")
    }
}
