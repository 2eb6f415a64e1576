//! GraphPackCalculator: clamp, build, prune, extract, merge.

use packer_core::catalog::PackageCatalog;
use packer_core::config::CalculatorConfig;
use packer_core::constants::DEFAULT_HEADROOM_MULTIPLIER;
use packer_core::errors::CalcError;
use packer_core::types::{PackSize, Quantity, RequiredPacks};
use tracing::{debug, instrument};

use crate::graph::{build, prune_to_closest_candidate};
use crate::headroom;
use crate::path::shortest_path;

/// Calculates which packs to ship for a target quantity.
///
/// Holds a normalized pack-size set (ascending, deduplicated, zeros dropped).
/// Immutable after construction; every `calculate` call builds and drops its
/// own graph, so one calculator can serve many threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPackCalculator {
    pack_sizes: Vec<PackSize>,
    headroom_multiplier: i64,
}

impl GraphPackCalculator {
    pub fn new(pack_sizes: impl IntoIterator<Item = PackSize>) -> Self {
        let mut pack_sizes: Vec<PackSize> = pack_sizes.into_iter().filter(|&s| s > 0).collect();
        pack_sizes.sort_unstable();
        pack_sizes.dedup();
        Self {
            pack_sizes,
            headroom_multiplier: DEFAULT_HEADROOM_MULTIPLIER,
        }
    }

    pub fn with_config(pack_sizes: impl IntoIterator<Item = PackSize>, config: &CalculatorConfig) -> Self {
        Self::new(pack_sizes).with_headroom_multiplier(config.effective_headroom_multiplier())
    }

    /// Build a calculator from the pack sizes currently in `catalog`.
    pub fn from_catalog(
        catalog: &dyn PackageCatalog,
        config: &CalculatorConfig,
    ) -> Result<Self, CalcError> {
        Ok(Self::with_config(catalog.pack_sizes()?, config))
    }

    /// Override the headroom multiplier. Values below 1 are raised to 1.
    pub fn with_headroom_multiplier(mut self, multiplier: i64) -> Self {
        self.headroom_multiplier = multiplier.max(1);
        self
    }

    /// Normalized pack sizes, ascending.
    pub fn pack_sizes(&self) -> &[PackSize] {
        &self.pack_sizes
    }

    pub fn headroom_multiplier(&self) -> i64 {
        self.headroom_multiplier
    }

    /// Packs needed to ship at least `quantity`.
    ///
    /// Returns an empty mapping for `quantity <= 0`. Fails with
    /// `EmptyPackSizeSet` when a positive quantity meets no pack sizes.
    #[instrument(skip(self), fields(pack_sizes = self.pack_sizes.len()))]
    pub fn calculate(&self, quantity: Quantity) -> Result<RequiredPacks, CalcError> {
        let mut packs = RequiredPacks::new();
        if quantity <= 0 {
            return Ok(packs);
        }
        if self.pack_sizes.is_empty() {
            return Err(CalcError::EmptyPackSizeSet { quantity });
        }

        let headroom = headroom::apply(quantity, &self.pack_sizes, self.headroom_multiplier);
        packs.add(headroom.largest, headroom.preallocated);

        let sizes_desc: Vec<PackSize> = self.pack_sizes.iter().rev().copied().collect();
        let mut graph = build(headroom.remaining, &sizes_desc);
        let pruned = prune_to_closest_candidate(&mut graph)?;

        let path = shortest_path(&graph, graph.root(), pruned.retained_node).ok_or_else(|| {
            CalcError::GraphInconsistency {
                details: format!(
                    "candidate {} is unreachable from root {}",
                    pruned.retained_quantity, headroom.remaining
                ),
            }
        })?;
        packs.merge(&path.required_packs());

        debug!(
            overshoot = -pruned.retained_quantity,
            total_packs = packs.total_packs(),
            %packs,
            "calculation complete"
        );
        Ok(packs)
    }
}

/// Packs needed to ship at least `quantity` from `pack_sizes`, with default settings.
pub fn calculate(quantity: Quantity, pack_sizes: &[PackSize]) -> Result<RequiredPacks, CalcError> {
    GraphPackCalculator::new(pack_sizes.iter().copied()).calculate(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_pack_sizes() {
        let calc = GraphPackCalculator::new([500, 0, 250, 500, 5000]);
        assert_eq!(calc.pack_sizes(), &[250, 500, 5000]);
    }

    #[test]
    fn only_zero_sizes_is_an_empty_set() {
        let err = calculate(10, &[0, 0]).unwrap_err();
        assert!(matches!(err, CalcError::EmptyPackSizeSet { quantity: 10 }));
    }

    #[test]
    fn non_positive_multiplier_is_raised() {
        let calc = GraphPackCalculator::new([3]).with_headroom_multiplier(-4);
        assert_eq!(calc.headroom_multiplier(), 1);
        let packs = calc.calculate(10).unwrap();
        assert_eq!(packs, RequiredPacks::from([(3, 4)]));
    }
}
