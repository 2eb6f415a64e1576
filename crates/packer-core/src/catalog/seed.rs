//! Catalog seeding.

use tracing::debug;

use super::{Package, PackageCatalog};
use crate::constants::DEFAULT_PACKAGES;
use crate::errors::CatalogError;

/// The built-in packages: 250, 500, 1000, 2000, 5000.
pub fn default_packages() -> Vec<Package> {
    DEFAULT_PACKAGES
        .iter()
        .map(|&(id, quantity)| Package::new(id, quantity))
        .collect()
}

/// Insert every seed whose quantity is not already in the catalog.
///
/// Returns the number of packages inserted.
pub fn seed_packages(
    catalog: &dyn PackageCatalog,
    seeds: &[Package],
) -> Result<usize, CatalogError> {
    let existing = catalog.pack_sizes()?;
    let mut inserted = 0;

    for seed in seeds {
        if existing.contains(&seed.quantity) {
            debug!(id = %seed.id, quantity = seed.quantity, "seed already present");
            continue;
        }
        match catalog.insert_package(seed.clone()) {
            Ok(()) => inserted += 1,
            // Two seeds sharing a quantity: keep the first.
            Err(CatalogError::DuplicateQuantity { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    debug!(inserted, total = seeds.len(), "catalog seeded");
    Ok(inserted)
}
