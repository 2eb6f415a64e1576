//! Package catalog: the ordered set of pack-size records the calculator draws from.
//!
//! All mutation goes through a single lock; reads hand out snapshots so a
//! caller never observes later inserts or removals through a returned list.

pub mod memory;
pub mod package;
pub mod seed;

pub use memory::InMemoryCatalog;
pub use package::Package;
pub use seed::{default_packages, seed_packages};

use crate::errors::CatalogError;
use crate::types::PackSize;

/// Storage capability for pack-size records.
pub trait PackageCatalog: Send + Sync {
    /// All packages in insertion order, as an independent snapshot.
    fn get_all(&self) -> Result<Vec<Package>, CatalogError>;

    /// Insert a package. Rejects zero quantities and quantities already present.
    fn insert_package(&self, package: Package) -> Result<(), CatalogError>;

    /// Remove the package with `id`. Returns whether anything was removed.
    fn remove_package_by_id(&self, id: &str) -> Result<bool, CatalogError>;

    /// Pack sizes of every package, in insertion order.
    fn pack_sizes(&self) -> Result<Vec<PackSize>, CatalogError> {
        Ok(self.get_all()?.into_iter().map(|p| p.quantity).collect())
    }
}
