//! Catalog seed configuration.

use serde::{Deserialize, Serialize};

use crate::catalog::{default_packages, Package};

/// Packages the catalog is seeded with at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Seed packages. Empty means the built-in defaults (250..5000).
    pub packages: Vec<Package>,
}

impl CatalogConfig {
    /// Returns the configured seeds, falling back to the built-in defaults.
    pub fn effective_packages(&self) -> Vec<Package> {
        if self.packages.is_empty() {
            default_packages()
        } else {
            self.packages.clone()
        }
    }
}
