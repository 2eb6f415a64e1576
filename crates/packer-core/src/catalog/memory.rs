//! Mutex-guarded in-memory catalog.

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};

use super::{Package, PackageCatalog};
use crate::errors::CatalogError;

/// In-memory `PackageCatalog`. Cheap to share behind an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    packages: Mutex<Vec<Package>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Package>>, CatalogError> {
        self.packages.lock().map_err(|e| CatalogError::LockPoisoned {
            message: e.to_string(),
        })
    }
}

impl PackageCatalog for InMemoryCatalog {
    fn get_all(&self) -> Result<Vec<Package>, CatalogError> {
        Ok(self.lock()?.clone())
    }

    fn insert_package(&self, package: Package) -> Result<(), CatalogError> {
        if package.quantity == 0 {
            return Err(CatalogError::InvalidQuantity {
                id: package.id,
                quantity: package.quantity,
            });
        }

        let mut packages = self.lock()?;
        if packages.iter().any(|p| p.quantity == package.quantity) {
            return Err(CatalogError::DuplicateQuantity {
                quantity: package.quantity,
            });
        }

        info!(id = %package.id, quantity = package.quantity, "package inserted");
        packages.push(package);
        Ok(())
    }

    fn remove_package_by_id(&self, id: &str) -> Result<bool, CatalogError> {
        let mut packages = self.lock()?;
        match packages.iter().position(|p| p.id == id) {
            Some(pos) => {
                let removed = packages.remove(pos);
                info!(id, quantity = removed.quantity, "package removed");
                Ok(true)
            }
            None => {
                debug!(id, "remove requested for unknown package");
                Ok(false)
            }
        }
    }
}
