//! Package catalog errors.

use super::error_code::{self, PackerErrorCode};
use crate::types::PackSize;

/// Errors raised by a package catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("package {id} has invalid quantity {quantity}: must be greater than 0")]
    InvalidQuantity { id: String, quantity: PackSize },

    #[error("package with quantity {quantity} already exists")]
    DuplicateQuantity { quantity: PackSize },

    #[error("catalog lock poisoned: {message}")]
    LockPoisoned { message: String },
}

impl PackerErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidQuantity { .. } => error_code::INVALID_PACKAGE,
            Self::DuplicateQuantity { .. } => error_code::DUPLICATE_PACKAGE,
            Self::LockPoisoned { .. } => error_code::CATALOG_UNAVAILABLE,
        }
    }
}
