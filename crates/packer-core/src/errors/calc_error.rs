//! Calculation errors.

use super::error_code::{self, PackerErrorCode};
use super::CatalogError;
use crate::types::Quantity;

/// Errors that can occur while calculating required packs.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("no pack sizes available to fulfill quantity {quantity}")]
    EmptyPackSizeSet { quantity: Quantity },

    #[error("quantity graph inconsistency: {details}")]
    GraphInconsistency { details: String },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl PackerErrorCode for CalcError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyPackSizeSet { .. } => error_code::EMPTY_PACK_SIZES,
            Self::GraphInconsistency { .. } => error_code::GRAPH_INCONSISTENCY,
            Self::Catalog(e) => e.error_code(),
        }
    }
}
