//! Package records held by the catalog.

use serde::{Deserialize, Serialize};

use crate::types::PackSize;

/// A pack-size record: an identifier and the quantity one pack holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub quantity: PackSize,
}

impl Package {
    pub fn new(id: impl Into<String>, quantity: PackSize) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}
