//! # packer-core
//!
//! Foundation crate for the Packer pack calculator.
//! Defines the shared types, errors, config, tracing setup, constants,
//! and the package catalog that feeds pack sizes to the calculator.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use catalog::{InMemoryCatalog, Package, PackageCatalog};
pub use config::PackerConfig;
pub use errors::{CalcError, CatalogError, ConfigError, PackerErrorCode};
pub use models::Response;
pub use types::{PackSize, Quantity, RequiredPacks};
