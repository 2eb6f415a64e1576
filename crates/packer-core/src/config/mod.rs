//! Configuration system for Packer.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod calculator_config;
pub mod catalog_config;
pub mod logging_config;
pub mod packer_config;

pub use calculator_config::CalculatorConfig;
pub use catalog_config::CatalogConfig;
pub use logging_config::LoggingConfig;
pub use packer_config::{CliOverrides, PackerConfig};
