//! Error handling for Packer.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod calc_error;
pub mod catalog_error;
pub mod config_error;
pub mod error_code;

pub use calc_error::CalcError;
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::PackerErrorCode;
