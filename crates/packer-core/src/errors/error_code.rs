//! PackerErrorCode trait for boundary conversion.

/// Every error enum implements this to provide a structured error code
/// string for callers that translate errors into responses.
pub trait PackerErrorCode {
    /// Returns the error code string (e.g., "EMPTY_PACK_SIZES").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const EMPTY_PACK_SIZES: &str = "EMPTY_PACK_SIZES";
pub const GRAPH_INCONSISTENCY: &str = "GRAPH_INCONSISTENCY";
pub const INVALID_PACKAGE: &str = "INVALID_PACKAGE";
pub const DUPLICATE_PACKAGE: &str = "DUPLICATE_PACKAGE";
pub const CATALOG_UNAVAILABLE: &str = "CATALOG_UNAVAILABLE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
