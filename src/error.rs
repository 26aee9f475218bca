//! Error types for the chromatap library

use thiserror::Error;

/// Result type alias for chromatap operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for color naming and harmony generation.
///
/// The two core operations (`nearest_name`, `generate`) are total over the
/// RGB domain and never fail; errors can only occur at the boundary, when
/// constructing tables, parsing hex strings, or loading configuration.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Reference table constructed with no entries
    #[error("Named color table is empty")]
    EmptyTable,

    /// Hex color string could not be parsed
    #[error("Invalid hex color '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    /// Configuration parameter outside its valid range
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or written
    #[error("Config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration file is not valid JSON
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl PaletteError {
    /// Create an invalid-hex error with context
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl std::fmt::Display) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }
}
