//! Error types for the typeahead index
//!
//! Index operations (add, remove, clear, search) never fail: degenerate input
//! yields an empty contribution or an empty result. Errors only surface where
//! a caller hands us something we must parse or validate up front.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for typeahead operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the typeahead index
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Match mode string was neither "all" nor "any"
    #[error("Invalid match mode '{0}': expected \"all\" or \"any\"")]
    InvalidMatchMode(String),

    /// Configuration document could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}
