//! Error types for textbreak-core
//!
//! The engines themselves never fail; only loading and building tailorings can.

use thiserror::Error;

/// Core errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// No embedded tailoring with this code
    #[error("tailoring '{0}' is not available")]
    UnsupportedTailoring(String),

    /// Semantically invalid tailoring configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A suppression pattern failed to compile
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compiler error
        #[source]
        source: regex::Error,
    },

    /// A script name that ICU does not know
    #[error("unknown script '{0}'")]
    UnknownScript(String),

    /// Malformed TOML
    #[error("failed to parse tailoring configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Reading an external configuration file failed
    #[error("failed to read '{path}': {source}")]
    Io {
        /// File that could not be read
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
