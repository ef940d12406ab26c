//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input matched the given patterns
    NoInputFiles(Vec<String>),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Conflicting or unusable options
    ConfigError(String),
    /// Analysis failed
    AnalysisError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles(patterns) => {
                write!(f, "No files found matching: {}", patterns.join(", "))
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::AnalysisError(msg) => write!(f, "Analysis error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
