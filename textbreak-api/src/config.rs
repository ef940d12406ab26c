//! High-level configuration API

use crate::error::{ApiError, Result};
use std::path::{Path, PathBuf};
use textbreak_core::AttributeOptions;

/// Batch size above which [`crate::Segmenter::analyze_batch`] goes parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4;

/// Where the tailoring comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TailoringSource {
    /// Default algorithms only
    #[default]
    None,
    /// One of the embedded tailorings, by code or name
    Embedded(String),
    /// A TOML tailoring configuration on disk
    File(PathBuf),
}

/// High-level configuration for boundary analysis
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) options: AttributeOptions,
    pub(crate) tailoring: TailoringSource,
    pub(crate) default_algorithm_only: bool,
    pub(crate) parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: AttributeOptions::DEFAULT,
            tailoring: TailoringSource::None,
            default_algorithm_only: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Attributes computed for every input
    pub fn options(&self) -> AttributeOptions {
        self.options
    }

    /// Configured tailoring source
    pub fn tailoring(&self) -> &TailoringSource {
        &self.tailoring
    }

    /// Whether the tailoring is bypassed
    pub fn default_algorithm_only(&self) -> bool {
        self.default_algorithm_only
    }

    /// Batch size above which batches are analyzed in parallel
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the attributes to compute
    pub fn options(mut self, options: AttributeOptions) -> Self {
        self.config.options = options;
        self
    }

    /// Use an embedded tailoring
    pub fn tailoring(mut self, code: impl Into<String>) -> Self {
        self.config.tailoring = TailoringSource::Embedded(code.into());
        self
    }

    /// Load the tailoring from a TOML file
    pub fn tailoring_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config.tailoring = TailoringSource::File(path.as_ref().to_path_buf());
        self
    }

    /// Skip the tailoring even when one is configured
    pub fn default_algorithm_only(mut self, enabled: bool) -> Self {
        self.config.default_algorithm_only = enabled;
        self
    }

    /// Set the batch size above which batches are analyzed in parallel
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.options.is_empty() {
            return Err(ApiError::Config(
                "at least one attribute kind must be requested".to_string(),
            ));
        }
        if let TailoringSource::Embedded(code) = &self.config.tailoring {
            if code.trim().is_empty() {
                return Err(ApiError::Config("tailoring code is empty".to_string()));
            }
        }
        Ok(self.config)
    }
}
