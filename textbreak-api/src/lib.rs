//! Public API for textbreak boundary analysis
//!
//! This crate wraps `textbreak-core` in a stable interface: text comes in as
//! strings, bytes, files or readers, and results come back as attribute
//! arrays with helpers to cut them into segments.
//!
//! ```rust
//! use textbreak_api::{Segmenter, SegmentKind};
//!
//! let segmenter = Segmenter::new();
//! let output = segmenter.analyze_text("Hello world. Bye.").unwrap();
//! let sentences: Vec<_> = output.sentences().into_iter().map(|s| s.text).collect();
//! assert_eq!(sentences, vec!["Hello world. ", "Bye."]);
//! assert_eq!(output.segments(SegmentKind::Word)[0].text, "Hello");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod segments;

use error::Result;
use log::debug;
use std::sync::Arc;
use std::time::Instant;
use textbreak_core::{get_tailoring, Analyzer, RuleTailoring};

// Re-export key types
pub use config::{Config, ConfigBuilder, TailoringSource};
pub use dto::{Input, Metadata, Output};
pub use error::ApiError;
pub use segments::{extract_segments, LineBreakOpportunity, Segment, SegmentKind};
pub use textbreak_core::{AttributeOptions, CharAttributes, LineBreakType};

/// Main entry point for boundary analysis
///
/// A segmenter is cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    analyzer: Analyzer,
    config: Config,
    tailoring_code: Option<String>,
}

impl Segmenter {
    /// Create a segmenter with default options and no tailoring
    pub fn new() -> Self {
        Self {
            analyzer: Analyzer::new(),
            config: Config::default(),
            tailoring_code: None,
        }
    }

    /// Create a segmenter using one of the embedded tailorings
    pub fn with_tailoring(code: &str) -> Result<Self> {
        let config = Config::builder().tailoring(code).build()?;
        Self::with_config(config)
    }

    /// Create a segmenter from a configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let tailoring = match &config.tailoring {
            TailoringSource::None => None,
            TailoringSource::Embedded(code) => Some(get_tailoring(code)?),
            TailoringSource::File(path) => Some(Arc::new(RuleTailoring::from_file(path)?)),
        };
        let tailoring_code = tailoring.as_ref().map(|t| t.code().to_string());

        let mut builder = Analyzer::builder().default_algorithm_only(config.default_algorithm_only);
        if let Some(tailoring) = tailoring {
            debug!("segmenter uses tailoring '{}'", tailoring.code());
            builder = builder.tailoring(tailoring);
        }

        Ok(Self {
            analyzer: builder.build(),
            config,
            tailoring_code,
        })
    }

    /// Analyze one input
    pub fn analyze(&self, input: Input) -> Result<Output> {
        let start = Instant::now();

        let text = input.read_text()?;
        let units: Vec<u16> = text.encode_utf16().collect();
        let attributes = self.analyzer.analyze(&units, self.config.options);

        let elapsed = start.elapsed();
        let metadata = Metadata {
            total_bytes: text.len(),
            total_units: units.len(),
            total_chars: text.chars().count(),
            processing_time_ms: elapsed.as_millis() as u64,
            throughput_mbps: throughput(text.len(), elapsed.as_secs_f64()),
            options: self
                .config
                .options
                .iter_names()
                .map(|(name, _)| name.to_ascii_lowercase())
                .collect(),
            tailoring: self.active_tailoring().map(str::to_string),
        };

        Ok(Output {
            text,
            attributes,
            metadata,
        })
    }

    /// Analyze text directly (convenience method)
    pub fn analyze_text(&self, text: &str) -> Result<Output> {
        self.analyze(Input::from_text(text))
    }

    /// Analyze independent inputs, in input order.
    ///
    /// Batches larger than the configured parallel threshold are spread over
    /// the rayon thread pool when the `parallel` feature is enabled. The first
    /// failing input aborts the batch.
    pub fn analyze_batch(&self, inputs: Vec<Input>) -> Result<Vec<Output>> {
        #[cfg(feature = "parallel")]
        if inputs.len() > self.config.parallel_threshold {
            use rayon::prelude::*;

            debug!("analyzing {} inputs in parallel", inputs.len());
            return inputs
                .into_par_iter()
                .map(|input| self.analyze(input))
                .collect();
        }

        debug!("analyzing {} inputs sequentially", inputs.len());
        inputs.into_iter().map(|input| self.analyze(input)).collect()
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Code of the tailoring that runs on each input, if any
    pub fn active_tailoring(&self) -> Option<&str> {
        if self.config.default_algorithm_only {
            None
        } else {
            self.tailoring_code.as_deref()
        }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn throughput(bytes: usize, seconds: f64) -> f64 {
    if seconds > 0.0 {
        (bytes as f64 / 1_048_576.0) / seconds
    } else {
        0.0
    }
}

// Convenience functions

/// Analyze text with default configuration
pub fn analyze_text(text: &str) -> Result<Output> {
    Segmenter::new().analyze_text(text)
}

/// Analyze a file with default configuration
pub fn analyze_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    Segmenter::new().analyze(Input::from_file(path.as_ref().to_path_buf()))
}

/// Analyze text with one of the embedded tailorings
pub fn analyze_text_with_tailoring(text: &str, code: &str) -> Result<Output> {
    Segmenter::with_tailoring(code)?.analyze_text(text)
}

/// Codes of the embedded tailorings
pub fn available_tailorings() -> Vec<&'static str> {
    textbreak_core::list_available_tailorings()
}
