//! Table-driven Unicode text-boundary analysis over UTF-16 text
//!
//! For every UTF-16 code unit of a buffer this crate computes whether a
//! grapheme cluster, word or sentence starts there, what kind of line-break
//! opportunity precedes it, and whether it is white space. The algorithms
//! follow UAX #14 (line breaking) and UAX #29 (text segmentation) with a small
//! set of deliberate deviations, and surrogate pairs are handled in every
//! engine through one shared decoding step.
//!
//! # Architecture
//!
//! - **unicode**: closed classification enums, the [`PropertyLookup`] service
//!   (ICU4X data by default), UTF-16 decoding and script itemization
//! - **engine**: constant dispatch tables and the grapheme/line, word,
//!   sentence and white space passes
//! - **analyzer**: the orchestrator, [`init_char_attributes`] and [`Analyzer`]
//! - **tailoring**: the [`Tailoring`] hook and the TOML-driven
//!   [`RuleTailoring`]
//!
//! # Example
//!
//! ```rust
//! use textbreak_core::{Analyzer, AttributeOptions, LineBreakType};
//!
//! let analyzer = Analyzer::new();
//! let attrs = analyzer.analyze_str("Hello world. Bye.", AttributeOptions::DEFAULT);
//!
//! assert!(attrs[0].is_sentence_boundary);
//! assert!(attrs[13].is_sentence_boundary);
//! assert_eq!(attrs[6].line_break, LineBreakType::Break);
//! ```
//!
//! With a tailoring:
//!
//! ```rust
//! use textbreak_core::{get_tailoring, Analyzer, AttributeOptions};
//!
//! let english = get_tailoring("en").unwrap();
//! let analyzer = Analyzer::builder().tailoring(english).build();
//! let attrs = analyzer.analyze_str("Mr. Smith left.", AttributeOptions::DEFAULT);
//!
//! assert!(!attrs[4].is_sentence_boundary);
//! ```

pub mod analyzer;
pub mod engine;
pub mod error;
pub mod options;
pub mod tailoring;
pub mod types;
pub mod unicode;

pub use analyzer::{init_char_attributes, Analyzer, AnalyzerBuilder};
pub use error::{CoreError, Result};
pub use options::AttributeOptions;
pub use tailoring::{get_tailoring, list_available_tailorings, RuleTailoring, Tailoring};
pub use types::{CharAttributes, LineBreakType};
pub use unicode::{
    script_runs, CharProperties, PropertyLookup, ScriptRun, UnicodeProperties,
};
