//! Output formatting module

use anyhow::Result;
use textbreak_api::{CharAttributes, Segment};

/// Trait for output formatters
///
/// A formatter receives one `begin_source` per analyzed input followed by
/// either segments or attribute rows, and a single `finish` at the end.
pub trait OutputFormatter: Send + Sync {
    /// Start the results of one input
    fn begin_source(&mut self, source: &str) -> Result<()>;

    /// Format and output a single segment
    fn format_segment(&mut self, segment: &Segment) -> Result<()>;

    /// Format and output the attributes of one code unit
    fn format_attributes(
        &mut self,
        index: usize,
        unit: u16,
        attributes: &CharAttributes,
    ) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Compact flag column used by the text and Markdown formatters
pub(crate) fn flag_column(attributes: &CharAttributes) -> String {
    let flag = |set: bool, c: char| if set { c } else { '-' };
    [
        flag(attributes.is_char_stop, 'G'),
        flag(attributes.is_word_boundary, 'W'),
        flag(attributes.is_sentence_boundary, 'S'),
        flag(attributes.is_white_space, '_'),
    ]
    .iter()
    .collect()
}
