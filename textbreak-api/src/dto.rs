//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use crate::segments::{extract_segments, line_break_opportunities, LineBreakOpportunity, Segment, SegmentKind};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use textbreak_core::CharAttributes;

/// Input source for analysis
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// Analysis metadata with runtime statistics
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// UTF-8 length of the input
    pub total_bytes: usize,
    /// UTF-16 length of the input
    pub total_units: usize,
    /// Number of scalar values
    pub total_chars: usize,
    /// Analysis time in milliseconds
    pub processing_time_ms: u64,
    /// Throughput in MB/s
    pub throughput_mbps: f64,
    /// Attribute passes that were requested
    pub options: Vec<String>,
    /// Code of the tailoring that ran, if any
    pub tailoring: Option<String>,
}

/// Attributes of one input together with its text
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Analyzed text
    pub text: String,
    /// One entry per UTF-16 code unit of `text`
    pub attributes: Vec<CharAttributes>,
    /// Analysis metadata
    pub metadata: Metadata,
}

impl Output {
    /// Spans of `kind`
    pub fn segments(&self, kind: SegmentKind) -> Vec<Segment> {
        extract_segments(&self.text, &self.attributes, kind)
    }

    /// Grapheme clusters
    pub fn graphemes(&self) -> Vec<Segment> {
        self.segments(SegmentKind::Grapheme)
    }

    /// Words and the runs between them
    pub fn words(&self) -> Vec<Segment> {
        self.segments(SegmentKind::Word)
    }

    /// Sentences
    pub fn sentences(&self) -> Vec<Segment> {
        self.segments(SegmentKind::Sentence)
    }

    /// Line segments
    pub fn lines(&self) -> Vec<Segment> {
        self.segments(SegmentKind::Line)
    }

    /// Every line-break opportunity, forced breaks included
    pub fn line_break_opportunities(&self) -> Vec<LineBreakOpportunity> {
        line_break_opportunities(&self.attributes)
    }

    /// Number of UTF-16 code units analyzed
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True when the input was empty
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Pretty-printed JSON of the whole result.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
