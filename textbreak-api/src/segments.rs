//! Segment extraction from attribute arrays

use std::fmt;
use std::str::FromStr;
use textbreak_core::{AttributeOptions, CharAttributes, LineBreakType};

/// Unit of segmentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SegmentKind {
    /// Grapheme clusters
    Grapheme,
    /// Words, including the space and punctuation runs between them
    Word,
    /// Sentences with their trailing space
    Sentence,
    /// Spans between line-break opportunities
    Line,
}

impl SegmentKind {
    /// All kinds, in analysis order
    pub const ALL: [SegmentKind; 4] = [
        SegmentKind::Grapheme,
        SegmentKind::Word,
        SegmentKind::Sentence,
        SegmentKind::Line,
    ];

    /// Attribute pass that produces this kind of boundary
    pub fn option(self) -> AttributeOptions {
        match self {
            SegmentKind::Grapheme => AttributeOptions::GRAPHEME_BREAKS,
            SegmentKind::Word => AttributeOptions::WORD_BREAKS,
            SegmentKind::Sentence => AttributeOptions::SENTENCE_BREAKS,
            SegmentKind::Line => AttributeOptions::LINE_BREAKS,
        }
    }

    fn starts_at(self, attributes: &CharAttributes) -> bool {
        match self {
            SegmentKind::Grapheme => attributes.is_char_stop,
            SegmentKind::Word => attributes.is_word_boundary,
            SegmentKind::Sentence => attributes.is_sentence_boundary,
            SegmentKind::Line => attributes.line_break.is_opportunity(),
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentKind::Grapheme => "grapheme",
            SegmentKind::Word => "word",
            SegmentKind::Sentence => "sentence",
            SegmentKind::Line => "line",
        };
        f.write_str(name)
    }
}

impl FromStr for SegmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grapheme" | "graphemes" => Ok(SegmentKind::Grapheme),
            "word" | "words" => Ok(SegmentKind::Word),
            "sentence" | "sentences" => Ok(SegmentKind::Sentence),
            "line" | "lines" => Ok(SegmentKind::Line),
            other => Err(format!("unknown segment kind '{other}'")),
        }
    }
}

/// A span of text between two boundaries of one kind
///
/// `start`/`end` are UTF-16 code unit indices, `byte_start`/`byte_end` the
/// matching UTF-8 byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Boundary kind the span was cut at
    pub kind: SegmentKind,
    /// First code unit
    pub start: usize,
    /// One past the last code unit
    pub end: usize,
    /// Text of the span
    pub text: String,
    /// UTF-8 offset of `start`
    pub byte_start: usize,
    /// UTF-8 offset of `end`
    pub byte_end: usize,
}

/// A position where a line may (or must) be broken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineBreakOpportunity {
    /// UTF-16 index of the first unit of the new line
    pub index: usize,
    /// Kind of opportunity
    pub kind: LineBreakType,
}

/// Byte offset of every UTF-16 index of `text`, plus the end.
///
/// The second unit of a surrogate pair has no byte offset of its own.
fn byte_offsets(text: &str) -> Vec<Option<usize>> {
    let mut offsets = Vec::with_capacity(text.len() + 1);
    for (byte, ch) in text.char_indices() {
        offsets.push(Some(byte));
        if ch.len_utf16() == 2 {
            offsets.push(None);
        }
    }
    offsets.push(Some(text.len()));
    offsets
}

/// Split `text` at the boundaries of `kind` recorded in `attributes`.
///
/// `attributes` must have been computed for `text`; boundaries inside a
/// surrogate pair are ignored.
pub fn extract_segments(
    text: &str,
    attributes: &[CharAttributes],
    kind: SegmentKind,
) -> Vec<Segment> {
    let offsets = byte_offsets(text);
    let len = offsets.len() - 1;
    let mut segments = Vec::new();
    let mut start = 0;

    for end in 1..=len {
        let closes = end == len
            || (offsets[end].is_some() && attributes.get(end).is_some_and(|a| kind.starts_at(a)));
        if !closes {
            continue;
        }
        if let (Some(byte_start), Some(byte_end)) = (offsets[start], offsets[end]) {
            segments.push(Segment {
                kind,
                start,
                end,
                text: text[byte_start..byte_end].to_string(),
                byte_start,
                byte_end,
            });
        }
        start = end;
    }
    segments
}

/// Every line-break opportunity in `attributes`, in order.
pub fn line_break_opportunities(attributes: &[CharAttributes]) -> Vec<LineBreakOpportunity> {
    attributes
        .iter()
        .enumerate()
        .filter(|(_, a)| a.line_break.is_opportunity())
        .map(|(index, a)| LineBreakOpportunity {
            index,
            kind: a.line_break,
        })
        .collect()
}
