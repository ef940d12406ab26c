//! Per-position attribute record

use core::fmt;
use serde::{Deserialize, Serialize};

/// Strength of a line-break opportunity
///
/// Ordered from weakest to strongest, so `kind >= LineBreakType::Break` means
/// "a line may end here".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LineBreakType {
    /// No break allowed
    #[default]
    NoBreak,
    /// Break allowed after a soft hyphen (a visible hyphen should be inserted)
    SoftHyphenBreak,
    /// Ordinary break opportunity
    Break,
    /// Mandatory break
    ForcedBreak,
}

impl LineBreakType {
    /// True for every kind except [`LineBreakType::NoBreak`].
    #[inline]
    pub fn is_opportunity(self) -> bool {
        self != LineBreakType::NoBreak
    }
}

impl fmt::Display for LineBreakType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineBreakType::NoBreak => write!(f, "none"),
            LineBreakType::SoftHyphenBreak => write!(f, "soft-hyphen"),
            LineBreakType::Break => write!(f, "break"),
            LineBreakType::ForcedBreak => write!(f, "forced"),
        }
    }
}

/// Boundary attributes of one UTF-16 code unit
///
/// `line_break` at index `i` describes the opportunity between unit `i - 1`
/// and unit `i`; the three boundary flags say that a segment starts at `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharAttributes {
    /// A grapheme cluster starts here
    pub is_char_stop: bool,
    /// Line-break opportunity before this unit
    pub line_break: LineBreakType,
    /// A word boundary precedes this unit
    pub is_word_boundary: bool,
    /// A sentence boundary precedes this unit
    pub is_sentence_boundary: bool,
    /// This unit is white space
    pub is_white_space: bool,
}

impl CharAttributes {
    /// Allocate a cleared attribute buffer for `len` code units.
    pub fn buffer(len: usize) -> Vec<CharAttributes> {
        vec![CharAttributes::default(); len]
    }
}
