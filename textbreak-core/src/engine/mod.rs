//! The segmentation engines
//!
//! Each engine is a free function over borrowed units and a caller-owned
//! attribute slice. The word and sentence engines read the `is_char_stop`
//! flags written by [`grapheme_line::analyze`], so it has to run first.

pub mod grapheme_line;
pub mod sentence;
pub mod tables;
pub mod whitespace;
pub mod word;

pub use tables::{BreakTier, SentenceState, WordRule};
