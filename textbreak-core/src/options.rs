//! Analysis selection flags

use bitflags::bitflags;

bitflags! {
    /// Which analyses [`crate::init_char_attributes`] should run
    ///
    /// Unknown bits coming from raw integers are dropped with
    /// [`AttributeOptions::from_bits_truncate`] rather than rejected.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AttributeOptions: u32 {
        /// Grapheme cluster boundaries (`is_char_stop`)
        const GRAPHEME_BREAKS = 1 << 0;
        /// Word boundaries; implies [`Self::GRAPHEME_BREAKS`]
        const WORD_BREAKS = 1 << 1;
        /// Sentence boundaries; implies [`Self::GRAPHEME_BREAKS`]
        const SENTENCE_BREAKS = 1 << 2;
        /// Line-break opportunities
        const LINE_BREAKS = 1 << 3;
        /// White space flags
        const WHITE_SPACES = 1 << 4;
        /// Keep the caller's buffer contents instead of resetting them first
        const DONT_CLEAR_ATTRIBUTES = 1 << 5;

        /// Every analysis, buffer cleared first
        const DEFAULT = Self::GRAPHEME_BREAKS.bits()
            | Self::WORD_BREAKS.bits()
            | Self::SENTENCE_BREAKS.bits()
            | Self::LINE_BREAKS.bits()
            | Self::WHITE_SPACES.bits();
    }
}

impl Default for AttributeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl AttributeOptions {
    /// Add the analyses the requested ones depend on.
    pub fn resolved(self) -> Self {
        if self.intersects(Self::WORD_BREAKS | Self::SENTENCE_BREAKS) {
            self | Self::GRAPHEME_BREAKS
        } else {
            self
        }
    }

    /// True when the combined grapheme/line engine has to run.
    pub fn needs_grapheme_line(self) -> bool {
        self.intersects(Self::GRAPHEME_BREAKS | Self::LINE_BREAKS)
    }
}
