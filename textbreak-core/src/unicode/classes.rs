//! Closed classification enums used as table indices
//!
//! The discriminants are part of the table layout in [`crate::engine::tables`];
//! reordering a variant means reordering the matching table row and column.

/// Line-break class (UAX #14), reduced to the classes the pair table knows
/// plus the ones the engine handles outside the table.
///
/// Everything from [`LineBreakClass::SA`] onwards is resolved before the
/// table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LineBreakClass {
    /// Open punctuation
    OP,
    /// Close punctuation
    CL,
    /// Ambiguous quotation
    QU,
    /// Non-breaking glue
    GL,
    /// Nonstarter
    NS,
    /// Exclamation / interrogation
    EX,
    /// Symbols allowing break after
    SY,
    /// Infix numeric separator
    IS,
    /// Prefix numeric
    PR,
    /// Postfix numeric
    PO,
    /// Numeric
    NU,
    /// Alphabetic
    AL,
    /// Ideographic
    ID,
    /// Inseparable
    IN,
    /// Hyphen
    HY,
    /// Break after
    BA,
    /// Break before
    BB,
    /// Break opportunity before and after
    B2,
    /// Zero width space
    ZW,
    /// Combining mark
    CM,
    /// Word joiner
    WJ,
    /// Hangul LV syllable
    H2,
    /// Hangul LVT syllable
    H3,
    /// Hangul leading jamo
    JL,
    /// Hangul vowel jamo
    JV,
    /// Hangul trailing jamo
    JT,
    /// Complex context (South East Asian)
    SA,
    /// Surrogate
    SG,
    /// Space
    SP,
    /// Carriage return
    CR,
    /// Line feed
    LF,
    /// Mandatory break (also covers NL)
    BK,
}

impl LineBreakClass {
    /// Number of classes covered by the pair table (OP through JT).
    pub const TABLE_SIZE: usize = LineBreakClass::JT as usize + 1;

    /// CR, LF or BK: classes that force a break after them.
    #[inline]
    pub fn is_mandatory(self) -> bool {
        matches!(self, LineBreakClass::CR | LineBreakClass::LF | LineBreakClass::BK)
    }

    /// Class used for the pair-table lookup. SA, SG and the classes outside
    /// the table resolve to AL.
    #[inline]
    pub fn table_class(self) -> LineBreakClass {
        if self >= LineBreakClass::SA {
            LineBreakClass::AL
        } else {
            self
        }
    }
}

/// Grapheme cluster break class (UAX #29).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GraphemeClass {
    Other,
    CR,
    LF,
    Control,
    Extend,
    L,
    V,
    T,
    LV,
    LVT,
}

impl GraphemeClass {
    pub const COUNT: usize = GraphemeClass::LVT as usize + 1;
}

/// Word break class (UAX #29), collapsed to the eight classes of the word table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WordClass {
    Other,
    Format,
    Katakana,
    ALetter,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
}

impl WordClass {
    pub const COUNT: usize = WordClass::ExtendNumLet as usize + 1;
}

/// Sentence break class (UAX #29).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SentenceClass {
    Other,
    Sep,
    Format,
    Sp,
    Lower,
    Upper,
    OLetter,
    Numeric,
    ATerm,
    STerm,
    Close,
}

impl SentenceClass {
    pub const COUNT: usize = SentenceClass::Close as usize + 1;
}

/// The four classifications of one scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharProperties {
    pub line: LineBreakClass,
    pub grapheme: GraphemeClass,
    pub word: WordClass,
    pub sentence: SentenceClass,
}

impl CharProperties {
    /// Properties given to an unpaired surrogate code unit.
    pub const LONE_SURROGATE: CharProperties = CharProperties {
        line: LineBreakClass::AL,
        grapheme: GraphemeClass::Control,
        word: WordClass::Other,
        sentence: SentenceClass::Other,
    };
}
