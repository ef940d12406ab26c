//! Character property lookup
//!
//! The engines only see [`CharProperties`]; where the values come from is the
//! business of a [`PropertyLookup`] implementation. [`UnicodeProperties`] is
//! the default one, backed by the ICU4X compiled property data.

use super::classes::{CharProperties, GraphemeClass, LineBreakClass, SentenceClass, WordClass};
use super::utf16::Scalar;
use icu_properties::props::{GraphemeClusterBreak, LineBreak, SentenceBreak, WordBreak};
use icu_properties::CodePointMapData;

/// Pure per-scalar classification service
///
/// Implementations must be deterministic and cheap (O(1)); the engines call
/// them for every scalar and again during lookahead.
pub trait PropertyLookup: Send + Sync {
    /// All four classes of a scalar value.
    fn properties(&self, ch: char) -> CharProperties;

    /// Sentence class on its own, used by the word engine's Format rule.
    fn sentence_class(&self, ch: char) -> SentenceClass {
        self.properties(ch).sentence
    }

    /// Properties of a decoded scalar; unpaired surrogates get the fallback.
    #[inline]
    fn scalar_properties(&self, scalar: Scalar) -> CharProperties {
        match scalar {
            Scalar::Char(ch) => self.properties(ch),
            Scalar::LoneSurrogate(_) => CharProperties::LONE_SURROGATE,
        }
    }

    /// Sentence class of a decoded scalar.
    #[inline]
    fn scalar_sentence_class(&self, scalar: Scalar) -> SentenceClass {
        match scalar {
            Scalar::Char(ch) => self.sentence_class(ch),
            Scalar::LoneSurrogate(_) => CharProperties::LONE_SURROGATE.sentence,
        }
    }
}

impl<T: PropertyLookup + ?Sized> PropertyLookup for &T {
    fn properties(&self, ch: char) -> CharProperties {
        (**self).properties(ch)
    }

    fn sentence_class(&self, ch: char) -> SentenceClass {
        (**self).sentence_class(ch)
    }
}

/// Property lookup over the Unicode Character Database shipped with ICU4X
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeProperties;

impl UnicodeProperties {
    pub fn new() -> Self {
        Self
    }

    /// Line-break class of `ch`.
    pub fn line_break_class(ch: char) -> LineBreakClass {
        map_line_break(CodePointMapData::<LineBreak>::new().get(ch))
    }

    /// Grapheme break class of `ch`.
    pub fn grapheme_class(ch: char) -> GraphemeClass {
        map_grapheme(CodePointMapData::<GraphemeClusterBreak>::new().get(ch))
    }

    /// Word break class of `ch`.
    pub fn word_class(ch: char) -> WordClass {
        map_word(CodePointMapData::<WordBreak>::new().get(ch))
    }
}

impl PropertyLookup for UnicodeProperties {
    #[inline]
    fn properties(&self, ch: char) -> CharProperties {
        CharProperties {
            line: Self::line_break_class(ch),
            grapheme: Self::grapheme_class(ch),
            word: Self::word_class(ch),
            sentence: self.sentence_class(ch),
        }
    }

    #[inline]
    fn sentence_class(&self, ch: char) -> SentenceClass {
        map_sentence(CodePointMapData::<SentenceBreak>::new().get(ch))
    }
}

fn map_line_break(value: LineBreak) -> LineBreakClass {
    match value {
        LineBreak::OpenPunctuation => LineBreakClass::OP,
        LineBreak::ClosePunctuation | LineBreak::CloseParenthesis => LineBreakClass::CL,
        LineBreak::Quotation => LineBreakClass::QU,
        LineBreak::Glue => LineBreakClass::GL,
        LineBreak::Nonstarter | LineBreak::ConditionalJapaneseStarter => LineBreakClass::NS,
        LineBreak::Exclamation => LineBreakClass::EX,
        LineBreak::BreakSymbols => LineBreakClass::SY,
        LineBreak::InfixNumeric => LineBreakClass::IS,
        LineBreak::PrefixNumeric => LineBreakClass::PR,
        LineBreak::PostfixNumeric => LineBreakClass::PO,
        LineBreak::Numeric => LineBreakClass::NU,
        LineBreak::Ideographic | LineBreak::EBase | LineBreak::EModifier => LineBreakClass::ID,
        LineBreak::Inseparable => LineBreakClass::IN,
        LineBreak::Hyphen => LineBreakClass::HY,
        LineBreak::BreakAfter => LineBreakClass::BA,
        LineBreak::BreakBefore => LineBreakClass::BB,
        LineBreak::BreakBoth => LineBreakClass::B2,
        LineBreak::ZWSpace => LineBreakClass::ZW,
        LineBreak::CombiningMark | LineBreak::ZWJ => LineBreakClass::CM,
        LineBreak::WordJoiner => LineBreakClass::WJ,
        LineBreak::H2 => LineBreakClass::H2,
        LineBreak::H3 => LineBreakClass::H3,
        LineBreak::JL => LineBreakClass::JL,
        LineBreak::JV => LineBreakClass::JV,
        LineBreak::JT => LineBreakClass::JT,
        LineBreak::ComplexContext => LineBreakClass::SA,
        LineBreak::Surrogate => LineBreakClass::SG,
        LineBreak::Space => LineBreakClass::SP,
        LineBreak::CarriageReturn => LineBreakClass::CR,
        LineBreak::LineFeed => LineBreakClass::LF,
        LineBreak::MandatoryBreak | LineBreak::NextLine => LineBreakClass::BK,
        // AI, XX, CB, HL, RI and newer classes
        _ => LineBreakClass::AL,
    }
}

fn map_grapheme(value: GraphemeClusterBreak) -> GraphemeClass {
    match value {
        GraphemeClusterBreak::CR => GraphemeClass::CR,
        GraphemeClusterBreak::LF => GraphemeClass::LF,
        GraphemeClusterBreak::Control => GraphemeClass::Control,
        GraphemeClusterBreak::Extend
        | GraphemeClusterBreak::SpacingMark
        | GraphemeClusterBreak::ZWJ
        | GraphemeClusterBreak::EModifier => GraphemeClass::Extend,
        GraphemeClusterBreak::L => GraphemeClass::L,
        GraphemeClusterBreak::V => GraphemeClass::V,
        GraphemeClusterBreak::T => GraphemeClass::T,
        GraphemeClusterBreak::LV => GraphemeClass::LV,
        GraphemeClusterBreak::LVT => GraphemeClass::LVT,
        _ => GraphemeClass::Other,
    }
}

fn map_word(value: WordBreak) -> WordClass {
    match value {
        WordBreak::Format | WordBreak::Extend | WordBreak::ZWJ => WordClass::Format,
        WordBreak::Katakana => WordClass::Katakana,
        WordBreak::ALetter | WordBreak::HebrewLetter => WordClass::ALetter,
        WordBreak::MidLetter | WordBreak::MidNumLet | WordBreak::SingleQuote => {
            WordClass::MidLetter
        }
        WordBreak::MidNum => WordClass::MidNum,
        WordBreak::Numeric => WordClass::Numeric,
        WordBreak::ExtendNumLet => WordClass::ExtendNumLet,
        _ => WordClass::Other,
    }
}

fn map_sentence(value: SentenceBreak) -> SentenceClass {
    match value {
        SentenceBreak::Sep | SentenceBreak::CR | SentenceBreak::LF => SentenceClass::Sep,
        SentenceBreak::Format | SentenceBreak::Extend => SentenceClass::Format,
        SentenceBreak::Sp => SentenceClass::Sp,
        SentenceBreak::Lower => SentenceClass::Lower,
        SentenceBreak::Upper => SentenceClass::Upper,
        SentenceBreak::OLetter => SentenceClass::OLetter,
        SentenceBreak::Numeric => SentenceClass::Numeric,
        SentenceBreak::ATerm => SentenceClass::ATerm,
        SentenceBreak::STerm => SentenceClass::STerm,
        SentenceBreak::Close => SentenceClass::Close,
        _ => SentenceClass::Other,
    }
}
