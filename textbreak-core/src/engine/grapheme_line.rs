//! Combined grapheme cluster and line-break pass
//!
//! Both analyses scan the same left/right pairs of scalars, so they share one
//! loop. Line-break decisions are first written against the unit *after which*
//! the break would occur (the decision for the gap before scalar `n` needs
//! `n`'s class), then shifted one slot forward at the end so that
//! `attributes[i].line_break` describes the gap before unit `i`.

use super::tables::{is_grapheme_boundary, line_break_tier, BreakTier};
use crate::types::{CharAttributes, LineBreakType};
use crate::unicode::{decode_at, GraphemeClass, LineBreakClass, PropertyLookup, Scalar};

const SOFT_HYPHEN: u32 = 0x00AD;

/// Running state of the scan
#[derive(Debug, Clone, Copy)]
struct LineState {
    /// Class the next pair lookup starts from; spaces and absorbed combining
    /// marks leave it untouched
    cls: LineBreakClass,
    /// Class of the scalar directly before the current one
    lcls: LineBreakClass,
    /// Grapheme class of the previous scalar
    grapheme: GraphemeClass,
    /// Previous scalar and the index of its first unit
    prev: Scalar,
    prev_start: usize,
}

impl LineState {
    fn new(first: Scalar, line: LineBreakClass, grapheme: GraphemeClass) -> Self {
        // A leading LF behaves like any other mandatory break
        let cls = if line == LineBreakClass::LF {
            LineBreakClass::BK
        } else {
            line
        };
        Self {
            cls,
            lcls: cls,
            grapheme,
            prev: first,
            prev_start: 0,
        }
    }

    /// Decide the gap between the previous scalar and one of class `next`.
    ///
    /// May rewrite the already recorded gap before the previous scalar (see
    /// [`apply_lookbehind_correction`]).
    fn resolve(&mut self, next: LineBreakClass, attributes: &mut [CharAttributes]) -> LineBreakType {
        use LineBreakClass::{CR, LF, SP};

        if self.cls.is_mandatory() {
            let kind = if self.cls == CR && next == LF {
                LineBreakType::NoBreak
            } else {
                LineBreakType::ForcedBreak
            };
            self.cls = next;
            return kind;
        }

        if next == SP {
            return LineBreakType::NoBreak;
        }
        if next.is_mandatory() {
            self.cls = next;
            return LineBreakType::NoBreak;
        }

        let after_space = self.lcls == SP;
        let (kind, update_cls) = match line_break_tier(self.cls.table_class(), next.table_class())
        {
            BreakTier::DirectBreak => {
                let kind = if self.prev.code_point() == SOFT_HYPHEN {
                    LineBreakType::SoftHyphenBreak
                } else {
                    LineBreakType::Break
                };
                (kind, true)
            }
            BreakTier::IndirectBreak => {
                let kind = if after_space {
                    LineBreakType::Break
                } else {
                    LineBreakType::NoBreak
                };
                (kind, true)
            }
            BreakTier::CombiningIndirectBreak => {
                if after_space {
                    apply_lookbehind_correction(attributes, self.prev_start);
                }
                (LineBreakType::NoBreak, after_space)
            }
            BreakTier::CombiningProhibitedBreak => (LineBreakType::NoBreak, after_space),
            BreakTier::ProhibitedBreak => (LineBreakType::NoBreak, true),
        };

        if update_cls {
            self.cls = next;
        } else {
            // The mark is absorbed into the base; keep the mapped base class
            self.cls = self.cls.table_class();
        }
        kind
    }
}

/// Combining mark after a space: the mark is treated as the start of a new
/// word, so the opportunity moves to the gap *before* that space.
///
/// `space_start` is the first unit of the space; the gap before it is still
/// stored unshifted at `space_start - 1`. A forced break there stays forced.
fn apply_lookbehind_correction(attributes: &mut [CharAttributes], space_start: usize) {
    if let Some(slot) = space_start.checked_sub(1) {
        let gap = &mut attributes[slot].line_break;
        if *gap < LineBreakType::Break {
            *gap = LineBreakType::Break;
        }
    }
}

/// Mark the second half of a surrogate pair: no cluster starts there and no
/// line may break inside the pair.
#[inline]
fn mark_pair_tail(attributes: &mut [CharAttributes], start: usize, width: usize) {
    if width == 2 {
        attributes[start].line_break = LineBreakType::NoBreak;
        attributes[start + 1].is_char_stop = false;
    }
}

/// Move every decision from "after unit i-1" to "before unit i".
fn shift_line_breaks(attributes: &mut [CharAttributes]) {
    for i in (1..attributes.len()).rev() {
        attributes[i].line_break = attributes[i - 1].line_break;
    }
    if let Some(first) = attributes.first_mut() {
        first.line_break = LineBreakType::NoBreak;
    }
}

/// Compute `is_char_stop` and `line_break` for every unit of `units`.
///
/// `attributes` must hold at least `units.len()` entries; extra entries are
/// left alone. Empty input is a no-op.
pub fn analyze<L>(units: &[u16], lookup: &L, attributes: &mut [CharAttributes])
where
    L: PropertyLookup + ?Sized,
{
    if units.is_empty() {
        return;
    }
    let attributes = &mut attributes[..units.len()];

    let (first, width) = decode_at(units, 0);
    let props = lookup.scalar_properties(first);
    let mut state = LineState::new(first, props.line, props.grapheme);
    attributes[0].is_char_stop = true;
    mark_pair_tail(attributes, 0, width);

    let mut pos = width;
    while pos < units.len() {
        let (scalar, width) = decode_at(units, pos);
        let props = lookup.scalar_properties(scalar);

        attributes[pos].is_char_stop = is_grapheme_boundary(state.grapheme, props.grapheme);
        mark_pair_tail(attributes, pos, width);

        let kind = state.resolve(props.line, attributes);
        attributes[pos - 1].line_break = kind;

        state.lcls = props.line;
        state.grapheme = props.grapheme;
        state.prev = scalar;
        state.prev_start = pos;
        pos += width;
    }

    shift_line_breaks(attributes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::UnicodeProperties;
    use LineBreakType::*;

    fn run(text: &str) -> Vec<CharAttributes> {
        let units: Vec<u16> = text.encode_utf16().collect();
        run_units(&units)
    }

    fn run_units(units: &[u16]) -> Vec<CharAttributes> {
        let mut attrs = CharAttributes::buffer(units.len());
        analyze(units, &UnicodeProperties::new(), &mut attrs);
        attrs
    }

    fn breaks(attrs: &[CharAttributes]) -> Vec<LineBreakType> {
        attrs.iter().map(|a| a.line_break).collect()
    }

    fn stops(attrs: &[CharAttributes]) -> Vec<bool> {
        attrs.iter().map(|a| a.is_char_stop).collect()
    }

    #[test]
    fn test_empty_input_is_noop() {
        let mut attrs: Vec<CharAttributes> = Vec::new();
        analyze(&[], &UnicodeProperties::new(), &mut attrs);
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_break_after_space() {
        let attrs = run("hello world");
        let expected: Vec<_> = (0..11).map(|i| if i == 6 { Break } else { NoBreak }).collect();
        assert_eq!(breaks(&attrs), expected);
        assert!(stops(&attrs).iter().all(|&s| s));
    }

    #[test]
    fn test_multiple_spaces_break_before_next_word() {
        let attrs = run("a  b");
        assert_eq!(breaks(&attrs), vec![NoBreak, NoBreak, NoBreak, Break]);
    }

    #[test]
    fn test_crlf_single_forced_break() {
        let attrs = run("a\r\nb");
        assert_eq!(breaks(&attrs), vec![NoBreak, NoBreak, NoBreak, ForcedBreak]);
        assert_eq!(stops(&attrs), vec![true, true, false, true]);
    }

    #[test]
    fn test_lone_cr_and_double_lf_are_forced() {
        let attrs = run("a\rb");
        assert_eq!(breaks(&attrs), vec![NoBreak, NoBreak, ForcedBreak]);

        let attrs = run("a\n\nb");
        assert_eq!(breaks(&attrs), vec![NoBreak, NoBreak, ForcedBreak, ForcedBreak]);
    }

    #[test]
    fn test_leading_line_feed() {
        let attrs = run("\nab");
        assert_eq!(breaks(&attrs), vec![NoBreak, ForcedBreak, NoBreak]);
    }

    #[test]
    fn test_soft_hyphen() {
        let attrs = run("word\u{00AD}word");
        assert_eq!(attrs[5].line_break, SoftHyphenBreak);
        let others = attrs
            .iter()
            .enumerate()
            .filter(|(i, a)| *i != 5 && a.line_break.is_opportunity())
            .count();
        assert_eq!(others, 0);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        assert!(breaks(&run("(a)")).iter().all(|b| *b == NoBreak));
        assert!(breaks(&run("1,000")).iter().all(|b| *b == NoBreak));
        assert!(breaks(&run("Noël.")).iter().all(|b| *b == NoBreak));
    }

    #[test]
    fn test_ideographs_break_between_each_other() {
        let attrs = run("日本語");
        assert_eq!(breaks(&attrs), vec![NoBreak, Break, Break]);
    }

    #[test]
    fn test_combining_mark_joins_base() {
        let attrs = run("e\u{0301}x");
        assert_eq!(stops(&attrs), vec![true, false, true]);
        assert_eq!(breaks(&attrs), vec![NoBreak, NoBreak, NoBreak]);
    }

    #[test]
    fn test_combining_mark_after_space_moves_break_before_space() {
        let attrs = run("a \u{0301}b");
        assert_eq!(breaks(&attrs), vec![NoBreak, Break, NoBreak, NoBreak]);
    }

    #[test]
    fn test_lookbehind_keeps_forced_break() {
        let attrs = run("a\n \u{0301}b");
        assert_eq!(attrs[2].line_break, ForcedBreak);
    }

    #[test]
    fn test_hangul_jamo_cluster() {
        // L V T forms one syllable
        let attrs = run("\u{1100}\u{1161}\u{11A8}");
        assert_eq!(stops(&attrs), vec![true, false, false]);
    }

    #[test]
    fn test_surrogate_pair() {
        let attrs = run("a😀b");
        assert_eq!(stops(&attrs), vec![true, true, false, true]);
        assert_eq!(attrs[2].line_break, NoBreak);
    }

    #[test]
    fn test_lone_surrogates_do_not_panic() {
        let attrs = run_units(&[0xD800, 0x0061]);
        assert_eq!(stops(&attrs), vec![true, true]);
        assert_eq!(attrs[0].line_break, NoBreak);

        let attrs = run_units(&[0xDC00, 0xD800]);
        assert_eq!(attrs.len(), 2);
        assert!(attrs[0].is_char_stop);
    }

    #[test]
    fn test_only_prefix_of_buffer_is_written() {
        let units: Vec<u16> = "ab".encode_utf16().collect();
        let mut attrs = CharAttributes::buffer(4);
        attrs[3].is_char_stop = true;
        analyze(&units, &UnicodeProperties::new(), &mut attrs);
        assert!(attrs[3].is_char_stop);
        assert!(!attrs[2].is_char_stop);
    }
}
