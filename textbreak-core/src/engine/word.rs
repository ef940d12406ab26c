//! Word boundaries
//!
//! Runs after the grapheme pass: boundaries only ever fall on cluster starts.

use super::tables::{word_rule, WordRule};
use crate::types::CharAttributes;
use crate::unicode::{decode_at, decode_before, PropertyLookup, SentenceClass, WordClass};

/// Clear the boundary flag on `attributes[range]`.
#[inline]
fn clear(attributes: &mut [CharAttributes], from: usize, to: usize) {
    for attr in &mut attributes[from..to] {
        attr.is_word_boundary = false;
    }
}

/// Compute `is_word_boundary` for every unit of `units`.
///
/// Requires `is_char_stop` to be populated for the same range.
pub fn analyze<L>(units: &[u16], lookup: &L, attributes: &mut [CharAttributes])
where
    L: PropertyLookup + ?Sized,
{
    if units.is_empty() {
        return;
    }
    let len = units.len();
    let attributes = &mut attributes[..len];

    let (first, width) = decode_at(units, 0);
    let mut brk = lookup.scalar_properties(first).word;
    attributes[0].is_word_boundary = true;
    clear(attributes, 1, width);

    let mut pos = width;
    while pos < len {
        let (scalar, width) = decode_at(units, pos);
        let mut end = pos + width;

        if !attributes[pos].is_char_stop {
            clear(attributes, pos, end);
            pos = end;
            continue;
        }

        let mut next = lookup.scalar_properties(scalar).word;
        if next == WordClass::Format {
            // Invisible formatting only splits words at a hard separator
            let (prev, _) = decode_before(units, pos);
            attributes[pos].is_word_boundary =
                lookup.scalar_sentence_class(prev) == SentenceClass::Sep;
            clear(attributes, pos + 1, end);
            pos = end;
            continue;
        }

        let mut rule = word_rule(brk, next);
        if rule == WordRule::Middle {
            rule = WordRule::Break;
            let mut ahead = end;
            while ahead < len {
                let (candidate, step) = decode_at(units, ahead);
                let class = lookup.scalar_properties(candidate).word;
                if class == WordClass::Format
                    && lookup.scalar_sentence_class(candidate) != SentenceClass::Sep
                {
                    ahead += step;
                    continue;
                }
                if class == brk {
                    // ALetter MidLetter ALetter and friends stay one word
                    rule = WordRule::NoBreak;
                    next = class;
                    end = ahead + step;
                }
                break;
            }
        }

        attributes[pos].is_word_boundary = rule == WordRule::Break;
        clear(attributes, pos + 1, end);
        brk = next;
        pos = end;
    }
}
