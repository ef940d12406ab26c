//! Sentence boundaries

use super::tables::{sentence_transition, SentenceState};
use crate::types::CharAttributes;
use crate::unicode::{decode_at, PropertyLookup, SentenceClass};

#[inline]
fn clear(attributes: &mut [CharAttributes], from: usize, to: usize) {
    for attr in &mut attributes[from..to] {
        attr.is_sentence_boundary = false;
    }
}

/// Look past a full stop for a lowercase letter.
///
/// Skips Other, Numeric and Close scalars starting at `from`. Returns the end
/// (exclusive) of the lowercase scalar if it is the first one of any other
/// class, which cancels the pending boundary.
fn lowercase_follows<L>(units: &[u16], lookup: &L, from: usize) -> Option<usize>
where
    L: PropertyLookup + ?Sized,
{
    let mut ahead = from;
    while ahead < units.len() {
        let (scalar, width) = decode_at(units, ahead);
        match lookup.scalar_sentence_class(scalar) {
            SentenceClass::Other | SentenceClass::Numeric | SentenceClass::Close => {
                ahead += width;
            }
            SentenceClass::Lower => return Some(ahead + width),
            _ => return None,
        }
    }
    None
}

/// Compute `is_sentence_boundary` for every unit of `units`.
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
    let mut state = sentence_transition(SentenceState::Initial, lookup.scalar_sentence_class(first));
    attributes[0].is_sentence_boundary = true;
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

        let class = lookup.scalar_sentence_class(scalar);
        state = sentence_transition(state, class);
        if state == SentenceState::Lookup {
            state = match lowercase_follows(units, lookup, end) {
                Some(lower_end) => {
                    end = lower_end;
                    SentenceState::Initial
                }
                None => SentenceState::Break,
            };
        }

        if state == SentenceState::Break {
            attributes[pos].is_sentence_boundary = true;
            state = sentence_transition(SentenceState::Initial, class);
        } else {
            attributes[pos].is_sentence_boundary = false;
        }
        clear(attributes, pos + 1, end);
        pos = end;
    }
}
