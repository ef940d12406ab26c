//! White space flags

use crate::types::CharAttributes;
use crate::unicode::utf16::scalars;

/// Set `is_white_space` for every unit of `units`.
///
/// Lone surrogates and the second half of a pair are never white space.
pub fn analyze(units: &[u16], attributes: &mut [CharAttributes]) {
    for (start, scalar, width) in scalars(units) {
        attributes[start].is_white_space = scalar.as_char().is_some_and(char::is_whitespace);
        if width == 2 {
            attributes[start + 1].is_white_space = false;
        }
    }
}
