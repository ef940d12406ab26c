//! Single-step UTF-16 decoding shared by every engine
//!
//! All surrogate handling goes through [`decode_at`] and [`decode_before`] so
//! that the engines agree on what a "scalar" is at any position.

/// One decoded unit of text: a scalar value, or a surrogate that has no partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    /// A Unicode scalar value (one code unit, or a combined surrogate pair)
    Char(char),
    /// An unmatched high or low surrogate code unit
    LoneSurrogate(u16),
}

impl Scalar {
    /// Numeric code point (the raw unit for lone surrogates).
    #[inline]
    pub fn code_point(self) -> u32 {
        match self {
            Scalar::Char(ch) => ch as u32,
            Scalar::LoneSurrogate(unit) => u32::from(unit),
        }
    }

    /// The scalar as a `char`, if it is one.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        match self {
            Scalar::Char(ch) => Some(ch),
            Scalar::LoneSurrogate(_) => None,
        }
    }
}

#[inline]
pub fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
pub fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Decode the scalar starting at `pos`.
///
/// Returns the scalar and the number of code units it occupies (1 or 2).
/// A high surrogate followed by a low surrogate is combined; any other
/// surrogate is returned on its own with width 1.
///
/// # Panics
///
/// Panics if `pos >= units.len()`.
#[inline]
pub fn decode_at(units: &[u16], pos: usize) -> (Scalar, usize) {
    let unit = units[pos];
    if is_high_surrogate(unit) {
        if let Some(&next) = units.get(pos + 1) {
            if is_low_surrogate(next) {
                let code = 0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(next) - 0xDC00);
                if let Some(ch) = char::from_u32(code) {
                    return (Scalar::Char(ch), 2);
                }
            }
        }
    }
    match char::from_u32(u32::from(unit)) {
        Some(ch) => (Scalar::Char(ch), 1),
        None => (Scalar::LoneSurrogate(unit), 1),
    }
}

/// Decode the scalar that ends just before `end` (exclusive).
///
/// Returns the scalar and the index of its first code unit.
///
/// # Panics
///
/// Panics if `end == 0` or `end > units.len()`.
#[inline]
pub fn decode_before(units: &[u16], end: usize) -> (Scalar, usize) {
    let last = units[end - 1];
    if is_low_surrogate(last) && end >= 2 && is_high_surrogate(units[end - 2]) {
        let (scalar, _) = decode_at(units, end - 2);
        return (scalar, end - 2);
    }
    let (scalar, _) = decode_at(&units[..end], end - 1);
    (scalar, end - 1)
}

/// Iterate over `(start, scalar, width)` for every scalar in `units`.
pub fn scalars(units: &[u16]) -> impl Iterator<Item = (usize, Scalar, usize)> + '_ {
    let mut pos = 0;
    std::iter::from_fn(move || {
        if pos >= units.len() {
            return None;
        }
        let start = pos;
        let (scalar, width) = decode_at(units, pos);
        pos += width;
        Some((start, scalar, width))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bmp() {
        let units: Vec<u16> = "aë".encode_utf16().collect();
        assert_eq!(decode_at(&units, 0), (Scalar::Char('a'), 1));
        assert_eq!(decode_at(&units, 1), (Scalar::Char('ë'), 1));
    }

    #[test]
    fn test_decode_pair() {
        let units: Vec<u16> = "x😀".encode_utf16().collect();
        assert_eq!(units.len(), 3);
        assert_eq!(decode_at(&units, 1), (Scalar::Char('😀'), 2));
        // The low half on its own is an orphan
        assert_eq!(decode_at(&units, 2), (Scalar::LoneSurrogate(units[2]), 1));
    }

    #[test]
    fn test_decode_lone_high_then_bmp() {
        let units = [0xD83D, 0x0061];
        assert_eq!(decode_at(&units, 0), (Scalar::LoneSurrogate(0xD83D), 1));
        assert_eq!(decode_at(&units, 1), (Scalar::Char('a'), 1));
    }

    #[test]
    fn test_decode_reversed_pair() {
        // Low then high: two orphans
        let units = [0xDE00, 0xD83D];
        assert_eq!(decode_at(&units, 0), (Scalar::LoneSurrogate(0xDE00), 1));
        assert_eq!(decode_at(&units, 1), (Scalar::LoneSurrogate(0xD83D), 1));
    }

    #[test]
    fn test_decode_before() {
        let units: Vec<u16> = "a😀b".encode_utf16().collect();
        assert_eq!(decode_before(&units, 1), (Scalar::Char('a'), 0));
        assert_eq!(decode_before(&units, 3), (Scalar::Char('😀'), 1));
        assert_eq!(decode_before(&units, 4), (Scalar::Char('b'), 3));

        let orphan = [0x0061, 0xDE00];
        assert_eq!(decode_before(&orphan, 2), (Scalar::LoneSurrogate(0xDE00), 1));
    }

    #[test]
    fn test_scalars_iterator() {
        let units: Vec<u16> = "a😀".encode_utf16().collect();
        let collected: Vec<_> = scalars(&units).collect();
        assert_eq!(
            collected,
            vec![(0, Scalar::Char('a'), 1), (1, Scalar::Char('😀'), 2)]
        );
        assert_eq!(scalars(&[]).count(), 0);
    }
}
