//! Best-effort encoding label
//!
//! Looks at the structure of already-decoded text, not at byte provenance,
//! so text that merely starts with the wrong code points is mislabeled.

use crate::decoder::DecodedUnit;
use core::fmt;

const BOM: u32 = 0xFEFF;
const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// Heuristic encoding label
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncodingHint {
    /// Text starts with U+FEFF
    Utf8Bom,
    /// Text starts with 0xFE 0xFF
    Utf16BigEndian,
    /// Text starts with 0xFF 0xFE
    Utf16LittleEndian,
    /// Text contains U+FFFD
    Utf8WithReplacement,
    /// Text contains a surrogate pair
    Utf16,
    /// Nothing conclusive
    Default,
}

impl EncodingHint {
    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            EncodingHint::Utf8Bom => "UTF-8 (BOM)",
            EncodingHint::Utf16BigEndian => "UTF-16 BE",
            EncodingHint::Utf16LittleEndian => "UTF-16 LE",
            EncodingHint::Utf8WithReplacement => "UTF-8 (with replacement characters)",
            EncodingHint::Utf16 => "UTF-16",
            EncodingHint::Default => "UTF-16 (default)",
        }
    }
}

impl fmt::Display for EncodingHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Guess an encoding label from a decoded unit stream
///
/// Returns `None` for empty input. Checks run in this order: leading BOM,
/// leading `FE FF` / `FF FE`, any replacement character, any surrogate pair.
pub fn detect_encoding<I>(units: I) -> Option<EncodingHint>
where
    I: IntoIterator<Item = DecodedUnit>,
{
    let mut units = units.into_iter();
    let first = units.next()?;

    if first.scalar == BOM {
        return Some(EncodingHint::Utf8Bom);
    }

    let second = units.next();
    match (first.scalar, second.map(|unit| unit.scalar)) {
        (0xFE, Some(0xFF)) => return Some(EncodingHint::Utf16BigEndian),
        (0xFF, Some(0xFE)) => return Some(EncodingHint::Utf16LittleEndian),
        _ => {}
    }

    let mut saw_pair = false;
    for unit in core::iter::once(first).chain(second).chain(units) {
        if unit.scalar == REPLACEMENT_CHARACTER {
            return Some(EncodingHint::Utf8WithReplacement);
        }
        saw_pair |= unit.is_surrogate_pair();
    }

    Some(if saw_pair {
        EncodingHint::Utf16
    } else {
        EncodingHint::Default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{decode_str, decode_utf16};

    fn hint(text: &str) -> Option<EncodingHint> {
        detect_encoding(decode_str(text))
    }

    #[test]
    fn test_empty_has_no_label() {
        assert_eq!(hint(""), None);
    }

    #[test]
    fn test_leading_bom() {
        assert_eq!(hint("\u{FEFF}hello"), Some(EncodingHint::Utf8Bom));
        // BOM wins over a later replacement character
        assert_eq!(hint("\u{FEFF}\u{FFFD}"), Some(EncodingHint::Utf8Bom));
    }

    #[test]
    fn test_byte_order_pairs() {
        assert_eq!(hint("\u{FE}\u{FF}abc"), Some(EncodingHint::Utf16BigEndian));
        assert_eq!(hint("\u{FF}\u{FE}abc"), Some(EncodingHint::Utf16LittleEndian));
        assert_eq!(hint("\u{FE}"), Some(EncodingHint::Default));
    }

    #[test]
    fn test_replacement_character_anywhere() {
        assert_eq!(
            hint("abc\u{FFFD}"),
            Some(EncodingHint::Utf8WithReplacement)
        );
        assert_eq!(
            hint("😀 then \u{FFFD}"),
            Some(EncodingHint::Utf8WithReplacement)
        );
    }

    #[test]
    fn test_surrogate_pair() {
        assert_eq!(hint("hi 😀"), Some(EncodingHint::Utf16));
    }

    #[test]
    fn test_unpaired_surrogate_is_not_a_pair() {
        let units = [0x0041, 0xD800, 0x0042];
        assert_eq!(
            detect_encoding(decode_utf16(&units)),
            Some(EncodingHint::Default)
        );
    }

    #[test]
    fn test_plain_text_gets_default() {
        assert_eq!(hint("Hello World"), Some(EncodingHint::Default));
        assert_eq!(EncodingHint::Default.to_string(), "UTF-16 (default)");
    }
}
