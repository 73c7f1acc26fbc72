//! Code point decoding over 16-bit text units
//!
//! A high surrogate immediately followed by a low surrogate is combined into
//! one scalar value and consumed as a single unit. Every other unit, including
//! an unpaired surrogate, stands for itself.

use core::iter::FusedIterator;
use core::str::Chars;

/// First high surrogate
pub const HIGH_SURROGATE_START: u16 = 0xD800;
/// Last high surrogate
pub const HIGH_SURROGATE_END: u16 = 0xDBFF;
/// First low surrogate
pub const LOW_SURROGATE_START: u16 = 0xDC00;
/// Last low surrogate
pub const LOW_SURROGATE_END: u16 = 0xDFFF;

/// One classification unit and the number of raw units it consumed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedUnit {
    /// Scalar value (or raw value of an unpaired surrogate)
    pub scalar: u32,
    /// Raw 16-bit units consumed: 2 for a surrogate pair, 1 otherwise
    pub width: usize,
}

impl DecodedUnit {
    /// Create a decoded unit
    pub const fn new(scalar: u32, width: usize) -> Self {
        Self { scalar, width }
    }

    /// Whether this unit came from a surrogate pair
    pub const fn is_surrogate_pair(&self) -> bool {
        self.width == 2
    }
}

/// Check for a high (leading) surrogate
#[inline]
pub const fn is_high_surrogate(unit: u16) -> bool {
    unit >= HIGH_SURROGATE_START && unit <= HIGH_SURROGATE_END
}

/// Check for a low (trailing) surrogate
#[inline]
pub const fn is_low_surrogate(unit: u16) -> bool {
    unit >= LOW_SURROGATE_START && unit <= LOW_SURROGATE_END
}

/// Combine a surrogate pair into its scalar value
#[inline]
pub const fn combine_surrogates(high: u16, low: u16) -> u32 {
    0x10000 + (((high - HIGH_SURROGATE_START) as u32) << 10) + (low - LOW_SURROGATE_START) as u32
}

/// Lazy decoder over a slice of 16-bit units
#[derive(Debug, Clone)]
pub struct CodeUnitDecoder<'a> {
    units: &'a [u16],
    position: usize,
}

impl<'a> CodeUnitDecoder<'a> {
    /// Create a decoder positioned at the first unit
    pub fn new(units: &'a [u16]) -> Self {
        Self { units, position: 0 }
    }

    /// Index of the next raw unit to be consumed
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Iterator for CodeUnitDecoder<'_> {
    type Item = DecodedUnit;

    fn next(&mut self) -> Option<DecodedUnit> {
        let first = *self.units.get(self.position)?;

        if is_high_surrogate(first) {
            if let Some(&second) = self.units.get(self.position + 1) {
                if is_low_surrogate(second) {
                    self.position += 2;
                    return Some(DecodedUnit::new(combine_surrogates(first, second), 2));
                }
            }
        }

        self.position += 1;
        Some(DecodedUnit::new(u32::from(first), 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len() - self.position;
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl FusedIterator for CodeUnitDecoder<'_> {}

/// Decoder over a Rust string
///
/// Yields exactly what [`CodeUnitDecoder`] yields for the UTF-16 encoding of
/// the same string. A `&str` never holds unpaired surrogates, so every unit
/// is a real scalar value.
#[derive(Debug, Clone)]
pub struct CharDecoder<'a> {
    chars: Chars<'a>,
}

impl<'a> CharDecoder<'a> {
    /// Create a decoder over `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
        }
    }
}

impl Iterator for CharDecoder<'_> {
    type Item = DecodedUnit;

    #[inline]
    fn next(&mut self) -> Option<DecodedUnit> {
        self.chars
            .next()
            .map(|ch| DecodedUnit::new(u32::from(ch), ch.len_utf16()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl FusedIterator for CharDecoder<'_> {}

/// Decode a slice of 16-bit units
pub fn decode_utf16(units: &[u16]) -> CodeUnitDecoder<'_> {
    CodeUnitDecoder::new(units)
}

/// Decode a string
pub fn decode_str(text: &str) -> CharDecoder<'_> {
    CharDecoder::new(text)
}
