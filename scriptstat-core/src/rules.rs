//! Ordered classification rule table
//!
//! Latin-script languages share Basic Latin, Cyrillic languages share the
//! Cyrillic blocks, and core CJK ideographs are valid in both Chinese and
//! Japanese text. Overlaps are resolved by position in [`RULES`]: the first
//! rule whose matcher accepts a code point decides its bucket. The table must
//! not be reordered.

use crate::category::{Category, CharacterClass, Language};

/// Byte order mark, which counts as whitespace
pub const BYTE_ORDER_MARK: u32 = 0xFEFF;

/// Inclusive code point interval
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeRange {
    /// First code point
    pub start: u32,
    /// Last code point
    pub end: u32,
}

impl CodeRange {
    /// Create an inclusive range
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Check membership
    #[inline]
    pub const fn contains(&self, code: u32) -> bool {
        code >= self.start && code <= self.end
    }
}

/// How a rule decides whether it applies
#[derive(Clone, Copy, Debug)]
pub enum Matcher {
    /// Member of any listed interval
    Ranges(&'static [CodeRange]),
    /// One of the listed code points
    Points(&'static [u32]),
}

impl Matcher {
    /// Test a code point
    #[inline]
    pub fn matches(&self, code: u32) -> bool {
        match self {
            Matcher::Ranges(ranges) => ranges.iter().any(|range| range.contains(code)),
            Matcher::Points(points) => points.contains(&code),
        }
    }
}

/// Bucket a matching rule assigns
#[derive(Clone, Copy, Debug)]
pub enum Verdict {
    /// Always the same bucket
    Always(Category),
    /// `matched` for the listed points, `otherwise` for the rest of the rule
    Refine {
        /// Points that select `matched`
        points: &'static [u32],
        /// Bucket for the listed points
        matched: Category,
        /// Bucket for everything else the matcher accepts
        otherwise: Category,
    },
}

impl Verdict {
    /// Resolve the bucket for a code point the matcher accepted
    #[inline]
    pub fn resolve(&self, code: u32) -> Category {
        match *self {
            Verdict::Always(category) => category,
            Verdict::Refine {
                points,
                matched,
                otherwise,
            } => {
                if points.contains(&code) {
                    matched
                } else {
                    otherwise
                }
            }
        }
    }
}

/// One entry of the ordered rule table
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    /// Short identifier, used in diagnostics
    pub name: &'static str,
    /// Applicability test
    pub matcher: Matcher,
    /// Resulting bucket
    pub verdict: Verdict,
}

impl Rule {
    /// Bucket for `code` if this rule applies
    #[inline]
    pub fn apply(&self, code: u32) -> Option<Category> {
        self.matcher
            .matches(code)
            .then(|| self.verdict.resolve(code))
    }
}

/// Chinese ideographs, radicals, CJK punctuation and Bopomofo
pub const CHINESE_RANGES: &[CodeRange] = &[
    CodeRange::new(0x4E00, 0x9FFF), // CJK Unified Ideographs
    CodeRange::new(0x3400, 0x4DBF), // Extension A
    CodeRange::new(0xF900, 0xFAFF), // Compatibility Ideographs
    CodeRange::new(0x2E80, 0x2EFF), // CJK Radicals Supplement
    CodeRange::new(0x2F00, 0x2FDF), // Kangxi Radicals
    CodeRange::new(0x3000, 0x303F), // CJK Symbols and Punctuation
    CodeRange::new(0x3100, 0x312F), // Bopomofo
    CodeRange::new(0x31A0, 0x31BF), // Bopomofo Extended
];

/// Kana blocks and halfwidth/fullwidth forms
pub const JAPANESE_RANGES: &[CodeRange] = &[
    CodeRange::new(0x3040, 0x309F), // Hiragana
    CodeRange::new(0x30A0, 0x30FF), // Katakana
    CodeRange::new(0x31F0, 0x31FF), // Katakana Phonetic Extensions
    CodeRange::new(0xFF00, 0xFFEF), // Halfwidth and Fullwidth Forms
];

/// Cyrillic blocks shared by Russian and Ukrainian
pub const CYRILLIC_RANGES: &[CodeRange] = &[
    CodeRange::new(0x0400, 0x04FF), // Cyrillic
    CodeRange::new(0x0500, 0x052F), // Cyrillic Supplement
    CodeRange::new(0x2DE0, 0x2DFF), // Cyrillic Extended-A
    CodeRange::new(0xA640, 0xA69F), // Cyrillic Extended-B
    CodeRange::new(0x1C80, 0x1C8F), // Cyrillic Extended-C
];

/// Є І Ї є і ї
pub const UKRAINIAN_LETTERS: &[u32] = &[0x0404, 0x0406, 0x0407, 0x0454, 0x0456, 0x0457];

/// Latin Extended Additional
pub const VIETNAMESE_RANGES: &[CodeRange] = &[
    CodeRange::new(0x1E00, 0x1EFF), // Latin Extended Additional
];

/// İ ı Ş ş Ğ ğ Ç ç Ö ö Ü ü
pub const TURKISH_LETTERS: &[u32] = &[
    0x0130, 0x0131, 0x015E, 0x015F, 0x011E, 0x011F, 0x00C7, 0x00E7, 0x00D6, 0x00F6, 0x00DC,
    0x00FC,
];

/// á é í ó ú ñ ü Á É Í Ó Ú Ñ
///
/// `ü` is shadowed by the Turkish rule.
pub const SPANISH_LETTERS: &[u32] = &[
    0x00E1, 0x00E9, 0x00ED, 0x00F3, 0x00FA, 0x00F1, 0x00FC, 0x00C1, 0x00C9, 0x00CD, 0x00D3,
    0x00DA, 0x00D1,
];

/// Basic Latin letters
pub const ENGLISH_RANGES: &[CodeRange] = &[
    CodeRange::new(0x0041, 0x005A), // A-Z
    CodeRange::new(0x0061, 0x007A), // a-z
];

/// ASCII digits
pub const DIGIT_RANGES: &[CodeRange] = &[CodeRange::new(0x0030, 0x0039)];

/// . , ! ? ; : ( ) [ ] { } - " ' `
pub const ASCII_PUNCTUATION: &[u32] = &[
    0x2E, 0x2C, 0x21, 0x3F, 0x3B, 0x3A, 0x28, 0x29, 0x5B, 0x5D, 0x7B, 0x7D, 0x2D, 0x22, 0x27,
    0x60,
];

/// Control whitespace, space separators, line and paragraph separators, and
/// the byte order mark
///
/// U+0085 (NEL) and U+180E are not included and classify as `other`.
pub const WHITESPACE_RANGES: &[CodeRange] = &[
    CodeRange::new(0x0009, 0x000D), // TAB LF VT FF CR
    CodeRange::new(0x0020, 0x0020),
    CodeRange::new(0x00A0, 0x00A0),
    CodeRange::new(0x1680, 0x1680),
    CodeRange::new(0x2000, 0x200A),
    CodeRange::new(0x2028, 0x2029),
    CodeRange::new(0x202F, 0x202F),
    CodeRange::new(0x205F, 0x205F),
    CodeRange::new(0x3000, 0x3000),
    CodeRange::new(BYTE_ORDER_MARK, BYTE_ORDER_MARK),
];

/// General and Supplemental Punctuation blocks
pub const PUNCTUATION_RANGES: &[CodeRange] = &[
    CodeRange::new(0x2000, 0x206F), // General Punctuation
    CodeRange::new(0x2E00, 0x2E7F), // Supplemental Punctuation
];

/// Symbol blocks
pub const SYMBOL_RANGES: &[CodeRange] = &[
    CodeRange::new(0x20A0, 0x20CF), // Currency Symbols
    CodeRange::new(0x2100, 0x214F), // Letterlike Symbols
    CodeRange::new(0x2190, 0x21FF), // Arrows
    CodeRange::new(0x2200, 0x22FF), // Mathematical Operators
    CodeRange::new(0x2300, 0x23FF), // Miscellaneous Technical
    CodeRange::new(0x2600, 0x26FF), // Miscellaneous Symbols
    CodeRange::new(0x2700, 0x27BF), // Dingbats
];

const fn lang(language: Language) -> Verdict {
    Verdict::Always(Category::Language(language))
}

const fn class(class: CharacterClass) -> Verdict {
    Verdict::Always(Category::Class(class))
}

/// The rule table, highest priority first. Unmatched code points are `other`.
pub static RULES: &[Rule] = &[
    Rule {
        name: "chinese",
        matcher: Matcher::Ranges(CHINESE_RANGES),
        verdict: lang(Language::Chinese),
    },
    Rule {
        name: "japanese",
        matcher: Matcher::Ranges(JAPANESE_RANGES),
        verdict: lang(Language::Japanese),
    },
    Rule {
        name: "cyrillic",
        matcher: Matcher::Ranges(CYRILLIC_RANGES),
        verdict: Verdict::Refine {
            points: UKRAINIAN_LETTERS,
            matched: Category::Language(Language::Ukrainian),
            otherwise: Category::Language(Language::Russian),
        },
    },
    Rule {
        name: "vietnamese",
        matcher: Matcher::Ranges(VIETNAMESE_RANGES),
        verdict: lang(Language::Vietnamese),
    },
    Rule {
        name: "turkish",
        matcher: Matcher::Points(TURKISH_LETTERS),
        verdict: lang(Language::Turkish),
    },
    Rule {
        name: "spanish",
        matcher: Matcher::Points(SPANISH_LETTERS),
        verdict: lang(Language::Spanish),
    },
    Rule {
        name: "english",
        matcher: Matcher::Ranges(ENGLISH_RANGES),
        verdict: lang(Language::English),
    },
    Rule {
        name: "digits",
        matcher: Matcher::Ranges(DIGIT_RANGES),
        verdict: class(CharacterClass::Digits),
    },
    Rule {
        name: "whitespace",
        matcher: Matcher::Ranges(WHITESPACE_RANGES),
        verdict: class(CharacterClass::Whitespace),
    },
    Rule {
        name: "ascii-punctuation",
        matcher: Matcher::Points(ASCII_PUNCTUATION),
        verdict: class(CharacterClass::Punctuation),
    },
    Rule {
        name: "punctuation-blocks",
        matcher: Matcher::Ranges(PUNCTUATION_RANGES),
        verdict: class(CharacterClass::Punctuation),
    },
    Rule {
        name: "symbols",
        matcher: Matcher::Ranges(SYMBOL_RANGES),
        verdict: class(CharacterClass::Symbols),
    },
];
