//! Bucket tags assigned by the classifier

use core::fmt;

/// Language buckets, in report order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// Basic Latin letters
    English,
    /// CJK ideographs, radicals, CJK punctuation and Bopomofo
    Chinese,
    /// Cyrillic letters other than the Ukrainian-only ones
    Russian,
    /// Є І Ї є і ї
    Ukrainian,
    /// Latin Extended Additional
    Vietnamese,
    /// Kana and halfwidth/fullwidth forms
    Japanese,
    /// Turkish-distinguishing Latin letters
    Turkish,
    /// Spanish-distinguishing Latin letters
    Spanish,
}

impl Language {
    /// Number of language buckets
    pub const COUNT: usize = 8;

    /// All languages in report order
    pub const ALL: [Language; Language::COUNT] = [
        Language::English,
        Language::Chinese,
        Language::Russian,
        Language::Ukrainian,
        Language::Vietnamese,
        Language::Japanese,
        Language::Turkish,
        Language::Spanish,
    ];

    /// Lowercase tag used as the report key
    pub const fn tag(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Chinese => "chinese",
            Language::Russian => "russian",
            Language::Ukrainian => "ukrainian",
            Language::Vietnamese => "vietnamese",
            Language::Japanese => "japanese",
            Language::Turkish => "turkish",
            Language::Spanish => "spanish",
        }
    }

    /// Human readable name
    pub const fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "Chinese",
            Language::Russian => "Russian",
            Language::Ukrainian => "Ukrainian",
            Language::Vietnamese => "Vietnamese",
            Language::Japanese => "Japanese",
            Language::Turkish => "Turkish",
            Language::Spanish => "Spanish",
        }
    }

    /// Look up a language by its tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.tag() == tag)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Structural buckets for code points no language rule claims
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    /// ASCII digits 0-9
    Digits,
    /// ASCII punctuation marks plus General and Supplemental Punctuation
    Punctuation,
    /// Currency, letterlike, arrows, math, technical, misc symbols, dingbats
    Symbols,
    /// Space separators, control whitespace and the byte order mark
    Whitespace,
    /// Anything else
    Other,
}

impl CharacterClass {
    /// Number of structural buckets
    pub const COUNT: usize = 5;

    /// All classes in report order
    pub const ALL: [CharacterClass; CharacterClass::COUNT] = [
        CharacterClass::Digits,
        CharacterClass::Punctuation,
        CharacterClass::Symbols,
        CharacterClass::Whitespace,
        CharacterClass::Other,
    ];

    /// Lowercase tag used as the report key
    pub const fn tag(self) -> &'static str {
        match self {
            CharacterClass::Digits => "digits",
            CharacterClass::Punctuation => "punctuation",
            CharacterClass::Symbols => "symbols",
            CharacterClass::Whitespace => "whitespace",
            CharacterClass::Other => "other",
        }
    }

    /// Look up a class by its tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.tag() == tag)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// The single bucket a classification unit lands in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// One of the language buckets
    Language(Language),
    /// One of the structural buckets
    Class(CharacterClass),
}

impl Category {
    /// Catch-all bucket
    pub const OTHER: Category = Category::Class(CharacterClass::Other);

    /// Report key of the bucket
    pub const fn tag(self) -> &'static str {
        match self {
            Category::Language(lang) => lang.tag(),
            Category::Class(class) => class.tag(),
        }
    }

    /// Whether the bucket is a language bucket
    pub const fn is_language(self) -> bool {
        matches!(self, Category::Language(_))
    }

    /// The language, if this is a language bucket
    pub const fn language(self) -> Option<Language> {
        match self {
            Category::Language(lang) => Some(lang),
            Category::Class(_) => None,
        }
    }
}

impl From<Language> for Category {
    fn from(lang: Language) -> Self {
        Category::Language(lang)
    }
}

impl From<CharacterClass> for Category {
    fn from(class: CharacterClass) -> Self {
        Category::Class(class)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_report_order() {
        for (i, lang) in Language::ALL.iter().enumerate() {
            assert_eq!(lang.index(), i);
        }
        for (i, class) in CharacterClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
        }
    }

    #[test]
    fn test_tag_round_trip() {
        assert_eq!(Language::from_tag("ukrainian"), Some(Language::Ukrainian));
        assert_eq!(CharacterClass::from_tag("symbols"), Some(CharacterClass::Symbols));
        assert_eq!(Language::from_tag("french"), None);
        assert_eq!(CharacterClass::from_tag("English"), None);
    }

    #[test]
    fn test_category_helpers() {
        let chinese = Category::from(Language::Chinese);
        assert!(chinese.is_language());
        assert_eq!(chinese.language(), Some(Language::Chinese));
        assert_eq!(chinese.to_string(), "chinese");

        assert!(!Category::OTHER.is_language());
        assert_eq!(Category::OTHER.language(), None);
        assert_eq!(Category::OTHER.tag(), "other");
    }
}
