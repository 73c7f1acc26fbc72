//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use scriptstat_core::{percentage, Analysis, CharacterClass, Language};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for analysis
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// Raw 16-bit units; may contain unpaired surrogates
    Utf16(Vec<u16>),
    /// File path (UTF-8)
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Input::Utf16(units) => f.debug_tuple("Utf16").field(&units.len()).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

/// Decoded input, ready for classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Valid Unicode text
    Text(String),
    /// Raw 16-bit units
    Utf16(Vec<u16>),
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from raw 16-bit units
    pub fn from_utf16(units: impl Into<Vec<u16>>) -> Self {
        Input::Utf16(units.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Decode the input
    ///
    /// Byte sources are decoded as UTF-8. With `lossy`, invalid sequences
    /// become U+FFFD instead of an error. 16-bit input is passed through
    /// untouched.
    pub fn read_source(self, lossy: bool) -> Result<TextSource> {
        let bytes = match self {
            Input::Text(text) => return Ok(TextSource::Text(text)),
            Input::Utf16(units) => return Ok(TextSource::Utf16(units)),
            Input::File(path) => fs::read(&path)?,
            Input::Bytes(bytes) => bytes,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                buffer
            }
        };

        let text = if lossy {
            String::from_utf8_lossy(&bytes).into_owned()
        } else {
            String::from_utf8(bytes)?
        };
        Ok(TextSource::Text(text))
    }

    /// Read the input as a strict UTF-8 string
    pub fn read_text(self) -> Result<String> {
        match self.read_source(false)? {
            TextSource::Text(text) => Ok(text),
            TextSource::Utf16(units) => String::from_utf16(&units).map_err(ApiError::Utf16),
        }
    }
}

/// Count and share of one bucket
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BucketStat {
    /// Classification units in the bucket
    pub count: usize,
    /// `count / total_characters` in percent, two decimals
    pub percentage: f64,
}

impl BucketStat {
    /// Build from a count and the report total
    pub fn new(count: usize, total: usize) -> Self {
        Self {
            count,
            percentage: percentage(count, total),
        }
    }
}

/// Language buckets
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct LanguageBreakdown {
    pub english: BucketStat,
    pub chinese: BucketStat,
    pub russian: BucketStat,
    pub ukrainian: BucketStat,
    pub vietnamese: BucketStat,
    pub japanese: BucketStat,
    pub turkish: BucketStat,
    pub spanish: BucketStat,
}

impl LanguageBreakdown {
    /// Stat for one language
    pub fn get(&self, lang: Language) -> &BucketStat {
        match lang {
            Language::English => &self.english,
            Language::Chinese => &self.chinese,
            Language::Russian => &self.russian,
            Language::Ukrainian => &self.ukrainian,
            Language::Vietnamese => &self.vietnamese,
            Language::Japanese => &self.japanese,
            Language::Turkish => &self.turkish,
            Language::Spanish => &self.spanish,
        }
    }

    fn get_mut(&mut self, lang: Language) -> &mut BucketStat {
        match lang {
            Language::English => &mut self.english,
            Language::Chinese => &mut self.chinese,
            Language::Russian => &mut self.russian,
            Language::Ukrainian => &mut self.ukrainian,
            Language::Vietnamese => &mut self.vietnamese,
            Language::Japanese => &mut self.japanese,
            Language::Turkish => &mut self.turkish,
            Language::Spanish => &mut self.spanish,
        }
    }

    /// All languages in report order
    pub fn iter(&self) -> impl Iterator<Item = (Language, &BucketStat)> + '_ {
        Language::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }
}

/// Structural buckets
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct CategoryBreakdown {
    pub digits: BucketStat,
    pub punctuation: BucketStat,
    pub symbols: BucketStat,
    pub whitespace: BucketStat,
    pub other: BucketStat,
}

impl CategoryBreakdown {
    /// Stat for one structural class
    pub fn get(&self, class: CharacterClass) -> &BucketStat {
        match class {
            CharacterClass::Digits => &self.digits,
            CharacterClass::Punctuation => &self.punctuation,
            CharacterClass::Symbols => &self.symbols,
            CharacterClass::Whitespace => &self.whitespace,
            CharacterClass::Other => &self.other,
        }
    }

    fn get_mut(&mut self, class: CharacterClass) -> &mut BucketStat {
        match class {
            CharacterClass::Digits => &mut self.digits,
            CharacterClass::Punctuation => &mut self.punctuation,
            CharacterClass::Symbols => &mut self.symbols,
            CharacterClass::Whitespace => &mut self.whitespace,
            CharacterClass::Other => &mut self.other,
        }
    }

    /// All classes in report order
    pub fn iter(&self) -> impl Iterator<Item = (CharacterClass, &BucketStat)> + '_ {
        CharacterClass::ALL
            .into_iter()
            .map(move |class| (class, self.get(class)))
    }
}

/// Classification report for one text
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageReport {
    /// Input length in the configured counting unit
    pub total_characters: usize,
    /// Heuristic encoding label
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub encoding: Option<String>,
    /// Language buckets
    pub languages: LanguageBreakdown,
    /// Structural buckets
    pub categories: CategoryBreakdown,
}

impl LanguageReport {
    /// Sum of every bucket count
    ///
    /// Equals `total_characters` unless totals are in code units and the
    /// text holds characters outside the Basic Multilingual Plane.
    pub fn classified_units(&self) -> usize {
        self.languages.iter().map(|(_, stat)| stat.count).sum::<usize>()
            + self.categories.iter().map(|(_, stat)| stat.count).sum::<usize>()
    }

    /// Language with the highest non-zero count; ties go to the earlier language
    pub fn dominant_language(&self) -> Option<Language> {
        self.languages
            .iter()
            .filter(|(_, stat)| stat.count > 0)
            .fold(None, |best: Option<(Language, usize)>, (lang, stat)| match best {
                Some((_, count)) if count >= stat.count => best,
                _ => Some((lang, stat.count)),
            })
            .map(|(lang, _)| lang)
    }

    /// Every bucket as `(tag, stat)`, languages first
    pub fn buckets(&self) -> impl Iterator<Item = (&'static str, &BucketStat)> + '_ {
        self.languages
            .iter()
            .map(|(lang, stat)| (lang.tag(), stat))
            .chain(self.categories.iter().map(|(class, stat)| (class.tag(), stat)))
    }
}

impl From<&Analysis> for LanguageReport {
    fn from(analysis: &Analysis) -> Self {
        let mut report = LanguageReport {
            total_characters: analysis.total,
            encoding: analysis.encoding.map(|hint| hint.label().to_string()),
            ..LanguageReport::default()
        };
        for (lang, count) in analysis.tally.languages() {
            *report.languages.get_mut(lang) = BucketStat::new(count, analysis.total);
        }
        for (class, count) in analysis.tally.classes() {
            *report.categories.get_mut(class) = BucketStat::new(count, analysis.total);
        }
        report
    }
}

impl From<Analysis> for LanguageReport {
    fn from(analysis: Analysis) -> Self {
        LanguageReport::from(&analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptstat_core::analyze;

    #[test]
    fn test_report_from_analysis() {
        let report = LanguageReport::from(analyze("Hello World"));
        assert_eq!(report.total_characters, 11);
        assert_eq!(report.languages.english.count, 10);
        assert_eq!(report.languages.english.percentage, 90.91);
        assert_eq!(report.categories.whitespace.count, 1);
        assert_eq!(report.categories.whitespace.percentage, 9.09);
        assert_eq!(report.encoding.as_deref(), Some("UTF-16 (default)"));
    }

    #[test]
    fn test_buckets_order() {
        let report = LanguageReport::default();
        let tags: Vec<_> = report.buckets().map(|(tag, _)| tag).collect();
        assert_eq!(tags.len(), 13);
        assert_eq!(tags[0], "english");
        assert_eq!(tags[7], "spanish");
        assert_eq!(tags[8], "digits");
        assert_eq!(tags[12], "other");
    }

    #[test]
    fn test_dominant_language() {
        assert_eq!(LanguageReport::default().dominant_language(), None);

        let report = LanguageReport::from(analyze("привіт, hi"));
        assert_eq!(report.dominant_language(), Some(Language::Russian));

        // tie between english and chinese goes to english
        let report = LanguageReport::from(analyze("a漢"));
        assert_eq!(report.dominant_language(), Some(Language::English));
    }

    #[test]
    fn test_classified_units_gap() {
        let report = LanguageReport::from(analyze("ok 🎉"));
        assert_eq!(report.total_characters, 5);
        assert_eq!(report.classified_units(), 4);
    }

    #[test]
    fn test_read_source_strict_and_lossy() {
        let bytes = vec![b'a', 0xFF, b'b'];
        assert!(matches!(
            Input::from_bytes(bytes.clone()).read_source(false),
            Err(ApiError::Utf8(_))
        ));
        assert_eq!(
            Input::from_bytes(bytes).read_source(true).unwrap(),
            TextSource::Text("a\u{FFFD}b".to_string())
        );
    }

    #[test]
    fn test_read_text_rejects_unpaired_surrogate() {
        assert!(matches!(
            Input::from_utf16(vec![0xD800]).read_text(),
            Err(ApiError::Utf16(_))
        ));
        assert_eq!(
            Input::from_utf16(vec![0x68, 0x69]).read_text().unwrap(),
            "hi"
        );
    }

    #[test]
    fn test_input_debug_hides_payloads() {
        let debug = format!("{:?}", Input::from_bytes(vec![1, 2, 3]));
        assert_eq!(debug, "Bytes(3)");
        let debug = format!("{:?}", Input::from_text("secret text"));
        assert_eq!(debug, "Text(11)");
        assert!(!debug.contains("secret"));
        let debug = format!("{:?}", Input::from_reader(std::io::empty()));
        assert!(debug.contains("<dyn Read>"));
    }
}
