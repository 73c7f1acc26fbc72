//! Unicode language and character classification
//!
//! Every logical character of a text is assigned to exactly one of thirteen
//! buckets: eight language buckets (English, Chinese, Russian, Ukrainian,
//! Vietnamese, Japanese, Turkish, Spanish) decided by code point membership,
//! or, failing those, one of five structural buckets (digits, punctuation,
//! symbols, whitespace, other).
//!
//! This is range membership only. It does not identify the natural language
//! a text is written in.
//!
//! # Example
//!
//! ```rust
//! use scriptstat_core::{analyze, CharacterClass, Language};
//!
//! let analysis = analyze("Hello World");
//! assert_eq!(analysis.count(Language::English.into()), 10);
//! assert_eq!(analysis.count(CharacterClass::Whitespace.into()), 1);
//! assert_eq!(analysis.percentage(Language::English.into()), 90.91);
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod category;
pub mod classifier;
pub mod decoder;
pub mod encoding;
pub mod rules;
pub mod tally;

pub use analysis::{analyze, Analysis, AnalysisOptions, Analyzer, CountingUnit};
pub use category::{Category, CharacterClass, Language};
pub use classifier::{classify, CodePointClassifier, RuleClassifier};
pub use decoder::{decode_str, decode_utf16, CharDecoder, CodeUnitDecoder, DecodedUnit};
pub use encoding::{detect_encoding, EncodingHint};
pub use rules::{CodeRange, Matcher, Rule, Verdict, RULES};
pub use tally::{percentage, Tally};
