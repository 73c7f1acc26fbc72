//! Single-pass analysis: decode, classify, tally

use crate::category::Category;
use crate::classifier::{CodePointClassifier, RuleClassifier};
use crate::decoder::{decode_str, decode_utf16, DecodedUnit};
use crate::encoding::{detect_encoding, EncodingHint};
use crate::tally::{percentage, Tally};

/// Unit that `total` is measured in
///
/// With `CodeUnits` an astral character adds two to the total but only one to
/// its bucket, so percentages of text containing such characters sum to less
/// than 100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CountingUnit {
    /// Raw 16-bit units
    #[default]
    CodeUnits,
    /// Classification units (scalar values)
    ScalarValues,
}

/// Knobs for [`Analyzer`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Unit used for the total and as the percentage denominator
    pub counting_unit: CountingUnit,
    /// Run the encoding heuristic
    pub detect_encoding: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            counting_unit: CountingUnit::CodeUnits,
            detect_encoding: true,
        }
    }
}

/// Result of analyzing one text
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Per-bucket counts
    pub tally: Tally,
    /// Raw 16-bit units consumed
    pub code_units: usize,
    /// Classification units produced
    pub scalar_values: usize,
    /// Denominator for percentages, per the configured counting unit
    pub total: usize,
    /// Heuristic encoding label
    pub encoding: Option<EncodingHint>,
}

impl Analysis {
    /// Count of a bucket
    pub fn count(&self, category: Category) -> usize {
        self.tally.count(category)
    }

    /// Percentage of a bucket, rounded to two decimals
    pub fn percentage(&self, category: Category) -> f64 {
        percentage(self.tally.count(category), self.total)
    }

    /// How far `total` exceeds the number of classified units
    ///
    /// Zero under `ScalarValues`; the number of surrogate pairs under
    /// `CodeUnits`.
    pub fn unreconciled(&self) -> usize {
        self.total - self.tally.total()
    }
}

/// Drives the classification pass
#[derive(Debug, Clone, Default)]
pub struct Analyzer<C = RuleClassifier> {
    classifier: C,
    options: AnalysisOptions,
}

impl Analyzer<RuleClassifier> {
    /// Analyzer over the built-in rules
    pub fn new(options: AnalysisOptions) -> Self {
        Self {
            classifier: RuleClassifier::new(),
            options,
        }
    }
}

impl<C: CodePointClassifier> Analyzer<C> {
    /// Analyzer over a custom classifier
    pub fn with_classifier(classifier: C, options: AnalysisOptions) -> Self {
        Self {
            classifier,
            options,
        }
    }

    /// Current options
    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyze a Rust string
    pub fn analyze_str(&self, text: &str) -> Analysis {
        self.analyze_units(decode_str(text))
    }

    /// Analyze raw 16-bit units, which may hold unpaired surrogates
    pub fn analyze_utf16(&self, units: &[u16]) -> Analysis {
        self.analyze_units(decode_utf16(units))
    }

    /// Analyze an already decoded unit stream
    ///
    /// The stream is cloned once for the encoding heuristic when enabled;
    /// classification itself is a single pass.
    pub fn analyze_units<I>(&self, units: I) -> Analysis
    where
        I: Iterator<Item = DecodedUnit> + Clone,
    {
        let encoding = if self.options.detect_encoding {
            detect_encoding(units.clone())
        } else {
            None
        };

        let mut tally = Tally::new();
        let mut code_units = 0;
        let mut scalar_values = 0;
        for unit in units {
            tally.record(self.classifier.classify(unit.scalar));
            code_units += unit.width;
            scalar_values += 1;
        }

        let total = match self.options.counting_unit {
            CountingUnit::CodeUnits => code_units,
            CountingUnit::ScalarValues => scalar_values,
        };

        Analysis {
            tally,
            code_units,
            scalar_values,
            total,
            encoding,
        }
    }
}

/// Analyze a string with default options
pub fn analyze(text: &str) -> Analysis {
    Analyzer::new(AnalysisOptions::default()).analyze_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{CharacterClass, Language};

    #[test]
    fn test_hello_world() {
        let analysis = analyze("Hello World");
        assert_eq!(analysis.total, 11);
        assert_eq!(analysis.count(Language::English.into()), 10);
        assert_eq!(analysis.count(CharacterClass::Whitespace.into()), 1);
        assert_eq!(analysis.percentage(Language::English.into()), 90.91);
        assert_eq!(analysis.percentage(CharacterClass::Whitespace.into()), 9.09);
        assert_eq!(analysis.encoding, Some(EncodingHint::Default));
    }

    #[test]
    fn test_empty_text() {
        let analysis = analyze("");
        assert_eq!(analysis.total, 0);
        assert_eq!(analysis.tally, Tally::new());
        assert_eq!(analysis.encoding, None);
        assert_eq!(analysis.percentage(Language::English.into()), 0.0);
    }

    #[test]
    fn test_code_unit_counting_leaves_gap_per_astral_char() {
        let analysis = analyze("a😀");
        assert_eq!(analysis.code_units, 3);
        assert_eq!(analysis.scalar_values, 2);
        assert_eq!(analysis.total, 3);
        assert_eq!(analysis.count(CharacterClass::Other.into()), 1);
        assert_eq!(analysis.unreconciled(), 1);
        assert_eq!(analysis.percentage(Language::English.into()), 33.33);
        assert_eq!(analysis.percentage(CharacterClass::Other.into()), 33.33);
    }

    #[test]
    fn test_scalar_value_counting_reconciles() {
        let analyzer = Analyzer::new(AnalysisOptions {
            counting_unit: CountingUnit::ScalarValues,
            detect_encoding: true,
        });
        let analysis = analyzer.analyze_str("a😀");
        assert_eq!(analysis.total, 2);
        assert_eq!(analysis.unreconciled(), 0);
        assert_eq!(analysis.percentage(Language::English.into()), 50.0);
        assert_eq!(analysis.percentage(CharacterClass::Other.into()), 50.0);
    }

    #[test]
    fn test_encoding_detection_can_be_disabled() {
        let analyzer = Analyzer::new(AnalysisOptions {
            detect_encoding: false,
            ..AnalysisOptions::default()
        });
        assert_eq!(analyzer.analyze_str("😀").encoding, None);
    }

    #[test]
    fn test_unpaired_surrogate_is_other() {
        let analysis =
            Analyzer::new(AnalysisOptions::default()).analyze_utf16(&[0xD83D, 0x0041]);
        assert_eq!(analysis.code_units, 2);
        assert_eq!(analysis.scalar_values, 2);
        assert_eq!(analysis.count(CharacterClass::Other.into()), 1);
        assert_eq!(analysis.count(Language::English.into()), 1);
    }
}
