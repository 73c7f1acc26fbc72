//! High-level configuration API

use crate::error::{ApiError, Result};
use scriptstat_core::{AnalysisOptions, CountingUnit};

/// Configuration for language analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) counting_unit: CountingUnit,
    pub(crate) detect_encoding: bool,
    pub(crate) lossy_utf8: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            counting_unit: CountingUnit::CodeUnits,
            detect_encoding: true,
            lossy_utf8: false,
        }
    }
}

impl Config {
    /// Totals in raw 16-bit units, matching the reference report layout
    pub fn reference() -> Self {
        Self::default()
    }

    /// Totals in classification units, so counts and percentages reconcile
    pub fn reconciled() -> Self {
        Self {
            counting_unit: CountingUnit::ScalarValues,
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Unit `total_characters` is measured in
    pub fn counting_unit(&self) -> CountingUnit {
        self.counting_unit
    }

    /// Whether the encoding heuristic runs
    pub fn detect_encoding(&self) -> bool {
        self.detect_encoding
    }

    /// Whether invalid UTF-8 is replaced instead of rejected
    pub fn lossy_utf8(&self) -> bool {
        self.lossy_utf8
    }

    pub(crate) fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            counting_unit: self.counting_unit,
            detect_encoding: self.detect_encoding,
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the counting unit
    pub fn counting_unit(mut self, unit: CountingUnit) -> Self {
        self.config.counting_unit = unit;
        self
    }

    /// Set the counting unit by name (`code-units` or `scalar-values`)
    pub fn counting_unit_named(self, name: &str) -> Result<Self> {
        Ok(self.counting_unit(parse_counting_unit(name)?))
    }

    /// Enable or disable the encoding heuristic
    pub fn detect_encoding(mut self, enabled: bool) -> Self {
        self.config.detect_encoding = enabled;
        self
    }

    /// Replace invalid UTF-8 with U+FFFD instead of failing
    pub fn lossy_utf8(mut self, enabled: bool) -> Self {
        self.config.lossy_utf8 = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}

/// Parse a counting unit name
pub fn parse_counting_unit(name: &str) -> Result<CountingUnit> {
    match name.trim().to_ascii_lowercase().as_str() {
        "code-units" | "code_units" | "utf16" => Ok(CountingUnit::CodeUnits),
        "scalar-values" | "scalar_values" | "chars" => Ok(CountingUnit::ScalarValues),
        other => Err(ApiError::Config(format!(
            "unknown counting unit '{other}' (expected 'code-units' or 'scalar-values')"
        ))),
    }
}

/// Canonical name of a counting unit
pub fn counting_unit_name(unit: CountingUnit) -> &'static str {
    match unit {
        CountingUnit::CodeUnits => "code-units",
        CountingUnit::ScalarValues => "scalar-values",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.counting_unit(), CountingUnit::CodeUnits);
        assert!(config.detect_encoding());
        assert!(!config.lossy_utf8());
        assert_eq!(config, Config::reference());
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .counting_unit_named("scalar-values")
            .unwrap()
            .detect_encoding(false)
            .lossy_utf8(true)
            .build();

        assert_eq!(config.counting_unit(), CountingUnit::ScalarValues);
        assert!(!config.detect_encoding());
        assert!(config.lossy_utf8());
    }

    #[test]
    fn test_parse_counting_unit() {
        assert_eq!(
            parse_counting_unit("Code-Units").unwrap(),
            CountingUnit::CodeUnits
        );
        assert_eq!(
            parse_counting_unit("scalar_values").unwrap(),
            CountingUnit::ScalarValues
        );
        let err = parse_counting_unit("bytes").unwrap_err();
        assert!(err.to_string().contains("unknown counting unit 'bytes'"));
    }

    #[test]
    fn test_counting_unit_name_round_trip() {
        for unit in [CountingUnit::CodeUnits, CountingUnit::ScalarValues] {
            assert_eq!(parse_counting_unit(counting_unit_name(unit)).unwrap(), unit);
        }
    }
}
