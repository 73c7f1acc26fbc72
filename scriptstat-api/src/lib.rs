//! Public API for scriptstat language and character classification
//!
//! This crate wraps the classification engine in a stable interface: input
//! sources, a serializable report, configuration, and the argument-checking
//! entry point used by request dispatchers.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use dto::TextSource;
use error::Result;
use scriptstat_core::Analyzer;
use std::time::Instant;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{BucketStat, CategoryBreakdown, Input, LanguageBreakdown, LanguageReport};
pub use error::ApiError;
pub use scriptstat_core::{CharacterClass, CountingUnit, Language};

/// Main entry point for language analysis
///
/// Holds no per-call state; one analyzer can serve any number of calls,
/// including concurrent ones.
#[derive(Debug, Clone)]
pub struct LanguageAnalyzer {
    inner: Analyzer,
    config: Config,
}

impl LanguageAnalyzer {
    /// Create an analyzer with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            inner: Analyzer::new(config.analysis_options()),
            config,
        }
    }

    /// Analyze any input source
    pub fn analyze(&self, input: Input) -> Result<LanguageReport> {
        log::debug!("reading input {input:?}");
        let report = match input.read_source(self.config.lossy_utf8)? {
            TextSource::Text(text) => self.analyze_text(&text),
            TextSource::Utf16(units) => self.analyze_utf16(&units),
        };
        Ok(report)
    }

    /// Analyze a string
    pub fn analyze_text(&self, text: &str) -> LanguageReport {
        let start = Instant::now();
        let analysis = self.inner.analyze_str(text);
        log::debug!(
            "classified {} units ({} code units) in {:?}",
            analysis.scalar_values,
            analysis.code_units,
            start.elapsed()
        );
        LanguageReport::from(analysis)
    }

    /// Analyze raw 16-bit units, which may hold unpaired surrogates
    pub fn analyze_utf16(&self, units: &[u16]) -> LanguageReport {
        let start = Instant::now();
        let analysis = self.inner.analyze_utf16(units);
        log::debug!(
            "classified {} units ({} code units) in {:?}",
            analysis.scalar_values,
            analysis.code_units,
            start.elapsed()
        );
        LanguageReport::from(analysis)
    }

    /// Analyze an untyped value, which must be a JSON string
    #[cfg(feature = "serde")]
    pub fn analyze_value(&self, value: &serde_json::Value) -> Result<LanguageReport> {
        match value.as_str() {
            Some(text) => Ok(self.analyze_text(text)),
            None => Err(ApiError::invalid_input(format!(
                "expected a string, got {}",
                json_type_name(value)
            ))),
        }
    }

    /// Analyze an argument object of the form `{"text": "..."}`
    #[cfg(feature = "serde")]
    pub fn analyze_arguments(&self, arguments: &serde_json::Value) -> Result<LanguageReport> {
        let text = arguments
            .get("text")
            .ok_or_else(|| ApiError::invalid_input("missing 'text' argument"))?;
        self.analyze_value(text).map_err(|err| match err {
            ApiError::InvalidInput { reason } => {
                ApiError::invalid_input(format!("'text' argument: {reason}"))
            }
            other => other,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for LanguageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "serde")]
fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Convenience functions

/// Analyze text with default configuration
pub fn analyze_text(text: &str) -> LanguageReport {
    LanguageAnalyzer::new().analyze_text(text)
}

/// Analyze a UTF-8 file with default configuration
pub fn analyze_file<P: AsRef<std::path::Path>>(path: P) -> Result<LanguageReport> {
    LanguageAnalyzer::new().analyze(Input::from_file(path.as_ref().to_path_buf()))
}

/// Analyze a `{"text": "..."}` argument object with default configuration
#[cfg(feature = "serde")]
pub fn analyze_arguments(arguments: &serde_json::Value) -> Result<LanguageReport> {
    LanguageAnalyzer::new().analyze_arguments(arguments)
}
