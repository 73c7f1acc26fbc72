//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::ValueEnum;
use scriptstat_api::config::counting_unit_name;
use scriptstat_api::Config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Analysis-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// `code-units` or `scalar-values`
    pub counting_unit: String,

    /// Run the encoding heuristic
    pub detect_encoding: bool,

    /// Replace invalid UTF-8 instead of failing
    pub lossy_utf8: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            counting_unit: counting_unit_name(Config::default().counting_unit()).to_string(),
            detect_encoding: true,
            lossy_utf8: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads for multi-file runs (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(e.to_string()))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), CliError> {
        self.api_config()?;
        self.default_format()?;
        Ok(())
    }

    /// API configuration described by the `[analysis]` table
    pub fn api_config(&self) -> Result<Config, CliError> {
        let builder = Config::builder()
            .counting_unit_named(&self.analysis.counting_unit)?
            .detect_encoding(self.analysis.detect_encoding)
            .lossy_utf8(self.analysis.lossy_utf8);
        Ok(builder.build())
    }

    /// Parsed `output.default_format`
    pub fn default_format(&self) -> Result<OutputFormat, CliError> {
        OutputFormat::from_str(&self.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.output.default_format
            ))
        })
    }

    /// Commented template written by `generate-config`
    pub fn template() -> String {
        let defaults = CliConfig::default();
        format!(
            r#"# scriptstat configuration

[analysis]
# Unit for total_characters and the percentage denominator:
#   "code-units"    - raw 16-bit units; characters outside the BMP count twice
#                     in the total but once in their bucket
#   "scalar-values" - one per classified character; counts always reconcile
counting_unit = "{}"

# Report a best-effort encoding label
detect_encoding = {}

# Replace invalid UTF-8 with U+FFFD instead of failing
lossy_utf8 = {}

[output]
# "text", "json" or "markdown"
default_format = "{}"
pretty_json = {}

[performance]
# Worker threads when analyzing several files (0 = one per CPU)
worker_threads = {}
"#,
            defaults.analysis.counting_unit,
            defaults.analysis.detect_encoding,
            defaults.analysis.lossy_utf8,
            defaults.output.default_format,
            defaults.output.pretty_json,
            defaults.performance.worker_threads,
        )
    }
}
