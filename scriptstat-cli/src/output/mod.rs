//! Output formatting module

use anyhow::Result;
use scriptstat_api::LanguageReport;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the report for one source
    fn format_report(&mut self, source: &str, report: &LanguageReport) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table per source
    Text,
    /// JSON report (an array when several sources are analyzed)
    Json,
    /// Markdown table per source
    Markdown,
}

impl OutputFormat {
    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "aligned plain-text table per source",
            OutputFormat::Json => "JSON report, an array when several sources are analyzed",
            OutputFormat::Markdown => "markdown table per source",
        }
    }
}

/// Writer type shared by all formatters
pub type BoxedWriter = Box<dyn Write + Send + Sync>;

/// Build the formatter for `format`
pub fn create_formatter(
    format: OutputFormat,
    writer: BoxedWriter,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
