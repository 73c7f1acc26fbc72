//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use scriptstat_api::LanguageReport;
use std::io::Write;

/// Markdown formatter - one table per source
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    source_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            source_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, source: &str, report: &LanguageReport) -> Result<()> {
        self.source_count += 1;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Total characters: {}",
            report.total_characters
        )?;
        if let Some(encoding) = &report.encoding {
            writeln!(self.writer, "- Encoding: {encoding}")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "| Bucket | Count | Percentage |")?;
        writeln!(self.writer, "|---|---:|---:|")?;
        for (tag, stat) in report.buckets() {
            writeln!(
                self.writer,
                "| {tag} | {} | {:.2}% |",
                stat.count, stat.percentage
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Sources analyzed: {}*", self.source_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
