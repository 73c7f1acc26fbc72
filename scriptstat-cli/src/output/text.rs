//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use scriptstat_api::{BucketStat, LanguageReport};
use std::io::Write;

/// Plain text formatter - one aligned table per source
pub struct TextFormatter<W: Write> {
    writer: W,
    reports_written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports_written: 0,
        }
    }

    fn write_row(&mut self, tag: &str, stat: &BucketStat) -> Result<()> {
        writeln!(
            self.writer,
            "  {:<12} {:>8} {:>7.2}%",
            tag, stat.count, stat.percentage
        )?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: &str, report: &LanguageReport) -> Result<()> {
        if self.reports_written > 0 {
            writeln!(self.writer)?;
        }
        self.reports_written += 1;

        writeln!(self.writer, "Source: {source}")?;
        writeln!(self.writer, "Total characters: {}", report.total_characters)?;
        if let Some(encoding) = &report.encoding {
            writeln!(self.writer, "Encoding: {encoding}")?;
        }

        writeln!(self.writer, "Languages:")?;
        for (lang, stat) in report.languages.iter() {
            self.write_row(lang.tag(), stat)?;
        }
        writeln!(self.writer, "Categories:")?;
        for (class, stat) in report.categories.iter() {
            self.write_row(class.tag(), stat)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;

    #[test]
    fn test_text_layout() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());
        let report = scriptstat_api::analyze_text("Hello World");

        formatter.format_report("<text>", &report).unwrap();
        formatter.finish().unwrap();

        let out = buffer.contents();
        assert!(out.starts_with("Source: <text>\nTotal characters: 11\n"));
        assert!(out.contains("Encoding: UTF-16 (default)"));
        assert!(out.contains("  english            10   90.91%"));
        assert!(out.contains("  whitespace          1    9.09%"));
    }

    #[test]
    fn test_blank_line_between_reports() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());
        let report = scriptstat_api::analyze_text("");

        formatter.format_report("a", &report).unwrap();
        formatter.format_report("b", &report).unwrap();

        let out = buffer.contents();
        assert!(out.contains("\n\nSource: b\n"));
        assert!(!out.contains("Encoding:"));
    }
}
