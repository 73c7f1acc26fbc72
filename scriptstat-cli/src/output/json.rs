//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use scriptstat_api::LanguageReport;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - collects reports and writes them on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<SourceReport>,
}

/// One source's report, flattened for output
#[derive(Debug, Serialize)]
pub struct SourceReport {
    /// Where the text came from
    pub source: String,
    /// The classification report
    #[serde(flatten)]
    pub report: LanguageReport,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: &str, report: &LanguageReport) -> Result<()> {
        self.entries.push(SourceReport {
            source: source.to_string(),
            report: report.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let entries = std::mem::take(&mut self.entries);
        match entries.as_slice() {
            [single] => self.write_value(single)?,
            all => self.write_value(&all)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;

    #[test]
    fn test_single_report_is_an_object() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), false);
        formatter
            .format_report("<text>", &scriptstat_api::analyze_text("漢"))
            .unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(value["source"], "<text>");
        assert_eq!(value["total_characters"], 1);
        assert_eq!(value["languages"]["chinese"]["count"], 1);
        assert_eq!(value["languages"]["chinese"]["percentage"], 100.0);
    }

    #[test]
    fn test_multiple_reports_are_an_array() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), true);
        let report = scriptstat_api::analyze_text("a");
        formatter.format_report("one", &report).unwrap();
        formatter.format_report("two", &report).unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["source"], "two");
    }

    #[test]
    fn test_no_reports_is_an_empty_array() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), false);
        formatter.finish().unwrap();
        assert_eq!(buffer.contents(), "[]\n");
    }
}
