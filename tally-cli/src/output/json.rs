//! JSON output formatter

use super::{FileReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs all file reports as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    reports: Vec<FileReport>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            reports: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn write_report(&mut self, report: &FileReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::ReducedValue;

    #[test]
    fn test_compact_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter
                .write_report(&FileReport {
                    file: "words.txt".to_string(),
                    reducer: "words".to_string(),
                    value: ReducedValue::Count(9),
                    metadata: None,
                })
                .unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "[{\"file\":\"words.txt\",\"reducer\":\"words\",\"value\":9}]\n"
        );
    }
}
