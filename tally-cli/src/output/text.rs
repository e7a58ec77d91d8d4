//! Plain text output formatter

use super::{FileReport, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs one line per file
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_report(&mut self, report: &FileReport) -> Result<()> {
        writeln!(self.writer, "{}: {}", report.file, report.value)?;
        if let Some(metadata) = &report.metadata {
            writeln!(
                self.writer,
                "  [{} {}, {} elements, {} thread(s), {:.3} ms]",
                metadata.mode_used,
                report.reducer,
                metadata.elements_processed,
                metadata.thread_count,
                metadata.processing_time_ms
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
