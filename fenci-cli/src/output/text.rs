//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use fenci_core::TokenEvent;
use std::io::Write;

/// Plain text formatter - one comma-separated line per token
///
/// Columns: term, start offset, end offset, position, kind.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn begin_document(&mut self, source: Option<&str>) -> Result<()> {
        if let Some(source) = source {
            writeln!(self.writer, "# {source}")?;
        }
        Ok(())
    }

    fn format_token(&mut self, token: &TokenEvent, position: usize) -> Result<()> {
        writeln!(
            self.writer,
            "{},{},{},{},{}",
            token.term, token.start_offset, token.end_offset, position, token.kind
        )?;
        Ok(())
    }

    fn end_document(&mut self, _final_offset: usize) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
