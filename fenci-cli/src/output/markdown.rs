//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use fenci_core::TokenEvent;
use std::io::Write;

/// Markdown formatter - outputs a token table per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
    token_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
            token_count: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn begin_document(&mut self, source: Option<&str>) -> Result<()> {
        self.document_count += 1;
        self.token_count = 0;
        writeln!(self.writer, "## {}", source.unwrap_or("stdin"))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Term | Start | End | Position | Kind |")?;
        writeln!(self.writer, "|---|------|-------|-----|----------|------|")?;
        Ok(())
    }

    fn format_token(&mut self, token: &TokenEvent, position: usize) -> Result<()> {
        self.token_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} | {} |",
            self.token_count,
            token.term.replace('|', "\\|"),
            token.start_offset,
            token.end_offset,
            position,
            token.kind
        )?;
        Ok(())
    }

    fn end_document(&mut self, final_offset: usize) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "*Total tokens: {}, final offset: {}*",
            self.token_count, final_offset
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total documents: {}*", self.document_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
