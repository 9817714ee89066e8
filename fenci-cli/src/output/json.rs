//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use fenci_core::TokenEvent;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// One tokenized document
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Source file, absent for stdin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Tokens in emission order
    pub tokens: Vec<TokenData>,
    /// Final offset reported at the end of the pass
    pub final_offset: usize,
}

/// Data structure for one token in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenData {
    /// The token
    #[serde(flatten)]
    pub token: TokenEvent,
    /// Absolute position
    pub position: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }

    fn current(&mut self) -> Result<&mut DocumentData> {
        self.documents
            .last_mut()
            .ok_or_else(|| anyhow::anyhow!("token written before begin_document"))
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, source: Option<&str>) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.map(str::to_string),
            tokens: Vec::new(),
            final_offset: 0,
        });
        Ok(())
    }

    fn format_token(&mut self, token: &TokenEvent, position: usize) -> Result<()> {
        self.current()?.tokens.push(TokenData {
            token: token.clone(),
            position,
        });
        Ok(())
    }

    fn end_document(&mut self, final_offset: usize) -> Result<()> {
        self.current()?.final_offset = final_offset;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
