//! Output formatting module

use anyhow::Result;
use fenci_core::TokenEvent;
use std::io::Write;

/// Trait for output formatters
///
/// A run is a sequence of documents, each opened with `begin_document`,
/// filled with tokens in emission order, and closed with the pass's final
/// offset.
pub trait OutputFormatter: Send {
    /// Start a document; `source` is `None` for stdin
    fn begin_document(&mut self, source: Option<&str>) -> Result<()>;

    /// Format and output a single token at its absolute position
    fn format_token(&mut self, token: &TokenEvent, position: usize) -> Result<()>;

    /// Close the current document
    fn end_document(&mut self, final_offset: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
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
    /// Comma-separated token lines
    Text,
    /// JSON array of documents with their tokens
    Json,
    /// Markdown table per document
    Markdown,
}

impl OutputFormat {
    /// Create the formatter for this format
    pub fn formatter(
        self,
        writer: Box<dyn Write + Send>,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}
