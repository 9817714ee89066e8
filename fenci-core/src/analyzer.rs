//! Analyzer: a shared engine plus configuration, handing out tokenizers

use crate::config::AnalyzerConfig;
use crate::engine::Segmenter;
use crate::error::Result;
use crate::tokenizer::Tokenizer;
use crate::types::Analysis;
use std::io::Read;
use std::sync::Arc;

/// Entry point for turning text into positioned tokens
///
/// The engine is shared between every tokenizer the analyzer creates, so
/// tokenizers for different fields or threads can run independent passes over
/// one loaded dictionary.
#[derive(Clone)]
pub struct Analyzer {
    engine: Arc<dyn Segmenter>,
    config: AnalyzerConfig,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("engine", &self.engine.name())
            .field("config", &self.config)
            .finish()
    }
}

impl Analyzer {
    /// Create an analyzer over `engine` with default configuration
    pub fn new(engine: Arc<dyn Segmenter>) -> Self {
        Self::with_config(engine, AnalyzerConfig::default())
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(engine: Arc<dyn Segmenter>, config: AnalyzerConfig) -> Self {
        Self { engine, config }
    }

    /// Create an analyzer over jieba's bundled dictionary
    #[cfg(feature = "jieba")]
    pub fn jieba(config: AnalyzerConfig) -> Self {
        Self::with_config(Arc::new(crate::engine::JiebaSegmenter::new()), config)
    }

    /// A fresh tokenizer; call [`Tokenizer::reset`] before pulling
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(Arc::clone(&self.engine), self.config.mode())
    }

    /// A tokenizer already reset onto `reader`
    pub fn token_stream<R: Read>(&self, reader: R) -> Result<Tokenizer> {
        let mut tokenizer = self.tokenizer();
        tokenizer.reset(reader)?;
        Ok(tokenizer)
    }

    /// Run one full pass over `text`
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        let mut tokenizer = self.tokenizer();
        tokenizer.reset_text(text)?;
        tokenizer.collect_pass()
    }

    /// Get the current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}
