//! `jieba-rs` binding for the [`Segmenter`] trait

use super::Segmenter;
use crate::config::SegmentationMode;
use crate::error::ConfigError;
use crate::types::Candidate;
use jieba_rs::{Jieba, TokenizeMode};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Token kind used when jieba has no single tag for a word
pub const DEFAULT_KIND: &str = "word";

/// Segmenter backed by jieba's bundled dictionary
pub struct JiebaSegmenter {
    jieba: Jieba,
    hmm: bool,
}

impl std::fmt::Debug for JiebaSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiebaSegmenter")
            .field("hmm", &self.hmm)
            .finish_non_exhaustive()
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl JiebaSegmenter {
    /// Create a segmenter with the default dictionary and HMM enabled
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
            hmm: true,
        }
    }

    /// Create a builder
    pub fn builder() -> JiebaSegmenterBuilder {
        JiebaSegmenterBuilder::default()
    }

    /// Whether HMM discovery of unknown words is enabled
    pub fn hmm(&self) -> bool {
        self.hmm
    }

    fn tokenize_mode(mode: SegmentationMode) -> TokenizeMode {
        match mode {
            SegmentationMode::Index => TokenizeMode::Default,
            SegmentationMode::Search => TokenizeMode::Search,
        }
    }

    /// Part-of-speech tag for a word when jieba tags it as a single unit
    fn kind_of(&self, word: &str) -> String {
        let tags = self.jieba.tag(word, false);
        match tags.as_slice() {
            [tag] if tag.word == word => tag.tag.to_string(),
            _ => DEFAULT_KIND.to_string(),
        }
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str, mode: SegmentationMode) -> Vec<Candidate> {
        self.jieba
            .tokenize(text, Self::tokenize_mode(mode), self.hmm)
            .into_iter()
            .map(|token| Candidate {
                text: token.word.to_string(),
                start_offset: token.start,
                end_offset: token.end,
                kind: self.kind_of(token.word),
            })
            .collect()
    }

    fn name(&self) -> &str {
        "jieba"
    }
}

/// Builder for [`JiebaSegmenter`]
#[derive(Debug)]
pub struct JiebaSegmenterBuilder {
    hmm: bool,
    user_dicts: Vec<PathBuf>,
}

impl Default for JiebaSegmenterBuilder {
    fn default() -> Self {
        Self {
            hmm: true,
            user_dicts: Vec::new(),
        }
    }
}

impl JiebaSegmenterBuilder {
    /// Enable or disable HMM discovery of unknown words
    pub fn hmm(mut self, enabled: bool) -> Self {
        self.hmm = enabled;
        self
    }

    /// Load an extra dictionary in jieba's `word [freq] [tag]` line format
    pub fn user_dict(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_dicts.push(path.into());
        self
    }

    /// Build the segmenter, loading any user dictionaries
    pub fn build(self) -> Result<JiebaSegmenter, ConfigError> {
        let mut jieba = Jieba::new();

        for path in &self.user_dicts {
            load_user_dict(&mut jieba, path)?;
        }

        Ok(JiebaSegmenter {
            jieba,
            hmm: self.hmm,
        })
    }
}

fn load_user_dict(jieba: &mut Jieba, path: &Path) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidDictionary {
        path: path.display().to_string(),
        reason,
    };

    let file = File::open(path).map_err(|e| invalid(e.to_string()))?;
    let mut reader = BufReader::new(file);
    jieba
        .load_dict(&mut reader)
        .map_err(|e| invalid(e.to_string()))?;

    log::debug!("loaded user dictionary {}", path.display());
    Ok(())
}
