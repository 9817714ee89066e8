//! Positioned token streams over multi-granularity Chinese segmentation
//!
//! A segmentation engine such as jieba can report several overlapping words
//! for one stretch of text ("北京大学" together with "北京" and "大学"). Search
//! indexes expect a flat stream where every token carries a *position
//! increment*, so this crate sits between the two:
//!
//! - the [`SegmentationAdapter`] reads a whole document, runs the engine once
//!   and orders the candidates by start offset, longest first;
//! - the [`TokenStreamCursor`] pulls candidates one at a time and assigns each
//!   an increment, stacking sub-words of a compound on the compound's position
//!   and advancing when a token continues the text.
//!
//! # Example
//!
//! ```rust
//! use fenci_core::{Analyzer, AnalyzerConfig, SegmentationMode};
//!
//! let config = AnalyzerConfig::builder()
//!     .mode(SegmentationMode::Search)
//!     .build();
//! let analyzer = Analyzer::jieba(config);
//!
//! let analysis = analyzer.analyze("我们是招商证券").unwrap();
//! assert_eq!(analysis.tokens[0].position_increment, 1);
//! ```

#![warn(missing_docs)]

pub mod adapter;
pub mod analyzer;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod tokenizer;
pub mod types;

// Re-export key types
pub use adapter::{CandidateSequence, SegmentationAdapter};
pub use analyzer::Analyzer;
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder, SegmentationMode};
pub use cursor::{CursorPhase, CursorState, IncrementRule, TokenStreamCursor};
pub use engine::Segmenter;
pub use error::{AdapterError, ConfigError, CursorError, Error, Result};
pub use tokenizer::Tokenizer;
pub use types::{Analysis, Candidate, TokenEvent};

#[cfg(feature = "jieba")]
pub use engine::{JiebaSegmenter, JiebaSegmenterBuilder};
