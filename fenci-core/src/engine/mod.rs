//! Segmentation engine boundary
//!
//! The engine is a black box: given a buffer and a mode it returns candidate
//! words in no particular order. Everything about ordering and positioning is
//! done by the adapter and cursor on top of this trait.

use crate::config::SegmentationMode;
use crate::types::Candidate;

#[cfg(feature = "jieba")]
pub mod jieba;

#[cfg(feature = "jieba")]
pub use jieba::{JiebaSegmenter, JiebaSegmenterBuilder};

/// A word segmentation engine
///
/// Implementations may be shared across threads behind an `Arc`; any
/// reentrancy guarantee is the implementation's own.
pub trait Segmenter: Send + Sync {
    /// Segment `text` into candidate words with character offsets
    fn segment(&self, text: &str, mode: SegmentationMode) -> Vec<Candidate>;

    /// Engine name, used in log output
    fn name(&self) -> &str {
        "segmenter"
    }
}
