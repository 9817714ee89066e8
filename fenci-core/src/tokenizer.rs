//! Tokenizer: one adapter and one cursor bound to a mode

use crate::adapter::SegmentationAdapter;
use crate::config::SegmentationMode;
use crate::cursor::{CursorPhase, TokenStreamCursor};
use crate::engine::Segmenter;
use crate::error::{CursorError, Result};
use crate::types::{Analysis, TokenEvent};
use std::io::Read;
use std::sync::Arc;

/// Reusable tokenizer for one field
///
/// Each call to [`Tokenizer::reset`] is a new pass: the reader is drained and
/// segmented, and the cursor is reset onto the fresh sequence.
#[derive(Debug)]
pub struct Tokenizer {
    adapter: SegmentationAdapter,
    mode: SegmentationMode,
    cursor: TokenStreamCursor,
    buffer: String,
}

impl Tokenizer {
    /// Create a tokenizer over a shared engine
    pub fn new(engine: Arc<dyn Segmenter>, mode: SegmentationMode) -> Self {
        Self {
            adapter: SegmentationAdapter::new(engine),
            mode,
            cursor: TokenStreamCursor::new(),
            buffer: String::new(),
        }
    }

    /// Begin a new pass over `reader`
    ///
    /// If preparing the new pass fails, the previous pass is gone as well:
    /// the buffer is empty and `pull` fails until a successful reset.
    pub fn reset<R: Read>(&mut self, reader: R) -> Result<()> {
        self.discard();
        let sequence = self.adapter.prepare(reader, self.mode)?;
        self.buffer = sequence.buffer().to_string();
        self.cursor.reset(sequence);
        Ok(())
    }

    /// Begin a new pass over an in-memory text
    pub fn reset_text(&mut self, text: &str) -> Result<()> {
        self.discard();
        let sequence = self.adapter.prepare_text(text, self.mode)?;
        self.buffer = sequence.buffer().to_string();
        self.cursor.reset(sequence);
        Ok(())
    }

    fn discard(&mut self) {
        self.buffer.clear();
        self.cursor.discard();
    }

    /// Pull the next token, or `None` at end-of-stream
    pub fn pull(&mut self) -> std::result::Result<Option<TokenEvent>, CursorError> {
        self.cursor.pull()
    }

    /// Final offset pair of the exhausted pass
    pub fn finish(&self) -> std::result::Result<(usize, usize), CursorError> {
        self.cursor.finish()
    }

    /// Drain the current pass into an [`Analysis`]
    pub fn collect_pass(&mut self) -> Result<Analysis> {
        let mut tokens = Vec::new();
        while let Some(token) = self.pull()? {
            tokens.push(token);
        }
        let (final_offset, _) = self.finish()?;

        Ok(Analysis {
            tokens,
            final_offset,
        })
    }

    /// The segmentation mode forwarded to the engine
    pub fn mode(&self) -> SegmentationMode {
        self.mode
    }

    /// The trimmed buffer of the current pass
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor lifecycle phase
    pub fn phase(&self) -> CursorPhase {
        self.cursor.phase()
    }
}

impl Iterator for Tokenizer {
    type Item = TokenEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Candidate;

    /// Splits into runs of spaces and non-spaces, like engines that keep
    /// whitespace as its own token
    struct RunSegmenter;

    impl Segmenter for RunSegmenter {
        fn segment(&self, text: &str, _mode: SegmentationMode) -> Vec<Candidate> {
            let chars: Vec<char> = text.chars().collect();
            let mut out = Vec::new();
            let mut start = 0;
            for i in 1..=chars.len() {
                if i == chars.len() || (chars[i] == ' ') != (chars[start] == ' ') {
                    let word: String = chars[start..i].iter().collect();
                    out.push(Candidate::new(word, start, i, "word"));
                    start = i;
                }
            }
            out.reverse();
            out
        }
    }

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(Arc::new(RunSegmenter), SegmentationMode::Search)
    }

    #[test]
    fn test_pass_over_reader() {
        let mut tokenizer = tokenizer();
        tokenizer.reset("  hello big world ".as_bytes()).unwrap();
        assert_eq!(tokenizer.buffer(), "hello big world");

        let analysis = tokenizer.collect_pass().unwrap();
        assert_eq!(analysis.terms(), vec!["hello", " ", "big", " ", "world"]);
        assert_eq!(analysis.increments(), vec![1, 1, 1, 1, 1]);
        assert_eq!(analysis.final_offset, 15);
    }

    #[test]
    fn test_reuse_across_passes() {
        let mut tokenizer = tokenizer();

        tokenizer.reset_text("one two").unwrap();
        let first = tokenizer.collect_pass().unwrap();

        tokenizer.reset_text("three").unwrap();
        let second = tokenizer.collect_pass().unwrap();

        assert_eq!(first.terms(), vec!["one", " ", "two"]);
        assert_eq!(second.terms(), vec!["three"]);
        assert_eq!(second.increments(), vec![1]);
        assert_eq!(second.final_offset, 5);
    }

    #[test]
    fn test_collect_pass_twice_is_error() {
        let mut tokenizer = tokenizer();
        tokenizer.reset_text("one").unwrap();
        tokenizer.collect_pass().unwrap();
        assert!(tokenizer.collect_pass().is_err());
    }

    /// Returns fixed spans regardless of the text
    struct FixedSegmenter(Vec<Candidate>);

    impl Segmenter for FixedSegmenter {
        fn segment(&self, _text: &str, _mode: SegmentationMode) -> Vec<Candidate> {
            self.0.clone()
        }
    }

    #[test]
    fn test_failed_reset_drops_previous_pass() {
        let engine = FixedSegmenter(vec![
            Candidate::new("AB", 0, 2, "word"),
            Candidate::new("CD", 2, 4, "word"),
        ]);
        let mut tokenizer = Tokenizer::new(Arc::new(engine), SegmentationMode::Search);

        tokenizer.reset_text("ABCD").unwrap();
        assert_eq!(tokenizer.pull().unwrap().unwrap().term, "AB");

        // "CD" ends past the one-char buffer
        assert!(matches!(
            tokenizer.reset("A".as_bytes()),
            Err(crate::Error::Adapter(_))
        ));
        assert_eq!(tokenizer.buffer(), "");
        assert_eq!(tokenizer.pull(), Err(CursorError::Exhausted));
        assert_eq!(tokenizer.next(), None);

        tokenizer.reset_text("ABCD").unwrap();
        let analysis = tokenizer.collect_pass().unwrap();
        assert_eq!(analysis.terms(), vec!["AB", "CD"]);
        assert_eq!(analysis.increments(), vec![1, 1]);
    }

    #[test]
    fn test_failed_reset_text_drops_previous_pass() {
        let engine = FixedSegmenter(vec![Candidate::new("AB", 0, 2, "word")]);
        let mut tokenizer = Tokenizer::new(Arc::new(engine), SegmentationMode::Index);

        tokenizer.reset_text("AB").unwrap();
        assert!(tokenizer.reset_text("A").is_err());
        assert_eq!(tokenizer.buffer(), "");
        assert!(tokenizer.pull().is_err());
    }

    #[test]
    fn test_iterator() {
        let mut tokenizer = tokenizer();
        tokenizer.reset_text("a b").unwrap();
        let terms: Vec<String> = tokenizer.by_ref().map(|t| t.term).collect();
        assert_eq!(terms, vec!["a", " ", "b"]);
        assert_eq!(tokenizer.phase(), CursorPhase::Exhausted);
    }
}
