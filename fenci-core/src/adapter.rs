//! Segmentation adapter
//!
//! Turns one input buffer into an ordered candidate sequence. The whole input
//! is read before the engine runs, because segmentation needs the full text.
//! A failing reader does not abort the pass: whatever was read so far becomes
//! the buffer.

use crate::config::SegmentationMode;
use crate::engine::Segmenter;
use crate::error::AdapterError;
use crate::types::Candidate;
use std::io::{ErrorKind, Read};
use std::sync::Arc;

/// Read size used while assembling the buffer
const READ_CHUNK_SIZE: usize = 1024;

/// Candidates of one buffer, ordered by start ascending then end descending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSequence {
    buffer: String,
    candidates: Vec<Candidate>,
}

impl CandidateSequence {
    /// An empty sequence over an empty buffer
    pub fn empty() -> Self {
        Self::default()
    }

    /// Order raw candidates for `buffer`
    ///
    /// Candidates are validated against the buffer first. The sort is stable,
    /// so candidates with the same span keep the engine's relative order.
    pub fn from_candidates(
        buffer: impl Into<String>,
        mut candidates: Vec<Candidate>,
    ) -> Result<Self, AdapterError> {
        let buffer = buffer.into();
        let len = buffer.chars().count();

        for candidate in &candidates {
            validate(candidate, len)?;
        }

        candidates.sort_by(|a, b| {
            a.start_offset
                .cmp(&b.start_offset)
                .then_with(|| b.end_offset.cmp(&a.end_offset))
        });

        Ok(Self { buffer, candidates })
    }

    /// The trimmed buffer the offsets refer to
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The ordered candidates
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether there are no candidates
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub(crate) fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}

fn validate(candidate: &Candidate, len: usize) -> Result<(), AdapterError> {
    if candidate.end_offset <= candidate.start_offset {
        return Err(AdapterError::InvertedSpan {
            text: candidate.text.clone(),
            start: candidate.start_offset,
            end: candidate.end_offset,
        });
    }

    if candidate.end_offset > len {
        return Err(AdapterError::OutOfBounds {
            text: candidate.text.clone(),
            end: candidate.end_offset,
            len,
        });
    }

    Ok(())
}

/// Adapter between an input reader and the segmentation engine
#[derive(Clone)]
pub struct SegmentationAdapter {
    engine: Arc<dyn Segmenter>,
}

impl std::fmt::Debug for SegmentationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentationAdapter")
            .field("engine", &self.engine.name())
            .finish()
    }
}

impl SegmentationAdapter {
    /// Create an adapter over a shared engine
    pub fn new(engine: Arc<dyn Segmenter>) -> Self {
        Self { engine }
    }

    /// Read `reader` to completion, segment it, and order the result
    pub fn prepare<R: Read>(
        &self,
        reader: R,
        mode: SegmentationMode,
    ) -> Result<CandidateSequence, AdapterError> {
        let raw = read_lossy(reader);
        self.prepare_text(&raw, mode)
    }

    /// Segment an in-memory text and order the result
    pub fn prepare_text(
        &self,
        text: &str,
        mode: SegmentationMode,
    ) -> Result<CandidateSequence, AdapterError> {
        let buffer = text.trim();

        let candidates = if buffer.is_empty() {
            Vec::new()
        } else {
            self.engine.segment(buffer, mode)
        };

        log::debug!(
            "{} segmented {} chars in {} mode into {} candidates",
            self.engine.name(),
            buffer.chars().count(),
            mode,
            candidates.len()
        );

        CandidateSequence::from_candidates(buffer, candidates)
    }

    /// The engine this adapter forwards to
    pub fn engine(&self) -> &Arc<dyn Segmenter> {
        &self.engine
    }
}

/// Drain a reader, keeping what was read if it fails part way
fn read_lossy<R: Read>(mut reader: R) -> String {
    let mut bytes = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => bytes.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                log::warn!(
                    "input read failed after {} bytes, segmenting partial text: {e}",
                    bytes.len()
                );
                break;
            }
        }
    }

    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::warn!(
                "input is not valid UTF-8 at byte {}, replacing invalid sequences",
                e.utf8_error().valid_up_to()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
