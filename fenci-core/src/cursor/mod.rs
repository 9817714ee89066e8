//! Pull-based token stream over an ordered candidate sequence
//!
//! A cursor walks one [`CandidateSequence`] per pass:
//!
//! ```text
//! Idle --pull--> Active --pull (end-of-stream)--> Exhausted --finish--> (final offset)
//!   ^                                                  |
//!   +--------------------- reset ----------------------+
//! ```
//!
//! `pull` reports end-of-stream exactly once; pulling again, or finishing
//! before end-of-stream, is a [`CursorError`]. Starting a new pass always goes
//! through [`TokenStreamCursor::reset`], which swaps in the new sequence and
//! clears the per-pass [`CursorState`] together.

mod state;

pub use state::{CursorState, IncrementRule};

use crate::adapter::CandidateSequence;
use crate::error::CursorError;
use crate::types::{Candidate, TokenEvent};
use std::vec;

/// Lifecycle phase of a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPhase {
    /// Reset, nothing pulled yet
    Idle,
    /// At least one token pulled, end-of-stream not yet reported
    Active,
    /// End-of-stream reported
    Exhausted,
}

/// Token stream cursor
#[derive(Debug)]
pub struct TokenStreamCursor {
    remaining: vec::IntoIter<Candidate>,
    state: CursorState,
    phase: CursorPhase,
}

impl Default for TokenStreamCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStreamCursor {
    /// Create an idle cursor over an empty sequence
    pub fn new() -> Self {
        Self {
            remaining: Vec::new().into_iter(),
            state: CursorState::new(),
            phase: CursorPhase::Idle,
        }
    }

    /// Create an idle cursor over `sequence`
    pub fn over(sequence: CandidateSequence) -> Self {
        let mut cursor = Self::new();
        cursor.reset(sequence);
        cursor
    }

    /// Start a new pass over `sequence`, discarding all state of the last one
    pub fn reset(&mut self, sequence: CandidateSequence) {
        self.remaining = sequence.into_candidates().into_iter();
        self.state.reset();
        self.phase = CursorPhase::Idle;
    }

    /// Drop the current pass without starting a new one
    ///
    /// The cursor is left exhausted over nothing, so `pull` fails until the
    /// next [`reset`](Self::reset).
    pub fn discard(&mut self) {
        self.remaining = Vec::new().into_iter();
        self.state.reset();
        self.phase = CursorPhase::Exhausted;
    }

    /// Pull the next token, or `None` at end-of-stream
    pub fn pull(&mut self) -> Result<Option<TokenEvent>, CursorError> {
        if self.phase == CursorPhase::Exhausted {
            return Err(CursorError::Exhausted);
        }

        match self.remaining.next() {
            Some(candidate) => {
                let increment = self.state.advance(&candidate);
                self.phase = CursorPhase::Active;
                Ok(Some(TokenEvent::from_candidate(candidate, increment)))
            }
            None => {
                self.phase = CursorPhase::Exhausted;
                Ok(None)
            }
        }
    }

    /// Report the final offset pair once the stream is exhausted
    pub fn finish(&self) -> Result<(usize, usize), CursorError> {
        match self.phase {
            CursorPhase::Exhausted => {
                let offset = self.state.trailing_offset();
                Ok((offset, offset))
            }
            _ => Err(CursorError::NotExhausted),
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> CursorPhase {
        self.phase
    }

    /// Per-pass state, for inspection
    pub fn state(&self) -> &CursorState {
        &self.state
    }

    /// Candidates not yet pulled
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

/// Iterating drains the stream; after the last token it yields `None`
/// instead of the misuse error `pull` would return.
impl Iterator for TokenStreamCursor {
    type Item = TokenEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.pull().ok().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(buffer: &str, candidates: &[(&str, usize, usize)]) -> CandidateSequence {
        let candidates = candidates
            .iter()
            .map(|&(text, start, end)| Candidate::new(text, start, end, "x"))
            .collect();
        CandidateSequence::from_candidates(buffer, candidates).unwrap()
    }

    fn drain(cursor: &mut TokenStreamCursor) -> Vec<(String, u32)> {
        let mut out = Vec::new();
        while let Some(token) = cursor.pull().unwrap() {
            out.push((token.term, token.position_increment));
        }
        out
    }

    #[test]
    fn test_overlapping_candidates() {
        let mut cursor = TokenStreamCursor::over(sequence(
            "AB",
            &[("AB", 0, 2), ("A", 0, 1), ("B", 1, 2)],
        ));

        let tokens = drain(&mut cursor);
        assert_eq!(
            tokens,
            vec![
                ("AB".to_string(), 1),
                ("A".to_string(), 0),
                ("B".to_string(), 1)
            ]
        );
        assert_eq!(cursor.finish().unwrap(), (2, 2));
    }

    #[test]
    fn test_adjacent_candidates_advance() {
        let mut cursor =
            TokenStreamCursor::over(sequence("foobar", &[("foo", 0, 3), ("bar", 3, 6)]));

        let increments: Vec<u32> = drain(&mut cursor).into_iter().map(|(_, i)| i).collect();
        assert_eq!(increments, vec![1, 1]);
        assert_eq!(cursor.finish().unwrap(), (6, 6));
    }

    #[test]
    fn test_empty_sequence() {
        let mut cursor = TokenStreamCursor::over(CandidateSequence::empty());
        assert_eq!(cursor.pull().unwrap(), None);
        assert_eq!(cursor.finish().unwrap(), (0, 0));
    }

    #[test]
    fn test_phases() {
        let mut cursor = TokenStreamCursor::over(sequence("ab", &[("ab", 0, 2)]));
        assert_eq!(cursor.phase(), CursorPhase::Idle);

        cursor.pull().unwrap();
        assert_eq!(cursor.phase(), CursorPhase::Active);
        assert_eq!(cursor.remaining(), 0);

        assert_eq!(cursor.pull().unwrap(), None);
        assert_eq!(cursor.phase(), CursorPhase::Exhausted);
    }

    #[test]
    fn test_discard_mid_pass() {
        let mut cursor = TokenStreamCursor::over(sequence("ABCD", &[("AB", 0, 2), ("CD", 2, 4)]));
        cursor.pull().unwrap();

        cursor.discard();
        assert_eq!(cursor.phase(), CursorPhase::Exhausted);
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.pull(), Err(CursorError::Exhausted));
        assert!(cursor.state().last_emitted().is_none());
    }

    #[test]
    fn test_pull_after_exhaustion_is_error() {
        let mut cursor = TokenStreamCursor::over(CandidateSequence::empty());
        cursor.pull().unwrap();
        assert_eq!(cursor.pull(), Err(CursorError::Exhausted));
    }

    #[test]
    fn test_finish_before_exhaustion_is_error() {
        let mut cursor = TokenStreamCursor::over(sequence("ab", &[("ab", 0, 2)]));
        assert_eq!(cursor.finish(), Err(CursorError::NotExhausted));

        cursor.pull().unwrap();
        // last token pulled, but end-of-stream not yet reported
        assert_eq!(cursor.finish(), Err(CursorError::NotExhausted));
    }

    #[test]
    fn test_reset_starts_fresh_pass() {
        let mut cursor = TokenStreamCursor::over(sequence("AB", &[("AB", 0, 2), ("B", 1, 2)]));
        let first = drain(&mut cursor);

        cursor.reset(sequence("AB", &[("AB", 0, 2), ("B", 1, 2)]));
        assert_eq!(cursor.phase(), CursorPhase::Idle);
        assert!(cursor.state().last_emitted().is_none());

        let second = drain(&mut cursor);
        assert_eq!(first, second);
    }

    #[test]
    fn test_iterator_stops_quietly() {
        let mut cursor = TokenStreamCursor::over(sequence("ab", &[("ab", 0, 2)]));
        let terms: Vec<String> = cursor.by_ref().map(|t| t.term).collect();
        assert_eq!(terms, vec!["ab"]);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.finish().unwrap(), (2, 2));
    }
}
