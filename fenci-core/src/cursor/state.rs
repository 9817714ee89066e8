//! Per-pass cursor state and the position increment rules

use crate::types::Candidate;
use std::collections::HashMap;

/// Which rule decided a token's position increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementRule {
    /// First token of the pass
    First,
    /// Same start as the previous token and a prefix of its text
    PrefixOfPrevious,
    /// Starts or ends at an offset where an earlier token ended
    SeenOffset,
    /// Span ends within the previous token's span
    ContainedInPrevious,
    /// Anything else stacks on the current position
    Fallback,
}

impl IncrementRule {
    /// The increment this rule assigns
    pub fn increment(self) -> u32 {
        match self {
            IncrementRule::First | IncrementRule::SeenOffset => 1,
            IncrementRule::PrefixOfPrevious
            | IncrementRule::ContainedInPrevious
            | IncrementRule::Fallback => 0,
        }
    }
}

/// Mutable state of one tokenization pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorState {
    last_emitted: Option<Candidate>,
    /// End offset -> increment of the first token emitted with that end
    seen_end_offsets: HashMap<usize, u32>,
    trailing_offset: usize,
}

impl CursorState {
    /// Fresh state for a new pass
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `candidate` against the state without recording it
    pub fn classify(&self, candidate: &Candidate) -> IncrementRule {
        let Some(previous) = &self.last_emitted else {
            return IncrementRule::First;
        };

        if candidate.start_offset == previous.start_offset
            && candidate.end_offset <= previous.end_offset
            && previous.text.starts_with(candidate.text.as_str())
        {
            IncrementRule::PrefixOfPrevious
        } else if self.seen_end_offsets.contains_key(&candidate.end_offset)
            || self.seen_end_offsets.contains_key(&candidate.start_offset)
        {
            IncrementRule::SeenOffset
        } else if candidate.end_offset <= previous.end_offset {
            IncrementRule::ContainedInPrevious
        } else {
            IncrementRule::Fallback
        }
    }

    /// Assign an increment to `candidate` and record it as emitted
    pub fn advance(&mut self, candidate: &Candidate) -> u32 {
        let rule = self.classify(candidate);
        let increment = rule.increment();

        log::trace!(
            "'{}' {}..{} -> +{increment} ({rule:?})",
            candidate.text,
            candidate.start_offset,
            candidate.end_offset
        );

        self.seen_end_offsets
            .entry(candidate.end_offset)
            .or_insert(increment);
        self.trailing_offset = candidate.end_offset;
        self.last_emitted = Some(candidate.clone());

        increment
    }

    /// The most recently emitted candidate
    pub fn last_emitted(&self) -> Option<&Candidate> {
        self.last_emitted.as_ref()
    }

    /// Increment recorded for the first token ending at `offset`
    pub fn seen_end_offset(&self, offset: usize) -> Option<u32> {
        self.seen_end_offsets.get(&offset).copied()
    }

    /// End offset of the most recently emitted token (0 before any)
    pub fn trailing_offset(&self) -> usize {
        self.trailing_offset
    }

    /// Clear all per-pass state
    pub fn reset(&mut self) {
        self.last_emitted = None;
        self.seen_end_offsets.clear();
        self.trailing_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(text: &str, start: usize, end: usize) -> Candidate {
        Candidate::new(text, start, end, "x")
    }

    #[test]
    fn test_first_token() {
        let mut state = CursorState::new();
        assert_eq!(state.classify(&c("AB", 0, 2)), IncrementRule::First);
        assert_eq!(state.advance(&c("AB", 0, 2)), 1);
        assert_eq!(state.trailing_offset(), 2);
    }

    #[test]
    fn test_prefix_wins_over_seen_offset() {
        let mut state = CursorState::new();
        state.advance(&c("AB", 0, 2));
        state.advance(&c("ABCD", 0, 4));
        // ends at a seen offset, but the prefix rule is checked first
        assert_eq!(state.classify(&c("AB", 0, 2)), IncrementRule::PrefixOfPrevious);
    }

    #[test]
    fn test_prefix_text_after_previous_advances() {
        let mut state = CursorState::new();
        state.advance(&c("北京", 0, 2));
        // "北" prefixes "北京" but starts where it ends
        assert_eq!(state.classify(&c("北", 2, 3)), IncrementRule::SeenOffset);
        assert_eq!(state.advance(&c("北", 2, 3)), 1);
    }

    #[test]
    fn test_prefix_text_inside_previous_is_not_prefix_rule() {
        let mut state = CursorState::new();
        state.advance(&c("ABA", 0, 3));
        assert_eq!(state.classify(&c("A", 2, 3)), IncrementRule::SeenOffset);

        let mut state = CursorState::new();
        state.advance(&c("ABAB", 0, 4));
        assert_eq!(state.classify(&c("AB", 2, 4)), IncrementRule::SeenOffset);
        assert_eq!(
            state.classify(&c("A", 2, 3)),
            IncrementRule::ContainedInPrevious
        );
    }

    #[test]
    fn test_seen_end_offset() {
        let mut state = CursorState::new();
        state.advance(&c("ABC", 0, 3));
        state.advance(&c("XY", 1, 2));
        assert_eq!(state.classify(&c("BC", 1, 3)), IncrementRule::SeenOffset);
    }

    #[test]
    fn test_seen_start_offset() {
        let mut state = CursorState::new();
        state.advance(&c("foo", 0, 3));
        assert_eq!(state.classify(&c("bar", 3, 6)), IncrementRule::SeenOffset);
    }

    #[test]
    fn test_contained_in_previous() {
        let mut state = CursorState::new();
        state.advance(&c("中华人民", 0, 4));
        assert_eq!(
            state.classify(&c("华人", 1, 3)),
            IncrementRule::ContainedInPrevious
        );
    }

    #[test]
    fn test_fallback_for_overhanging_span() {
        let mut state = CursorState::new();
        state.advance(&c("中华", 0, 2));
        assert_eq!(state.classify(&c("华人", 1, 3)), IncrementRule::Fallback);
        assert_eq!(state.advance(&c("华人", 1, 3)), 0);
    }

    #[test]
    fn test_first_write_wins() {
        let mut state = CursorState::new();
        state.advance(&c("X", 0, 2));
        assert_eq!(state.advance(&c("X", 1, 2)), 0);
        assert_eq!(state.seen_end_offset(2), Some(1));

        let mut state = CursorState::new();
        state.advance(&c("ABC", 0, 3));
        state.advance(&c("A", 0, 1));
        state.advance(&c("B", 1, 2));
        assert_eq!(state.seen_end_offset(1), Some(0));
        assert_eq!(state.seen_end_offset(2), Some(1));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = CursorState::new();
        state.advance(&c("AB", 0, 2));
        state.reset();
        assert_eq!(state, CursorState::new());
        assert!(state.last_emitted().is_none());
        assert_eq!(state.trailing_offset(), 0);
    }
}
