//! Candidate and token records

/// A candidate word produced by the segmentation engine
///
/// Offsets are half-open character (not byte) offsets into the prepared
/// buffer. `kind` is the engine's classification and is passed through to the
/// emitted token untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// The word
    pub text: String,
    /// Character offset of the first character
    pub start_offset: usize,
    /// Character offset one past the last character
    pub end_offset: usize,
    /// Engine-supplied classification tag
    pub kind: String,
}

impl Candidate {
    /// Create a new candidate
    pub fn new(
        text: impl Into<String>,
        start_offset: usize,
        end_offset: usize,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            start_offset,
            end_offset,
            kind: kind.into(),
        }
    }

    /// Span length in characters
    pub fn char_len(&self) -> usize {
        self.end_offset.saturating_sub(self.start_offset)
    }
}

/// A positioned token handed to the consumer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenEvent {
    /// Term text
    pub term: String,
    /// Character offset of the first character
    pub start_offset: usize,
    /// Character offset one past the last character
    pub end_offset: usize,
    /// Positions advanced relative to the previous token (0 = same position)
    pub position_increment: u32,
    /// Classification tag from the engine
    pub kind: String,
}

impl TokenEvent {
    pub(crate) fn from_candidate(candidate: Candidate, position_increment: u32) -> Self {
        Self {
            term: candidate.text,
            start_offset: candidate.start_offset,
            end_offset: candidate.end_offset,
            position_increment,
            kind: candidate.kind,
        }
    }
}

/// The full token list of one pass, plus its final offset
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    /// Tokens in emission order
    pub tokens: Vec<TokenEvent>,
    /// Offset reported by `finish` at the end of the pass
    pub final_offset: usize,
}

impl Analysis {
    /// Absolute position of each token
    ///
    /// The first token sits at position 0; each following token's position is
    /// the running sum of increments minus one.
    pub fn positions(&self) -> Vec<usize> {
        let mut position = 0usize;
        self.tokens
            .iter()
            .map(|token| {
                position += token.position_increment as usize;
                position.saturating_sub(1)
            })
            .collect()
    }

    /// Term texts in emission order
    pub fn terms(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.term.as_str()).collect()
    }

    /// Position increments in emission order
    pub fn increments(&self) -> Vec<u32> {
        self.tokens.iter().map(|t| t.position_increment).collect()
    }
}
