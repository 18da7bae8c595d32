//! Error types for word ladder queries
//!
//! Every failure a query can hit is one of these. None of them abort the
//! process: usage errors print a usage message, everything else becomes a
//! "not possible" line.

use thiserror::Error;

/// Wrong number of command-line words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentCountError {
    #[error("Please enter a word to chain from and a word to chain to.")]
    TooFew,
    #[error("Please enter only a starting word, target word and chain length.")]
    TooMany,
}

/// Error type for ladder construction and search
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    #[error(transparent)]
    ArgumentCount(#[from] ArgumentCountError),

    #[error("Chain length must be a whole number of words, got '{0}'.")]
    InvalidChainLength(String),

    #[error("'{word}' is not in the dictionary")]
    WordNotInDictionary { word: String },

    #[error("cannot compare '{left}' ({left_len} letters) with '{right}' ({right_len} letters)")]
    LengthMismatch {
        left: String,
        right: String,
        left_len: usize,
        right_len: usize,
    },

    #[error("no chain connects '{start}' to '{target}'")]
    NoPathFound { start: String, target: String },

    #[error("no chain of {length} words connects '{start}' to '{target}'")]
    NoFixedLengthPathFound {
        start: String,
        target: String,
        length: usize,
    },
}

impl LadderError {
    /// Whether this error should be reported as a usage message rather than
    /// as a "not possible" result
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::ArgumentCount(_) | Self::InvalidChainLength(_))
    }
}
