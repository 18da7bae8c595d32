//! Word ladder query command
//!
//! Turns the command-line words into a query, applies the cheap length
//! pre-check, loads the dictionary, builds the graph once and dispatches to
//! one of the two searches.

use crate::core::{ArgumentCountError, Chain, LadderError};
use crate::graph::{AdjacencyRelation, WordIndex};
use crate::search::{chain_of_length, exceeds_distance_bound, shortest_chain};
use indicatif::ProgressBar;
use std::fmt;
use tracing::{debug, info};

/// A start word, a target word and an optional exact chain length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderQuery {
    pub start: String,
    pub target: String,
    pub length: Option<usize>,
}

impl LadderQuery {
    /// Create a query, lower-casing both words
    #[must_use]
    pub fn new(start: &str, target: &str, length: Option<usize>) -> Self {
        Self {
            start: start.to_lowercase(),
            target: target.to_lowercase(),
            length,
        }
    }

    /// Build a query from positional command-line words
    ///
    /// Expects `start target [length]`.
    ///
    /// # Errors
    ///
    /// - `LadderError::ArgumentCount` for fewer than two or more than three words
    /// - `LadderError::InvalidChainLength` if the third word is not a whole number
    ///
    /// # Examples
    /// ```
    /// use word_ladder::commands::LadderQuery;
    ///
    /// let query = LadderQuery::from_words(&["cat", "dog", "4"]).unwrap();
    /// assert_eq!(query.length, Some(4));
    /// assert!(LadderQuery::from_words(&["cat"]).is_err());
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self, LadderError> {
        match words {
            [] | [_] => Err(ArgumentCountError::TooFew.into()),
            [start, target] => Ok(Self::new(start.as_ref(), target.as_ref(), None)),
            [start, target, length] => {
                let length = length.as_ref();
                let length = length
                    .trim()
                    .parse()
                    .map_err(|_| LadderError::InvalidChainLength(length.to_string()))?;
                Ok(Self::new(start.as_ref(), target.as_ref(), Some(length)))
            }
            _ => Err(ArgumentCountError::TooMany.into()),
        }
    }

    /// The "not possible" line for this query
    #[must_use]
    pub fn not_possible(&self) -> String {
        match self.length {
            Some(length) => format!("{} {} {length} not possible", self.start, self.target),
            None => format!("{} {} not possible", self.start, self.target),
        }
    }
}

/// What a query produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderOutcome {
    Found(Chain),
    NotPossible {
        query: LadderQuery,
        reason: LadderError,
    },
}

impl LadderOutcome {
    #[must_use]
    pub const fn chain(&self) -> Option<&Chain> {
        match self {
            Self::Found(chain) => Some(chain),
            Self::NotPossible { .. } => None,
        }
    }

    fn from_result(query: &LadderQuery, result: Result<Chain, LadderError>) -> Self {
        match result {
            Ok(chain) => Self::Found(chain),
            Err(reason) => {
                debug!(%reason, "query not possible");
                Self::NotPossible {
                    query: query.clone(),
                    reason,
                }
            }
        }
    }
}

impl fmt::Display for LadderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(chain) => write!(f, "{chain}"),
            Self::NotPossible { query, .. } => write!(f, "{}", query.not_possible()),
        }
    }
}

/// Run a query, loading the dictionary only if the length pre-check passes
///
/// # Errors
///
/// Returns whatever error `load` returns. Search failures are not errors;
/// they come back as `LadderOutcome::NotPossible`.
pub fn run_ladder<F, E>(
    query: &LadderQuery,
    load: F,
    progress: &ProgressBar,
) -> Result<LadderOutcome, E>
where
    F: FnOnce() -> Result<Vec<String>, E>,
{
    if let Some(length) = query.length {
        if exceeds_distance_bound(&query.start, &query.target, length) {
            info!(length, "rejected before reading the dictionary");
            return Ok(LadderOutcome::NotPossible {
                query: query.clone(),
                reason: LadderError::NoFixedLengthPathFound {
                    start: query.start.clone(),
                    target: query.target.clone(),
                    length,
                },
            });
        }
    }

    let words = load()?;
    Ok(solve_words(query, &words, progress))
}

/// Run a query against an in-memory dictionary
#[must_use]
pub fn solve_words<S: AsRef<str>>(
    query: &LadderQuery,
    words: &[S],
    progress: &ProgressBar,
) -> LadderOutcome {
    let index = WordIndex::from_lines(words);

    for word in [&query.start, &query.target] {
        if let Err(reason) = index.require(word) {
            return LadderOutcome::from_result(query, Err(reason));
        }
    }

    let adjacency = AdjacencyRelation::build_with_progress(&index, progress);

    let result = match query.length {
        None => shortest_chain(&index, &adjacency, &query.start, &query.target),
        Some(length) => chain_of_length(&index, &adjacency, &query.start, &query.target, length),
    };

    LadderOutcome::from_result(query, result)
}
