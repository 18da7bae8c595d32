//! Word chains returned by the searches

use super::word::Word;
use std::fmt;

/// An ordered sequence of words from start to target inclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    words: Vec<String>,
}

impl Chain {
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the chain (not the number of steps)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Every consecutive pair differs in exactly one position and no word
    /// appears twice
    #[must_use]
    pub fn is_valid_ladder(&self) -> bool {
        let words: Vec<Word> = self.words.iter().map(Word::new).collect();

        let steps_valid = words.windows(2).all(|pair| pair[0].is_adjacent(&pair[1]));

        let mut seen: Vec<&str> = self.words.iter().map(String::as_str).collect();
        seen.sort_unstable();
        seen.dedup();

        steps_valid && seen.len() == self.words.len()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}
