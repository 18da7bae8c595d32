//! Word index: dense integer ids for dictionary words

use crate::core::{LadderError, Word};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Dense identifier of a word inside a `WordIndex`
pub type WordId = usize;

/// Bidirectional mapping between dictionary words and ids `0..n`
///
/// Ids follow first-occurrence order. A word that appears again later in the
/// input keeps the id of its first occurrence, so both directions of the
/// mapping always agree.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    ids: FxHashMap<String, WordId>,
    words: Vec<Word>,
}

impl WordIndex {
    /// Build an index from dictionary lines, lower-casing each one
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::WordIndex;
    ///
    /// let index = WordIndex::from_lines(["Cat", "cot", "CAT"]);
    /// assert_eq!(index.len(), 2);
    /// assert_eq!(index.id_of("cat"), Some(0));
    /// assert_eq!(index.text(1), Some("cot"));
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        let mut duplicates = 0usize;

        for line in lines {
            let word = Word::new(line);
            if index.ids.contains_key(word.text()) {
                duplicates += 1;
                continue;
            }
            index.ids.insert(word.text().to_string(), index.words.len());
            index.words.push(word);
        }

        debug!(words = index.words.len(), duplicates, "built word index");
        index
    }

    /// Number of distinct words
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

    /// Look up a word's id (exact, already lower-cased text)
    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.ids.get(word).copied()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.ids.contains_key(word)
    }

    /// Look up a word's id, reporting a missing word as an error
    ///
    /// # Errors
    /// Returns `LadderError::WordNotInDictionary` if the word was never indexed.
    pub fn require(&self, word: &str) -> Result<WordId, LadderError> {
        self.id_of(word)
            .ok_or_else(|| LadderError::WordNotInDictionary {
                word: word.to_string(),
            })
    }

    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    #[must_use]
    pub fn text(&self, id: WordId) -> Option<&str> {
        self.words.get(id).map(Word::text)
    }

    /// All words in id order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Map a sequence of ids back to their words
    #[must_use]
    pub fn texts_of(&self, ids: &[WordId]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.text(id))
            .map(ToString::to_string)
            .collect()
    }
}
