//! Dictionary word representation
//!
//! A Word stores its lower-cased text together with its characters, so that
//! Hamming distance can be computed position by position without re-decoding.

use super::error::LadderError;
use std::fmt;

/// A lower-cased dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Box<[char]>,
}

impl Word {
    /// Create a new Word, lower-casing the input
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Cold");
    /// assert_eq!(word.text(), "cold");
    /// assert_eq!(word.len(), 4);
    /// ```
    pub fn new(text: impl AsRef<str>) -> Self {
        let text = text.as_ref().to_lowercase();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Hamming distance to another word of the same length
    ///
    /// # Errors
    /// Returns `LadderError::LengthMismatch` if the words differ in length.
    pub fn distance(&self, other: &Self) -> Result<usize, LadderError> {
        differing_positions(&self.text, &self.chars, &other.text, &other.chars)
    }

    /// Whether the two words differ by exactly one substitution
    ///
    /// Words of different lengths are never adjacent.
    #[inline]
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.len() == other.len() && matches!(self.distance(other), Ok(1))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Hamming distance between two strings, compared as given (no case folding)
///
/// # Errors
/// Returns `LadderError::LengthMismatch` if the strings have a different
/// number of characters.
///
/// # Examples
/// ```
/// use word_ladder::core::hamming_distance;
///
/// assert_eq!(hamming_distance("cold", "cord").unwrap(), 1);
/// assert_eq!(hamming_distance("cold", "warm").unwrap(), 4);
/// assert!(hamming_distance("cold", "colder").is_err());
/// ```
pub fn hamming_distance(left: &str, right: &str) -> Result<usize, LadderError> {
    let left_chars: Vec<char> = left.chars().collect();
    let right_chars: Vec<char> = right.chars().collect();
    differing_positions(left, &left_chars, right, &right_chars)
}

fn differing_positions(
    left: &str,
    left_chars: &[char],
    right: &str,
    right_chars: &[char],
) -> Result<usize, LadderError> {
    if left_chars.len() != right_chars.len() {
        return Err(LadderError::LengthMismatch {
            left: left.to_string(),
            right: right.to_string(),
            left_len: left_chars.len(),
            right_len: right_chars.len(),
        });
    }

    Ok(left_chars
        .iter()
        .zip(right_chars)
        .filter(|(a, b)| a != b)
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_lowercases() {
        let word = Word::new("CaT");
        assert_eq!(word.text(), "cat");
        assert_eq!(word.chars(), &['c', 'a', 't']);
    }

    #[test]
    fn word_len_counts_chars_not_bytes() {
        let word = Word::new("café");
        assert_eq!(word.len(), 4);
        assert!(!word.is_empty());
        assert!(Word::new("").is_empty());
    }

    #[test]
    fn distance_same_word_is_zero() {
        let word = Word::new("cat");
        assert_eq!(word.distance(&word).unwrap(), 0);
        assert!(!word.is_adjacent(&word));
    }

    #[test]
    fn distance_single_substitution() {
        let cat = Word::new("cat");
        let cot = Word::new("cot");
        assert_eq!(cat.distance(&cot).unwrap(), 1);
        assert!(cat.is_adjacent(&cot));
    }

    #[test]
    fn distance_counts_every_position() {
        assert_eq!(Word::new("cat").distance(&Word::new("dog")).unwrap(), 3);
        assert_eq!(Word::new("cat").distance(&Word::new("cog")).unwrap(), 2);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [("cold", "cord"), ("cold", "warm"), ("abc", "cba")];
        for (a, b) in pairs {
            assert_eq!(
                hamming_distance(a, b).unwrap(),
                hamming_distance(b, a).unwrap(),
                "{a} vs {b}"
            );
        }
    }

    #[test]
    fn distance_length_mismatch_is_reported() {
        // Shorter second word must not read out of bounds
        let err = hamming_distance("cats", "cat").unwrap_err();
        assert!(matches!(
            err,
            LadderError::LengthMismatch {
                left_len: 4,
                right_len: 3,
                ..
            }
        ));

        // Longer second word must not silently ignore the tail
        assert!(hamming_distance("cat", "cats").is_err());
    }

    #[test]
    fn length_mismatch_is_not_adjacent() {
        assert!(!Word::new("cat").is_adjacent(&Word::new("cats")));
        assert!(!Word::new("at").is_adjacent(&Word::new("cat")));
    }

    #[test]
    fn hamming_distance_is_case_sensitive() {
        assert_eq!(hamming_distance("Cat", "cat").unwrap(), 1);
    }

    #[test]
    fn word_display() {
        assert_eq!(format!("{}", Word::new("DOG")), "dog");
    }
}
