//! Exact-length chain search (depth-limited)
//!
//! Depth-first over simple paths: a word may appear at most once per chain,
//! and the target may only appear as the last word. The current path and an
//! on-path bitmap are the only state, so memory stays proportional to the
//! requested length.

use crate::core::{Chain, LadderError, hamming_distance};
use crate::graph::{AdjacencyRelation, WordId, WordIndex};
use tracing::{debug, trace};

/// Cheap rejection applied before any graph work
///
/// True when the straight Hamming distance between the two words exceeds
/// `length + 1`, or when the words cannot be compared at all because their
/// lengths differ.
///
/// # Examples
/// ```
/// use word_ladder::search::exceeds_distance_bound;
///
/// assert!(exceeds_distance_bound("cold", "warm", 2));
/// assert!(!exceeds_distance_bound("cold", "warm", 3));
/// assert!(exceeds_distance_bound("cat", "cats", 10));
/// ```
#[must_use]
pub fn exceeds_distance_bound(start: &str, target: &str, length: usize) -> bool {
    match hamming_distance(start, target) {
        Ok(distance) => distance > length.saturating_add(1),
        Err(err) => {
            debug!(%err, "start and target are not comparable");
            true
        }
    }
}

/// Find a chain of exactly `length` words from `start` to `target`
///
/// Neighbours are tried in ascending id order and the first complete chain
/// found is returned, so the result is deterministic for a given dictionary.
///
/// # Errors
/// - `LadderError::WordNotInDictionary` if either word is not indexed
/// - `LadderError::NoFixedLengthPathFound` if no such chain exists
///
/// # Examples
/// ```
/// use word_ladder::graph::{AdjacencyRelation, WordIndex};
/// use word_ladder::search::chain_of_length;
///
/// let index = WordIndex::from_lines(["cat", "cot", "cog", "dog", "dot"]);
/// let adjacency = AdjacencyRelation::build(&index);
///
/// let chain = chain_of_length(&index, &adjacency, "cat", "dog", 4).unwrap();
/// assert_eq!(chain.len(), 4);
/// assert!(chain_of_length(&index, &adjacency, "cat", "dog", 5).is_err());
/// ```
pub fn chain_of_length(
    index: &WordIndex,
    adjacency: &AdjacencyRelation,
    start: &str,
    target: &str,
    length: usize,
) -> Result<Chain, LadderError> {
    let not_found = || LadderError::NoFixedLengthPathFound {
        start: start.to_string(),
        target: target.to_string(),
        length,
    };

    if exceeds_distance_bound(start, target, length) {
        debug!(length, "rejected by distance bound");
        return Err(not_found());
    }

    let start_id = index.require(start)?;
    let target_id = index.require(target)?;

    // A chain never repeats a word, so it cannot be longer than the dictionary
    if length == 0 || length > index.len() {
        debug!(length, words = index.len(), "length out of range");
        return Err(not_found());
    }

    let mut search = DepthLimitedSearch::new(adjacency, index.len(), start_id, target_id, length);
    match search.run() {
        Some(path) => {
            debug!(expanded = search.expanded, "chain of requested length found");
            Ok(Chain::new(index.texts_of(&path)))
        }
        None => {
            debug!(expanded = search.expanded, "search space exhausted");
            Err(not_found())
        }
    }
}

struct DepthLimitedSearch<'a> {
    adjacency: &'a AdjacencyRelation,
    target: WordId,
    length: usize,
    path: Vec<WordId>,
    /// Next neighbour position to try, one cursor per word on `path`
    cursors: Vec<usize>,
    on_path: Vec<bool>,
    expanded: usize,
}

impl<'a> DepthLimitedSearch<'a> {
    fn new(
        adjacency: &'a AdjacencyRelation,
        word_count: usize,
        start: WordId,
        target: WordId,
        length: usize,
    ) -> Self {
        let mut on_path = vec![false; word_count];
        on_path[start] = true;

        Self {
            adjacency,
            target,
            length,
            path: vec![start],
            cursors: vec![0],
            on_path,
            expanded: 0,
        }
    }

    fn run(&mut self) -> Option<Vec<WordId>> {
        while let Some(&current) = self.path.last() {
            let cost = self.path.len();

            if cost == self.length {
                if current == self.target {
                    return Some(self.path.clone());
                }
                self.backtrack();
                continue;
            }

            match self.next_step(current, cost) {
                Some(next) => {
                    trace!(from = current, to = next, cost, "extending");
                    self.path.push(next);
                    self.cursors.push(0);
                    self.on_path[next] = true;
                    self.expanded += 1;
                }
                None => self.backtrack(),
            }
        }
        None
    }

    /// Advance the cursor of the last path word to its next admissible neighbour
    fn next_step(&mut self, current: WordId, cost: usize) -> Option<WordId> {
        let adjacency = self.adjacency;
        let neighbors = adjacency.neighbors(current);
        let cursor = self.cursors.last_mut()?;

        while let Some(&neighbor) = neighbors.get(*cursor) {
            *cursor += 1;

            // Ids outside the index count as unusable
            if self.on_path.get(neighbor) != Some(&false) {
                continue;
            }
            // The target may only close the chain, never pass through it
            if neighbor == self.target && cost + 1 != self.length {
                continue;
            }
            return Some(neighbor);
        }
        None
    }

    fn backtrack(&mut self) {
        if let Some(word) = self.path.pop() {
            self.on_path[word] = false;
        }
        self.cursors.pop();
    }
}
