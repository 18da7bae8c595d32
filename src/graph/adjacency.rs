//! One-substitution adjacency between indexed words
//!
//! Stored as a sorted neighbour list per word rather than a dense n×n matrix.
//! Entry (i, j) of the relation is true iff `j` appears in `neighbors(i)`.

use super::index::{WordId, WordIndex};
use indicatif::ProgressBar;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Symmetric, irreflexive adjacency relation over word ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyRelation {
    neighbors: Vec<Vec<WordId>>,
}

impl AdjacencyRelation {
    /// Compute the relation for every pair of indexed words
    #[must_use]
    pub fn build(index: &WordIndex) -> Self {
        Self::build_with_progress(index, &ProgressBar::hidden())
    }

    /// Compute the relation, advancing `progress` once per word
    ///
    /// Words are compared only against words of the same length. Each word's
    /// neighbour list is produced independently in parallel; the result is
    /// identical to a sequential pairwise scan, neighbours in ascending id
    /// order.
    #[must_use]
    pub fn build_with_progress(index: &WordIndex, progress: &ProgressBar) -> Self {
        let words = index.words();

        let mut by_length: FxHashMap<usize, Vec<WordId>> = FxHashMap::default();
        for (id, word) in words.iter().enumerate() {
            by_length.entry(word.len()).or_default().push(id);
        }

        progress.set_length(words.len() as u64);

        let neighbors: Vec<Vec<WordId>> = words
            .par_iter()
            .map(|word| {
                let adjacent = by_length.get(&word.len()).map_or_else(Vec::new, |bucket| {
                    bucket
                        .iter()
                        .copied()
                        .filter(|&other| word.is_adjacent(&words[other]))
                        .collect()
                });
                progress.inc(1);
                adjacent
            })
            .collect();

        progress.finish_and_clear();

        let relation = Self { neighbors };
        debug!(
            words = relation.len(),
            edges = relation.edge_count(),
            lengths = by_length.len(),
            "built adjacency relation"
        );
        relation
    }

    /// Number of words covered by the relation
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Ids adjacent to `id`, ascending. Empty for an unknown id.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, id: WordId) -> &[WordId] {
        self.neighbors.get(id).map_or(&[], Vec::as_slice)
    }

    /// Entry (i, j) of the relation
    #[must_use]
    pub fn contains(&self, from: WordId, to: WordId) -> bool {
        self.neighbors(from).binary_search(&to).is_ok()
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }
}
