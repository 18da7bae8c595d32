//! Minimum-length chain search (breadth-first)

use super::node::NodeArena;
use crate::core::{Chain, LadderError};
use crate::graph::{AdjacencyRelation, WordIndex};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Find a shortest chain from `start` to `target`
///
/// Breadth-first over the adjacency relation with neighbours taken in
/// ascending id order, so the returned chain is deterministic. A word is
/// enqueued at most once; the first time it is reached is along a shortest
/// chain. If `start == target` the chain is just `[start]`.
///
/// # Errors
/// - `LadderError::WordNotInDictionary` if either word is not indexed
/// - `LadderError::NoPathFound` if the target cannot be reached
///
/// # Examples
/// ```
/// use word_ladder::graph::{AdjacencyRelation, WordIndex};
/// use word_ladder::search::shortest_chain;
///
/// let index = WordIndex::from_lines(["cat", "cot", "cog", "dog", "dot"]);
/// let adjacency = AdjacencyRelation::build(&index);
///
/// let chain = shortest_chain(&index, &adjacency, "cat", "dog").unwrap();
/// assert_eq!(chain.to_string(), "cat cot cog dog");
/// ```
pub fn shortest_chain(
    index: &WordIndex,
    adjacency: &AdjacencyRelation,
    start: &str,
    target: &str,
) -> Result<Chain, LadderError> {
    let start_id = index.require(start)?;
    let target_id = index.require(target)?;

    let mut arena = NodeArena::new();
    let mut discovered = vec![false; index.len()];
    let mut frontier = VecDeque::new();

    frontier.push_back(arena.root(start_id));
    discovered[start_id] = true;

    while let Some(current) = frontier.pop_front() {
        let node = *arena.get(current);

        if node.word == target_id {
            debug!(
                nodes = arena.len(),
                length = node.cost,
                "shortest chain found"
            );
            return Ok(Chain::new(index.texts_of(&arena.path(current))));
        }

        trace!(word = node.word, cost = node.cost, "expanding");

        for &neighbor in adjacency.neighbors(node.word) {
            // Ids outside the index count as already seen
            if discovered.get(neighbor) == Some(&false) {
                discovered[neighbor] = true;
                frontier.push_back(arena.child(current, neighbor));
            }
        }
    }

    debug!(nodes = arena.len(), "frontier exhausted");
    Err(LadderError::NoPathFound {
        start: start.to_string(),
        target: target.to_string(),
    })
}
