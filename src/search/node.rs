//! Search tree nodes kept in an arena
//!
//! Nodes refer to their parent by arena index, so the tree has no ownership
//! cycles and is freed in one go when the arena is dropped.

use crate::graph::WordId;

/// Index of a node inside a `NodeArena`
pub type NodeId = usize;

/// One traversal state: a word, how we got there, and the chain length so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub word: WordId,
    pub parent: Option<NodeId>,
    /// Words in the chain up to and including this node (1 for the root)
    pub cost: usize,
}

/// Growable store of search nodes
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root node (no parent, cost 1)
    pub fn root(&mut self, word: WordId) -> NodeId {
        self.push(SearchNode {
            word,
            parent: None,
            cost: 1,
        })
    }

    /// Add a child of `parent`, one word longer
    ///
    /// # Panics
    /// Panics if `parent` was not allocated by this arena.
    pub fn child(&mut self, parent: NodeId, word: WordId) -> NodeId {
        let cost = self.nodes[parent].cost + 1;
        self.push(SearchNode {
            word,
            parent: Some(parent),
            cost,
        })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Word ids from the root down to `id`
    #[must_use]
    pub fn path(&self, id: NodeId) -> Vec<WordId> {
        let mut path = Vec::with_capacity(self.get(id).cost);
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            path.push(node.word);
            current = node.parent;
        }
        path.reverse();
        path
    }
}
