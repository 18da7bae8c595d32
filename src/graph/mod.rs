//! Word graph: ids for dictionary words and the one-letter adjacency between them

pub mod adjacency;
pub mod index;

pub use adjacency::AdjacencyRelation;
pub use index::{WordId, WordIndex};
