//! Word Ladder Solver
//!
//! Finds chains of dictionary words where each step changes exactly one
//! letter: either a shortest chain, or a chain of an exact number of words.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::graph::{AdjacencyRelation, WordIndex};
//! use word_ladder::search::{chain_of_length, shortest_chain};
//!
//! let index = WordIndex::from_lines(["cold", "cord", "card", "ward", "warm", "word", "worm"]);
//! let adjacency = AdjacencyRelation::build(&index);
//!
//! let chain = shortest_chain(&index, &adjacency, "cold", "warm").unwrap();
//! assert_eq!(chain.to_string(), "cold cord card ward warm");
//!
//! let chain = chain_of_length(&index, &adjacency, "cold", "warm", 5).unwrap();
//! assert_eq!(chain.len(), 5);
//! ```

// Core domain types
pub mod core;

// Word index and adjacency
pub mod graph;

// Chain searches
pub mod search;

// Dictionary input
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
