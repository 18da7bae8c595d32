//! Core domain types for word ladders
//!
//! Words, the Hamming distance between them, the chains the searches
//! produce, and the error type shared by the whole crate.

mod chain;
mod error;
mod word;

pub use chain::Chain;
pub use error::{ArgumentCountError, LadderError};
pub use word::{Word, hamming_distance};
