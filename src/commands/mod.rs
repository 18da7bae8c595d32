//! Command implementations

pub mod ladder;

pub use ladder::{LadderOutcome, LadderQuery, run_ladder, solve_words};
