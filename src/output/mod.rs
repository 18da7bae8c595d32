//! Terminal output formatting
//!
//! Stdout carries exactly one line per query. Colour is applied only when
//! the caller has left `colored` enabled.

pub mod display;
pub mod formatters;

pub use display::{print_outcome, print_usage};
pub use formatters::{format_chain, graph_progress_bar};
