//! Dictionary input for word ladder queries

pub mod loader;

pub use loader::{load_from_file, load_from_stdin, read_words};
