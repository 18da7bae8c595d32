//! Formatting utilities for terminal output

use crate::core::Chain;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Format a chain as space-separated words, endpoints highlighted
#[must_use]
pub fn format_chain(chain: &Chain) -> String {
    let last = chain.len().saturating_sub(1);

    chain
        .words()
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 || i == last {
                word.bright_green().bold().to_string()
            } else {
                word.bright_white().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Progress bar for the adjacency build, hidden unless `visible`
#[must_use]
pub fn graph_progress_bar(visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} linking words [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(words: &[&str]) -> Chain {
        Chain::new(words.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn format_chain_plain_matches_display() {
        colored::control::set_override(false);
        let c = chain(&["cat", "cot", "cog", "dog"]);
        assert_eq!(format_chain(&c), "cat cot cog dog");
        assert_eq!(format_chain(&chain(&["cat"])), "cat");
    }

    #[test]
    fn hidden_progress_bar() {
        assert!(graph_progress_bar(false).is_hidden());
    }
}
