//! Word Ladder Solver - CLI
//!
//! Reads a dictionary (one word per line) from stdin or a file and prints a
//! chain of words from START to TARGET, each differing from the previous one
//! in a single letter.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use word_ladder::{
    commands::{LadderQuery, run_ladder},
    output::{graph_progress_bar, print_outcome, print_usage},
    wordlists::{load_from_file, load_from_stdin},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Find a chain of one-letter changes between two dictionary words",
    version,
    author
)]
struct Cli {
    /// START TARGET [CHAIN_LENGTH] - chain length counts words, not steps
    #[arg(value_name = "WORDS", num_args = 0..)]
    words: Vec<String>,

    /// Read the dictionary from a file instead of stdin
    #[arg(short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// Log search statistics to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Show a progress bar while building the word graph
    #[arg(long)]
    progress: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "word_ladder=debug"
    } else {
        "word_ladder=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let query = match LadderQuery::from_words(cli.words.as_slice()) {
        Ok(query) => query,
        Err(err) => {
            print_usage(&err);
            return Ok(());
        }
    };

    let progress = graph_progress_bar(cli.progress && std::io::stderr().is_terminal());

    let outcome = run_ladder(
        &query,
        || match &cli.wordlist {
            Some(path) => load_from_file(path)
                .with_context(|| format!("Failed to read word list {}", path.display())),
            None => load_from_stdin().context("Failed to read word list from stdin"),
        },
        &progress,
    )?;

    print_outcome(&outcome);
    Ok(())
}
