//! Display functions for command results

use super::formatters::format_chain;
use crate::commands::LadderOutcome;
use crate::core::LadderError;
use colored::Colorize;

/// Print the single result line of a query
pub fn print_outcome(outcome: &LadderOutcome) {
    match outcome {
        LadderOutcome::Found(chain) => println!("{}", format_chain(chain)),
        LadderOutcome::NotPossible { query, .. } => {
            println!("{}", query.not_possible().red());
        }
    }
}

/// Print a usage message for a malformed invocation
pub fn print_usage(error: &LadderError) {
    println!("{}", error.to_string().yellow());
}
