//! Interactive confirmation
//!
//! The `Confirmer` trait decouples the yes/no gate from the terminal so
//! tests can supply deterministic answers.

use std::io::{self, BufRead, Write};

/// Yes/no confirmation provider.
pub trait Confirmer {
    /// Ask a yes/no question and block until an answer is available.
    fn confirm(&self, question: &str) -> bool;
}

/// Reads the answer from standard input.
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&self, question: &str) -> bool {
        print!("{question}");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // EOF and failed reads (including reads interrupted by a
            // signal) count as a decline.
            Ok(0) | Err(_) => false,
            Ok(_) => is_affirmative(&line),
        }
    }
}

/// Only an explicit "y" or "yes", in any case, counts as consent.
pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
