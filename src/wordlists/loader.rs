//! Dictionary loading utilities
//!
//! Dictionaries are plain text, one word per line. Lines are trimmed and
//! blank lines skipped; invalid UTF-8 is replaced rather than rejected.
//! Case folding and de-duplication happen in `WordIndex`.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Read words from any buffered reader until end of stream
///
/// # Errors
///
/// Returns an I/O error if reading fails.
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::read_words;
///
/// let words = read_words("cat\r\ncot\n\n  dog \n".as_bytes()).unwrap();
/// assert_eq!(words, vec!["cat", "cot", "dog"]);
/// ```
pub fn read_words<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut line = Vec::new();
    let mut lossy = 0usize;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        let text = String::from_utf8_lossy(&line);
        if matches!(text, Cow::Owned(_)) {
            lossy += 1;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            words.push(trimmed.to_string());
        }
    }

    if lossy > 0 {
        warn!(lines = lossy, "replaced invalid UTF-8 in dictionary");
    }
    debug!(words = words.len(), "read dictionary");
    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading dictionary file");
    read_words(BufReader::new(File::open(path)?))
}

/// Load words from standard input
///
/// # Errors
///
/// Returns an I/O error if standard input cannot be read.
pub fn load_from_stdin() -> io::Result<Vec<String>> {
    read_words(io::stdin().lock())
}
