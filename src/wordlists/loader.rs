//! Dictionary loading utilities
//!
//! A dictionary file holds one word per line. Blank lines are ignored and
//! lines that are not valid words are skipped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Order in which loaded words are handed to the search
///
/// Children in the solution tree appear in dictionary order, so this also
/// fixes the order of the enumerated paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordOrder {
    /// Same order as the source
    #[default]
    File,
    /// Last line first
    Reversed,
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use reverse_wordle::wordlists::{WordOrder, load_from_file};
///
/// let words = load_from_file("data/words.txt", WordOrder::File).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, order: WordOrder) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content, order))
}

/// Parse newline-separated words
///
/// # Examples
/// ```
/// use reverse_wordle::wordlists::{WordOrder, words_from_str};
///
/// let words = words_from_str("crane\r\nslate\n\ntrace\n", WordOrder::Reversed);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["trace", "slate", "crane"]);
/// ```
#[must_use]
pub fn words_from_str(content: &str, order: WordOrder) -> Vec<Word> {
    let mut skipped = 0usize;
    let mut words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                log::debug!("Skipping dictionary entry '{line}': {e}");
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::warn!("Skipped {skipped} invalid dictionary entries");
    }
    if order == WordOrder::Reversed {
        words.reverse();
    }
    words
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use reverse_wordle::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
