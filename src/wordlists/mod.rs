//! Dictionaries of legal guesses
//!
//! Dictionaries are read from plain word-per-line files. The search only
//! needs a stable iteration order, chosen with [`WordOrder`].

pub mod loader;

pub use loader::{WordOrder, load_from_file, words_from_slice, words_from_str};
