//! Core domain types for Reverse Wordle
//!
//! Words, feedback tiles and the feedback grid. Everything here is plain data
//! with validating constructors; the search lives in `solver`.

mod feedback;
mod grid;
mod word;

pub use feedback::{FeedbackError, FeedbackRow, Tile};
pub use grid::{Grid, GridError};
pub use word::{WORD_LEN, Word, WordError};
