//! Reverse Wordle
//!
//! Given a Wordle solution, the feedback rows of the guesses that led to it
//! and a dictionary, reconstruct every sequence of guesses that could have
//! produced that feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use reverse_wordle::core::Grid;
//! use reverse_wordle::solver::{NoopObserver, SearchEngine};
//! use reverse_wordle::wordlists::words_from_slice;
//!
//! // Solution first, then feedback for the guess before it
//! let grid = Grid::parse("board\ny----").unwrap();
//! let dictionary = words_from_slice(&["brown", "amity", "dwarf"]);
//!
//! let tree = SearchEngine::new(&grid, &dictionary, NoopObserver).build();
//! for path in tree.paths() {
//!     println!("{}", reverse_wordle::output::format_path(&path));
//! }
//! assert_eq!(tree.path_count(), 1);
//! ```

// Core domain types
pub mod core;

// Constraint propagation and tree search
pub mod solver;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
