//! Terminal output formatting
//!
//! Path printing and run summaries.

pub mod display;
pub mod formatters;

pub use display::{print_grid, print_summary, write_paths};
pub use formatters::format_path;
