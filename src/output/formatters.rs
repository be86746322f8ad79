//! Formatting utilities for terminal output

use crate::core::{FeedbackRow, Grid, Word};

/// Render one reconstructed path as a single space-separated line
#[must_use]
pub fn format_path(path: &[&Word]) -> String {
    path.iter()
        .map(|w| w.text())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the grid with emoji tiles, one line per row
///
/// The solution row is shown in upper case above the feedback rows.
#[must_use]
pub fn grid_to_emoji(grid: &Grid) -> Vec<String> {
    let mut lines = Vec::with_capacity(grid.num_rows());
    lines.push(grid.solution().text().to_uppercase());
    lines.extend(grid.feedback_rows().iter().map(FeedbackRow::to_emoji));
    lines
}

/// Human-friendly count with a singular or plural noun
#[must_use]
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
