//! Display functions for command results
//!
//! Paths go to the given writer (stdout in the binary); everything decorative
//! goes to stderr so path output stays machine-readable.

use super::formatters::{format_path, grid_to_emoji, pluralize};
use crate::commands::ReconstructResult;
use crate::core::Grid;
use crate::solver::SolutionTree;
use colored::Colorize;
use std::io::{self, Write};

/// Write every complete path of `tree`, one per line
///
/// Returns the number of paths written.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_paths<W: Write>(out: &mut W, tree: &SolutionTree) -> io::Result<usize> {
    let mut written = 0;
    for path in tree.paths() {
        writeln!(out, "{}", format_path(&path))?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Print the grid with emoji tiles to stderr
pub fn print_grid(grid: &Grid) {
    let mut lines = grid_to_emoji(grid).into_iter();
    if let Some(solution) = lines.next() {
        eprintln!("{}", solution.bright_green().bold());
    }
    for line in lines {
        eprintln!("{line}");
    }
    eprintln!();
}

/// Print a summary of a reconstruction run to stderr
pub fn print_summary(result: &ReconstructResult) {
    let paths = result.tree.path_count();

    eprintln!("\n{}", "─".repeat(60).cyan());
    eprintln!(
        "Solution:     {}",
        result.grid.solution().text().to_uppercase().bright_yellow().bold()
    );
    eprintln!("Rows:         {}", result.tree.depth());
    eprintln!("Dictionary:   {}", pluralize(result.dictionary_size, "word", "words"));
    eprintln!("Tree:         {}", pluralize(result.tree.node_count(), "node", "nodes"));
    eprintln!("Time taken:   {:.3}s", result.duration.as_secs_f64());
    eprintln!("{}", "─".repeat(60).cyan());

    let line = format!("Found {}", pluralize(paths, "guess sequence", "guess sequences"));
    if paths == 0 {
        eprintln!("{}", line.red().bold());
    } else {
        eprintln!("{}", line.green().bold());
    }
}
