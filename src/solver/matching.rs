//! Feedback-matching predicate
//!
//! Decides whether a dictionary word could have been guessed at a given grid
//! row, given the constraints derived one row closer to the solution.

use super::constraints::Constraints;
use crate::core::{Grid, Tile, Word};

/// Check whether `word` is a possible guess for grid row `row`
///
/// For every position `i` the word is rejected when:
/// 1. the tile is grey and the letter is forbidden;
/// 2. the tile is yellow and the letter equals the solution's letter at `i`;
/// 3. no letters are pinned at `i` and the letter is forbidden;
/// 4. letters are pinned at `i` and the letter is not among them, or every
///    occurrence of it in the solution has already been claimed by an
///    earlier pinned position.
///
/// # Examples
/// ```
/// use reverse_wordle::core::{Grid, Word};
/// use reverse_wordle::solver::{Constraints, matches};
///
/// let grid = Grid::parse("board\ny----").unwrap();
/// let constraints = Constraints::new().derive(&grid, 1, grid.solution());
///
/// // a yellow b can never sit where the solution has its own b
/// assert!(!matches(&Word::new("brown").unwrap(), &constraints, &grid, 1));
/// assert!(matches(&Word::new("amity").unwrap(), &constraints, &grid, 1));
/// ```
///
/// # Panics
/// Panics if `row` is not a feedback row of `grid`.
#[must_use]
pub fn matches(word: &Word, constraints: &Constraints, grid: &Grid, row: usize) -> bool {
    let solution = grid.solution();
    let feedback = grid.row(row);
    let forbidden = constraints.forbidden();

    // Each solution letter can be credited to at most one pinned position
    let mut available = solution.char_counts();

    for (i, &letter) in word.chars().iter().enumerate() {
        match feedback.tile(i) {
            Tile::Grey if forbidden.contains(letter) => return false,
            Tile::Yellow if letter == solution.char_at(i) => return false,
            _ => {}
        }

        let allowed = constraints.allowed(i);
        if allowed.is_empty() {
            if forbidden.contains(letter) {
                return false;
            }
            continue;
        }

        if !allowed.contains(letter) {
            return false;
        }
        match available.get_mut(&letter) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    true
}
