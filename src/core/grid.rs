//! Feedback grid
//!
//! Row 0 of a grid is the solution word. Rows 1..N-1 are the feedback rows of
//! earlier guesses, ordered from the guess made just before the solution
//! (row 1) back to the earliest guess (row N-1).

use super::feedback::{FeedbackError, FeedbackRow};
use super::word::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error produced when loading a grid
#[derive(Debug)]
pub enum GridError {
    Io(io::Error),
    MissingSolution,
    InvalidSolution { line: usize, source: WordError },
    InvalidRow { line: usize, source: FeedbackError },
    NoFeedbackRows,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read grid: {e}"),
            Self::MissingSolution => write!(f, "Grid is empty, expected a solution word"),
            Self::InvalidSolution { line, source } => {
                write!(f, "Line {line}: invalid solution word: {source}")
            }
            Self::InvalidRow { line, source } => {
                write!(f, "Line {line}: invalid feedback row: {source}")
            }
            Self::NoFeedbackRows => write!(f, "Grid has no feedback rows"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidSolution { source, .. } => Some(source),
            Self::InvalidRow { source, .. } => Some(source),
            Self::MissingSolution | Self::NoFeedbackRows => None,
        }
    }
}

impl From<io::Error> for GridError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A solution word followed by the feedback rows of earlier guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    solution: Word,
    rows: Vec<FeedbackRow>,
}

impl Grid {
    /// Create a grid from a solution and its feedback rows (row 1 first)
    ///
    /// # Errors
    /// Returns `GridError::NoFeedbackRows` if `rows` is empty.
    pub fn new(solution: Word, rows: Vec<FeedbackRow>) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::NoFeedbackRows);
        }
        Ok(Self { solution, rows })
    }

    /// Parse a grid from text
    ///
    /// The first non-blank line is the solution, every following non-blank
    /// line is a feedback row. Both `\n` and `\r\n` line endings are accepted.
    ///
    /// # Errors
    /// Returns `GridError` describing the first malformed line.
    ///
    /// # Examples
    /// ```
    /// use reverse_wordle::core::{Grid, Tile};
    ///
    /// let grid = Grid::parse("board\ny----\n--g--\n").unwrap();
    /// assert_eq!(grid.solution().text(), "board");
    /// assert_eq!(grid.num_rows(), 3);
    /// assert_eq!(grid.row(2).tile(2), Tile::Green);
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line, first) = lines.next().ok_or(GridError::MissingSolution)?;
        let solution =
            Word::new(first).map_err(|source| GridError::InvalidSolution { line, source })?;

        let rows = lines
            .map(|(line, text)| {
                FeedbackRow::parse(text).map_err(|source| GridError::InvalidRow { line, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(solution, rows)
    }

    /// Load a grid from a file
    ///
    /// # Errors
    /// Returns `GridError::Io` if the file cannot be read, or a parse error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// The known final solution (row 0)
    #[inline]
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Total number of rows N, solution row included
    #[inline]
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len() + 1
    }

    /// Feedback row at `row` (1-based, row 0 is the solution)
    ///
    /// # Panics
    /// Panics if `row == 0` or `row >= num_rows()`
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &FeedbackRow {
        assert!(row > 0, "row 0 holds the solution, not feedback");
        &self.rows[row - 1]
    }

    /// Feedback rows in grid order (row 1 first)
    #[must_use]
    pub fn feedback_rows(&self) -> &[FeedbackRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;
    use std::io::Write;

    #[test]
    fn parse_basic_grid() {
        let grid = Grid::parse("trace\n-y--g\ny---g\n").unwrap();
        assert_eq!(grid.solution().text(), "trace");
        assert_eq!(grid.num_rows(), 3);
        assert_eq!(grid.row(1).to_string(), "-y--g");
        assert_eq!(grid.row(2).tile(0), Tile::Yellow);
    }

    #[test]
    fn parse_windows_line_endings_and_blank_lines() {
        let grid = Grid::parse("\r\ncrane\r\nggggg\r\n\r\n").unwrap();
        assert_eq!(grid.solution().text(), "crane");
        assert_eq!(grid.feedback_rows(), &[FeedbackRow::ALL_GREEN]);
    }

    #[test]
    fn parse_reports_line_numbers() {
        let err = Grid::parse("crane\nggggg\n\nggxgg\n").unwrap_err();
        assert!(matches!(
            err,
            GridError::InvalidRow {
                line: 4,
                source: FeedbackError::InvalidTile('x')
            }
        ));
        assert!(err.to_string().starts_with("Line 4:"));
    }

    #[test]
    fn parse_rejects_bad_solution() {
        let err = Grid::parse("cranes\nggggg\n").unwrap_err();
        assert!(matches!(
            err,
            GridError::InvalidSolution {
                line: 1,
                source: WordError::InvalidLength(6)
            }
        ));
    }

    #[test]
    fn parse_requires_solution_and_rows() {
        assert!(matches!(Grid::parse(""), Err(GridError::MissingSolution)));
        assert!(matches!(
            Grid::parse("crane\n"),
            Err(GridError::NoFeedbackRows)
        ));
    }

    #[test]
    #[should_panic(expected = "row 0 holds the solution")]
    fn row_zero_is_not_feedback() {
        let grid = Grid::parse("crane\nggggg").unwrap();
        let _ = grid.row(0);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board\ny----").unwrap();

        let grid = Grid::load(file.path()).unwrap();
        assert_eq!(grid.num_rows(), 2);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Grid::load(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
    }
}
