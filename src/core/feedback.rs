//! Feedback tiles and rows
//!
//! A feedback row records the colored outcome of one guess against the solution:
//! - Green: letter in the correct position
//! - Yellow: letter present elsewhere (duplicates accounted for)
//! - Grey: letter absent, or all of its occurrences already accounted for

use super::word::WORD_LEN;
use std::fmt;

/// One colored tile of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Green,
    Yellow,
    Grey,
}

impl Tile {
    /// Parse a single tile character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for grey
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '⬜' => Some(Self::Grey),
            _ => None,
        }
    }

    /// Compact ASCII form used in grid files
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Grey => '-',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Grey => '⬜',
        }
    }
}

/// Error produced when parsing a feedback row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidTile(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback row must have exactly {WORD_LEN} tiles, got {len}")
            }
            Self::InvalidTile(ch) => {
                write!(f, "Invalid tile '{ch}' (expected g, y or -)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for one guess: one tile per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRow([Tile; WORD_LEN]);

impl FeedbackRow {
    /// All greens, the feedback the solution gives against itself
    pub const ALL_GREEN: Self = Self([Tile::Green; WORD_LEN]);

    #[must_use]
    pub const fn new(tiles: [Tile; WORD_LEN]) -> Self {
        Self(tiles)
    }

    /// Tile at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn tile(&self, position: usize) -> Tile {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LEN] {
        &self.0
    }

    /// Parse a row from a string like "gy-g-" or "🟩🟨⬜🟩⬜"
    ///
    /// # Errors
    /// Returns `FeedbackError` if the row is not `WORD_LEN` tiles long or
    /// contains a character that is not a tile.
    ///
    /// # Examples
    /// ```
    /// use reverse_wordle::core::{FeedbackRow, Tile};
    ///
    /// let row = FeedbackRow::parse("gy-G_").unwrap();
    /// assert_eq!(row.tile(0), Tile::Green);
    /// assert_eq!(row.tile(1), Tile::Yellow);
    /// assert_eq!(row, FeedbackRow::parse("🟩🟨⬜🟩⬜").unwrap());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut tiles = [Tile::Grey; WORD_LEN];
        for (tile, ch) in tiles.iter_mut().zip(chars) {
            *tile = Tile::from_char(ch).ok_or(FeedbackError::InvalidTile(ch))?;
        }
        Ok(Self(tiles))
    }

    #[must_use]
    pub fn count(&self, kind: Tile) -> usize {
        self.0.iter().filter(|&&t| t == kind).count()
    }

    /// Convert the row to an emoji string such as "🟩🟨⬜🟩⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().copied().map(Tile::to_emoji).collect()
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.0 {
            write!(f, "{}", tile.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for FeedbackRow {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
