//! Constraint state threaded through the search
//!
//! Each tree level carries per-position allowed letter sets and one global set
//! of forbidden letters. A position with an empty allowed set is unrestricted
//! apart from the forbidden set.

use crate::core::{FeedbackRow, Grid, Tile, WORD_LEN, Word};
use std::fmt;

/// A set of lowercase ASCII letters stored as a 26-bit mask
///
/// Bytes outside `a..=z` are never members: inserting one is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        if letter.is_ascii_lowercase() {
            1 << (letter - b'a')
        } else {
            0
        }
    }

    /// Set holding a single letter
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        Self(Self::bit(letter))
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&l| self.contains(l))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

/// Letter constraints for one tree level
///
/// A value type: [`Constraints::derive`] returns a fresh state and never
/// touches the one it started from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Constraints {
    allowed: [LetterSet; WORD_LEN],
    forbidden: LetterSet,
}

impl Constraints {
    /// No positional restrictions and nothing forbidden
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allowed: [LetterSet::EMPTY; WORD_LEN],
            forbidden: LetterSet::EMPTY,
        }
    }

    /// Allowed letters at `position`; empty means unrestricted
    #[inline]
    #[must_use]
    pub const fn allowed(&self, position: usize) -> LetterSet {
        self.allowed[position]
    }

    #[inline]
    #[must_use]
    pub const fn forbidden(&self) -> LetterSet {
        self.forbidden
    }

    /// Pin `position` to exactly `letter`
    pub fn set_green(&mut self, letter: u8, position: usize) {
        debug_assert!(position < WORD_LEN);
        self.allowed[position] = LetterSet::single(letter);
    }

    /// Recompute the allowed set at `position` for a yellow tile
    ///
    /// `current` is the row being constrained, `reference` the row one step
    /// closer to the solution and `reference_word` the word guessed there.
    /// Letters yellow in `reference`, or green in `reference` but not in
    /// `current`, may be the letter owed to `position`.
    pub fn set_yellow(
        &mut self,
        position: usize,
        current: &FeedbackRow,
        reference: &FeedbackRow,
        reference_word: &Word,
    ) {
        self.allowed[position] = (0..WORD_LEN)
            .filter(|&j| j != position)
            .filter(|&j| match reference.tile(j) {
                Tile::Yellow => true,
                Tile::Green => current.tile(j) != Tile::Green,
                Tile::Grey => false,
            })
            .map(|j| reference_word.char_at(j))
            .collect();
    }

    /// Forbid every letter of `word` for the rest of the subtree
    pub fn add_forbidden(&mut self, word: &Word) {
        for &letter in word.chars() {
            self.forbidden.insert(letter);
        }
    }

    /// Derive the constraints that filter candidates for grid row `row`
    ///
    /// `word` is the word accepted one row closer to the solution (the
    /// solution itself when `row == 1`). Per-position sets are rebuilt from
    /// `grid.row(row)`; the forbidden set keeps everything already in `self`
    /// and gains the letters of `word`.
    ///
    /// # Examples
    /// ```
    /// use reverse_wordle::core::Grid;
    /// use reverse_wordle::solver::Constraints;
    ///
    /// let grid = Grid::parse("board\ny----").unwrap();
    /// let c = Constraints::new().derive(&grid, 1, grid.solution());
    ///
    /// // The yellow b is owed one of the other solution letters
    /// assert_eq!(c.allowed(0).to_string(), "a d o r");
    /// assert!(c.allowed(1).is_empty());
    /// assert!(c.forbidden().contains(b'b'));
    /// ```
    ///
    /// # Panics
    /// Panics if `row` is not a feedback row of `grid`.
    #[must_use]
    pub fn derive(&self, grid: &Grid, row: usize, word: &Word) -> Self {
        let mut next = *self;
        let current = grid.row(row);
        let reference = if row > 1 {
            grid.row(row - 1)
        } else {
            &FeedbackRow::ALL_GREEN
        };

        for (i, tile) in current.tiles().iter().enumerate() {
            match tile {
                Tile::Green => next.set_green(word.char_at(i), i),
                Tile::Grey => next.allowed[i] = LetterSet::EMPTY,
                Tile::Yellow => next.set_yellow(i, current, reference, word),
            }
        }

        next.add_forbidden(word);
        next
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "forbidden: {}", self.forbidden)?;
        writeln!(f, "allowed:")?;
        for (i, set) in self.allowed.iter().enumerate() {
            if set.is_empty() {
                writeln!(f, "  [{i}] *")?;
            } else {
                writeln!(f, "  [{i}] {set}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn row(s: &str) -> FeedbackRow {
        FeedbackRow::parse(s).unwrap()
    }

    #[test]
    fn letter_set_basics() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());
        set.insert(b'z');
        set.insert(b'a');
        set.insert(b'a');
        assert_eq!(set.len(), 2);
        assert!(set.contains(b'a'));
        assert!(!set.contains(b'm'));
        assert_eq!(set.to_string(), "a z");
    }

    #[test]
    fn letter_set_ignores_bytes_outside_a_to_z() {
        let set: LetterSet = [b'A', b'{', b'`', b'0', 0, 255].into_iter().collect();
        assert!(set.is_empty());
        assert!(!set.contains(b'A'));
        assert!(!LetterSet::single(b'@').contains(b'@'));

        let mut c = Constraints::new();
        c.set_green(b'Z', 0);
        assert!(c.allowed(0).is_empty());
    }

    #[test]
    fn initial_state_is_unrestricted() {
        let c = Constraints::new();
        assert_eq!(c, Constraints::default());
        assert!(c.forbidden().is_empty());
        assert!((0..WORD_LEN).all(|i| c.allowed(i).is_empty()));
    }

    #[test]
    fn set_green_replaces_previous_content() {
        let mut c = Constraints::new();
        c.set_green(b'x', 2);
        c.set_green(b'a', 2);
        assert_eq!(c.allowed(2), LetterSet::single(b'a'));
        assert!(c.allowed(1).is_empty());
    }

    #[test]
    fn set_yellow_collects_yellow_and_newly_green_letters() {
        let mut c = Constraints::new();
        c.set_green(b'q', 0);

        c.set_yellow(0, &row("---g-"), &row("gy-gg"), &word("trace"));

        // r is yellow and e newly green; c was already green in the current
        // row and t sits at the position being constrained
        let letters: Vec<u8> = c.allowed(0).letters().collect();
        assert_eq!(letters, vec![b'e', b'r']);
    }

    #[test]
    fn set_yellow_can_produce_empty_set() {
        let mut c = Constraints::new();
        c.set_green(b'q', 1);
        c.set_yellow(1, &row("gyggg"), &row("gyggg"), &word("trace"));
        assert!(c.allowed(1).is_empty());
    }

    #[test]
    fn add_forbidden_is_idempotent_union() {
        let mut c = Constraints::new();
        c.add_forbidden(&word("speed"));
        let once = c;
        c.add_forbidden(&word("speed"));
        assert_eq!(c, once);
        assert_eq!(c.forbidden().to_string(), "d e p s");

        c.add_forbidden(&word("board"));
        assert_eq!(c.forbidden().len(), 8);
    }

    #[test]
    fn derive_first_row_uses_all_green_reference() {
        let grid = Grid::parse("crane\ng-y--").unwrap();
        let c = Constraints::new().derive(&grid, 1, grid.solution());

        assert_eq!(c.allowed(0), LetterSet::single(b'c'));
        assert!(c.allowed(1).is_empty());
        // every other solution letter except c (green in current row)
        assert_eq!(c.allowed(2).to_string(), "e n r");
        assert_eq!(c.forbidden().to_string(), "a c e n r");
    }

    #[test]
    fn derive_later_row_uses_previous_row_as_reference() {
        let grid = Grid::parse("crane\nggg--\n-y---").unwrap();
        let parent = Constraints::new().derive(&grid, 1, grid.solution());
        let c = parent.derive(&grid, 2, &word("crash"));

        // c and a were green one row closer to the solution
        assert_eq!(c.allowed(1).to_string(), "a c");
        assert!(c.allowed(0).is_empty());
        // forbidden accumulates solution and child word
        assert_eq!(c.forbidden().to_string(), "a c e h n r s");
    }

    #[test]
    fn derive_resets_positional_sets_but_keeps_forbidden() {
        let grid = Grid::parse("crane\nggggg\n-----").unwrap();
        let mut stale = Constraints::new();
        stale.set_green(b'z', 3);
        stale.add_forbidden(&word("quiet"));

        let c = stale.derive(&grid, 2, &word("crane"));
        assert!((0..WORD_LEN).all(|i| c.allowed(i).is_empty()));
        assert!(c.forbidden().contains(b'q'));
        assert!(c.forbidden().contains(b'c'));
    }

    #[test]
    fn derive_is_pure() {
        let grid = Grid::parse("board\ny-g--\n-y-g-").unwrap();
        let base = Constraints::new().derive(&grid, 1, grid.solution());

        let first = base.derive(&grid, 2, &word("bison"));
        let second = base.derive(&grid, 2, &word("bison"));
        assert_eq!(first, second);
        assert_eq!(base, Constraints::new().derive(&grid, 1, grid.solution()));
    }

    #[test]
    fn display_lists_forbidden_and_positions() {
        let grid = Grid::parse("board\ng----").unwrap();
        let dump = Constraints::new()
            .derive(&grid, 1, grid.solution())
            .to_string();
        assert!(dump.starts_with("forbidden: a b d o r\n"));
        assert!(dump.contains("  [0] b\n"));
        assert!(dump.contains("  [1] *\n"));
    }
}
