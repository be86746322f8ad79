//! Backtracking search and the solution tree it builds
//!
//! The search walks backward in time from the solution. A node at depth `d`
//! holds a word that could have been guessed at grid row `d`, together with
//! the constraints that filter candidates for row `d + 1`.

use super::constraints::Constraints;
use super::matching::matches;
use super::observer::SearchObserver;
use super::paths::Paths;
use crate::core::{Grid, Word};

/// One accepted word in the solution tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverNode {
    word: Word,
    depth: usize,
    constraints: Constraints,
    children: Vec<SolverNode>,
}

impl SolverNode {
    const fn new(word: Word, depth: usize, constraints: Constraints) -> Self {
        Self {
            word,
            depth,
            constraints,
            children: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Grid row this word was guessed at; 0 for the root (the solution)
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Constraints used to filter this node's children
    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Children in dictionary order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    fn count_descendants(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.count_descendants())
            .sum()
    }

    fn count_at_depth(&self, depth: usize) -> usize {
        if self.depth == depth {
            return 1;
        }
        self.children
            .iter()
            .map(|child| child.count_at_depth(depth))
            .sum()
    }
}

/// Every guess sequence consistent with a grid, stored as a tree
///
/// The root holds the solution. Each path from the root down to depth
/// [`SolutionTree::depth`] is one reconstructed sequence of guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionTree {
    root: SolverNode,
    depth: usize,
}

impl SolutionTree {
    #[inline]
    #[must_use]
    pub const fn root(&self) -> &SolverNode {
        &self.root
    }

    /// Length of a complete path: the number of feedback rows
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Number of candidate nodes, root excluded
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.count_descendants()
    }

    /// Number of complete paths, without materializing them
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.root.count_at_depth(self.depth)
    }

    /// Lazily enumerate every complete path
    ///
    /// Each path starts with the row 1 word (the guess made just before the
    /// solution) and ends with the earliest guess.
    #[must_use]
    pub fn paths(&self) -> Paths<'_> {
        Paths::new(&self.root, self.depth)
    }
}

/// Builds a [`SolutionTree`] from a grid and a dictionary
///
/// The dictionary is only borrowed and is scanned once per expanded node.
pub struct SearchEngine<'a, O: SearchObserver> {
    grid: &'a Grid,
    dictionary: &'a [Word],
    observer: O,
}

impl<'a, O: SearchObserver> SearchEngine<'a, O> {
    /// Create a new engine
    ///
    /// # Parameters
    /// - `grid`: solution word and feedback rows
    /// - `dictionary`: legal guesses, in the order children should appear
    /// - `observer`: receives node-entry notifications
    #[must_use]
    pub const fn new(grid: &'a Grid, dictionary: &'a [Word], observer: O) -> Self {
        Self {
            grid,
            dictionary,
            observer,
        }
    }

    /// Build the full solution tree
    ///
    /// # Examples
    /// ```
    /// use reverse_wordle::core::Grid;
    /// use reverse_wordle::solver::{NoopObserver, SearchEngine};
    /// use reverse_wordle::wordlists::words_from_slice;
    ///
    /// let grid = Grid::parse("crane\nggggg").unwrap();
    /// let dictionary = words_from_slice(&["crane", "slate"]);
    ///
    /// let tree = SearchEngine::new(&grid, &dictionary, NoopObserver).build();
    /// let paths: Vec<_> = tree.paths().collect();
    /// assert_eq!(paths.len(), 1);
    /// assert_eq!(paths[0][0].text(), "crane");
    /// ```
    #[must_use]
    pub fn build(&self) -> SolutionTree {
        let solution = self.grid.solution();
        let constraints = Constraints::new().derive(self.grid, 1, solution);
        let mut root = SolverNode::new(solution.clone(), 0, constraints);

        self.expand(1, &mut root);

        let tree = SolutionTree {
            root,
            depth: self.grid.num_rows() - 1,
        };
        self.observer.finished(&tree);
        tree
    }

    /// Fill grid row `row` below `parent`
    fn expand(&self, row: usize, parent: &mut SolverNode) {
        self.observer.enter_node(row, parent);

        let num_rows = self.grid.num_rows();
        if row == num_rows {
            return;
        }

        for word in self.dictionary {
            if !matches(word, &parent.constraints, self.grid, row) {
                continue;
            }

            // A child on the last row is never expanded, so there is no row
            // beyond it to derive from
            let constraints = if row + 1 < num_rows {
                parent.constraints.derive(self.grid, row + 1, word)
            } else {
                parent.constraints
            };

            let mut child = SolverNode::new(word.clone(), row, constraints);
            self.expand(row + 1, &mut child);
            parent.children.push(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::NoopObserver;
    use crate::wordlists::words_from_slice;

    fn build(grid: &str, dictionary: &[&str]) -> (Grid, SolutionTree) {
        let grid = Grid::parse(grid).unwrap();
        let dictionary = words_from_slice(dictionary);
        let tree = SearchEngine::new(&grid, &dictionary, NoopObserver).build();
        (grid, tree)
    }

    fn texts(tree: &SolutionTree) -> Vec<Vec<String>> {
        tree.paths()
            .map(|path| path.iter().map(|w| w.text().to_string()).collect())
            .collect()
    }

    #[test]
    fn all_green_row_keeps_only_the_solution() {
        let (_, tree) = build("crane\nggggg", &["crane", "slate"]);

        assert_eq!(tree.root().word().text(), "crane");
        assert_eq!(tree.root().depth(), 0);
        assert_eq!(tree.depth(), 1);
        assert_eq!(texts(&tree), vec![vec!["crane"]]);
    }

    #[test]
    fn yellow_row_prunes_coinciding_letters() {
        let (_, tree) = build("board\ny----", &["brown", "amity", "dwarf"]);

        assert_eq!(texts(&tree), vec![vec!["amity"]]);
    }

    #[test]
    fn empty_dictionary_yields_bare_root() {
        let (_, tree) = build("crane\n-----\n-----", &[]);

        assert!(tree.root().children().is_empty());
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.path_count(), 0);
        assert_eq!(tree.paths().count(), 0);
    }

    #[test]
    fn two_row_grid_enumerates_every_consistent_sequence() {
        let (_, tree) = build("crane\n-----\n-----", &["pilot", "fuzzy", "bumpy", "crane"]);

        // bumpy survives row 1 but has no continuation on row 2
        assert_eq!(tree.node_count(), 5);
        assert_eq!(
            texts(&tree),
            vec![vec!["pilot", "fuzzy"], vec!["fuzzy", "pilot"]]
        );
        assert_eq!(tree.path_count(), 2);
    }

    #[test]
    fn every_path_has_full_length() {
        let (grid, tree) = build(
            "crane\n-----\n-----\n-----",
            &["pilot", "fuzzy", "twigs", "jumpy", "vozhd"],
        );

        // twigs, jumpy and vozhd are the only three words with pairwise
        // disjoint letters, so their 6 orderings are the only full paths
        let paths: Vec<_> = tree.paths().collect();
        assert_eq!(paths.len(), 6);
        assert!(paths.iter().all(|p| p.len() == grid.num_rows() - 1));
        assert_eq!(paths.len(), tree.path_count());
        assert_eq!(texts(&tree)[0], vec!["twigs", "jumpy", "vozhd"]);
    }

    #[test]
    fn yellow_row_uses_previous_row_as_reference() {
        let (_, tree) = build(
            "crane\nggg--\n-y---",
            &["craft", "badly", "cramp", "batty", "crane"],
        );

        // Row 2's yellow is owed a letter that went green on row 1: the c or
        // the a of the row 1 word
        let cramp = &tree.root().children()[1];
        assert_eq!(cramp.word().text(), "cramp");
        assert_eq!(cramp.constraints().allowed(1).to_string(), "a c");

        assert_eq!(
            texts(&tree),
            vec![
                vec!["craft", "badly"],
                vec!["cramp", "badly"],
                vec!["cramp", "batty"],
            ]
        );
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn children_follow_dictionary_order() {
        let dictionary = ["pilot", "fuzzy", "bumpy"];
        let mut reversed = dictionary;
        reversed.reverse();

        let (_, forward) = build("crane\n-----", &dictionary);
        let (_, backward) = build("crane\n-----", &reversed);

        let words = |tree: &SolutionTree| -> Vec<String> {
            tree.root()
                .children()
                .iter()
                .map(|n| n.word().text().to_string())
                .collect()
        };
        let forward_words = words(&forward);
        let backward_words = words(&backward);
        assert_eq!(forward_words, vec!["pilot", "fuzzy", "bumpy"]);
        assert_eq!(backward_words, vec!["bumpy", "fuzzy", "pilot"]);
    }

    #[test]
    fn child_constraints_are_derived_from_parent() {
        let (grid, tree) = build("crane\n-----\n-----", &["pilot", "fuzzy"]);
        let root = tree.root();
        let pilot = &root.children()[0];

        assert_eq!(
            *root.constraints(),
            Constraints::new().derive(&grid, 1, grid.solution())
        );
        assert_eq!(
            *pilot.constraints(),
            root.constraints().derive(&grid, 2, pilot.word())
        );
        assert_eq!(pilot.depth(), 1);
        assert_eq!(pilot.children()[0].depth(), 2);
    }

    #[test]
    fn build_is_deterministic() {
        let (_, first) = build("board\ny----\n-----", &["amity", "olive", "pinch"]);
        let (_, second) = build("board\ny----\n-----", &["amity", "olive", "pinch"]);

        assert_eq!(first, second);
        assert_eq!(texts(&first), texts(&second));
    }
}
