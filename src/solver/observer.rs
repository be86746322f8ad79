//! Search observers
//!
//! The engine reports every node it enters to a `SearchObserver`. Observers
//! are for diagnostics only and cannot influence which words are accepted.

use super::tree::{SolutionTree, SolverNode};
use indicatif::{ProgressBar, ProgressStyle};

/// Receives notifications while the solution tree is built
pub trait SearchObserver {
    /// Called when the engine enters `node` to fill grid row `row`
    ///
    /// `row == node.depth() + 1`; when `row` equals the number of grid rows
    /// the node is a complete path and will not be expanded.
    fn enter_node(&self, row: usize, node: &SolverNode);

    /// Called once after the whole tree has been built
    fn finished(&self, _tree: &SolutionTree) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn enter_node(&self, _row: usize, _node: &SolverNode) {}
}

/// Observer that reports node entries through the `log` facade
///
/// Entries are logged at debug level; the constraint state of each node is
/// dumped at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn enter_node(&self, row: usize, node: &SolverNode) {
        log::debug!(
            "Entering node: row {row}, depth {}, word {}",
            node.depth(),
            node.word()
        );
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Constraints for {}:\n{}", node.word(), node.constraints());
        }
    }

    fn finished(&self, tree: &SolutionTree) {
        log::debug!(
            "Search finished: {} nodes, {} complete paths",
            tree.node_count(),
            tree.path_count()
        );
    }
}

/// Spinner on stderr counting the nodes explored so far
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new_spinner())
    }

    /// Progress observer that never draws, for tests and quiet runs
    #[must_use]
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        let style =
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos} nodes | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        Self { bar }
    }

    /// Number of nodes entered so far
    #[must_use]
    pub fn nodes_seen(&self) -> u64 {
        self.bar.position()
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchObserver for ProgressObserver {
    fn enter_node(&self, row: usize, node: &SolverNode) {
        self.bar.inc(1);
        // Top-level branches are the only ones worth naming
        if node.depth() == 1 {
            self.bar.set_message(format!("exploring {} (row {row})", node.word()));
        }
    }

    fn finished(&self, _tree: &SolutionTree) {
        self.bar.finish_and_clear();
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for &O {
    fn enter_node(&self, row: usize, node: &SolverNode) {
        (**self).enter_node(row, node);
    }

    fn finished(&self, tree: &SolutionTree) {
        (**self).finished(tree);
    }
}

impl<O: SearchObserver> SearchObserver for Option<O> {
    fn enter_node(&self, row: usize, node: &SolverNode) {
        if let Some(observer) = self {
            observer.enter_node(row, node);
        }
    }

    fn finished(&self, tree: &SolutionTree) {
        if let Some(observer) = self {
            observer.finished(tree);
        }
    }
}

impl<A: SearchObserver, B: SearchObserver> SearchObserver for (A, B) {
    fn enter_node(&self, row: usize, node: &SolverNode) {
        self.0.enter_node(row, node);
        self.1.enter_node(row, node);
    }

    fn finished(&self, tree: &SolutionTree) {
        self.0.finished(tree);
        self.1.finished(tree);
    }
}
