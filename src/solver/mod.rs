//! Reverse search over the feedback grid
//!
//! Constraint derivation, the matching predicate, the backtracking engine
//! that builds the solution tree, and path enumeration over that tree.

mod constraints;
mod matching;
pub mod observer;
mod paths;
mod tree;

pub use constraints::{Constraints, LetterSet};
pub use matching::matches;
pub use observer::{LogObserver, NoopObserver, ProgressObserver, SearchObserver};
pub use paths::Paths;
pub use tree::{SearchEngine, SolutionTree, SolverNode};
