//! Lazy enumeration of complete paths through a solution tree

use super::tree::SolverNode;
use crate::core::Word;
use std::slice;

/// Iterator over every complete path of a [`SolutionTree`](super::SolutionTree)
///
/// Walks the tree depth first with an explicit stack, visiting siblings in
/// the order they were built. Paths that stop short of the full depth are
/// dead branches and are skipped.
pub struct Paths<'t> {
    stack: Vec<slice::Iter<'t, SolverNode>>,
    path: Vec<&'t Word>,
    depth: usize,
}

impl<'t> Paths<'t> {
    pub(super) fn new(root: &'t SolverNode, depth: usize) -> Self {
        Self {
            stack: vec![root.children().iter()],
            path: Vec::with_capacity(depth),
            depth,
        }
    }
}

impl<'t> Iterator for Paths<'t> {
    type Item = Vec<&'t Word>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(siblings) = self.stack.last_mut() {
            let Some(node) = siblings.next() else {
                self.stack.pop();
                self.path.pop();
                continue;
            };

            self.path.push(node.word());
            if self.path.len() == self.depth {
                let complete = self.path.clone();
                self.path.pop();
                return Some(complete);
            }
            self.stack.push(node.children().iter());
        }
        None
    }
}
