//! Resumable traversal stack
//!
//! Explicit LIFO of traversal nodes. The index of a node in the backing
//! vector is its depth in the walk, so the stack stands in for the call
//! stack of a recursive descent and survives between `advance` calls.

use super::node::TraversalNode;

/// Depth-indexed stack of traversal nodes
#[derive(Debug, Default)]
pub struct ResumableStack<'a> {
    /// Slot `i` holds the node at depth `i`
    nodes: Vec<TraversalNode<'a>>,
    /// Deepest nesting seen so far
    max_depth_reached: usize,
}

impl<'a> ResumableStack<'a> {
    /// Create an empty stack
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `node` at the next depth; it becomes current
    pub fn push(&mut self, node: TraversalNode<'a>) {
        self.nodes.push(node);
        self.max_depth_reached = self.max_depth_reached.max(self.nodes.len());
    }

    /// Remove the current node; the node one level up becomes current
    pub fn pop(&mut self) -> Option<TraversalNode<'a>> {
        self.nodes.pop()
    }

    /// Node at the top of the stack
    #[inline]
    pub fn current(&self) -> Option<&TraversalNode<'a>> {
        self.nodes.last()
    }

    /// Mutable node at the top of the stack
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut TraversalNode<'a>> {
        self.nodes.last_mut()
    }

    /// Depth index of the current node
    #[inline]
    pub fn top_index(&self) -> Option<usize> {
        self.nodes.len().checked_sub(1)
    }

    /// Number of nodes on the stack
    #[inline]
    pub fn depth(&self) -> usize {
        self.nodes.len()
    }

    /// An empty stack means the walk is exhausted
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest nesting reached over the lifetime of the stack
    #[inline]
    pub fn max_depth_reached(&self) -> usize {
        self.max_depth_reached
    }
}
