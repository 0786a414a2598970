//! Pre-order, post-order and level-order walks over a subtree.
//!
//! The iterators keep an explicit stack (or queue) instead of recursing, so a
//! walk can be consumed lazily. The `to_*_list` producers materialize a walk
//! into the node values, absent values included.

use std::collections::VecDeque;

use tracing::instrument;

use crate::domain::arena::{NodeId, TreeArena, TreeNode};
use crate::domain::node_ref::NodeRef;

pub struct PreOrderIterator<'a, E> {
    arena: &'a TreeArena<E>,
    stack: Vec<NodeId>,
}

impl<'a, E> PreOrderIterator<'a, E> {
    fn new(arena: &'a TreeArena<E>, root: NodeId) -> Self {
        Self {
            arena,
            stack: vec![root],
        }
    }
}

impl<'a, E> Iterator for PreOrderIterator<'a, E> {
    type Item = (NodeId, &'a TreeNode<E>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current) {
                // reversed so the first child is popped first
                self.stack.extend(node.children.iter().rev().copied());
                return Some((current, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a, E> {
    arena: &'a TreeArena<E>,
    stack: Vec<(NodeId, bool)>,
}

impl<'a, E> PostOrderIterator<'a, E> {
    fn new(arena: &'a TreeArena<E>, root: NodeId) -> Self {
        Self {
            arena,
            stack: vec![(root, false)],
        }
    }
}

impl<'a, E> Iterator for PostOrderIterator<'a, E> {
    type Item = (NodeId, &'a TreeNode<E>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, expanded)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current) {
                if expanded {
                    return Some((current, node));
                }
                self.stack.push((current, true));
                for &child in node.children.iter().rev() {
                    self.stack.push((child, false));
                }
            }
        }
        None
    }
}

pub struct ByWidthIterator<'a, E> {
    arena: &'a TreeArena<E>,
    queue: VecDeque<NodeId>,
}

impl<'a, E> ByWidthIterator<'a, E> {
    fn new(arena: &'a TreeArena<E>, root: NodeId) -> Self {
        Self {
            arena,
            queue: VecDeque::from([root]),
        }
    }
}

impl<'a, E> Iterator for ByWidthIterator<'a, E> {
    type Item = (NodeId, &'a TreeNode<E>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.queue.pop_front() {
            if let Some(node) = self.arena.get_node(current) {
                self.queue.extend(node.children.iter().copied());
                return Some((current, node));
            }
        }
        None
    }
}

impl<'a, E> NodeRef<'a, E> {
    pub fn iter_preorder(&self) -> PreOrderIterator<'a, E> {
        PreOrderIterator::new(self.arena(), self.id())
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'a, E> {
        PostOrderIterator::new(self.arena(), self.id())
    }

    pub fn iter_by_width(&self) -> ByWidthIterator<'a, E> {
        ByWidthIterator::new(self.arena(), self.id())
    }

    /// Values with every parent before its children; this node comes first.
    #[instrument(level = "trace", skip(self))]
    pub fn to_prefix_list(&self) -> Vec<Option<&'a E>> {
        self.iter_preorder().map(|(_, node)| node.value()).collect()
    }

    /// Values with every parent after its children; this node comes last.
    #[instrument(level = "trace", skip(self))]
    pub fn to_postfix_list(&self) -> Vec<Option<&'a E>> {
        self.iter_postorder().map(|(_, node)| node.value()).collect()
    }

    /// Values level by level, starting at this node.
    #[instrument(level = "trace", skip(self))]
    pub fn to_by_width_list(&self) -> Vec<Option<&'a E>> {
        self.iter_by_width().map(|(_, node)| node.value()).collect()
    }
}
