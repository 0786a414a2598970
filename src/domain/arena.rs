use std::collections::HashSet;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::node_ref::NodeRef;

/// Stable handle to a node stored in a [`TreeArena`].
///
/// Two handles are equal only if they address the same slot in the same
/// generation, which is what node identity means in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Index);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "#{}v{}", slot, generation)
    }
}

/// Tree node stored in the arena.
#[derive(Debug, Clone)]
pub struct TreeNode<E> {
    /// Payload, None for a node awaiting assignment
    pub(crate) value: Option<E>,
    /// Ordered child handles, duplicates allowed
    pub(crate) children: Vec<NodeId>,
}

impl<E> TreeNode<E> {
    fn new(value: Option<E>) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> Option<&E> {
        self.value.as_ref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena owning every node of one or more trees.
///
/// Any node can serve as the root of a query: [`TreeArena::node`] hands out a
/// read-only [`NodeRef`] view rooted at the addressed node. Children are kept
/// as handles, so a node may be listed under several parents. Keeping the
/// structure acyclic is up to the caller.
#[derive(Debug)]
pub struct TreeArena<E> {
    arena: Arena<TreeNode<E>>,
}

impl<E> Default for TreeArena<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TreeArena<E> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            arena: Arena::with_capacity(n),
        }
    }

    /// Number of live nodes in the arena (across all trees).
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.arena.contains(id.0)
    }

    #[instrument(level = "trace", skip(self, value))]
    pub fn new_node(&mut self, value: E) -> NodeId {
        self.insert(Some(value))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn new_empty_node(&mut self) -> NodeId {
        self.insert(None)
    }

    pub(crate) fn insert(&mut self, value: Option<E>) -> NodeId {
        NodeId(self.arena.insert(TreeNode::new(value)))
    }

    pub fn get_node(&self, id: NodeId) -> Option<&TreeNode<E>> {
        self.arena.get(id.0)
    }

    fn get_node_mut(&mut self, id: NodeId) -> TreeResult<&mut TreeNode<E>> {
        self.arena.get_mut(id.0).ok_or(TreeError::NodeNotFound(id))
    }

    fn try_node(&self, id: NodeId) -> TreeResult<&TreeNode<E>> {
        self.get_node(id).ok_or(TreeError::NodeNotFound(id))
    }

    /// Read-only view of the tree rooted at `id`.
    pub fn node(&self, id: NodeId) -> TreeResult<NodeRef<'_, E>> {
        let node = self.try_node(id)?;
        Ok(NodeRef::new(self, id, node))
    }

    pub fn value(&self, id: NodeId) -> TreeResult<Option<&E>> {
        Ok(self.try_node(id)?.value())
    }

    /// Replaces the payload of `id` and returns the previous one.
    #[instrument(level = "trace", skip(self, value))]
    pub fn set_value(&mut self, id: NodeId, value: Option<E>) -> TreeResult<Option<E>> {
        let node = self.get_node_mut(id)?;
        Ok(std::mem::replace(&mut node.value, value))
    }

    pub fn child(&self, parent: NodeId, index: usize) -> TreeResult<NodeId> {
        let node = self.try_node(parent)?;
        node.children
            .get(index)
            .copied()
            .ok_or(TreeError::IndexOutOfRange {
                index,
                len: node.children.len(),
            })
    }

    /// Appends an existing node as the last child of `parent`.
    ///
    /// No cycle check is performed.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        self.try_node(child)?;
        self.get_node_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Wraps `value` in a fresh node and appends it to `parent`.
    #[instrument(level = "trace", skip(self, value))]
    pub fn add_child_value(&mut self, parent: NodeId, value: E) -> TreeResult<NodeId> {
        self.try_node(parent)?;
        let child = self.insert(Some(value));
        self.get_node_mut(parent)?.children.push(child);
        Ok(child)
    }

    /// Detaches the first occurrence of `child` from `parent`.
    ///
    /// Returns false when `child` is not listed. The detached node stays in
    /// the arena.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> TreeResult<bool> {
        let node = self.get_node_mut(parent)?;
        match node.children.iter().position(|&c| c == child) {
            Some(pos) => {
                node.children.remove(pos);
                debug!("detached {} from {}", child, parent);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Detaches the child at `index` and returns its handle.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_child_at(&mut self, parent: NodeId, index: usize) -> TreeResult<NodeId> {
        let node = self.get_node_mut(parent)?;
        if index >= node.children.len() {
            return Err(TreeError::IndexOutOfRange {
                index,
                len: node.children.len(),
            });
        }
        let child = node.children.remove(index);
        debug!("detached {} from {} at {}", child, parent, index);
        Ok(child)
    }

    /// Frees `id` and every node reachable from it.
    ///
    /// Freed handles are dropped from the child lists of all remaining nodes,
    /// including parents outside the subtree. Returns the number of freed nodes.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_subtree(&mut self, id: NodeId) -> TreeResult<usize> {
        self.try_node(id)?;

        let mut freed = HashSet::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if !freed.insert(current) {
                continue;
            }
            if let Some(node) = self.arena.remove(current.0) {
                stack.extend(node.children);
            } else {
                freed.remove(&current);
            }
        }

        for (_, node) in self.arena.iter_mut() {
            node.children.retain(|c| !freed.contains(c));
        }

        debug!("freed {} nodes under {}", freed.len(), id);
        Ok(freed.len())
    }
}
