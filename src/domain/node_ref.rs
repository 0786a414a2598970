use std::fmt;
use std::ptr;

use crate::domain::arena::{NodeId, TreeArena, TreeNode};
use crate::domain::error::{TreeError, TreeResult};

/// Read-only view of the tree rooted at one node of a [`TreeArena`].
///
/// Every structural query walks the subtree below the addressed node, so the
/// same node can be queried as a whole tree or as part of a larger one.
pub struct NodeRef<'a, E> {
    arena: &'a TreeArena<E>,
    id: NodeId,
    node: &'a TreeNode<E>,
}

impl<E> Clone for NodeRef<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for NodeRef<'_, E> {}

impl<E: fmt::Debug> fmt::Debug for NodeRef<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", &self.node.value)
            .field("children", &self.node.children)
            .finish()
    }
}

impl<'a, E> NodeRef<'a, E> {
    pub(crate) fn new(arena: &'a TreeArena<E>, id: NodeId, node: &'a TreeNode<E>) -> Self {
        Self { arena, id, node }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn arena(&self) -> &'a TreeArena<E> {
        self.arena
    }

    pub fn value(&self) -> Option<&'a E> {
        self.node.value()
    }

    /// Value of this node, or [`TreeError::AbsentValue`] when unset.
    pub fn require_value(&self) -> TreeResult<&'a E> {
        self.value().ok_or(TreeError::AbsentValue(self.id))
    }

    pub fn child(&self, index: usize) -> TreeResult<NodeId> {
        self.arena.child(self.id, index)
    }

    pub fn child_node(&self, index: usize) -> TreeResult<NodeRef<'a, E>> {
        self.arena.node(self.child(index)?)
    }

    /// Child handles in order. The slice is shared: structural changes go
    /// through [`TreeArena::add_child`] and [`TreeArena::remove_child`].
    ///
    /// ```compile_fail
    /// use narytree::TreeArena;
    ///
    /// let mut tree = TreeArena::new();
    /// let root = tree.new_node("root");
    /// let stray = tree.new_node("stray");
    /// let node = tree.node(root).unwrap();
    /// node.children().push(stray);
    /// ```
    pub fn children(&self) -> &'a [NodeId] {
        self.node.children()
    }

    pub fn children_count(&self) -> usize {
        self.node.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Views of the children in order; handles no longer in the arena are skipped.
    pub fn child_refs(&self) -> impl Iterator<Item = NodeRef<'a, E>> + 'a {
        let arena = self.arena;
        let node: &'a TreeNode<E> = self.node;
        node.children
            .iter()
            .filter_map(move |&id| arena.get_node(id).map(|node| NodeRef::new(arena, id, node)))
    }

    /// Node-count height: 1 for a leaf.
    pub fn height(&self) -> usize {
        1 + self.child_refs().map(|child| child.height()).max().unwrap_or(0)
    }

    pub fn size(&self) -> usize {
        1 + self.child_refs().map(|child| child.size()).sum::<usize>()
    }

    pub fn number_of_nodes(&self) -> usize {
        self.size()
    }

    /// Count of leaves below (or at) this node; internal nodes count 0.
    pub fn number_of_leaves(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.child_refs().map(|child| child.number_of_leaves()).sum()
    }

    /// Distance from this node down to `target`, 0 when `target` is this node.
    pub fn depth_of(&self, target: NodeId) -> Option<usize> {
        if self.id == target {
            return Some(0);
        }
        self.child_refs()
            .find_map(|child| child.depth_of(target))
            .map(|depth| depth + 1)
    }

    /// Pre-order search for the node storing exactly `element`.
    ///
    /// Matches by address, not by value: `element` has to be a reference into
    /// this arena, e.g. one returned by [`NodeRef::value`]. Equal values held
    /// elsewhere never match; use [`NodeRef::contains`] for value equality.
    pub fn node_from_element(&self, element: &E) -> Option<NodeId> {
        if matches!(self.value(), Some(value) if ptr::eq(value, element)) {
            return Some(self.id);
        }
        self.child_refs()
            .find_map(|child| child.node_from_element(element))
    }
}

impl<E: PartialEq> NodeRef<'_, E> {
    /// True if this node or any descendant holds a value equal to `target`.
    ///
    /// Searches in pre-order and stops at the first match. Reaching a node
    /// without a value first fails with [`TreeError::AbsentValue`].
    pub fn contains(&self, target: &E) -> TreeResult<bool> {
        if self.require_value()? == target {
            return Ok(true);
        }
        for child in self.child_refs() {
            if child.contains(target)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
