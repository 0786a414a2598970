use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{NodeRef, TreeResult};

/// Conversion into a [`termtree::Tree`] for box-drawing display.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> TreeResult<Tree<String>>;
}

impl<E: fmt::Display> TreeNodeConvert for NodeRef<'_, E> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> TreeResult<Tree<String>> {
        let root = self.require_value()?.to_string();

        // Recursively construct the children
        let leaves = self
            .child_refs()
            .map(|child| child.to_tree_string())
            .collect::<TreeResult<Vec<_>>>()?;

        Ok(Tree::new(root).with_leaves(leaves))
    }
}
