//! Generic N-ary trees backed by a generational arena.
//!
//! A [`TreeArena`] owns the nodes; a [`NodeId`] addresses one of them and
//! [`TreeArena::node`] returns a [`NodeRef`] view that treats the addressed
//! node as the root of a tree. Views answer structural queries (height, size,
//! leaves, containment), produce pre-order, post-order and level-order value
//! lists, and render the tree as structural text, JSON or an indented diagram.
//!
//! ```
//! use narytree::TreeArena;
//!
//! let mut tree = TreeArena::new();
//! let root = tree.new_node("root");
//! let child = tree.add_child_value(root, "child").unwrap();
//! tree.add_child_value(child, "leaf").unwrap();
//!
//! let node = tree.node(root).unwrap();
//! assert_eq!(node.height(), 3);
//! assert_eq!(node.generate_text(), "[root] ([child] ([leaf]))");
//! assert_eq!(node.to_pretty_text().unwrap(), "root\n├─child\n│ ├─leaf\n");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{NodeId, NodeRef, RenderSettings, TreeArena, TreeError, TreeNode, TreeResult};
pub use tree_traits::TreeNodeConvert;
