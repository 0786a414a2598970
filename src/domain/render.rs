//! Text renderers: structural one-liner, indented diagram and debug form.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::node_ref::NodeRef;

/// Markers and placeholders used by the text renderers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Emit a final `" \n"` line after the pretty diagram
    pub trailing_line: bool,
    /// Repeated once per ancestor level below the root
    pub continuation: String,
    /// Put in front of every non-root value
    pub branch: String,
    /// Stands in for absent values in the structural text
    pub null_placeholder: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            trailing_line: false,
            continuation: "│ ".into(),
            branch: "├─".into(),
            null_placeholder: "null".into(),
        }
    }
}

impl<E: fmt::Display> NodeRef<'_, E> {
    /// `[value]` for a leaf, `[value] (child, child, …)` otherwise.
    pub fn generate_text(&self) -> String {
        self.generate_text_with(&RenderSettings::default())
    }

    pub fn generate_text_with(&self, settings: &RenderSettings) -> String {
        let value = match self.value() {
            Some(value) => format!("[{}]", value),
            None => format!("[{}]", settings.null_placeholder),
        };
        if self.is_leaf() {
            return value;
        }
        format!(
            "{} ({})",
            value,
            self.child_refs()
                .map(|child| child.generate_text_with(settings))
                .join(", ")
        )
    }

    /// Indented diagram, one line per node in pre-order:
    ///
    /// ```text
    /// root
    /// ├─child1
    /// │ ├─subChild11
    /// ├─child2
    /// ```
    ///
    /// Fails with [`crate::TreeError::AbsentValue`] on the first node without a value.
    pub fn to_pretty_text(&self) -> TreeResult<String> {
        self.to_pretty_text_with(&RenderSettings::default())
    }

    pub fn to_pretty_text_with(&self, settings: &RenderSettings) -> TreeResult<String> {
        let mut out = format!("{}\n", self.require_value()?);
        for child in self.child_refs() {
            child.write_pretty(&mut out, 1, settings)?;
        }
        if settings.trailing_line {
            out.push_str(" \n");
        }
        Ok(out)
    }

    fn write_pretty(&self, out: &mut String, depth: usize, settings: &RenderSettings) -> TreeResult<()> {
        let value = self.require_value()?;
        out.push_str(&settings.continuation.repeat(depth - 1));
        out.push_str(&settings.branch);
        out.push_str(&value.to_string());
        out.push('\n');
        for child in self.child_refs() {
            child.write_pretty(out, depth + 1, settings)?;
        }
        Ok(())
    }

    /// `TreeNode{value=v, children=[...]}`, nested for every child.
    ///
    /// Same text as [`fmt::Display`], but fails on the first node without a value.
    pub fn to_debug_string(&self) -> TreeResult<String> {
        if let Some((id, _)) = self.iter_preorder().find(|(_, node)| node.value().is_none()) {
            return Err(TreeError::AbsentValue(id));
        }
        Ok(self.to_string())
    }
}

/// Debug form `TreeNode{value=v, children=[...]}`; absent values print as `null`.
impl<E: fmt::Display> fmt::Display for NodeRef<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "TreeNode{{value={}, children=[", value)?,
            None => f.write_str("TreeNode{value=null, children=[")?,
        }
        for (i, child) in self.child_refs().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(&child, f)?;
        }
        f.write_str("]}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::arena::{NodeId, TreeArena};

    #[test]
    fn given_single_root_when_generating_text_then_brackets_value() {
        let mut tree = TreeArena::new();
        let root = tree.new_node("root");

        assert_eq!(tree.node(root).unwrap().generate_text(), "[root]");
    }

    #[test]
    fn given_nested_numbered_children_when_generating_text_then_nests_groups() {
        let mut tree = TreeArena::new();
        let root = tree.new_node("root".to_string());
        let child1 = tree.add_child_value(root, "child 1".to_string()).unwrap();
        for i in 0..10 {
            tree.add_child_value(child1, i.to_string()).unwrap();
        }
        let child2 = tree.add_child_value(child1, "child 1".to_string()).unwrap();
        for i in 0..10 {
            tree.add_child_value(child2, i.to_string()).unwrap();
        }

        assert_eq!(
            tree.node(root).unwrap().generate_text(),
            "[root] ([child 1] ([0], [1], [2], [3], [4], [5], [6], [7], [8], [9], \
             [child 1] ([0], [1], [2], [3], [4], [5], [6], [7], [8], [9])))"
        );
    }

    #[test]
    fn given_absent_values_when_generating_text_then_uses_placeholder() {
        let mut tree: TreeArena<String> = TreeArena::new();
        let root = tree.new_empty_node();
        let hole = tree.new_empty_node();
        tree.add_child(root, hole).unwrap();
        let node = tree.node(root).unwrap();

        assert_eq!(node.generate_text(), "[null] ([null])");
        assert_eq!(
            node.to_string(),
            "TreeNode{value=null, children=[TreeNode{value=null, children=[]}]}"
        );

        let settings = RenderSettings {
            null_placeholder: "?".into(),
            ..RenderSettings::default()
        };
        assert_eq!(node.generate_text_with(&settings), "[?] ([?])");
    }

    fn pretty(tree: &TreeArena<&str>, root: NodeId) -> String {
        tree.node(root).unwrap().to_pretty_text().unwrap()
    }

    #[test]
    fn given_growing_tree_when_pretty_printing_then_lines_follow_depth() {
        let mut tree = TreeArena::new();
        let root = tree.new_node("root");
        let child1 = tree.new_node("child1");
        let child2 = tree.new_node("child2");
        let child3 = tree.new_node("child3");
        let sub_child21 = tree.new_node("subChild21");

        assert_eq!(pretty(&tree, root), "root\n");

        tree.add_child(root, child1).unwrap();
        assert_eq!(pretty(&tree, root), "root\n├─child1\n");

        tree.add_child(root, child2).unwrap();
        tree.add_child_value(child1, "subChild11").unwrap();
        tree.add_child_value(child1, "subChild12").unwrap();
        assert_eq!(
            pretty(&tree, root),
            "root\n├─child1\n│ ├─subChild11\n│ ├─subChild12\n├─child2\n"
        );

        tree.add_child(child2, sub_child21).unwrap();
        tree.add_child_value(child2, "subChild22").unwrap();
        tree.add_child_value(sub_child21, "subSubChild211").unwrap();
        tree.add_child(root, child3).unwrap();
        assert_eq!(
            pretty(&tree, root),
            "root\n\
             ├─child1\n\
             │ ├─subChild11\n\
             │ ├─subChild12\n\
             ├─child2\n\
             │ ├─subChild21\n\
             │ │ ├─subSubChild211\n\
             │ ├─subChild22\n\
             ├─child3\n"
        );
    }

    #[test]
    fn given_trailing_line_enabled_when_pretty_printing_then_ends_with_space_line() {
        let mut tree = TreeArena::new();
        let root = tree.new_node("root");
        tree.add_child_value(root, "child1").unwrap();
        let settings = RenderSettings {
            trailing_line: true,
            ..RenderSettings::default()
        };

        let text = tree.node(root).unwrap().to_pretty_text_with(&settings).unwrap();

        assert_eq!(text, "root\n├─child1\n \n");
    }

    #[test]
    fn given_absent_child_value_when_pretty_printing_then_names_the_node() {
        let mut tree = TreeArena::new();
        let root = tree.new_node("root");
        let hole = tree.new_empty_node();
        tree.add_child(root, hole).unwrap();

        let err = tree.node(root).unwrap().to_pretty_text().unwrap_err();

        assert!(matches!(err, TreeError::AbsentValue(id) if id == hole));
    }

    #[test]
    fn given_nested_tree_when_debug_formatting_then_nests_children() {
        let mut tree = TreeArena::new();
        let root = tree.new_node("root");
        assert_eq!(
            tree.node(root).unwrap().to_debug_string().unwrap(),
            "TreeNode{value=root, children=[]}"
        );

        let child = tree.add_child_value(root, "child").unwrap();
        assert_eq!(
            tree.node(root).unwrap().to_debug_string().unwrap(),
            "TreeNode{value=root, children=[TreeNode{value=child, children=[]}]}"
        );

        tree.add_child_value(child, "subChild").unwrap();
        assert_eq!(
            tree.node(root).unwrap().to_debug_string().unwrap(),
            "TreeNode{value=root, children=[TreeNode{value=child, children=[\
             TreeNode{value=subChild, children=[]}]}]}"
        );
    }

    #[test]
    fn given_empty_root_when_debug_formatting_then_absent_value_error() {
        let mut tree: TreeArena<u32> = TreeArena::new();
        let root = tree.new_empty_node();

        assert!(matches!(
            tree.node(root).unwrap().to_debug_string(),
            Err(TreeError::AbsentValue(_))
        ));
    }
}
