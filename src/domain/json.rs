//! JSON encoding of trees: `{"value": v}` for leaves, `{"value": v, "children": [...]}` otherwise.

use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use tracing::instrument;

use crate::domain::arena::{NodeId, TreeArena};
use crate::domain::error::TreeResult;
use crate::domain::node_ref::NodeRef;

impl<E: Serialize> Serialize for NodeRef<'_, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.is_leaf() { 1 } else { 2 };
        let mut state = serializer.serialize_struct("TreeNode", fields)?;
        state.serialize_field("value", &self.value())?;
        if !self.is_leaf() {
            let children: Vec<_> = self.child_refs().collect();
            state.serialize_field("children", &children)?;
        }
        state.end()
    }
}

impl<E: Serialize> NodeRef<'_, E> {
    /// Compact JSON; absent values encode as `null`, leaves carry no `children` key.
    pub fn to_json(&self) -> TreeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> TreeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Wire shape accepted by [`TreeArena::from_json`].
#[derive(Deserialize)]
#[serde(bound = "E: Deserialize<'de>")]
struct JsonNode<E> {
    value: Option<E>,
    #[serde(default)]
    children: Vec<JsonNode<E>>,
}

impl<E: DeserializeOwned> TreeArena<E> {
    /// Parses the output of [`NodeRef::to_json`] into a fresh arena.
    ///
    /// Returns the arena and the handle of its root. A missing or `null`
    /// value yields a node without a value. Nesting depth is not limited,
    /// so any tree written by [`NodeRef::to_json`] parses back.
    #[instrument(level = "debug", skip(json))]
    pub fn from_json(json: &str) -> TreeResult<(Self, NodeId)> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        // each level costs an object and an array
        deserializer.disable_recursion_limit();
        let parsed = JsonNode::<E>::deserialize(&mut deserializer)?;
        deserializer.end()?;
        let mut tree = Self::new();
        let root = tree.graft(parsed)?;
        Ok((tree, root))
    }

    fn graft(&mut self, parsed: JsonNode<E>) -> TreeResult<NodeId> {
        let id = self.insert(parsed.value);
        for child in parsed.children {
            let child_id = self.graft(child)?;
            self.add_child(id, child_id)?;
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::error::TreeError;

    #[test]
    fn given_growing_tree_when_encoding_then_children_key_only_on_internal_nodes() {
        let mut tree = TreeArena::new();
        let root = tree.new_node("root");
        assert_eq!(tree.node(root).unwrap().to_json().unwrap(), r#"{"value":"root"}"#);

        let child = tree.add_child_value(root, "child").unwrap();
        assert_eq!(
            tree.node(root).unwrap().to_json().unwrap(),
            r#"{"value":"root","children":[{"value":"child"}]}"#
        );

        tree.add_child_value(child, "subChild").unwrap();
        assert_eq!(
            tree.node(root).unwrap().to_json().unwrap(),
            r#"{"value":"root","children":[{"value":"child","children":[{"value":"subChild"}]}]}"#
        );
    }

    #[test]
    fn given_non_string_values_when_encoding_then_uses_json_literals() {
        let mut tree: TreeArena<serde_json::Value> = TreeArena::new();
        let root = tree.new_node(json!(1.5));
        tree.add_child_value(root, json!(true)).unwrap();
        let hole = tree.new_empty_node();
        tree.add_child(root, hole).unwrap();
        tree.add_child_value(root, json!("quote \" inside")).unwrap();

        assert_eq!(
            tree.node(root).unwrap().to_json().unwrap(),
            r#"{"value":1.5,"children":[{"value":true},{"value":null},{"value":"quote \" inside"}]}"#
        );
    }

    #[test]
    fn given_encoded_tree_when_parsing_then_structure_is_restored() {
        let json = r#"{"value":"A","children":[{"value":"B","children":[{"value":"D"}]},{"value":"C"},{}]}"#;

        let (tree, root) = TreeArena::<String>::from_json(json).unwrap();
        let node = tree.node(root).unwrap();

        assert_eq!(node.size(), 5);
        assert_eq!(node.height(), 3);
        assert_eq!(node.child_node(2).unwrap().value(), None);
        assert_eq!(node.generate_text(), "[A] ([B] ([D]), [C], [null])");
    }

    #[test]
    fn given_chain_deeper_than_parser_default_when_round_tripping_then_parses() {
        let mut tree = TreeArena::new();
        let root = tree.new_node(0u32);
        let mut tip = root;
        for i in 1..200u32 {
            tip = tree.add_child_value(tip, i).unwrap();
        }
        let json = tree.node(root).unwrap().to_json().unwrap();

        let (parsed, parsed_root) = TreeArena::<u32>::from_json(&json).unwrap();
        let node = parsed.node(parsed_root).unwrap();

        assert_eq!(node.height(), 200);
        let expected: Vec<u32> = (0..200).collect();
        assert_eq!(node.to_prefix_list(), expected.iter().map(Some).collect::<Vec<_>>());
        assert_eq!(node.to_json().unwrap(), json);
    }

    #[test]
    fn given_trailing_garbage_when_parsing_then_json_error() {
        let result = TreeArena::<String>::from_json(r#"{"value": "A"} x"#);

        assert!(matches!(result, Err(TreeError::Json(_))));
    }

    #[test]
    fn given_malformed_json_when_parsing_then_json_error() {
        let result = TreeArena::<String>::from_json(r#"{"value": "A", "children": 3}"#);

        assert!(matches!(result, Err(TreeError::Json(_))));
    }
}
