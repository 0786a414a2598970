//! Domain layer: the arena-backed tree, its queries and renderers
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod error;
pub mod json;
pub mod node_ref;
pub mod render;
pub mod traversal;

pub use arena::{NodeId, TreeArena, TreeNode};
pub use error::{TreeError, TreeResult};
pub use node_ref::NodeRef;
pub use render::RenderSettings;
pub use traversal::{ByWidthIterator, PostOrderIterator, PreOrderIterator};
