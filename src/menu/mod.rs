pub mod catalog;
pub mod node;
pub mod tree;

pub use node::{Forest, Icon, MenuNode, NodeDef};
pub use tree::{Activation, Chevron, NavTree, Row, RowId, RowKind};
