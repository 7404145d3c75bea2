//! Node system - Core data structures for nodes and their data grids

pub mod graph;
pub mod line;
pub mod node;

// Re-export core types
pub use graph::NodeGraph;
pub use line::{ColumnIndex, Data, Line, LineIndex};
pub use node::{Node, NodeIndex};
