//! nodegrid core library
//!
//! State container for a grid-based node editor: an ordered set of nodes,
//! each holding a grid of editable cells, plus box-selection and zoom state.
//! The UI dispatches `Mutation`s to a `NodeGraphStore` and renders from its
//! `StoreState`.

pub mod constants;
pub mod editor;
pub mod nodes;
pub mod store;

// Re-export commonly used types
pub use editor::{SelectionState, Viewport};
pub use nodes::{Data, Line, Node, NodeGraph, NodeIndex};
pub use store::{Mutation, MutationScript, NodeGraphStore, StoreConfig, StoreError, StoreState};
