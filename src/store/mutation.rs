//! Mutations accepted by the store

use crate::nodes::node::pos2_serde;
use crate::nodes::{ColumnIndex, LineIndex, NodeIndex};
use egui::Pos2;
use serde::{Deserialize, Serialize};

/// One state transition. The JSON form is internally tagged with the
/// camelCase mutation name, e.g. `{"type": "addNode", "position": [10, 20]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mutation {
    /// Appends the two development fixture nodes
    SeedDemoData,
    AddNode {
        #[serde(with = "pos2_serde")]
        position: Pos2,
    },
    DeleteNode {
        index: NodeIndex,
    },
    /// Appends a copy of node `index`, shifted by `count` copy steps
    CopyNode {
        index: NodeIndex,
        count: u32,
    },
    UpdateNodeTitle {
        index: NodeIndex,
        value: String,
    },
    AddLineToNode {
        index: NodeIndex,
    },
    AddColumnToNode {
        index: NodeIndex,
    },
    EditDataCell {
        index: NodeIndex,
        line: LineIndex,
        column: ColumnIndex,
        value: String,
    },
    MoveNodeToPosition {
        index: NodeIndex,
        #[serde(rename = "newPosition", with = "pos2_serde")]
        new_position: Pos2,
    },
    SetSelectionStartPosition {
        active: bool,
        #[serde(with = "pos2_serde")]
        pos: Pos2,
    },
    SetSelectionEndPosition {
        #[serde(with = "pos2_serde")]
        pos: Pos2,
    },
    DeactivateSelection {
        active: bool,
        #[serde(with = "pos2_serde")]
        pos: Pos2,
    },
    SetZoom {
        value: f32,
    },
    ResetZoom {
        value: f32,
    },
}

impl Mutation {
    /// Name used on the wire and in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::SeedDemoData => "seedDemoData",
            Self::AddNode { .. } => "addNode",
            Self::DeleteNode { .. } => "deleteNode",
            Self::CopyNode { .. } => "copyNode",
            Self::UpdateNodeTitle { .. } => "updateNodeTitle",
            Self::AddLineToNode { .. } => "addLineToNode",
            Self::AddColumnToNode { .. } => "addColumnToNode",
            Self::EditDataCell { .. } => "editDataCell",
            Self::MoveNodeToPosition { .. } => "moveNodeToPosition",
            Self::SetSelectionStartPosition { .. } => "setSelectionStartPosition",
            Self::SetSelectionEndPosition { .. } => "setSelectionEndPosition",
            Self::DeactivateSelection { .. } => "deactivateSelection",
            Self::SetZoom { .. } => "setZoom",
            Self::ResetZoom { .. } => "resetZoom",
        }
    }

    /// Node the mutation edits, if it targets an existing one
    pub fn target_node(&self) -> Option<NodeIndex> {
        match self {
            Self::DeleteNode { index }
            | Self::CopyNode { index, .. }
            | Self::UpdateNodeTitle { index, .. }
            | Self::AddLineToNode { index }
            | Self::AddColumnToNode { index }
            | Self::EditDataCell { index, .. }
            | Self::MoveNodeToPosition { index, .. } => Some(*index),
            _ => None,
        }
    }
}
