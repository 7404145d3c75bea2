//! Centralized state container for the node editor
//!
//! `NodeGraphStore` owns the node graph plus the transient canvas state and
//! applies `Mutation`s to it one at a time. Callers observe effects by
//! reading `state()` after a commit, or by registering a subscriber.

pub mod config;
pub mod error;
pub mod hooks;
pub mod mutation;
pub mod script;

pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use hooks::MutationSubscriber;
pub use mutation::Mutation;
pub use script::{MutationScript, ReplayError};

use std::collections::VecDeque;

use egui::{Pos2, Vec2};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::constants::demo;
use crate::editor::{SelectionState, Viewport};
use crate::nodes::{ColumnIndex, Data, LineIndex, Node, NodeGraph, NodeIndex};

/// Everything the view layer renders from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    pub graph: NodeGraph,
    pub selection: SelectionState,
    pub viewport: Viewport,
}

impl StoreState {
    fn new(config: &StoreConfig) -> Self {
        Self {
            graph: NodeGraph::new(),
            selection: SelectionState::new(),
            viewport: Viewport::new(config.initial_zoom),
        }
    }
}

/// Owned store applying mutations to a `StoreState`
pub struct NodeGraphStore {
    state: StoreState,
    config: StoreConfig,
    subscribers: Vec<Box<dyn MutationSubscriber>>,
    history: VecDeque<Mutation>,
    /// State before the oldest entry in `history`
    history_base: StoreState,
}

impl NodeGraphStore {
    /// Creates an empty store with default configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        let state = StoreState::new(&config);
        Self::with_state(config, state)
    }

    /// Creates a store resuming from an existing state, e.g. a history base
    pub fn with_state(config: StoreConfig, state: StoreState) -> Self {
        Self {
            history_base: state.clone(),
            state,
            config,
            subscribers: Vec::new(),
            history: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[Node] {
        &self.state.graph.nodes
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.state.graph.get(index)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.state.selection
    }

    pub fn zoom(&self) -> f32 {
        self.state.viewport.zoom
    }

    /// Indices of nodes whose position lies inside the active selection box
    pub fn nodes_in_selection(&self) -> Vec<NodeIndex> {
        let Some(rect) = self.state.selection.rect() else {
            return Vec::new();
        };
        self.state
            .graph
            .iter()
            .filter(|(_, node)| rect.contains(node.position))
            .map(|(index, _)| index)
            .collect()
    }

    /// Registers an observer for every subsequent commit
    pub fn subscribe(&mut self, subscriber: Box<dyn MutationSubscriber>) {
        self.subscribers.push(subscriber);
    }

    /// Committed mutations, oldest first, bounded by `history_limit`
    pub fn history(&self) -> impl Iterator<Item = &Mutation> {
        self.history.iter()
    }

    /// State the recorded history starts from.
    ///
    /// Applying `history_script()` to a store built from this state with
    /// `with_state` reproduces the current state.
    pub fn history_base(&self) -> &StoreState {
        &self.history_base
    }

    /// Drops recorded history; the current state becomes the new base
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.history_base = self.state.clone();
    }

    /// Exports the recorded history as a script replayable onto `history_base()`
    pub fn history_script(&self) -> MutationScript {
        MutationScript::new(self.history.iter().cloned().collect())
    }

    /// Pretty-printed JSON of the current state
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.state)
    }

    /// Applies a mutation. On error nothing is changed.
    pub fn commit(&mut self, mutation: Mutation) -> Result<(), StoreError> {
        match apply_mutation(&mut self.state, &self.config, &mutation) {
            Ok(()) => {
                debug!("Committed {}", mutation.name());
                for subscriber in &mut self.subscribers {
                    subscriber.after_mutation(&mutation, &self.state);
                }
                self.record(mutation);
                Ok(())
            }
            Err(err) => {
                match mutation.target_node() {
                    Some(index) => {
                        warn!("Rejected {} on node {}: {}", mutation.name(), index, err)
                    }
                    None => warn!("Rejected {}: {}", mutation.name(), err),
                }
                for subscriber in &mut self.subscribers {
                    subscriber.on_rejected(&mutation, &err);
                }
                Err(err)
            }
        }
    }

    fn record(&mut self, mutation: Mutation) {
        self.history.push_back(mutation);
        while self.history.len() > self.config.history_limit {
            if let Some(evicted) = self.history.pop_front() {
                self.fold_into_base(&evicted);
            }
        }
    }

    /// Moves an evicted mutation into the history base so base + history
    /// still add up to the current state
    fn fold_into_base(&mut self, mutation: &Mutation) {
        if let Err(err) = apply_mutation(&mut self.history_base, &self.config, mutation) {
            // Base is out of step with history; restart it from the current state
            warn!(
                "History base rejected {}: {}; resetting history",
                mutation.name(),
                err
            );
            self.history.clear();
            self.history_base = self.state.clone();
        }
    }

    // Named entry points, one per mutation

    pub fn seed_demo_data(&mut self) -> Result<(), StoreError> {
        self.commit(Mutation::SeedDemoData)
    }

    pub fn add_node(&mut self, position: Pos2) -> Result<(), StoreError> {
        self.commit(Mutation::AddNode { position })
    }

    pub fn delete_node(&mut self, index: NodeIndex) -> Result<(), StoreError> {
        self.commit(Mutation::DeleteNode { index })
    }

    pub fn copy_node(&mut self, index: NodeIndex, count: u32) -> Result<(), StoreError> {
        self.commit(Mutation::CopyNode { index, count })
    }

    pub fn update_node_title(
        &mut self,
        index: NodeIndex,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.commit(Mutation::UpdateNodeTitle {
            index,
            value: value.into(),
        })
    }

    pub fn add_line_to_node(&mut self, index: NodeIndex) -> Result<(), StoreError> {
        self.commit(Mutation::AddLineToNode { index })
    }

    pub fn add_column_to_node(&mut self, index: NodeIndex) -> Result<(), StoreError> {
        self.commit(Mutation::AddColumnToNode { index })
    }

    pub fn edit_data_cell(
        &mut self,
        index: NodeIndex,
        line: LineIndex,
        column: ColumnIndex,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.commit(Mutation::EditDataCell {
            index,
            line,
            column,
            value: value.into(),
        })
    }

    pub fn move_node_to_position(
        &mut self,
        index: NodeIndex,
        new_position: Pos2,
    ) -> Result<(), StoreError> {
        self.commit(Mutation::MoveNodeToPosition {
            index,
            new_position,
        })
    }

    pub fn set_selection_start_position(
        &mut self,
        active: bool,
        pos: Pos2,
    ) -> Result<(), StoreError> {
        self.commit(Mutation::SetSelectionStartPosition { active, pos })
    }

    pub fn set_selection_end_position(&mut self, pos: Pos2) -> Result<(), StoreError> {
        self.commit(Mutation::SetSelectionEndPosition { pos })
    }

    pub fn deactivate_selection(&mut self, active: bool, pos: Pos2) -> Result<(), StoreError> {
        self.commit(Mutation::DeactivateSelection { active, pos })
    }

    pub fn set_zoom(&mut self, value: f32) -> Result<(), StoreError> {
        self.commit(Mutation::SetZoom { value })
    }

    pub fn reset_zoom(&mut self, value: f32) -> Result<(), StoreError> {
        self.commit(Mutation::ResetZoom { value })
    }
}

impl Default for NodeGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_mutation(
    state: &mut StoreState,
    config: &StoreConfig,
    mutation: &Mutation,
) -> Result<(), StoreError> {
    match mutation {
        Mutation::SeedDemoData => {
            seed_demo_nodes(&mut state.graph);
        }
        Mutation::AddNode { position } => {
            let node = Node::new(config.new_node_title.clone(), *position);
            state.graph.add_node(node);
        }
        Mutation::DeleteNode { index } => {
            let len = state.graph.len();
            state
                .graph
                .remove_node(*index)
                .ok_or(StoreError::NodeOutOfRange { index: *index, len })?;
        }
        Mutation::CopyNode { index, count } => {
            let offset = Vec2::splat(config.copy_offset_step * *count as f32);
            let copy = node_ref(&state.graph, *index)?.duplicate(&config.copy_suffix, offset);
            state.graph.add_node(copy);
        }
        Mutation::UpdateNodeTitle { index, value } => {
            node_mut(&mut state.graph, *index)?.set_title(value.clone());
        }
        Mutation::AddLineToNode { index } => {
            node_mut(&mut state.graph, *index)?.add_line();
        }
        Mutation::AddColumnToNode { index } => {
            node_mut(&mut state.graph, *index)?.add_column();
        }
        Mutation::EditDataCell {
            index,
            line,
            column,
            value,
        } => {
            cell_mut(&mut state.graph, *index, *line, *column)?.set_value(value.clone());
        }
        Mutation::MoveNodeToPosition {
            index,
            new_position,
        } => {
            node_mut(&mut state.graph, *index)?.move_to_position(*new_position);
        }
        Mutation::SetSelectionStartPosition { active, pos } => {
            state.selection.begin(*active, *pos);
        }
        Mutation::SetSelectionEndPosition { pos } => {
            state.selection.update_end(*pos);
        }
        Mutation::DeactivateSelection { active, pos } => {
            state.selection.deactivate(*active, *pos);
        }
        Mutation::SetZoom { value } => {
            state.viewport.set_zoom(*value);
        }
        Mutation::ResetZoom { value } => {
            state.viewport.reset_zoom(*value);
        }
    }
    Ok(())
}

fn seed_demo_nodes(graph: &mut NodeGraph) {
    let [x, y] = demo::FIRST_NODE_POSITION;
    let mut first = Node::new(demo::FIRST_NODE_TITLE, Pos2::new(x, y));
    first.add_line();
    first.add_column().add_column();
    first.add_line();

    let [x, y] = demo::SECOND_NODE_POSITION;
    let mut second = Node::new(demo::SECOND_NODE_TITLE, Pos2::new(x, y));
    second.add_line();

    graph.add_node(first);
    graph.add_node(second);
    info!("Seeded demo data ({} nodes total)", graph.len());
}

fn node_ref(graph: &NodeGraph, index: NodeIndex) -> Result<&Node, StoreError> {
    let len = graph.len();
    graph
        .get(index)
        .ok_or(StoreError::NodeOutOfRange { index, len })
}

fn node_mut(graph: &mut NodeGraph, index: NodeIndex) -> Result<&mut Node, StoreError> {
    let len = graph.len();
    graph
        .get_mut(index)
        .ok_or(StoreError::NodeOutOfRange { index, len })
}

fn cell_mut(
    graph: &mut NodeGraph,
    index: NodeIndex,
    line: LineIndex,
    column: ColumnIndex,
) -> Result<&mut Data, StoreError> {
    let node = node_mut(graph, index)?;
    let line_count = node.line_count();
    let row = node.lines.get_mut(line).ok_or(StoreError::LineOutOfRange {
        node: index,
        line,
        len: line_count,
    })?;
    let width = row.len();
    row.cell_mut(column).ok_or(StoreError::ColumnOutOfRange {
        node: index,
        line,
        column,
        len: width,
    })
}
