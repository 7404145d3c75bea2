//! Box selection state for the canvas

use crate::nodes::node::pos2_serde;
use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};

/// In-progress drag-select rectangle.
///
/// Lifecycle: inactive -> `begin` -> active -> `update_end`* -> `deactivate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub active: bool,
    #[serde(with = "pos2_serde")]
    pub start_pos: Pos2,
    #[serde(with = "pos2_serde")]
    pub end_pos: Pos2,
}

impl SelectionState {
    /// Creates an inactive selection anchored at the origin
    pub fn new() -> Self {
        Self {
            active: false,
            start_pos: Pos2::ZERO,
            end_pos: Pos2::ZERO,
        }
    }

    /// Start box selection. The end point is left as is until the first drag update.
    pub fn begin(&mut self, active: bool, start: Pos2) {
        self.active = active;
        self.start_pos = start;
    }

    /// Update box selection
    pub fn update_end(&mut self, end: Pos2) {
        self.end_pos = end;
    }

    /// End box selection, collapsing both corners onto `pos`
    pub fn deactivate(&mut self, active: bool, pos: Pos2) {
        self.active = active;
        self.start_pos = pos;
        self.end_pos = pos;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Normalized rectangle spanned by the drag, if one is in progress
    pub fn rect(&self) -> Option<Rect> {
        self.active.then(|| Rect::from_two_pos(self.start_pos, self.end_pos))
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
