//! Viewport zoom state

use serde::{Deserialize, Serialize};

/// Canvas zoom. Any value the view layer supplies is accepted as is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub zoom: f32,
}

impl Viewport {
    /// Creates a viewport with the given zoom factor
    pub fn new(zoom: f32) -> Self {
        Self { zoom }
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    /// Same as `set_zoom`; the caller supplies the value to reset to
    pub fn reset_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(crate::constants::view::DEFAULT_ZOOM)
    }
}
