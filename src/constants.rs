//! Application-wide constants and default values
//!
//! Centralized location for all hard-coded values to improve maintainability

/// Node editing defaults
pub mod node {
    /// Title given to nodes created from the canvas
    pub const DEFAULT_NEW_NODE_TITLE: &str = "New node";

    /// Appended to the title of a copied node
    pub const DEFAULT_COPY_SUFFIX: &str = " - copy";

    /// Offset per copy step, applied on both axes
    pub const DEFAULT_COPY_OFFSET_STEP: f32 = 50.0;
}

/// Canvas view defaults
pub mod view {
    /// Zoom factor of a freshly created store
    pub const DEFAULT_ZOOM: f32 = 1.0;
}

/// Store bookkeeping defaults
pub mod store {
    /// Number of committed mutations kept in history
    pub const DEFAULT_HISTORY_LIMIT: usize = 256;
}

/// Development fixture used by the demo seed mutation
pub mod demo {
    pub const FIRST_NODE_TITLE: &str = "Test Node 1";
    pub const FIRST_NODE_POSITION: [f32; 2] = [150.0, 150.0];

    pub const SECOND_NODE_TITLE: &str = "Test Node 2";
    pub const SECOND_NODE_POSITION: [f32; 2] = [1200.0, 350.0];
}
