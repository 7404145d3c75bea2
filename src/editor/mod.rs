//! Transient canvas state: box selection and zoom

pub mod interaction;
pub mod viewport;

pub use interaction::SelectionState;
pub use viewport::Viewport;
