//! Input event types consumed by the interactive camera controls.

/// Platform-agnostic input events.
pub mod event;

pub use event::{InputEvent, MouseButton};
