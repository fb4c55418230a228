//! Camera controllers.
//!
//! Two animated 3D cameras ([`ArcBallCamera`] orbiting a point and
//! [`FreeCamera`] flying freely) and an event-driven 2D
//! [`OrthoCameraControl`]. All of them plug into a render loop through
//! [`ViewTransform`].

/// Orbiting camera driven by mover-animated parameters.
pub mod arcball;
/// Projection parameters and GPU uniform types.
pub mod core;
/// Six-degree-of-freedom free-flying camera.
pub mod free;
/// Platform event routing for the ortho control.
mod input;
/// Mouse-driven orthographic pan/zoom/rotate control.
pub mod ortho;
/// Common per-frame camera interface.
pub mod view;

pub use arcball::ArcBallCamera;
pub use self::core::{Perspective, ViewUniform};
pub use free::FreeCamera;
pub use ortho::OrthoCameraControl;
pub use view::ViewTransform;
