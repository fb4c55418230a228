//! Affine helpers layered on glam.
//!
//! glam covers most of the matrix work directly. This module adds the
//! handful of pre-multiplying ("local") operations, the orthographic 2D
//! setter, and viewport unprojection that the camera controllers rely on.

/// Pre- and post-multiplying transform helpers on [`glam::Mat4`].
pub mod affine;
/// Window-space viewport rectangle and (un)projection through it.
pub mod viewport;

pub use affine::{
    ortho_2d, positive_x, rotate_local_z, scale_around_local, set_translation,
    translate, translate_local,
};
pub use viewport::Viewport;
