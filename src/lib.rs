// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Acceleration-limited camera controllers built on glam.
//!
//! The crate renders nothing. It keeps abstract camera state (position,
//! orientation, zoom, center of interest) and writes a 4×4 view or
//! view-projection matrix into a caller-provided [`glam::Mat4`] on demand.
//!
//! # Key entry points
//!
//! - [`kinematics`] - bang-bang motion planners ([`ScalarMover`],
//!   [`ArcRotor`], [`Vector3Mover`]) that drive a value toward a target
//!   under bounded acceleration and deceleration without overshoot
//! - [`camera::ArcBallCamera`] - orbit camera composed of four movers
//! - [`camera::FreeCamera`] - 6-DOF integrator in world and body axes
//! - [`camera::OrthoCameraControl`] - 2D pan/zoom/rotate driven by mouse
//!   events
//! - [`options::RigOptions`] - TOML-backed tuning for every camera
//!
//! # Frame flow
//!
//! Set targets or feed events, call `update(dt)`, then compose the view
//! matrix. [`util::frame_timing::FrameClock`] supplies `dt` when the caller
//! has no clock of its own.

pub mod camera;
pub mod error;
pub mod input;
pub mod kinematics;
pub mod math;
pub mod options;
pub mod util;

pub use camera::{
    ArcBallCamera, FreeCamera, OrthoCameraControl, Perspective, ViewTransform,
    ViewUniform,
};
pub use error::RigError;
pub use input::{InputEvent, MouseButton};
pub use kinematics::{ArcRotor, ScalarMover, Vector3Mover};
pub use options::RigOptions;
pub use util::FrameClock;
