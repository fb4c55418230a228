//! Acceleration-limited motion planners.
//!
//! Every animated camera quantity is driven by one of these movers. Each
//! advances `current` toward `target` over a timestep `dt`, applying full
//! acceleration toward the target until the stopping distance reaches the
//! remaining distance, then full deceleration (bang-bang control). The step
//! that would cross the target snaps onto it and drops the residual
//! velocity.
//!
//! - [`ScalarMover`] - unbounded real line
//! - [`ArcRotor`] - angle in degrees modulo 360, shorter arc
//! - [`Vector3Mover`] - point in space, planned along the connecting line

mod arc;
mod bang_bang;
mod scalar;
mod vector;

pub use arc::{normalize_degrees, shortest_arc, ArcRotor};
pub use scalar::ScalarMover;
pub use vector::Vector3Mover;
