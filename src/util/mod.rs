//! Shared utilities.

/// Clamped per-frame timestep and smoothed FPS.
pub mod frame_timing;

pub use frame_timing::FrameClock;
