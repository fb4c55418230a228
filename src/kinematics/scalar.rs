use super::bang_bang::{self, Step};
use crate::options::MoverLimits;

/// Drives a scalar on the unbounded real line toward `target`.
///
/// Velocity is signed. With a fixed target, repeated updates reach it in
/// finite time and come to rest; the arriving step lands exactly on the
/// target and discards any residual velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarMover {
    /// Current value.
    pub current: f32,
    /// Value being approached.
    pub target: f32,
    /// Signed rate of change per second.
    pub velocity: f32,
    /// Acceleration cap while speeding up.
    pub max_acceleration: f32,
    /// Deceleration cap while braking.
    pub max_deceleration: f32,
}

impl Default for ScalarMover {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ScalarMover {
    /// Default acceleration and deceleration cap.
    pub const DEFAULT_LIMIT: f32 = 200.0;

    /// A mover resting at `value`.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
            velocity: 0.0,
            max_acceleration: Self::DEFAULT_LIMIT,
            max_deceleration: Self::DEFAULT_LIMIT,
        }
    }

    /// Replace both caps.
    #[must_use]
    pub fn with_limits(mut self, limits: MoverLimits) -> Self {
        self.set_limits(limits);
        self
    }

    /// Replace both caps in place, keeping the current motion.
    pub fn set_limits(&mut self, limits: MoverLimits) {
        self.max_acceleration = limits.max_acceleration;
        self.max_deceleration = limits.max_deceleration;
    }

    /// Current caps.
    #[must_use]
    pub const fn limits(&self) -> MoverLimits {
        MoverLimits {
            max_acceleration: self.max_acceleration,
            max_deceleration: self.max_deceleration,
        }
    }

    /// Set the value to approach.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` and stop there.
    pub fn snap_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// At the target and at rest.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.current == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        match bang_bang::advance(
            self.target - self.current,
            self.velocity,
            self.max_acceleration,
            self.max_deceleration,
            dt,
        ) {
            Step::Move { velocity, way } => {
                self.velocity = velocity;
                self.current += way;
            }
            Step::Arrive => {
                self.velocity = 0.0;
                self.current = self.target;
            }
        }
    }
}
