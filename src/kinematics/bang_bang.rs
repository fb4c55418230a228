//! One-axis bang-bang control law shared by all movers.

/// Sign with `sign(0) = 0`, unlike [`f32::signum`] which maps `+0.0` to 1.
#[inline]
pub(super) fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Acceleration to apply given the signed `distance` to the target and the
/// signed `velocity`.
///
/// Decelerates when moving toward the target and the stopping distance
/// `v² / (2·dec)` already covers the remaining distance; otherwise
/// accelerates toward the target.
#[inline]
pub(super) fn acceleration(
    distance: f32,
    velocity: f32,
    max_acceleration: f32,
    max_deceleration: f32,
) -> f32 {
    let stop_distance = velocity * velocity / (2.0 * max_deceleration);
    if velocity * distance > 0.0 && stop_distance >= distance.abs() {
        -sign(distance) * max_deceleration
    } else {
        sign(distance) * max_acceleration
    }
}

/// Result of one control step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Step {
    /// Keep moving: new velocity and displacement to add.
    Move {
        /// Velocity after this step.
        velocity: f32,
        /// Displacement over this step.
        way: f32,
    },
    /// This step reaches the target; place the value exactly on it with
    /// zero velocity.
    Arrive,
}

/// Advance one timestep along a single axis.
///
/// Sitting exactly on the target with residual velocity brakes that
/// velocity toward zero (clamped at zero) instead of coasting, otherwise an
/// exact landing would drift off and cycle around the target forever.
#[inline]
pub(super) fn advance(
    distance: f32,
    velocity: f32,
    max_acceleration: f32,
    max_deceleration: f32,
    dt: f32,
) -> Step {
    debug_assert!(dt >= 0.0, "timestep must be non-negative, got {dt}");
    if distance == 0.0 {
        let brake = max_acceleration * dt;
        if velocity.abs() <= brake {
            return Step::Arrive;
        }
        let velocity = velocity - sign(velocity) * brake;
        return Step::Move {
            velocity,
            way: velocity * dt,
        };
    }

    let accel =
        acceleration(distance, velocity, max_acceleration, max_deceleration);
    let velocity = velocity + accel * dt;
    let way = velocity * dt;
    if velocity * distance > 0.0 && way.abs() > distance.abs() {
        Step::Arrive
    } else {
        Step::Move { velocity, way }
    }
}
