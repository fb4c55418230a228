use glam::Vec3;

use super::bang_bang;
use crate::options::MoverLimits;

/// Moves a point toward `target` along the straight connecting line.
///
/// The control law is the scalar one applied to the velocity's projection
/// on the direction to the target, so the acceleration magnitude is capped
/// as a whole rather than per axis. Velocity perpendicular to the line
/// (left over when the target changes mid-flight) is braked at the direct
/// deceleration cap until the motion is back on the line. The along-line
/// and braking parts together never change the velocity faster than the
/// larger of the two caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3Mover {
    /// Current position.
    pub current: Vec3,
    /// Position being approached.
    pub target: Vec3,
    /// Velocity per second.
    pub velocity: Vec3,
    /// Acceleration cap along the line while speeding up.
    pub max_direct_acceleration: f32,
    /// Deceleration cap along the line while braking.
    pub max_direct_deceleration: f32,
}

impl Default for Vector3Mover {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Vector3Mover {
    /// Default acceleration and deceleration cap.
    pub const DEFAULT_LIMIT: f32 = 200.0;

    /// A mover resting at `position`.
    #[must_use]
    pub const fn new(position: Vec3) -> Self {
        Self {
            current: position,
            target: position,
            velocity: Vec3::ZERO,
            max_direct_acceleration: Self::DEFAULT_LIMIT,
            max_direct_deceleration: Self::DEFAULT_LIMIT,
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
        self.max_direct_acceleration = limits.max_acceleration;
        self.max_direct_deceleration = limits.max_deceleration;
    }

    /// Set the position to approach.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Jump to `position` and stop there.
    pub fn snap_to(&mut self, position: Vec3) {
        self.current = position;
        self.target = position;
        self.velocity = Vec3::ZERO;
    }

    /// At the target and at rest.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.current == self.target && self.velocity == Vec3::ZERO
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0, "timestep must be non-negative, got {dt}");
        let delta = self.target - self.current;
        let distance = delta.length();
        // Zero when already on the target: no acceleration, no snapping.
        let direction = delta.normalize_or_zero();

        let speed = self.velocity.dot(direction);
        let accel = bang_bang::acceleration(
            distance,
            speed,
            self.max_direct_acceleration,
            self.max_direct_deceleration,
        );
        let along = direction * (accel * dt);

        // Brake whatever is not along the line (all of it when sitting on
        // the target).
        let moving = self.velocity + along;
        let perpendicular = moving - direction * moving.dot(direction);
        let drift = perpendicular.length();
        let mut change = along;
        if drift > 0.0 {
            let brake = (self.max_direct_deceleration * dt).min(drift);
            change -= perpendicular * (brake / drift);
        }
        // Both parts share one acceleration budget.
        let budget = self
            .max_direct_acceleration
            .max(self.max_direct_deceleration)
            * dt;
        self.velocity += change.clamp_length_max(budget);

        let speed = self.velocity.dot(direction);
        if speed > 0.0 && speed * dt > distance {
            self.current = self.target;
            self.velocity = Vec3::ZERO;
        } else {
            self.current += self.velocity * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(mover: &mut Vector3Mover, dt: f32, max_steps: usize) -> usize {
        for step in 0..max_steps {
            if mover.is_settled() {
                return step;
            }
            mover.update(dt);
        }
        max_steps
    }

    #[test]
    fn moves_along_straight_line() {
        let target = Vec3::new(3.0, 4.0, 0.0);
        let mut mover = Vector3Mover::new(Vec3::ZERO)
            .with_limits(MoverLimits::symmetric(5.0));
        mover.set_target(target);
        let direction = target.normalize();
        for _ in 0..30 {
            mover.update(1.0 / 60.0);
            let off_line =
                mover.current - direction * mover.current.dot(direction);
            assert!(off_line.length() < 1e-5);
        }
        assert!(mover.current.length() > 0.0);
    }

    #[test]
    fn acceleration_is_capped_as_a_whole() {
        let mut mover = Vector3Mover::new(Vec3::ZERO)
            .with_limits(MoverLimits::symmetric(10.0));
        mover.set_target(Vec3::new(100.0, 100.0, 100.0));
        mover.update(0.1);
        // |a·dt| = 1, not sqrt(3)
        assert!((mover.velocity.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn reaches_target_and_rests() {
        let mut mover = Vector3Mover::new(Vec3::new(-1.0, 2.0, 0.5))
            .with_limits(MoverLimits::symmetric(5.0));
        mover.set_target(Vec3::new(4.0, -2.0, 3.0));
        let steps = settle(&mut mover, 1.0 / 60.0, 10_000);
        assert!(steps < 10_000);
        assert_eq!(mover.current, Vec3::new(4.0, -2.0, 3.0));
        assert_eq!(mover.velocity, Vec3::ZERO);
    }

    #[test]
    fn resting_on_target_is_inert() {
        let mut mover = Vector3Mover::new(Vec3::ONE);
        let before = mover;
        mover.update(0.5);
        assert_eq!(mover, before);
    }

    #[test]
    fn zero_dt_is_noop() {
        let mut mover = Vector3Mover::new(Vec3::ZERO);
        mover.set_target(Vec3::X);
        mover.velocity = Vec3::new(0.5, 0.2, 0.0);
        let before = mover;
        mover.update(0.0);
        assert_eq!(mover, before);
    }

    #[test]
    fn sideways_braking_shares_the_cap() {
        let mut mover = Vector3Mover::new(Vec3::ZERO)
            .with_limits(MoverLimits::symmetric(10.0));
        mover.set_target(Vec3::new(10.0, 0.0, 0.0));
        mover.velocity = Vec3::new(0.0, 5.0, 0.0);
        let before = mover.velocity;
        mover.update(0.1);
        let rate = (mover.velocity - before).length() / 0.1;
        assert!(rate <= 10.0 + 1e-4, "accelerated at {rate}");
        // Still bending toward the target and shedding drift
        assert!(mover.velocity.x > 0.0);
        assert!(mover.velocity.y < 5.0);
    }

    #[test]
    fn retargeted_flight_respects_cap_every_step() {
        let dt = 1.0 / 60.0;
        let mut mover = Vector3Mover::new(Vec3::ZERO)
            .with_limits(MoverLimits::symmetric(20.0));
        mover.set_target(Vec3::new(10.0, 0.0, 0.0));
        for _ in 0..30 {
            mover.update(dt);
        }
        mover.set_target(Vec3::new(0.0, 10.0, 0.0));
        for _ in 0..5000 {
            if mover.is_settled() {
                break;
            }
            let before = mover.velocity;
            mover.update(dt);
            if mover.current != mover.target {
                let rate = (mover.velocity - before).length() / dt;
                assert!(rate <= 20.0 + 1e-3, "accelerated at {rate}");
            }
        }
        assert!(mover.is_settled());
    }

    #[test]
    fn moving_away_never_snaps() {
        let mut mover = Vector3Mover::new(Vec3::ZERO)
            .with_limits(MoverLimits::symmetric(1.0));
        mover.set_target(Vec3::new(0.01, 0.0, 0.0));
        mover.velocity = Vec3::new(-50.0, 0.0, 0.0);
        mover.update(0.1);
        assert_ne!(mover.current, mover.target);
        assert!(mover.current.x < 0.0);
    }

    #[test]
    fn retargeting_mid_flight_still_settles() {
        let mut mover = Vector3Mover::new(Vec3::ZERO)
            .with_limits(MoverLimits::symmetric(20.0));
        mover.set_target(Vec3::new(10.0, 0.0, 0.0));
        for _ in 0..30 {
            mover.update(1.0 / 60.0);
        }
        mover.set_target(Vec3::new(0.0, 10.0, 0.0));
        let steps = settle(&mut mover, 1.0 / 60.0, 20_000);
        assert!(steps < 20_000, "still moving: {mover:?}");
        assert_eq!(mover.current, Vec3::new(0.0, 10.0, 0.0));
    }
}
