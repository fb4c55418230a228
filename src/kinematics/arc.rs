use super::bang_bang::{self, Step};
use crate::options::MoverLimits;

const FULL_TURN: f32 = 360.0;
const HALF_TURN: f32 = 180.0;

/// Wrap `degrees` into `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly 360, which is
/// folded back to 0.
#[inline]
#[must_use]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(FULL_TURN);
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Signed distance from `from` to `to` along the shorter arc, in
/// `[-180, 180]`. Negative means decreasing angle.
#[inline]
#[must_use]
pub fn shortest_arc(from: f32, to: f32) -> f32 {
    let d = (from - to).rem_euclid(FULL_TURN);
    let magnitude = HALF_TURN - (d - HALF_TURN).abs();
    if d < HALF_TURN {
        -magnitude
    } else {
        magnitude
    }
}

/// Rotates an angle toward `target` along the shorter arc.
///
/// Angles are in degrees; velocity in degrees per second. After every
/// update `current` lies in `[0, 360)`. `target` may be any value and is
/// compared modulo 360.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcRotor {
    /// Current angle in `[0, 360)` after any update.
    pub current: f32,
    /// Angle being approached.
    pub target: f32,
    /// Signed angular velocity.
    pub velocity: f32,
    /// Acceleration cap while speeding up.
    pub max_acceleration: f32,
    /// Deceleration cap while braking.
    pub max_deceleration: f32,
}

impl Default for ArcRotor {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ArcRotor {
    /// Default acceleration and deceleration cap, in degrees per second².
    pub const DEFAULT_LIMIT: f32 = 250.0;

    /// A rotor resting at `degrees`.
    #[must_use]
    pub fn new(degrees: f32) -> Self {
        let angle = normalize_degrees(degrees);
        Self {
            current: angle,
            target: angle,
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

    /// Set the angle to approach.
    pub fn set_target(&mut self, degrees: f32) {
        self.target = degrees;
    }

    /// Jump to `degrees` and stop there.
    pub fn snap_to(&mut self, degrees: f32) {
        self.current = normalize_degrees(degrees);
        self.target = degrees;
        self.velocity = 0.0;
    }

    /// Signed shorter-arc distance still to cover.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        shortest_arc(self.current, normalize_degrees(self.target))
    }

    /// At the target (modulo 360) and at rest.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.velocity == 0.0 && self.current == normalize_degrees(self.target)
    }

    /// Current angle in radians.
    #[must_use]
    pub fn radians(&self) -> f32 {
        self.current.to_radians()
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        match bang_bang::advance(
            self.remaining(),
            self.velocity,
            self.max_acceleration,
            self.max_deceleration,
            dt,
        ) {
            Step::Move { velocity, way } => {
                self.velocity = velocity;
                self.current = normalize_degrees(self.current + way);
            }
            Step::Arrive => {
                self.velocity = 0.0;
                self.current = normalize_degrees(self.target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn shortest_arc_picks_short_way() {
        assert_eq!(shortest_arc(350.0, 10.0), 20.0);
        assert_eq!(shortest_arc(10.0, 350.0), -20.0);
        assert_eq!(shortest_arc(0.0, 359.0), -1.0);
        assert_eq!(shortest_arc(90.0, 90.0), 0.0);
        assert_eq!(shortest_arc(0.0, 180.0).abs(), 180.0);
    }

    #[test]
    fn shortest_arc_accepts_unwrapped_targets() {
        assert_eq!(shortest_arc(0.0, 370.0), 10.0);
        assert_eq!(shortest_arc(0.0, -10.0), -10.0);
        assert_eq!(shortest_arc(0.0, 720.0), 0.0);
    }

    #[test]
    fn normalize_stays_in_range() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        let tiny = normalize_degrees(-1e-6);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn wraps_forward_through_zero() {
        let mut rotor = ArcRotor::new(350.0);
        rotor.set_target(10.0);
        rotor.update(1.0 / 60.0);
        assert!(rotor.current > 350.0 || rotor.current < 10.0);
        assert!(rotor.velocity > 0.0);

        let mut previous = rotor.current;
        let mut wrapped = false;
        for _ in 0..600 {
            rotor.update(1.0 / 60.0);
            if rotor.current < previous {
                wrapped = true;
            }
            assert!(rotor.current >= 350.0 || rotor.current <= 10.0);
            previous = rotor.current;
        }
        assert!(wrapped);
        assert!(rotor.is_settled());
        assert_eq!(rotor.current, 10.0);
    }

    #[test]
    fn zero_dt_mid_flight_is_noop() {
        let mut rotor = ArcRotor::new(350.0);
        rotor.set_target(10.0);
        for _ in 0..5 {
            rotor.update(1.0 / 60.0);
        }
        assert!(rotor.velocity > 0.0);
        let before = rotor;
        rotor.update(0.0);
        assert_eq!(rotor, before);
    }

    #[test]
    fn wraps_backward_through_zero() {
        let mut rotor = ArcRotor::new(0.0);
        rotor.set_target(359.0);
        rotor.update(1.0 / 60.0);
        assert!(rotor.velocity < 0.0);
        assert!(rotor.current > 359.0);
    }

    #[test]
    fn settled_rotor_does_not_drift() {
        let mut rotor = ArcRotor::new(45.0);
        rotor.update(0.5);
        assert_eq!(rotor.current, 45.0);
        assert_eq!(rotor.velocity, 0.0);
    }

    #[test]
    fn current_always_in_range() {
        let mut rng = StdRng::seed_from_u64(0xa4c);
        for _ in 0..200 {
            let mut rotor = ArcRotor::new(rng.random_range(0.0..360.0))
                .with_limits(MoverLimits {
                    max_acceleration: rng.random_range(1.0..500.0),
                    max_deceleration: rng.random_range(1.0..500.0),
                });
            rotor.set_target(rng.random_range(-720.0..720.0));
            rotor.velocity = rng.random_range(-100.0..100.0);
            let dt = rng.random_range(0.005..0.2);
            for _ in 0..20_000 {
                rotor.update(dt);
                assert!(
                    (0.0..360.0).contains(&rotor.current),
                    "out of range: {rotor:?}"
                );
                if rotor.is_settled() {
                    break;
                }
            }
            assert!(rotor.is_settled(), "did not settle: {rotor:?}");
        }
    }
}
