//! Orbit camera around a smoothly moving center of interest.

use glam::{Mat4, Vec3};

use crate::kinematics::{ArcRotor, ScalarMover, Vector3Mover};
use crate::options::ArcBallOptions;

/// Orbit camera composed of four movers.
///
/// Azimuth (`alpha`, about world Y) and elevation (`beta`, about the
/// camera X axis) are in **degrees**, both in the setters and in the rotor
/// state; they are converted to radians only when the view matrix is
/// composed. `zoom` is the eye-to-center distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcBallCamera {
    /// Center of interest.
    pub center: Vector3Mover,
    /// Azimuth in degrees.
    pub alpha: ArcRotor,
    /// Elevation in degrees.
    pub beta: ArcRotor,
    /// Eye-to-center distance.
    pub zoom: ScalarMover,
}

impl Default for ArcBallCamera {
    fn default() -> Self {
        Self::from_options(&ArcBallOptions::default())
    }
}

impl ArcBallCamera {
    /// Camera at the origin, 10 units away, looking down -Z.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from tuning options, resting at the initial zoom.
    #[must_use]
    pub fn from_options(options: &ArcBallOptions) -> Self {
        Self {
            center: Vector3Mover::new(Vec3::ZERO).with_limits(options.center),
            alpha: ArcRotor::new(0.0).with_limits(options.alpha),
            beta: ArcRotor::new(0.0).with_limits(options.beta),
            zoom: ScalarMover::new(options.initial_zoom)
                .with_limits(options.zoom),
        }
    }

    /// Re-apply mover limits without disturbing the current motion.
    pub fn apply_options(&mut self, options: &ArcBallOptions) {
        self.center.set_limits(options.center);
        self.alpha.set_limits(options.alpha);
        self.beta.set_limits(options.beta);
        self.zoom.set_limits(options.zoom);
    }

    /// Target azimuth in degrees.
    pub fn set_alpha(&mut self, degrees: f32) {
        self.alpha.set_target(degrees);
    }

    /// Target elevation in degrees.
    pub fn set_beta(&mut self, degrees: f32) {
        self.beta.set_target(degrees);
    }

    /// Target eye-to-center distance.
    pub fn set_zoom(&mut self, distance: f32) {
        self.zoom.set_target(distance);
    }

    /// Target center of interest.
    pub fn set_center(&mut self, center: Vec3) {
        self.center.set_target(center);
    }

    /// Advance all four movers by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.alpha.update(dt);
        self.beta.update(dt);
        self.zoom.update(dt);
        self.center.update(dt);
    }

    /// Every mover has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.center.is_settled()
            && self.alpha.is_settled()
            && self.beta.is_settled()
            && self.zoom.is_settled()
    }

    /// Post-multiply the view transform into `mat`:
    /// `mat · T(0, 0, -zoom) · Rx(beta) · Ry(alpha) · T(-center)`.
    pub fn view_matrix(&self, mat: &mut Mat4) {
        *mat = *mat
            * Mat4::from_translation(Vec3::new(0.0, 0.0, -self.zoom.current))
            * Mat4::from_rotation_x(self.beta.radians())
            * Mat4::from_rotation_y(self.alpha.radians())
            * Mat4::from_translation(-self.center.current);
    }

    /// The view transform on its own.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        let mut mat = Mat4::IDENTITY;
        self.view_matrix(&mut mat);
        mat
    }

    /// World-space eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.view().inverse().transform_point3(Vec3::ZERO)
    }
}
