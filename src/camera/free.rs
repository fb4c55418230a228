use glam::{Mat4, Quat, Vec3};

use crate::options::FreeCameraOptions;

/// 6-DOF free camera integrated from accelerations and velocities.
///
/// Linear acceleration and velocity are in world space. Angular
/// acceleration and velocity are in the camera's local axes: `x` turns
/// about the camera's right axis, `y` about its up axis, `z` about its
/// forward axis (radians per second).
///
/// The three axis rotations of a step are applied one after another about
/// the axes cached from the previous step, which is first-order accurate
/// in `dt·ω`; subdivide `dt` when spinning fast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeCamera {
    /// World-space linear acceleration.
    pub linear_acc: Vec3,
    /// World-space linear velocity.
    pub linear_vel: Vec3,
    /// Local-axis angular acceleration.
    pub angular_acc: Vec3,
    /// Local-axis angular velocity.
    pub angular_vel: Vec3,
    /// Eye position in world space.
    pub position: Vec3,
    /// World-to-camera rotation.
    pub rotation: Quat,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 10.0))
    }
}

impl FreeCamera {
    /// Camera at `position` looking down world -Z, at rest.
    #[must_use]
    pub const fn new(position: Vec3) -> Self {
        Self {
            linear_acc: Vec3::ZERO,
            linear_vel: Vec3::ZERO,
            angular_acc: Vec3::ZERO,
            angular_vel: Vec3::ZERO,
            position,
            rotation: Quat::IDENTITY,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        }
    }

    /// Camera at the configured starting position.
    #[must_use]
    pub fn from_options(options: &FreeCameraOptions) -> Self {
        Self::new(Vec3::from_array(options.position))
    }

    /// World-space view direction.
    #[must_use]
    pub const fn forward(&self) -> Vec3 {
        self.forward
    }

    /// World-space right axis.
    #[must_use]
    pub const fn right(&self) -> Vec3 {
        self.right
    }

    /// World-space up axis.
    #[must_use]
    pub const fn up(&self) -> Vec3 {
        self.up
    }

    /// Set the orientation directly and refresh the cached axes.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
        self.refresh_axes();
    }

    /// Integrate one step of `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0, "timestep must be non-negative, got {dt}");
        self.linear_vel += self.linear_acc * dt;
        self.angular_vel += self.angular_acc * dt;

        if dt > 0.0 && self.angular_vel != Vec3::ZERO {
            let turn = self.angular_vel * dt;
            self.rotation = (self.rotation
                * Quat::from_axis_angle(self.right, turn.x)
                * Quat::from_axis_angle(self.up, turn.y)
                * Quat::from_axis_angle(self.forward, turn.z))
            .normalize();
        }

        self.position += self.linear_vel * dt;
        self.refresh_axes();
    }

    fn refresh_axes(&mut self) {
        let inverse = self.rotation.conjugate();
        self.forward = inverse * Vec3::NEG_Z;
        self.up = inverse * Vec3::Y;
        self.right = inverse * Vec3::X;
    }

    /// No velocity or acceleration left, linear or angular.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.linear_acc == Vec3::ZERO
            && self.linear_vel == Vec3::ZERO
            && self.angular_acc == Vec3::ZERO
            && self.angular_vel == Vec3::ZERO
    }

    /// Post-multiply the view transform into `m`:
    /// `m · R(rotation) · T(-position)`.
    pub fn apply(&self, m: &mut Mat4) {
        *m = *m
            * Mat4::from_quat(self.rotation)
            * Mat4::from_translation(-self.position);
    }

    /// The view transform on its own.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        self.apply(&mut m);
        m
    }
}
