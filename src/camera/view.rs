use glam::Mat4;

use super::{ArcBallCamera, FreeCamera, OrthoCameraControl};

/// A camera that advances over time and contributes a view transform.
///
/// Lets a render loop drive any of the camera kinds the same way:
/// `update` once per frame, then `compose` into the projection.
pub trait ViewTransform {
    /// Advance animated state by `dt` seconds.
    fn update(&mut self, dt: f32);

    /// Post-multiply this camera's transform into `out`.
    fn compose(&self, out: &mut Mat4);

    /// Nothing left to animate.
    fn is_settled(&self) -> bool;
}

impl ViewTransform for ArcBallCamera {
    fn update(&mut self, dt: f32) {
        Self::update(self, dt);
    }

    fn compose(&self, out: &mut Mat4) {
        self.view_matrix(out);
    }

    fn is_settled(&self) -> bool {
        Self::is_settled(self)
    }
}

impl ViewTransform for FreeCamera {
    fn update(&mut self, dt: f32) {
        Self::update(self, dt);
    }

    fn compose(&self, out: &mut Mat4) {
        self.apply(out);
    }

    fn is_settled(&self) -> bool {
        self.is_at_rest()
    }
}

/// Event-driven: nothing to integrate, and the contribution already
/// includes the aspect-correct projection.
impl ViewTransform for OrthoCameraControl {
    fn update(&mut self, _dt: f32) {}

    fn compose(&self, out: &mut Mat4) {
        *out *= self.view_proj();
    }

    fn is_settled(&self) -> bool {
        true
    }
}
