use glam::{Mat4, Vec3};

use super::view::ViewTransform;

/// Perspective projection parameters for the 3D cameras.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Perspective {
    fn default() -> Self {
        Self {
            aspect: 1.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl Perspective {
    /// Projection matrix with a [0, 1] depth range.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Track a window resize. Zero-sized requests are ignored.
    pub fn set_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("Ignoring degenerate projection size {width}x{height}");
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and eye position.
pub struct ViewUniform {
    /// Combined view-projection matrix, column-major.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub eye: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for ViewUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewUniform {
    /// Identity view-projection with the eye at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Refresh from `projection` composed with the camera's view.
    ///
    /// The ortho control carries its own projection; pass
    /// [`Mat4::IDENTITY`] for it.
    pub fn update_view_proj(
        &mut self,
        projection: Mat4,
        camera: &impl ViewTransform,
    ) {
        let mut view_proj = projection;
        camera.compose(&mut view_proj);
        self.view_proj = view_proj.to_cols_array_2d();

        let mut view = Mat4::IDENTITY;
        camera.compose(&mut view);
        self.eye = view.inverse().transform_point3(Vec3::ZERO).to_array();
    }

    /// Raw bytes for uploading to a uniform buffer.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{ArcBallCamera, FreeCamera};

    #[test]
    fn uniform_is_80_bytes() {
        assert_eq!(ViewUniform::new().as_bytes().len(), 80);
    }

    #[test]
    fn arcball_eye_matches_camera() {
        let mut camera = ArcBallCamera::default();
        camera.center.snap_to(Vec3::new(1.0, 2.0, 3.0));
        let projection = Perspective::default();
        let mut uniform = ViewUniform::new();
        uniform.update_view_proj(projection.matrix(), &camera);

        let eye = Vec3::from_array(uniform.eye);
        assert!((eye - camera.eye()).length() < 1e-4);
        let expected = projection.matrix() * camera.view();
        assert!(Mat4::from_cols_array_2d(&uniform.view_proj)
            .abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn free_camera_eye_is_position() {
        let camera = FreeCamera::new(Vec3::new(-4.0, 0.5, 9.0));
        let mut uniform = ViewUniform::new();
        uniform.update_view_proj(Mat4::IDENTITY, &camera);
        let eye = Vec3::from_array(uniform.eye);
        assert!((eye - camera.position).length() < 1e-4);
    }

    #[test]
    fn degenerate_resize_keeps_aspect() {
        let mut projection = Perspective::default();
        projection.set_size(1600, 900);
        projection.set_size(0, 900);
        assert!((projection.aspect - 16.0 / 9.0).abs() < 1e-6);
    }
}
