use glam::{Mat4, Vec3};

/// Window-space rectangle in pixels: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge.
    pub x: i32,
    /// Bottom edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Viewport {
    /// A 1×1 viewport at the origin, which keeps derived matrices finite
    /// until the real window size is known.
    fn default() -> Self {
        Self::new(0, 0, 1, 1)
    }
}

impl Viewport {
    /// Create a viewport from origin and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Width over height.
    #[inline]
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Whether either dimension is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Map window coordinates to normalized device coordinates in
    /// `[-1, 1]`. `win.z` in `[0, 1]` maps to depth `[-1, 1]`.
    #[inline]
    #[must_use]
    pub fn window_to_ndc(&self, win: Vec3) -> Vec3 {
        Vec3::new(
            (win.x - self.x as f32) / self.width as f32 * 2.0 - 1.0,
            (win.y - self.y as f32) / self.height as f32 * 2.0 - 1.0,
            win.z * 2.0 - 1.0,
        )
    }

    /// Inverse of [`window_to_ndc`](Self::window_to_ndc).
    #[inline]
    #[must_use]
    pub fn ndc_to_window(&self, ndc: Vec3) -> Vec3 {
        Vec3::new(
            (ndc.x + 1.0) * 0.5 * self.width as f32 + self.x as f32,
            (ndc.y + 1.0) * 0.5 * self.height as f32 + self.y as f32,
            (ndc.z + 1.0) * 0.5,
        )
    }

    /// Unproject a window-space point through an already inverted
    /// view-projection matrix, with perspective divide.
    #[inline]
    #[must_use]
    pub fn unproject_inv(&self, inv_view_proj: &Mat4, win: Vec3) -> Vec3 {
        inv_view_proj.project_point3(self.window_to_ndc(win))
    }

    /// Project a world-space point to window coordinates.
    #[inline]
    #[must_use]
    pub fn project(&self, view_proj: &Mat4, world: Vec3) -> Vec3 {
        self.ndc_to_window(view_proj.project_point3(world))
    }
}
