//! Orthographic 2D pan/zoom/rotate control.
//!
//! Window coordinates passed to the `on_*` methods have their origin at the
//! bottom-left of the viewport with y growing upward, matching the
//! projection. [`handle_event`](OrthoCameraControl::handle_event) converts
//! from the top-left platform convention.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::input::MouseButton;
use crate::math::{
    ortho_2d, positive_x, rotate_local_z, scale_around_local, set_translation,
    translate, translate_local, Viewport,
};
use crate::options::OrthoOptions;

/// Mouse-driven orthographic camera.
///
/// - Left drag pans, keeping the world point under the cursor glued to it.
/// - Right drag rotates about the press point once the cursor is more than
///   the dead-zone distance away from it.
/// - Center press straightens the rotation about the cursor.
/// - [`zoom`](Self::zoom) scales about the cursor.
///
/// After every mutation `view_proj = ortho2D(-aspect, aspect, -1, 1) · view`
/// and `inv_view_proj` is its inverse.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthoCameraControl {
    view: Mat4,
    view_proj: Mat4,
    inv_view_proj: Mat4,
    viewport: Viewport,
    mouse: Vec2,
    mouse_down_at: Vec2,
    buttons_down: [bool; 3],
    min_rotate_win_distance_sq: f32,
    zoom_speed: f32,
}

impl Default for OrthoCameraControl {
    fn default() -> Self {
        Self::from_options(&OrthoOptions::default())
    }
}

impl OrthoCameraControl {
    /// Show the world square `[-extents, extents]²` (before aspect
    /// correction).
    #[must_use]
    pub fn new(extents: f32) -> Self {
        Self::from_options(&OrthoOptions {
            extents,
            ..OrthoOptions::default()
        })
    }

    /// Build from tuning options.
    #[must_use]
    pub fn from_options(options: &OrthoOptions) -> Self {
        let e = options.extents;
        let mut control = Self {
            view: ortho_2d(-e, e, -e, e),
            view_proj: Mat4::IDENTITY,
            inv_view_proj: Mat4::IDENTITY,
            viewport: Viewport::default(),
            mouse: Vec2::ZERO,
            mouse_down_at: Vec2::ZERO,
            buttons_down: [false; 3],
            min_rotate_win_distance_sq: 0.0,
            zoom_speed: options.zoom_speed,
        };
        control.set_min_rotate_win_distance(options.min_rotate_win_distance);
        control.refresh();
        control
    }

    /// Minimum distance in pixels between the press point and the cursor
    /// before a right drag rotates.
    pub fn set_min_rotate_win_distance(&mut self, distance: f32) {
        self.min_rotate_win_distance_sq = distance * distance;
    }

    /// Zoom factor change per scroll unit used by
    /// [`handle_event`](Self::handle_event).
    pub fn set_zoom_speed(&mut self, zoom_speed: f32) {
        self.zoom_speed = zoom_speed;
    }

    /// Zoom factor change per scroll unit.
    #[must_use]
    pub const fn zoom_speed(&self) -> f32 {
        self.zoom_speed
    }

    /// Resize the viewport. Zero-sized requests (minimized windows) are
    /// ignored so the matrices stay finite.
    pub fn set_size(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(0, 0, width, height);
        if viewport.is_empty() {
            log::warn!("Ignoring degenerate ortho viewport {width}x{height}");
            return;
        }
        log::debug!("Ortho viewport resized to {width}x{height}");
        self.viewport = viewport;
        self.refresh();
    }

    /// Current viewport.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// 2D view transform (without the aspect projection).
    #[must_use]
    pub const fn view(&self) -> Mat4 {
        self.view
    }

    /// Cached view-projection matrix.
    #[must_use]
    pub const fn view_proj(&self) -> Mat4 {
        self.view_proj
    }

    /// Cached inverse of [`view_proj`](Self::view_proj).
    #[must_use]
    pub const fn inv_view_proj(&self) -> Mat4 {
        self.inv_view_proj
    }

    /// Whether `button` is currently held.
    #[must_use]
    pub const fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down[button.index()]
    }

    /// Last known cursor position in window coordinates.
    #[must_use]
    pub const fn mouse_position(&self) -> Vec2 {
        self.mouse
    }

    /// Center the view on world point `(x, y)`, keeping scale and rotation.
    pub fn center(&mut self, x: f32, y: f32) {
        let untranslated = set_translation(self.view, Vec3::ZERO);
        self.view = translate(untranslated, Vec3::new(-x, -y, 0.0));
        self.refresh();
    }

    /// Start a drag with `button` at the current cursor position. The
    /// center button also straightens the view about the cursor.
    pub fn on_mouse_down(&mut self, button: MouseButton) {
        self.mouse_down_at = self.mouse;
        self.buttons_down[button.index()] = true;
        if button == MouseButton::Center {
            // -positive_x undoes the flipped determinant of the ortho view
            let v = -positive_x(&self.view);
            let angle = v.y.atan2(v.x);
            log::debug!("Resetting ortho rotation by {angle} rad");
            self.rotate_about(self.ndc(self.mouse_down_at), angle);
            self.refresh();
        }
    }

    /// End a drag with `button`.
    pub fn on_mouse_up(&mut self, button: MouseButton) {
        self.buttons_down[button.index()] = false;
    }

    /// Cursor moved to `(win_x, win_y)`: pan with the left button, rotate
    /// with the right button.
    pub fn on_mouse_move(&mut self, win_x: f32, win_y: f32) {
        let cursor = Vec2::new(win_x, win_y);
        if self.is_button_down(MouseButton::Left) {
            let to = self.unproject(cursor);
            let from = self.unproject(self.mouse);
            self.view = translate(self.view, (to - from).extend(0.0));
            self.refresh();
        } else if self.is_button_down(MouseButton::Right)
            && cursor.distance_squared(self.mouse_down_at)
                > self.min_rotate_win_distance_sq
        {
            let now = cursor - self.mouse_down_at;
            let before = self.mouse - self.mouse_down_at;
            let angle = before.perp_dot(now).atan2(before.dot(now));
            self.rotate_about(self.ndc(self.mouse_down_at), angle);
            self.refresh();
        }
        self.mouse = cursor;
    }

    /// Scale the view by `scale` about the cursor: `> 1` zooms in, `< 1`
    /// zooms out. Non-positive or non-finite factors are ignored.
    pub fn zoom(&mut self, scale: f32) {
        if !(scale.is_finite() && scale > 0.0) {
            log::warn!("Ignoring invalid ortho zoom factor {scale}");
            return;
        }
        let pivot = self.ndc(self.mouse);
        self.view = scale_around_local(self.view, scale, pivot);
        self.refresh();
    }

    /// Visible world rectangle as `(min_x, min_y, max_x, max_y)`.
    #[must_use]
    pub fn view_rect(&self) -> Vec4 {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for corner in [
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ] {
            let p = self.inv_view_proj.transform_point3(corner).truncate();
            min = min.min(p);
            max = max.max(p);
        }
        Vec4::new(min.x, min.y, max.x, max.y)
    }

    /// World point under window position `win`.
    #[must_use]
    pub fn unproject(&self, win: Vec2) -> Vec2 {
        self.viewport
            .unproject_inv(&self.inv_view_proj, win.extend(0.0))
            .truncate()
    }

    /// Window position of world point `world`.
    #[must_use]
    pub fn project(&self, world: Vec2) -> Vec2 {
        self.viewport
            .project(&self.view_proj, world.extend(0.0))
            .truncate()
    }

    /// Window position mapped into view space: NDC with x stretched by
    /// the aspect ratio.
    fn ndc(&self, win: Vec2) -> Vec3 {
        let width = self.viewport.width as f32;
        let height = self.viewport.height as f32;
        Vec3::new(
            (win.x / width * 2.0 - 1.0) * (width / height),
            win.y / height * 2.0 - 1.0,
            0.0,
        )
    }

    /// Rotate the view by `angle` about view-space point `pivot`.
    fn rotate_about(&mut self, pivot: Vec3, angle: f32) {
        let view = translate_local(self.view, -pivot);
        let view = rotate_local_z(view, angle);
        self.view = translate_local(view, pivot);
    }

    fn refresh(&mut self) {
        let aspect = self.viewport.aspect();
        self.view_proj = ortho_2d(-aspect, aspect, -1.0, 1.0) * self.view;
        self.inv_view_proj = self.view_proj.inverse();
    }
}
