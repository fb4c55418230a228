use glam::Vec2;

use super::ortho::OrthoCameraControl;
use crate::input::InputEvent;

/// Smallest zoom factor a single scroll event may apply.
const MIN_SCROLL_ZOOM: f32 = 0.01;

impl OrthoCameraControl {
    /// Route a platform event to the matching `on_*` handler.
    ///
    /// Cursor positions arrive with a top-left origin and are flipped to
    /// the bottom-left origin the control works in. Returns `true` if the
    /// view-projection changed and the frame should be redrawn.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        let before = self.view_proj();
        match *event {
            InputEvent::CursorMoved { x, y } => {
                let win = self.flip_y(Vec2::new(x, y));
                self.on_mouse_move(win.x, win.y);
            }
            InputEvent::MouseButton {
                button,
                pressed: true,
            } => self.on_mouse_down(button),
            InputEvent::MouseButton {
                button,
                pressed: false,
            } => self.on_mouse_up(button),
            InputEvent::Scroll { delta } => {
                let factor = 1.0 + delta * self.zoom_speed();
                // Non-finite factors pass through for zoom() to reject
                if factor.is_finite() {
                    self.zoom(factor.max(MIN_SCROLL_ZOOM));
                } else {
                    self.zoom(factor);
                }
            }
            InputEvent::Resized { width, height } => {
                self.set_size(width, height);
            }
        }
        self.view_proj() != before
    }

    fn flip_y(&self, win: Vec2) -> Vec2 {
        Vec2::new(win.x, self.viewport().height as f32 - win.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;

    fn control() -> OrthoCameraControl {
        let mut control = OrthoCameraControl::new(1.0);
        assert!(control.handle_event(&InputEvent::Resized {
            width: 200,
            height: 100,
        }));
        control
    }

    #[test]
    fn cursor_position_is_flipped() {
        let mut control = control();
        let moved = InputEvent::CursorMoved { x: 20.0, y: 30.0 };
        let _ = control.handle_event(&moved);
        assert_eq!(control.mouse_position(), Vec2::new(20.0, 70.0));
    }

    #[test]
    fn drag_pans_and_reports_change() {
        let mut control = control();
        assert!(
            !control.handle_event(&InputEvent::CursorMoved { x: 50.0, y: 50.0 })
        );
        assert!(!control.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        }));
        assert!(control.is_button_down(MouseButton::Left));
        assert!(
            control.handle_event(&InputEvent::CursorMoved { x: 80.0, y: 50.0 })
        );
        assert!(!control.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        }));
        assert!(!control.is_button_down(MouseButton::Left));
    }

    #[test]
    fn scroll_up_zooms_in() {
        let mut control = control();
        let before = control.view_rect();
        assert!(control.handle_event(&InputEvent::Scroll { delta: 2.0 }));
        let after = control.view_rect();
        assert!(after.z - after.x < before.z - before.x);
    }

    #[test]
    fn huge_negative_scroll_is_clamped() {
        let mut control = control();
        assert!(control.handle_event(&InputEvent::Scroll { delta: -1000.0 }));
        assert!(control.view_rect().is_finite());
    }

    #[test]
    fn non_finite_scroll_is_ignored() {
        let mut control = control();
        let before = control.view_rect();
        for delta in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(!control.handle_event(&InputEvent::Scroll { delta }));
        }
        assert_eq!(control.view_rect(), before);
    }

    #[test]
    fn zero_resize_reports_no_change() {
        let mut control = control();
        assert!(!control.handle_event(&InputEvent::Resized {
            width: 0,
            height: 0,
        }));
    }
}
