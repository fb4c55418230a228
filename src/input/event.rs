/// Platform-agnostic input events.
///
/// Positions are window pixels with the origin at the top-left, as
/// delivered by the windowing system. Feed them into
/// [`handle_event`](crate::OrthoCameraControl::handle_event).
///
/// # Example
///
/// ```
/// use camera_rig::{InputEvent, MouseButton, OrthoCameraControl};
///
/// let mut control = OrthoCameraControl::new(1.0);
/// let resized = InputEvent::Resized { width: 800, height: 600 };
/// let _ = control.handle_event(&resized);
/// let _ = control.handle_event(&InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: true,
/// });
/// let moved = InputEvent::CursorMoved { x: 10.0, y: 0.0 };
/// assert!(control.handle_event(&moved));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downward.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount in lines (positive = zoom in).
        delta: f32,
    },
    /// Window surface resized.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Center,
}

impl MouseButton {
    /// Dense index for per-button state tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Center => 2,
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Center,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "winit")]
impl InputEvent {
    /// Translate a winit window event, or `None` for events the camera
    /// controls do not use. Pixel scroll deltas are scaled to lines.
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
    ) -> Option<Self> {
        use winit::event::{
            ElementState, MouseButton as WinitButton, MouseScrollDelta,
            WindowEvent,
        };

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => match button {
                WinitButton::Left
                | WinitButton::Right
                | WinitButton::Middle => Some(Self::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                }),
                _ => None,
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::Resized(size) => Some(Self::Resized {
                width: size.width,
                height: size.height,
            }),
            _ => None,
        }
    }
}
