use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::MoverLimits;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Arc-Ball", inline)]
#[serde(default)]
/// Arc-ball camera smoothing parameters.
pub struct ArcBallOptions {
    /// Limits for the center-of-interest mover.
    pub center: MoverLimits,
    /// Limits for the azimuth rotor, in degrees per second².
    pub alpha: MoverLimits,
    /// Limits for the elevation rotor, in degrees per second².
    pub beta: MoverLimits,
    /// Limits for the zoom-distance mover.
    pub zoom: MoverLimits,
    /// Starting distance between eye and center.
    #[schemars(title = "Initial Zoom", range(min = 0.0))]
    pub initial_zoom: f32,
}

impl Default for ArcBallOptions {
    fn default() -> Self {
        Self {
            center: MoverLimits::symmetric(5.0),
            alpha: MoverLimits::symmetric(250.0),
            beta: MoverLimits::symmetric(250.0),
            zoom: MoverLimits {
                max_acceleration: 10.0,
                max_deceleration: 15.0,
            },
            initial_zoom: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Free Camera", inline)]
#[serde(default)]
/// Free 6-DOF camera starting pose.
pub struct FreeCameraOptions {
    /// Initial eye position in world space.
    #[schemars(title = "Position")]
    pub position: [f32; 3],
}

impl Default for FreeCameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 10.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orthographic 2D", inline)]
#[serde(default)]
/// Orthographic pan/zoom/rotate control parameters.
pub struct OrthoOptions {
    /// Initial half-extent of the visible world square.
    #[schemars(title = "Extents", range(min = 0.001))]
    pub extents: f32,
    /// Pixels the cursor must travel from the press point before a
    /// right-drag starts rotating.
    #[schemars(title = "Rotate Dead Zone", range(min = 0.0, max = 500.0), extend("step" = 1.0))]
    pub min_rotate_win_distance: f32,
    /// Zoom factor change per scroll unit.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
}

impl Default for OrthoOptions {
    fn default() -> Self {
        Self {
            extents: 1.0,
            min_rotate_win_distance: 100.0,
            zoom_speed: 0.1,
        }
    }
}
