use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Frame", inline)]
#[serde(default)]
/// Frame clock parameters.
pub struct FrameOptions {
    /// Longest timestep, in seconds, handed to the movers after a stall.
    #[schemars(title = "Max Step", range(min = 0.001, max = 1.0), extend("step" = 0.001))]
    pub max_step: f32,
    /// Weight of the newest sample in the smoothed FPS (0-1).
    #[schemars(skip)]
    pub fps_smoothing: f32,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            max_step: 0.1,
            fps_smoothing: 0.05,
        }
    }
}
