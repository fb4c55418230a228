use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
/// Acceleration and deceleration caps for one mover, in units per second².
pub struct MoverLimits {
    /// Largest acceleration applied while speeding up toward the target.
    #[schemars(title = "Max Acceleration", range(min = 0.1))]
    pub max_acceleration: f32,
    /// Largest deceleration applied while braking onto the target.
    #[schemars(title = "Max Deceleration", range(min = 0.1))]
    pub max_deceleration: f32,
}

impl MoverLimits {
    /// Same cap for speeding up and braking.
    #[must_use]
    pub const fn symmetric(limit: f32) -> Self {
        Self {
            max_acceleration: limit,
            max_deceleration: limit,
        }
    }
}

impl Default for MoverLimits {
    fn default() -> Self {
        Self::symmetric(200.0)
    }
}
