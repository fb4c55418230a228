//! Camera tuning options with TOML preset support.
//!
//! Every tweakable constant (mover limits, initial poses, ortho dead zone,
//! frame step clamp) is consolidated here. Options serialize to/from TOML so
//! a rig can be tuned without recompiling.

mod camera;
mod frame;
mod motion;

use std::path::Path;

pub use camera::{ArcBallOptions, FreeCameraOptions, OrthoOptions};
pub use frame::FrameOptions;
pub use motion::MoverLimits;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[ortho]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct RigOptions {
    /// Arc-ball camera smoothing.
    pub arcball: ArcBallOptions,
    /// Free camera starting pose.
    pub free: FreeCameraOptions,
    /// Orthographic control parameters.
    pub ortho: OrthoOptions,
    /// Frame clock parameters.
    pub frame: FrameOptions,
}

impl RigOptions {
    /// Generate JSON Schema describing the exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(RigOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        log::info!("Loaded camera preset '{}'", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)?;
        log::info!("Saved camera preset '{}'", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
