//! Centralized camera/window/lighting options with TOML preset support.
//!
//! All tweakable settings (camera tuning, window and frame loop, Phong
//! lighting, the cube texture, keybindings) are consolidated here. Options serialize to/from
//! TOML so a preset file can override any subset of them.

mod camera;
mod keybindings;
mod lighting;
mod scene;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::{
    Attenuation, DirectionalLight, LightColor, LightingOptions, PointLight,
    SpotLight, MAX_POINT_LIGHTS,
};
pub use scene::SceneOptions;
pub use window::WindowOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VistaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Window and frame-loop parameters.
    pub window: WindowOptions,
    /// Camera placement, tuning and projection parameters.
    pub camera: CameraOptions,
    /// Phong lighting parameters.
    pub lighting: LightingOptions,
    /// Scene content such as the cube texture.
    #[schemars(skip)]
    pub scene: SceneOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VistaError::Io`] if the file cannot be read and
    /// [`VistaError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, VistaError> {
        let content = std::fs::read_to_string(path).map_err(VistaError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| VistaError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`VistaError::OptionsParse`] on serialization failure and
    /// [`VistaError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), VistaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VistaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VistaError::Io)?;
        }
        std::fs::write(path, content).map_err(VistaError::Io)
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
