use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Scene content overrides.
pub struct SceneOptions {
    /// PNG or JPEG painted on every cube face. Unset (or unreadable) uses
    /// the built-in checkerboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diffuse_texture: Option<PathBuf>,
}
