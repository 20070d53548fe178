use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::core::{PITCH, SENSITIVITY, SPEED, YAW, ZOOM};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement, tuning and projection parameters.
pub struct CameraOptions {
    /// Initial eye position in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial yaw in degrees (-90 looks down -Z).
    #[schemars(title = "Yaw", range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub yaw: f32,
    /// Initial pitch in degrees.
    #[schemars(title = "Pitch", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub pitch: f32,
    /// Fixed reference up axis.
    #[schemars(skip)]
    pub world_up: [f32; 3],
    /// Keyboard translation speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub movement_speed: f32,
    /// Degrees of rotation per pixel of cursor movement.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Initial vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub zoom: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Clamp pitch to ±89° during mouse-look.
    #[schemars(title = "Constrain Pitch")]
    pub constrain_pitch: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            yaw: YAW,
            pitch: PITCH,
            world_up: [0.0, 1.0, 0.0],
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
            znear: 0.1,
            zfar: 100.0,
            constrain_pitch: true,
        }
    }
}
