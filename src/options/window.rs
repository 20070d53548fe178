use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Window", inline)]
#[serde(default)]
/// Window and frame-loop parameters.
pub struct WindowOptions {
    /// Window title.
    #[schemars(skip)]
    pub title: String,
    /// Initial inner width in logical pixels.
    #[schemars(skip)]
    pub width: u32,
    /// Initial inner height in logical pixels.
    #[schemars(skip)]
    pub height: u32,
    /// Background clear color (linear RGB).
    #[schemars(skip)]
    pub clear_color: [f32; 3],
    /// Wait for vertical blank when presenting.
    #[schemars(title = "VSync")]
    pub vsync: bool,
    /// Frame cap in frames per second (0 = unlimited).
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
    /// Hide and lock the cursor to the window for mouse-look.
    #[schemars(title = "Grab Cursor")]
    pub grab_cursor: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "Vista".into(),
            width: 800,
            height: 600,
            clear_color: [0.1, 0.1, 0.1],
            vsync: true,
            target_fps: 0,
            grab_cursor: true,
        }
    }
}
