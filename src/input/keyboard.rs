use serde::{Deserialize, Serialize};

use crate::camera::CameraMovement;

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// exit = "Escape"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Fly along the look direction while held.
    MoveForward,
    /// Fly against the look direction while held.
    MoveBackward,
    /// Strafe left while held.
    MoveLeft,
    /// Strafe right while held.
    MoveRight,
    /// Rise along the camera's up vector while held.
    MoveUp,
    /// Sink along the camera's up vector while held.
    MoveDown,
    /// Restore the configured camera placement.
    ResetCamera,
    /// Close the viewer.
    Exit,
}

impl KeyAction {
    /// The camera direction for continuous movement actions.
    #[must_use]
    pub fn movement(self) -> Option<CameraMovement> {
        match self {
            Self::MoveForward => Some(CameraMovement::Forward),
            Self::MoveBackward => Some(CameraMovement::Backward),
            Self::MoveLeft => Some(CameraMovement::Left),
            Self::MoveRight => Some(CameraMovement::Right),
            Self::MoveUp => Some(CameraMovement::Up),
            Self::MoveDown => Some(CameraMovement::Down),
            Self::ResetCamera | Self::Exit => None,
        }
    }
}
