/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// turns them into camera updates and discrete [`KeyAction`](super::KeyAction)s.
///
/// # Example
///
/// ```
/// use vista::input::{InputEvent, InputProcessor};
///
/// let mut input = InputProcessor::new();
/// let action = input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// assert!(action.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Relative pointer motion, e.g. raw device deltas while the cursor is
    /// grabbed. Unlike [`CursorMoved`](Self::CursorMoved) there is no
    /// absolute position to track.
    MouseMotion {
        /// Horizontal motion in pixels (positive = right).
        dx: f32,
        /// Vertical motion in pixels (positive = down).
        dy: f32,
    },
    /// Vertical scroll wheel movement.
    Scroll {
        /// Scroll amount in lines (positive = away from the user, zoom in).
        delta: f32,
    },
    /// Physical key pressed or released.
    Key {
        /// Key code name, e.g. `"KeyW"` or `"Escape"`.
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Window lost keyboard/cursor focus.
    FocusLost,
}

impl InputEvent {
    /// Shorthand for a key press event.
    #[must_use]
    pub fn key_pressed(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            pressed: true,
        }
    }

    /// Shorthand for a key release event.
    #[must_use]
    pub fn key_released(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            pressed: false,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit scroll delta into a line-based [`InputEvent::Scroll`].
    #[must_use]
    pub fn from_scroll(delta: winit::event::MouseScrollDelta) -> Self {
        let delta = match delta {
            winit::event::MouseScrollDelta::LineDelta(_, y) => y,
            winit::event::MouseScrollDelta::PixelDelta(pos) => {
                pos.y as f32 * 0.01
            }
        };
        Self::Scroll { delta }
    }
}
