//! Converts raw platform events into camera updates.
//!
//! The `InputProcessor` owns all transient input state (last cursor
//! position, held movement keys, the look/scroll accumulated during the
//! current frame) and the key-binding map. The camera only ever sees
//! already-computed offsets.

use std::collections::HashSet;

use glam::Vec2;

use super::event::InputEvent;
use super::keyboard::KeyAction;
use super::mouse::CursorTracker;
use crate::camera::{Camera, CameraMovement};
use crate::options::KeybindingOptions;

/// Converts raw window events into camera updates.
///
/// # Usage
///
/// ```
/// use vista::camera::Camera;
/// use vista::input::{InputEvent, InputProcessor};
///
/// let mut camera = Camera::default();
/// let mut input = InputProcessor::new();
///
/// // In the event loop:
/// let _ = input.handle_event(InputEvent::key_pressed("KeyW"));
///
/// // Once per frame:
/// input.apply(&mut camera, 1.0, true);
/// assert!(camera.position().z < 0.0);
/// ```
pub struct InputProcessor {
    /// Absolute → relative cursor conversion.
    cursor: CursorTracker,
    /// Movement directions whose keys are currently down.
    held: HashSet<CameraMovement>,
    /// Look offset gathered since the last [`apply`](Self::apply).
    pending_look: Vec2,
    /// Scroll gathered since the last [`apply`](Self::apply).
    pending_scroll: f32,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            cursor: CursorTracker::new(),
            held: HashSet::new(),
            pending_look: Vec2::ZERO,
            pending_scroll: 0.0,
            key_bindings,
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Whether the key for `direction` is currently held.
    #[must_use]
    pub fn is_held(&self, direction: CameraMovement) -> bool {
        self.held.contains(&direction)
    }

    /// Look offset accumulated for the current frame, in pixels.
    #[must_use]
    pub fn pending_look(&self) -> Vec2 {
        self.pending_look
    }

    /// Scroll accumulated for the current frame, in lines.
    #[must_use]
    pub fn pending_scroll(&self) -> f32 {
        self.pending_scroll
    }

    /// Process a raw input event.
    ///
    /// Returns the bound action when a key for a discrete action (anything
    /// other than movement) is pressed.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<KeyAction> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.pending_look += self.cursor.offset_to(x, y);
                None
            }
            InputEvent::MouseMotion { dx, dy } => {
                // screen y grows downward; pitch grows upward
                self.pending_look += Vec2::new(dx, -dy);
                None
            }
            InputEvent::Scroll { delta } => {
                self.pending_scroll += delta;
                None
            }
            InputEvent::Key { key, pressed } => self.handle_key(&key, pressed),
            InputEvent::FocusLost => {
                self.release_all();
                None
            }
        }
    }

    /// Key press/release: track held movement, report discrete actions.
    fn handle_key(&mut self, key: &str, pressed: bool) -> Option<KeyAction> {
        let action = self.key_bindings.lookup(key)?;

        if let Some(direction) = action.movement() {
            if pressed {
                let _ = self.held.insert(direction);
            } else {
                let _ = self.held.remove(&direction);
            }
            return None;
        }

        pressed.then_some(action)
    }

    /// Drop held keys and pending input, and treat the next cursor sample
    /// as the first.
    pub fn release_all(&mut self) {
        self.held.clear();
        self.pending_look = Vec2::ZERO;
        self.pending_scroll = 0.0;
        self.cursor.reset();
    }

    /// Apply this frame's input to the camera and clear the accumulators.
    ///
    /// Held directions are applied one `process_keyboard` call each, in
    /// [`CameraMovement::ALL`] order, followed by one mouse-look call with
    /// the frame's cumulative offset and one scroll call.
    pub fn apply(
        &mut self,
        camera: &mut Camera,
        delta_time: f32,
        constrain_pitch: bool,
    ) {
        for direction in CameraMovement::ALL {
            if self.held.contains(&direction) {
                camera.process_keyboard(direction, delta_time);
            }
        }

        if self.pending_look != Vec2::ZERO {
            camera.process_mouse_movement(
                self.pending_look.x,
                self.pending_look.y,
                constrain_pitch,
            );
            self.pending_look = Vec2::ZERO;
        }

        if self.pending_scroll != 0.0 {
            camera.process_mouse_scroll(self.pending_scroll);
            self.pending_scroll = 0.0;
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn held_key_moves_every_frame_until_released() {
        let mut camera = Camera::default();
        let mut input = InputProcessor::new();

        assert_eq!(input.handle_event(InputEvent::key_pressed("KeyW")), None);
        input.apply(&mut camera, 0.5, true);
        input.apply(&mut camera, 0.5, true);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, -2.5), EPS));

        let _ = input.handle_event(InputEvent::key_released("KeyW"));
        input.apply(&mut camera, 0.5, true);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, -2.5), EPS));
    }

    #[test]
    fn diagonal_movement_is_vector_sum() {
        let mut camera = Camera::default();
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::key_pressed("KeyW"));
        let _ = input.handle_event(InputEvent::key_pressed("KeyD"));
        input.apply(&mut camera, 1.0, true);
        assert!(camera.position().abs_diff_eq(Vec3::new(2.5, 0.0, -2.5), EPS));
    }

    #[test]
    fn repeated_press_does_not_double_speed() {
        let mut camera = Camera::default();
        let mut input = InputProcessor::new();
        for _ in 0..3 {
            let _ = input.handle_event(InputEvent::key_pressed("KeyW"));
        }
        input.apply(&mut camera, 1.0, true);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, -2.5), EPS));
    }

    #[test]
    fn first_cursor_sample_does_not_rotate() {
        let mut camera = Camera::default();
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 640.0, y: 360.0 });
        input.apply(&mut camera, 0.016, true);
        assert_eq!(camera.yaw(), -90.0);
        assert_eq!(camera.pitch(), 0.0);
    }

    #[test]
    fn cursor_deltas_accumulate_within_a_frame() {
        let mut camera = Camera::default();
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = input.handle_event(InputEvent::CursorMoved { x: 30.0, y: -10.0 });
        let _ = input.handle_event(InputEvent::CursorMoved { x: 50.0, y: -40.0 });
        assert_eq!(input.pending_look(), Vec2::new(50.0, 40.0));

        input.apply(&mut camera, 0.016, true);
        assert!((camera.yaw() - (-85.0)).abs() < EPS);
        assert!((camera.pitch() - 4.0).abs() < EPS);
        assert_eq!(input.pending_look(), Vec2::ZERO);
    }

    #[test]
    fn scroll_narrows_field_of_view() {
        let mut camera = Camera::default();
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::Scroll { delta: 2.0 });
        let _ = input.handle_event(InputEvent::Scroll { delta: 3.0 });
        input.apply(&mut camera, 0.016, true);
        assert_eq!(camera.zoom(), 40.0);
        assert_eq!(input.pending_scroll(), 0.0);
    }

    #[test]
    fn unconstrained_pitch_is_forwarded() {
        let mut camera = Camera::default();
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: -1000.0 });
        input.apply(&mut camera, 0.016, false);
        assert!((camera.pitch() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn discrete_actions_fire_on_press_only() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::key_pressed("Escape")),
            Some(KeyAction::Exit)
        );
        assert_eq!(input.handle_event(InputEvent::key_released("Escape")), None);
        assert_eq!(
            input.handle_event(InputEvent::key_pressed("KeyR")),
            Some(KeyAction::ResetCamera)
        );
        assert_eq!(input.handle_event(InputEvent::key_pressed("F13")), None);
    }

    #[test]
    fn focus_loss_releases_keys_and_cursor() {
        let mut camera = Camera::default();
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::key_pressed("KeyS"));
        let _ = input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        assert!(input.is_held(CameraMovement::Backward));

        let _ = input.handle_event(InputEvent::FocusLost);
        assert!(!input.is_held(CameraMovement::Backward));

        // the next sample after refocus is a fresh first sample
        let _ = input.handle_event(InputEvent::CursorMoved { x: 500.0, y: 500.0 });
        input.apply(&mut camera, 1.0, true);
        assert_eq!(camera, Camera::default());
    }

    #[test]
    fn custom_bindings_are_honoured() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::MoveUp, "KeyE");
        let mut input = InputProcessor::with_key_bindings(bindings);
        let mut camera = Camera::default();
        assert_eq!(input.key_bindings().lookup("Space"), None);

        let _ = input.handle_event(InputEvent::key_pressed("KeyE"));
        input.apply(&mut camera, 2.0, true);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 5.0, 0.0), EPS));
    }

    #[test]
    fn relative_motion_needs_no_first_sample() {
        let mut camera = Camera::default();
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::MouseMotion { dx: 30.0, dy: -10.0 });
        let _ = input.handle_event(InputEvent::MouseMotion { dx: 20.0, dy: -30.0 });
        assert_eq!(input.pending_look(), Vec2::new(50.0, 40.0));

        input.apply(&mut camera, 0.016, true);
        assert!((camera.yaw() - (-85.0)).abs() < EPS);
        assert!((camera.pitch() - 4.0).abs() < EPS);
    }

    #[test]
    fn relative_motion_stays_exact_after_long_sessions() {
        let mut camera = Camera::default();
        let mut input = InputProcessor::new();
        for _ in 0..100_000 {
            let _ = input.handle_event(InputEvent::MouseMotion { dx: 7.0, dy: 3.0 });
            input.apply(&mut camera, 0.016, true);
        }
        let _ = input.handle_event(InputEvent::MouseMotion { dx: 1.0, dy: 1.0 });
        assert_eq!(input.pending_look(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn focus_loss_drops_pending_motion() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::MouseMotion { dx: 5.0, dy: 5.0 });
        let _ = input.handle_event(InputEvent::FocusLost);
        assert_eq!(input.pending_look(), Vec2::ZERO);
    }
}
