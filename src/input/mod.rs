//! Input handling: event types, key actions, cursor tracking, and the
//! input processor that turns raw window events into camera updates.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Absolute-to-relative cursor tracking.
pub mod mouse;
/// Converts raw events into camera updates.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use mouse::CursorTracker;
pub use processor::InputProcessor;
