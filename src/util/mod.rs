//! Shared utilities for the frame loop.

/// Delta time, smoothed FPS and frame limiting.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
