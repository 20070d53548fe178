//! Camera system for free-fly scene navigation.
//!
//! Provides an Euler-angle camera with mouse-look, keyboard movement and
//! scroll zoom, plus the GPU uniform it feeds.

/// Core camera struct, movement directions and GPU uniform type.
pub mod core;

pub use self::core::{Camera, CameraMovement, CameraUniform};
