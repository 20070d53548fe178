// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Free-fly (FPS-style) camera and a small wgpu scene to fly through.
//!
//! The [`camera::Camera`] turns discrete inputs (direction keys with a frame
//! delta, cursor offsets, scroll offsets) into an orthonormal basis, a view
//! matrix and a zoom/field-of-view value.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - position, Euler orientation and input handlers
//! - [`input::InputProcessor`] - turns raw window events into per-frame
//!   camera updates
//! - [`options::Options`] - TOML-backed configuration (window, camera,
//!   lighting, key bindings)
//! - [`scene`] - the ten-cube layout and Phong lighting uniforms
//! - `Viewer` (feature `viewer`) - a winit window that renders the scene
//!
//! # Example
//!
//! ```
//! use vista::camera::{Camera, CameraMovement};
//! use glam::Vec3;
//!
//! let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
//! camera.process_keyboard(CameraMovement::Forward, 0.1);
//! camera.process_mouse_movement(10.0, -5.0, true);
//! camera.process_mouse_scroll(2.0);
//!
//! let view = camera.view_matrix();
//! let projection = camera.projection_matrix(800.0 / 600.0, 0.1, 100.0);
//! assert!((projection * view).is_finite());
//! assert_eq!(camera.zoom(), 43.0);
//! ```

pub mod camera;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{Camera, CameraMovement, CameraUniform};
pub use error::VistaError;
pub use input::{InputEvent, InputProcessor, KeyAction};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
