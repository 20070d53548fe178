//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, the depth attachment, the
//! diffuse texture upload, and bind group layout helpers.

/// Uniform, texture and sampler layouts and bind groups.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth attachment and diffuse textures.
pub mod texture;

pub use render_context::{RenderContext, RenderContextError};
