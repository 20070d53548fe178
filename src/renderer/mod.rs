//! Render passes.
//!
//! Currently a single forward pass that draws the lit cube scene into the
//! surface texture with a depth attachment.

/// Instanced Phong-lit cube pass.
pub mod cube_pass;

pub use cube_pass::{ClipPlanes, CubeRenderer};
