//! Static scene content: cube geometry and layout, the diffuse image, and
//! the Phong lighting uniforms derived from options and the camera.

/// Unit cube mesh and the cube layout.
pub mod cube;
/// Phong lighting uniforms.
pub mod lighting;
/// Diffuse image loading and the built-in checkerboard.
pub mod texture;

pub use cube::{
    cube_instances, cube_model_matrix, cube_vertices, CubeInstance,
    CubeVertex, CUBE_POSITIONS, CUBE_VERTEX_COUNT,
};
pub use lighting::{
    DirectionalLightUniform, LightingUniform, PointLightUniform,
    SpotLightUniform,
};
pub use texture::{checkerboard, diffuse_image, load_image};
