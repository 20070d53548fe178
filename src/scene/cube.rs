//! Unit cube mesh and the ten-cube scene layout.

use glam::{Mat4, Vec3};

/// 32-byte cube vertex: position, outward normal, texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Outward unit normal.
    pub normal: [f32; 3],
    /// Texture coordinate, origin top-left.
    pub uv: [f32; 2],
}

/// Per-instance model matrix.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeInstance {
    /// Column-major model matrix.
    pub model: [[f32; 4]; 4],
}

/// Vertices per cube (6 faces, 2 triangles each, no index buffer).
pub const CUBE_VERTEX_COUNT: u32 = 36;

/// World-space positions of the ten cubes.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Rotation step between consecutive cubes, in degrees.
const ROTATION_STEP: f32 = 20.0;

/// (normal, u axis, v axis) per face, with `u x v == normal` so the
/// triangles wind counter-clockwise when seen from outside.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

/// The 36 vertices of a unit cube centred on the origin.
#[must_use]
pub fn cube_vertices() -> Vec<CubeVertex> {
    // two triangles per face in (u, v) corner coordinates
    const CORNERS: [(f32, f32); 6] = [
        (-0.5, -0.5),
        (0.5, -0.5),
        (0.5, 0.5),
        (0.5, 0.5),
        (-0.5, 0.5),
        (-0.5, -0.5),
    ];

    FACES
        .iter()
        .flat_map(|&(normal, u, v)| {
            CORNERS.iter().map(move |&(a, b)| CubeVertex {
                position: (normal * 0.5 + u * a + v * b).to_array(),
                normal: normal.to_array(),
                uv: [a + 0.5, 0.5 - b],
            })
        })
        .collect()
}

/// Model matrix for cube `index`: rotated `20° * index` about
/// (1, 0.3, 0.5), then moved to its position.
///
/// Indices past the layout wrap around.
#[must_use]
pub fn cube_model_matrix(index: usize) -> Mat4 {
    let position = CUBE_POSITIONS[index % CUBE_POSITIONS.len()];
    let axis = Vec3::new(1.0, 0.3, 0.5).normalize();
    let angle = (ROTATION_STEP * index as f32).to_radians();
    Mat4::from_translation(position) * Mat4::from_axis_angle(axis, angle)
}

/// Instance data for every cube in [`CUBE_POSITIONS`].
#[must_use]
pub fn cube_instances() -> Vec<CubeInstance> {
    (0..CUBE_POSITIONS.len())
        .map(|i| CubeInstance {
            model: cube_model_matrix(i).to_cols_array_2d(),
        })
        .collect()
}
