//! Phong lighting uniforms.
//!
//! NOTE: every struct here must match the WGSL layout in
//! `assets/shaders/lit_cubes.wgsl` exactly (vec3 + scalar packing).

use glam::Vec3;

use crate::camera::Camera;
use crate::options::{LightColor, LightingOptions, MAX_POINT_LIGHTS};

/// Directional light (64 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLightUniform {
    /// Normalized direction the light travels.
    pub direction: [f32; 3],
    pub(crate) _pad0: f32,
    /// Ambient color.
    pub ambient: [f32; 3],
    pub(crate) _pad1: f32,
    /// Diffuse color.
    pub diffuse: [f32; 3],
    pub(crate) _pad2: f32,
    /// Specular color.
    pub specular: [f32; 3],
    pub(crate) _pad3: f32,
}

/// Point light (64 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    /// World-space position.
    pub position: [f32; 3],
    /// Constant attenuation term.
    pub constant: f32,
    /// Ambient color.
    pub ambient: [f32; 3],
    /// Linear attenuation term.
    pub linear: f32,
    /// Diffuse color.
    pub diffuse: [f32; 3],
    /// Quadratic attenuation term.
    pub quadratic: f32,
    /// Specular color.
    pub specular: [f32; 3],
    pub(crate) _pad: f32,
}

/// Spotlight (80 bytes). Cut-offs are stored as cosines.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLightUniform {
    /// World-space position.
    pub position: [f32; 3],
    /// Cosine of the inner cone half-angle.
    pub cut_off: f32,
    /// Normalized direction the cone points.
    pub direction: [f32; 3],
    /// Cosine of the outer cone half-angle.
    pub outer_cut_off: f32,
    /// Ambient color.
    pub ambient: [f32; 3],
    /// Constant attenuation term.
    pub constant: f32,
    /// Diffuse color.
    pub diffuse: [f32; 3],
    /// Linear attenuation term.
    pub linear: f32,
    /// Specular color.
    pub specular: [f32; 3],
    /// Quadratic attenuation term.
    pub quadratic: f32,
}

/// Everything the fragment shader needs for Phong shading (432 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Sun-like light.
    pub directional: DirectionalLightUniform,
    /// Point lights; only the first `point_count` are lit.
    pub points: [PointLightUniform; MAX_POINT_LIGHTS],
    /// Camera flashlight.
    pub spot: SpotLightUniform,
    /// Viewer position for specular terms.
    pub view_position: [f32; 3],
    /// Specular shininess exponent.
    pub shininess: f32,
    /// Number of active entries in `points`.
    pub point_count: u32,
    /// 1 when the flashlight is lit.
    pub spot_enabled: u32,
    pub(crate) _pad: [u32; 2],
}

impl Default for LightingUniform {
    fn default() -> Self {
        Self::from_options(&LightingOptions::default(), &Camera::default())
    }
}

impl LightingUniform {
    /// Build the uniform from options, attaching the spotlight and the
    /// specular viewpoint to `camera`.
    #[must_use]
    pub fn from_options(options: &LightingOptions, camera: &Camera) -> Self {
        let dir = &options.directional;
        let directional = DirectionalLightUniform {
            direction: normalize_or(dir.direction, Vec3::NEG_Y),
            ambient: dir.color.ambient,
            diffuse: dir.color.diffuse,
            specular: dir.color.specular,
            ..Default::default()
        };

        let mut points = [PointLightUniform::default(); MAX_POINT_LIGHTS];
        if options.point_lights.len() > MAX_POINT_LIGHTS {
            log::warn!(
                "{} point lights configured, only the first {MAX_POINT_LIGHTS} are used",
                options.point_lights.len()
            );
        }
        for (slot, light) in points.iter_mut().zip(&options.point_lights) {
            let LightColor {
                ambient,
                diffuse,
                specular,
            } = light.color;
            *slot = PointLightUniform {
                position: light.position,
                constant: light.attenuation.constant,
                ambient,
                linear: light.attenuation.linear,
                diffuse,
                quadratic: light.attenuation.quadratic,
                specular,
                _pad: 0.0,
            };
        }

        let mut uniform = Self {
            directional,
            points,
            spot: SpotLightUniform::default(),
            view_position: [0.0; 3],
            shininess: options.shininess,
            point_count: options.point_lights.len().min(MAX_POINT_LIGHTS)
                as u32,
            spot_enabled: u32::from(options.spot.enabled),
            _pad: [0; 2],
        };
        uniform.set_spot_options(options);
        uniform.follow_camera(camera);
        uniform
    }

    fn set_spot_options(&mut self, options: &LightingOptions) {
        let spot = &options.spot;
        self.spot.cut_off = spot.cut_off.to_radians().cos();
        self.spot.outer_cut_off = spot.outer_cut_off.to_radians().cos();
        self.spot.ambient = spot.color.ambient;
        self.spot.diffuse = spot.color.diffuse;
        self.spot.specular = spot.color.specular;
        self.spot.constant = spot.attenuation.constant;
        self.spot.linear = spot.attenuation.linear;
        self.spot.quadratic = spot.attenuation.quadratic;
    }

    /// Move the flashlight and specular viewpoint to the camera.
    /// Call each frame after camera updates.
    pub fn follow_camera(&mut self, camera: &Camera) {
        let position = camera.position().to_array();
        self.view_position = position;
        self.spot.position = position;
        self.spot.direction = camera.front().to_array();
    }
}

fn normalize_or(v: [f32; 3], fallback: Vec3) -> [f32; 3] {
    Vec3::from_array(v).try_normalize().unwrap_or(fallback).to_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraMovement;
    use crate::options::PointLight;

    #[test]
    fn layout_matches_wgsl() {
        assert_eq!(size_of::<DirectionalLightUniform>(), 64);
        assert_eq!(size_of::<PointLightUniform>(), 64);
        assert_eq!(size_of::<SpotLightUniform>(), 80);
        assert_eq!(size_of::<LightingUniform>(), 432);
    }

    #[test]
    fn spotlight_follows_camera() {
        let mut camera = Camera::default();
        let mut uniform =
            LightingUniform::from_options(&LightingOptions::default(), &camera);
        assert_eq!(uniform.spot.direction, camera.front().to_array());

        camera.process_keyboard(CameraMovement::Forward, 1.0);
        camera.process_mouse_movement(100.0, 50.0, true);
        uniform.follow_camera(&camera);
        assert_eq!(uniform.spot.position, camera.position().to_array());
        assert_eq!(uniform.view_position, camera.position().to_array());
        assert_eq!(uniform.spot.direction, camera.front().to_array());
    }

    #[test]
    fn cut_offs_stored_as_cosines() {
        let uniform = LightingUniform::default();
        assert!((uniform.spot.cut_off - 12.5_f32.to_radians().cos()).abs() < 1e-6);
        // wider outer cone has the smaller cosine
        assert!(uniform.spot.outer_cut_off < uniform.spot.cut_off);
        assert_eq!(uniform.spot_enabled, 1);
    }

    #[test]
    fn directional_light_is_normalized() {
        let uniform = LightingUniform::default();
        let dir = Vec3::from_array(uniform.directional.direction);
        assert!((dir.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn excess_point_lights_are_dropped() {
        let mut options = LightingOptions::default();
        options.point_lights = (0..6)
            .map(|i| PointLight {
                position: [i as f32, 0.0, 0.0],
                ..PointLight::default()
            })
            .collect();
        let uniform = LightingUniform::from_options(&options, &Camera::default());
        assert_eq!(uniform.point_count, MAX_POINT_LIGHTS as u32);
        assert_eq!(uniform.points[3].position, [3.0, 0.0, 0.0]);
    }

    #[test]
    fn unused_point_slots_stay_zeroed() {
        let mut options = LightingOptions::default();
        options.point_lights.truncate(1);
        let uniform = LightingUniform::from_options(&options, &Camera::default());
        assert_eq!(uniform.point_count, 1);
        assert_eq!(uniform.points[1], PointLightUniform::default());
    }
}
