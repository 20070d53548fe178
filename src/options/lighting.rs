use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum number of point lights the lighting uniform carries.
pub const MAX_POINT_LIGHTS: usize = 4;

/// Ambient / diffuse / specular color triple shared by all light types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct LightColor {
    /// Ambient contribution.
    pub ambient: [f32; 3],
    /// Diffuse contribution.
    pub diffuse: [f32; 3],
    /// Specular contribution.
    pub specular: [f32; 3],
}

impl Default for LightColor {
    fn default() -> Self {
        Self {
            ambient: [0.05, 0.05, 0.05],
            diffuse: [0.8, 0.8, 0.8],
            specular: [1.0, 1.0, 1.0],
        }
    }
}

/// Distance falloff `1 / (constant + linear * d + quadratic * d^2)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Attenuation {
    /// Constant term.
    pub constant: f32,
    /// Linear term.
    pub linear: f32,
    /// Quadratic term.
    pub quadratic: f32,
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

impl Attenuation {
    /// Light intensity multiplier at `distance`.
    #[must_use]
    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (self.constant
            + self.linear * distance
            + self.quadratic * distance * distance)
    }
}

/// Light shining uniformly from one direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct DirectionalLight {
    /// Direction the light travels (need not be normalized).
    pub direction: [f32; 3],
    /// Light colors.
    pub color: LightColor,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: [-0.2, -1.0, -0.3],
            color: LightColor {
                ambient: [0.05, 0.05, 0.05],
                diffuse: [0.4, 0.4, 0.4],
                specular: [0.5, 0.5, 0.5],
            },
        }
    }
}

/// Omnidirectional light with distance attenuation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct PointLight {
    /// World-space position.
    pub position: [f32; 3],
    /// Light colors.
    pub color: LightColor,
    /// Distance falloff.
    pub attenuation: Attenuation,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            color: LightColor::default(),
            attenuation: Attenuation::default(),
        }
    }
}

/// Cone light attached to the camera (a flashlight).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct SpotLight {
    /// Whether the flashlight is lit.
    pub enabled: bool,
    /// Inner cone half-angle in degrees (full intensity inside).
    pub cut_off: f32,
    /// Outer cone half-angle in degrees (zero intensity outside).
    pub outer_cut_off: f32,
    /// Light colors.
    pub color: LightColor,
    /// Distance falloff.
    pub attenuation: Attenuation,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            enabled: true,
            cut_off: 12.5,
            outer_cut_off: 15.0,
            color: LightColor {
                ambient: [0.0, 0.0, 0.0],
                diffuse: [1.0, 1.0, 1.0],
                specular: [1.0, 1.0, 1.0],
            },
            attenuation: Attenuation::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Phong lighting parameters: one directional light, a handful of point
/// lights and a camera-attached spotlight.
pub struct LightingOptions {
    /// Specular shininess exponent.
    #[schemars(title = "Shininess", range(min = 1.0, max = 256.0), extend("step" = 1.0))]
    pub shininess: f32,
    /// Sun-like directional light.
    #[schemars(skip)]
    pub directional: DirectionalLight,
    /// Point lights; entries beyond [`MAX_POINT_LIGHTS`] are ignored.
    #[schemars(skip)]
    pub point_lights: Vec<PointLight>,
    /// Camera flashlight.
    #[schemars(skip)]
    pub spot: SpotLight,
}

impl Default for LightingOptions {
    fn default() -> Self {
        let point = |position| PointLight {
            position,
            ..PointLight::default()
        };
        Self {
            shininess: 32.0,
            directional: DirectionalLight::default(),
            point_lights: vec![
                point([0.7, 0.2, 2.0]),
                point([2.3, -3.3, -4.0]),
                point([-4.0, 2.0, -12.0]),
                point([0.0, 0.0, -3.0]),
            ],
            spot: SpotLight::default(),
        }
    }
}
