use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Surface material of the displayed object.
pub struct MaterialOptions {
    /// Ambient reflectance color.
    pub ambient: [f32; 3],
    /// Diffuse reflectance color.
    pub diffuse: [f32; 3],
    /// Specular reflectance color.
    pub specular: [f32; 3],
    /// Specular exponent.
    pub shininess: f32,
    /// Alpha while the transparency toggle is off.
    pub opaque_alpha: f32,
    /// Alpha while the transparency toggle is on.
    pub translucent_alpha: f32,
}

impl Default for MaterialOptions {
    fn default() -> Self {
        Self {
            ambient: [1.0, 0.5, 0.31],
            diffuse: [1.0, 0.5, 0.31],
            specular: [0.5, 0.5, 0.5],
            shininess: 32.0,
            opaque_alpha: 1.0,
            translucent_alpha: 0.3,
        }
    }
}
