use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// The single point light. Intensities are per channel in [0, 1].
pub struct LightingOptions {
    /// World-space light position.
    pub position: [f32; 3],
    /// Ambient intensity.
    pub ambient: [f32; 3],
    /// Diffuse intensity.
    pub diffuse: [f32; 3],
    /// Specular intensity.
    pub specular: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            position: [1.2, 1.0, 2.0],
            ambient: [0.2, 0.2, 0.2],
            diffuse: [0.7, 0.7, 0.7],
            specular: [1.0, 1.0, 1.0],
        }
    }
}
