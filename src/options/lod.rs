use serde::{Deserialize, Serialize};

use crate::lod::LodThresholds;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Level-of-detail switch distances and mesh resolution per level.
pub struct LodOptions {
    /// Camera distance at which the medium mesh replaces the high one.
    pub medium_distance: f32,
    /// Camera distance at which the low mesh replaces the medium one.
    pub low_distance: f32,
    /// Icosphere subdivision level for the high, medium and low meshes.
    pub subdivisions: [u32; 3],
    /// Radius of the generated meshes.
    pub radius: f32,
}

impl Default for LodOptions {
    fn default() -> Self {
        Self {
            medium_distance: 1.5,
            low_distance: 3.0,
            subdivisions: [4, 2, 0],
            radius: 0.5,
        }
    }
}

impl LodOptions {
    /// Switch distances as a selector, if they are valid.
    #[must_use]
    pub fn thresholds(&self) -> Option<LodThresholds> {
        LodThresholds::new(self.medium_distance, self.low_distance)
    }
}
