use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Initial camera placement, control tuning, and projection parameters.
pub struct CameraOptions {
    /// Starting eye position in world space.
    pub position: [f32; 3],
    /// Starting yaw in degrees (-90 looks down -Z).
    pub yaw: f32,
    /// Starting pitch in degrees.
    pub pitch: f32,
    /// Maximum absolute pitch in degrees.
    pub pitch_limit: f32,
    /// Starting vertical field of view in degrees.
    pub zoom: f32,
    /// Narrowest field of view reachable by scrolling.
    pub zoom_min: f32,
    /// Widest field of view reachable by scrolling.
    pub zoom_max: f32,
    /// Movement speed in units per second.
    pub speed: f32,
    /// Mouse look sensitivity in degrees per pixel.
    pub sensitivity: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            yaw: -90.0,
            pitch: 0.0,
            pitch_limit: 89.0,
            zoom: 45.0,
            zoom_min: 1.0,
            zoom_max: 45.0,
            speed: 2.5,
            sensitivity: 0.1,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
