//! First-person camera for free-flying around the scene.
//!
//! Provides yaw/pitch orientation, frame-rate independent movement, zoom,
//! and view/projection matrix construction.

/// Yaw/pitch fly camera and its movement directions.
pub mod controller;

pub use controller::{CameraController, CameraMovement};
