use serde::{Deserialize, Serialize};

use crate::camera::CameraMovement;

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings]
/// KeyW = "move_forward"
/// KeyT = "toggle_transparency"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Fly along the view direction while held.
    MoveForward,
    /// Fly against the view direction while held.
    MoveBackward,
    /// Strafe left while held.
    MoveLeft,
    /// Strafe right while held.
    MoveRight,
    /// Flip the material between opaque and translucent on release.
    ToggleTransparency,
    /// Close the viewer.
    Quit,
}

impl KeyAction {
    /// Camera translation driven by this action, if any.
    #[must_use]
    pub fn movement(self) -> Option<CameraMovement> {
        match self {
            Self::MoveForward => Some(CameraMovement::Forward),
            Self::MoveBackward => Some(CameraMovement::Backward),
            Self::MoveLeft => Some(CameraMovement::Left),
            Self::MoveRight => Some(CameraMovement::Right),
            Self::ToggleTransparency | Self::Quit => None,
        }
    }
}
