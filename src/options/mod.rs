//! Centralized viewer options with TOML file support.
//!
//! All tweakable settings (window, camera, lighting, material, LOD,
//! keybindings) are consolidated here. Every section uses
//! `#[serde(default)]`, so a file that only overrides `[lighting]` is valid.

mod camera;
mod keybindings;
mod lighting;
mod lod;
mod material;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
pub use lod::LodOptions;
pub use material::MaterialOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::ViewerError;

/// Icosphere subdivision cap; level 7 is already 327,680 triangles.
const MAX_SUBDIVISIONS: u32 = 7;

/// Exclusive upper bound on `camera.pitch_limit`, in degrees.
const MAX_PITCH_LIMIT: f32 = 90.0;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window creation and presentation.
    pub window: WindowOptions,
    /// Camera placement and control tuning.
    pub camera: CameraOptions,
    /// Point light parameters.
    pub lighting: LightingOptions,
    /// Surface material and transparency endpoints.
    pub material: MaterialOptions,
    /// LOD switch distances and mesh resolution.
    pub lod: LodOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError`] if the file cannot be read, does not parse,
    /// or fails [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(ViewerError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Parse and validate options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::OptionsParse`] on malformed TOML and
    /// [`ViewerError::InvalidOptions`] when validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ViewerError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Serialize to pretty-printed TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::OptionsParse`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, ViewerError> {
        toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError`] on serialization or I/O failure.
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewerError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewerError::Io)
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidOptions`] describing the first
    /// violated constraint.
    pub fn validate(&self) -> Result<(), ViewerError> {
        let invalid = |msg: String| Err(ViewerError::InvalidOptions(msg));

        if self.lod.thresholds().is_none() {
            return invalid(format!(
                "lod distances must be finite, non-negative and ascending \
                 (medium {}, low {})",
                self.lod.medium_distance, self.lod.low_distance
            ));
        }
        let lod = &self.lod;
        if lod.subdivisions.iter().any(|&s| s > MAX_SUBDIVISIONS) {
            return invalid(format!(
                "lod subdivisions {:?} exceed {MAX_SUBDIVISIONS}",
                lod.subdivisions
            ));
        }
        if !(lod.radius.is_finite() && lod.radius > 0.0) {
            return invalid(format!("lod radius {} must be positive", lod.radius));
        }
        let camera = &self.camera;
        if !(camera.pitch_limit > 0.0 && camera.pitch_limit < MAX_PITCH_LIMIT) {
            return invalid(format!(
                "pitch_limit {} must lie strictly between 0 and {MAX_PITCH_LIMIT}",
                camera.pitch_limit
            ));
        }
        if !camera.pitch.is_finite() {
            return invalid(format!("pitch {} must be finite", camera.pitch));
        }
        if !(camera.zoom_min > 0.0
            && camera.zoom_min <= camera.zoom_max
            && camera.zoom_max.is_finite())
        {
            return invalid(format!(
                "zoom range [{}, {}] is empty or non-positive",
                camera.zoom_min, camera.zoom_max
            ));
        }
        if !(camera.znear > 0.0 && camera.znear < camera.zfar) {
            return invalid(format!(
                "clip planes near {} / far {} are out of order",
                camera.znear, camera.zfar
            ));
        }
        let material = &self.material;
        for (name, alpha) in [
            ("opaque_alpha", material.opaque_alpha),
            ("translucent_alpha", material.translucent_alpha),
        ] {
            if !(0.0..=1.0).contains(&alpha) {
                return invalid(format!("{name} {alpha} is outside [0, 1]"));
            }
        }
        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window size must be non-zero".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = opts.to_toml().unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[lighting]
ambient = [0.1, 0.1, 0.1]
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.lighting.ambient, [0.1, 0.1, 0.1]);
        // Everything else should be default
        assert_eq!(opts.lighting.diffuse, [0.7, 0.7, 0.7]);
        assert_eq!(opts.camera.position, [0.0, 0.0, 3.0]);
        assert_eq!(opts.lod.medium_distance, 1.5);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyT"),
            Some(KeyAction::ToggleTransparency)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn keybindings_override_from_toml() {
        let toml_str = r#"
[keybindings]
ArrowUp = "move_forward"
Space = "toggle_transparency"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(KeyAction::ToggleTransparency)
        );
        // A provided table replaces the defaults wholesale.
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn descending_lod_distances_are_rejected() {
        let toml_str = r"
[lod]
medium_distance = 4.0
low_distance = 2.0
";
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, ViewerError::InvalidOptions(_)));
    }

    #[test]
    fn out_of_range_alpha_is_rejected() {
        let mut opts = Options::default();
        opts.material.translucent_alpha = 1.5;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn oversized_mesh_resolution_is_rejected() {
        let mut opts = Options::default();
        opts.lod.subdivisions = [9, 2, 0];
        assert!(matches!(
            opts.validate(),
            Err(ViewerError::InvalidOptions(_))
        ));
        opts.lod.subdivisions = [4, 2, 0];
        opts.lod.radius = 0.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn nan_pitch_limit_is_rejected() {
        let err = Options::from_toml("[camera]\npitch_limit = nan\n").unwrap_err();
        assert!(matches!(err, ViewerError::InvalidOptions(_)));
    }

    #[test]
    fn pitch_limit_must_stay_below_vertical() {
        let mut opts = Options::default();
        for limit in [170.0, 90.0, 0.0, -10.0, f32::INFINITY] {
            opts.camera.pitch_limit = limit;
            assert!(
                matches!(opts.validate(), Err(ViewerError::InvalidOptions(_))),
                "pitch_limit {limit} accepted"
            );
        }
        opts.camera.pitch_limit = 89.9;
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn nan_zoom_bound_is_rejected() {
        let mut opts = Options::default();
        opts.camera.zoom_min = f32::NAN;
        assert!(opts.validate().is_err());
        opts.camera.zoom_min = 1.0;
        opts.camera.zoom_max = f32::NAN;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[camera\nspeed = 1").unwrap_err();
        assert!(matches!(err, ViewerError::OptionsParse(_)));
    }
}
