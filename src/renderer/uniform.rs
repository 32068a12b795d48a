//! Named shader uniforms and their GPU-side layout.
//!
//! The frame loop publishes values by name; [`SceneUniform`] maps each name
//! onto its field in the `Scene` struct declared in `raster/mesh.wgsl`.

use glam::{Mat4, Vec3};

/// `light.ambient`
pub const LIGHT_AMBIENT: &str = "light.ambient";
/// `light.diffuse`
pub const LIGHT_DIFFUSE: &str = "light.diffuse";
/// `light.specular`
pub const LIGHT_SPECULAR: &str = "light.specular";
/// `light.position`
pub const LIGHT_POSITION: &str = "light.position";
/// Camera position in world space.
pub const VIEW_POS: &str = "viewPos";
/// Surface alpha.
pub const ALPHA: &str = "alpha";
/// `material.ambient`
pub const MATERIAL_AMBIENT: &str = "material.ambient";
/// `material.diffuse`
pub const MATERIAL_DIFFUSE: &str = "material.diffuse";
/// `material.specular`
pub const MATERIAL_SPECULAR: &str = "material.specular";
/// `material.shininess`
pub const MATERIAL_SHININESS: &str = "material.shininess";
/// Perspective projection matrix.
pub const PROJECTION: &str = "projection";
/// World-to-view matrix.
pub const VIEW: &str = "view";
/// Object-to-world matrix.
pub const MODEL: &str = "model";

/// GPU uniform matching `struct Scene` in the mesh shader.
///
/// Every `vec3` member is followed by a pad float (or the next scalar) so
/// the Rust layout equals WGSL uniform layout: 320 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    /// Perspective projection.
    pub projection: [[f32; 4]; 4],
    /// World-to-view.
    pub view: [[f32; 4]; 4],
    /// Object-to-world.
    pub model: [[f32; 4]; 4],
    /// Camera position.
    pub view_pos: [f32; 3],
    /// Surface alpha.
    pub alpha: f32,
    /// Light position.
    pub light_position: [f32; 3],
    _pad0: f32,
    /// Light ambient intensity.
    pub light_ambient: [f32; 3],
    _pad1: f32,
    /// Light diffuse intensity.
    pub light_diffuse: [f32; 3],
    _pad2: f32,
    /// Light specular intensity.
    pub light_specular: [f32; 3],
    _pad3: f32,
    /// Material ambient reflectance.
    pub material_ambient: [f32; 3],
    _pad4: f32,
    /// Material diffuse reflectance.
    pub material_diffuse: [f32; 3],
    _pad5: f32,
    /// Material specular reflectance.
    pub material_specular: [f32; 3],
    /// Specular exponent.
    pub material_shininess: f32,
}

impl Default for SceneUniform {
    fn default() -> Self {
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        Self {
            projection: identity,
            view: identity,
            model: identity,
            alpha: 1.0,
            ..bytemuck::Zeroable::zeroed()
        }
    }
}

impl SceneUniform {
    /// Store a scalar uniform. Returns `false` for unknown names.
    pub fn set_float(&mut self, name: &str, value: f32) -> bool {
        match name {
            ALPHA => self.alpha = value,
            MATERIAL_SHININESS => self.material_shininess = value,
            _ => return false,
        }
        true
    }

    /// Store a vector uniform. Returns `false` for unknown names.
    pub fn set_vec3(&mut self, name: &str, value: Vec3) -> bool {
        let slot = match name {
            LIGHT_AMBIENT => &mut self.light_ambient,
            LIGHT_DIFFUSE => &mut self.light_diffuse,
            LIGHT_SPECULAR => &mut self.light_specular,
            LIGHT_POSITION => &mut self.light_position,
            VIEW_POS => &mut self.view_pos,
            MATERIAL_AMBIENT => &mut self.material_ambient,
            MATERIAL_DIFFUSE => &mut self.material_diffuse,
            MATERIAL_SPECULAR => &mut self.material_specular,
            _ => return false,
        };
        *slot = value.to_array();
        true
    }

    /// Store a matrix uniform. Returns `false` for unknown names.
    pub fn set_mat4(&mut self, name: &str, value: Mat4) -> bool {
        let slot = match name {
            PROJECTION => &mut self.projection,
            VIEW => &mut self.view,
            MODEL => &mut self.model,
            _ => return false,
        };
        *slot = value.to_cols_array_2d();
        true
    }
}

#[cfg(test)]
mod tests {
    use std::mem::offset_of;

    use super::*;

    #[test]
    fn layout_matches_wgsl_scene_struct() {
        assert_eq!(size_of::<SceneUniform>(), 320);
        assert_eq!(offset_of!(SceneUniform, view_pos), 192);
        assert_eq!(offset_of!(SceneUniform, alpha), 204);
        assert_eq!(offset_of!(SceneUniform, light_position), 208);
        assert_eq!(offset_of!(SceneUniform, light_specular), 256);
        assert_eq!(offset_of!(SceneUniform, material_ambient), 272);
        assert_eq!(offset_of!(SceneUniform, material_shininess), 316);
    }

    #[test]
    fn names_route_to_fields() {
        let mut uniform = SceneUniform::default();
        assert!(uniform.set_float(ALPHA, 0.3));
        assert!(uniform.set_vec3(VIEW_POS, Vec3::new(0.0, 0.0, 3.0)));
        assert!(uniform.set_vec3(MATERIAL_SPECULAR, Vec3::splat(0.5)));
        assert!(uniform.set_mat4(MODEL, Mat4::from_scale(Vec3::splat(2.0))));

        assert_eq!(uniform.alpha, 0.3);
        assert_eq!(uniform.view_pos, [0.0, 0.0, 3.0]);
        assert_eq!(uniform.material_specular, [0.5; 3]);
        assert_eq!(uniform.model[0][0], 2.0);
    }

    #[test]
    fn unknown_or_mistyped_names_are_rejected() {
        let mut uniform = SceneUniform::default();
        assert!(!uniform.set_float("gamma", 2.2));
        assert!(!uniform.set_float(VIEW_POS, 1.0));
        assert!(!uniform.set_vec3(ALPHA, Vec3::ONE));
        assert!(!uniform.set_mat4(LIGHT_POSITION, Mat4::IDENTITY));
        assert_eq!(uniform, SceneUniform::default());
    }
}
