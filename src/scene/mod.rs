//! Static scene description: the one light, the one material, and the LOD
//! mesh family.
//!
//! Light and material never change after startup. The only runtime-mutable
//! surface property, alpha, is owned by the
//! [`TransparencyToggle`](crate::input::TransparencyToggle).

/// CPU-side meshes and the procedural LOD family.
pub mod mesh;

use glam::Vec3;

pub use mesh::{LodMeshSet, Mesh, Vertex};

use crate::options::{LightingOptions, MaterialOptions, Options};

/// A point light with Phong intensities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// World-space position.
    pub position: Vec3,
    /// Ambient intensity, components in [0, 1].
    pub ambient: Vec3,
    /// Diffuse intensity, components in [0, 1].
    pub diffuse: Vec3,
    /// Specular intensity, components in [0, 1].
    pub specular: Vec3,
}

impl Light {
    /// Build from options, clamping intensities into [0, 1].
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        let intensity = |v: [f32; 3]| Vec3::from_array(v).clamp(Vec3::ZERO, Vec3::ONE);
        Self {
            position: Vec3::from_array(options.position),
            ambient: intensity(options.ambient),
            diffuse: intensity(options.diffuse),
            specular: intensity(options.specular),
        }
    }
}

/// Phong surface colors plus the two alpha endpoints of the toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient reflectance.
    pub ambient: Vec3,
    /// Diffuse reflectance.
    pub diffuse: Vec3,
    /// Specular reflectance.
    pub specular: Vec3,
    /// Specular exponent.
    pub shininess: f32,
    /// Alpha when opaque.
    pub opaque_alpha: f32,
    /// Alpha when translucent.
    pub translucent_alpha: f32,
}

impl Material {
    /// Build from options. Values are taken as given; alpha ranges are
    /// enforced by [`Options::validate`](crate::options::Options::validate).
    #[must_use]
    pub fn from_options(options: &MaterialOptions) -> Self {
        Self {
            ambient: Vec3::from_array(options.ambient),
            diffuse: Vec3::from_array(options.diffuse),
            specular: Vec3::from_array(options.specular),
            shininess: options.shininess,
            opaque_alpha: options.opaque_alpha,
            translucent_alpha: options.translucent_alpha,
        }
    }
}

/// Light and material shared read-only with the frame loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// The scene light.
    pub light: Light,
    /// The object's material.
    pub material: Material,
}

impl SceneConfig {
    /// Build from the lighting and material option sections.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            light: Light::from_options(&options.lighting),
            material: Material::from_options(&options.material),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}
