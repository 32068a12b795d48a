//! The render-backend seam and its wgpu implementation.
//!
//! The frame loop never touches wgpu directly: it clears, publishes named
//! uniforms, picks one mesh, and presents through [`RenderBackend`]. The
//! windowed [`MeshRenderer`] is one implementation; tests and benches
//! record the calls instead.

/// wgpu implementation drawing the LOD mesh family.
pub mod mesh_renderer;
pub(crate) mod pipeline_util;
/// Named uniforms and the GPU uniform layout.
pub mod uniform;

use glam::{Mat4, Vec3};
pub use mesh_renderer::MeshRenderer;
pub use uniform::SceneUniform;

use crate::lod::LodLevel;

/// Drawing operations the frame loop issues, in call order.
pub trait RenderBackend {
    /// Start a frame by clearing color and depth.
    fn clear(&mut self, color: [f32; 4]);
    /// Publish a scalar uniform.
    fn set_float(&mut self, name: &str, value: f32);
    /// Publish a vector uniform.
    fn set_vec3(&mut self, name: &str, value: Vec3);
    /// Publish a matrix uniform.
    fn set_mat4(&mut self, name: &str, value: Mat4);
    /// Draw the mesh for `level` with the uniforms published so far.
    fn draw_mesh(&mut self, level: LodLevel);
    /// Finish the frame and show it.
    fn present(&mut self);
}

/// One recorded [`RenderBackend`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    /// `clear`
    Clear([f32; 4]),
    /// `set_float`
    Float(String, f32),
    /// `set_vec3`
    Vec3(String, Vec3),
    /// `set_mat4`
    Mat4(String, Mat4),
    /// `draw_mesh`
    Draw(LodLevel),
    /// `present`
    Present,
}

impl RenderCall {
    /// Uniform name for the `set_*` variants.
    #[must_use]
    pub fn uniform_name(&self) -> Option<&str> {
        match self {
            Self::Float(name, _) | Self::Vec3(name, _) | Self::Mat4(name, _) => {
                Some(name.as_str())
            }
            _ => None,
        }
    }
}

/// Backend that records every call without a GPU.
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    /// Calls in issue order.
    pub calls: Vec<RenderCall>,
}

impl RecordingBackend {
    /// Names of published uniforms, in order.
    #[must_use]
    pub fn uniform_names(&self) -> Vec<&str> {
        self.calls.iter().filter_map(RenderCall::uniform_name).collect()
    }

    /// Levels passed to `draw_mesh`, in order.
    #[must_use]
    pub fn draws(&self) -> Vec<LodLevel> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::Draw(level) => Some(*level),
                _ => None,
            })
            .collect()
    }

    /// Last value published for a scalar uniform.
    #[must_use]
    pub fn last_float(&self, name: &str) -> Option<f32> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Float(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    /// Last value published for a vector uniform.
    #[must_use]
    pub fn last_vec3(&self, name: &str) -> Option<Vec3> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Vec3(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    /// Last value published for a matrix uniform.
    #[must_use]
    pub fn last_mat4(&self, name: &str) -> Option<Mat4> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Mat4(n, v) if n == name => Some(*v),
            _ => None,
        })
    }
}

impl RenderBackend for RecordingBackend {
    fn clear(&mut self, color: [f32; 4]) {
        self.calls.push(RenderCall::Clear(color));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.calls.push(RenderCall::Float(name.to_owned(), value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.calls.push(RenderCall::Vec3(name.to_owned(), value));
    }

    fn set_mat4(&mut self, name: &str, value: Mat4) {
        self.calls.push(RenderCall::Mat4(name.to_owned(), value));
    }

    fn draw_mesh(&mut self, level: LodLevel) {
        self.calls.push(RenderCall::Draw(level));
    }

    fn present(&mut self) {
        self.calls.push(RenderCall::Present);
    }
}
