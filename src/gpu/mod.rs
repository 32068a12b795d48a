//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, the depth attachment,
//! pipeline helpers, and shader composition.

/// Shared wgpu boilerplate helpers for the mesh pipeline.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
/// Depth attachment for the main render pass.
pub mod texture;
