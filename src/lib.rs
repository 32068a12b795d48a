// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! First-person 3D viewer with distance-driven level of detail, built on
//! wgpu.
//!
//! A single object sits at the world origin. The camera flies around it
//! with WASD and the mouse, and every frame the mesh drawn is chosen from a
//! three-level LOD family by the camera's distance to the origin. A toggle
//! key flips the surface between opaque and translucent.
//!
//! # Key entry points
//!
//! - [`engine::FrameLoop`] - owns all per-frame state and runs one frame
//! - [`lod::select_lod`] - the distance-to-level rule
//! - [`renderer::RenderBackend`] - the drawing seam (wgpu or recording)
//! - [`options::Options`] - TOML configuration (window, camera, lighting,
//!   material, LOD, keybindings)
//!
//! # Architecture
//!
//! Platform callbacks only queue [`InputEvent`]s. Once per redraw the frame
//! loop samples the clock, drains the queue into the camera and the
//! transparency toggle, then publishes uniforms and draws exactly one mesh
//! through the backend. Light and material are immutable after startup and
//! shared behind an `Arc`.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod lod;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{FrameLoop, FrameOutcome, FrameReport};
pub use error::ViewerError;
pub use input::InputEvent;
pub use lod::{select_lod, LodLevel};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
