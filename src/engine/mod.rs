//! The per-frame orchestrator.
//!
//! [`FrameLoop`] owns every piece of mutable viewer state (camera, toggle,
//! timing, input tracking) and advances it exactly once per frame:
//!
//! 1. sample the clock and derive `dt`
//! 2. drain the queued input events and apply them
//! 3. stop if a quit was requested
//! 4. clear, publish uniforms, pick a LOD from the camera distance, draw,
//!    present
//!
//! Rendering goes through [`RenderBackend`], so the whole loop runs without
//! a window or GPU under test.

mod clock;

use std::sync::Arc;

pub use clock::{Clock, ManualClock, SystemClock};
use glam::{Mat4, Vec2};

use crate::camera::CameraController;
use crate::error::ViewerError;
use crate::input::{FrameInput, InputEvent, InputProcessor, TransparencyToggle};
use crate::lod::{LodLevel, LodThresholds};
use crate::options::Options;
use crate::renderer::uniform::{
    ALPHA, LIGHT_AMBIENT, LIGHT_DIFFUSE, LIGHT_POSITION, LIGHT_SPECULAR,
    MATERIAL_AMBIENT, MATERIAL_DIFFUSE, MATERIAL_SHININESS, MATERIAL_SPECULAR,
    MODEL, PROJECTION, VIEW, VIEW_POS,
};
use crate::renderer::RenderBackend;
use crate::scene::SceneConfig;
use crate::util::frame_timing::FrameTiming;

/// Seconds between FPS log lines.
const FPS_LOG_INTERVAL: f64 = 1.0;

/// What one rendered frame did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Seconds since the previous frame, never negative.
    pub dt: f32,
    /// Camera distance from the origin used for LOD selection.
    pub distance: f32,
    /// Level that was drawn.
    pub lod: LodLevel,
    /// Alpha that was published.
    pub alpha: f32,
    /// Whether the level differs from the previous frame.
    pub lod_changed: bool,
    /// Whether the published alpha differs from the previous frame.
    pub alpha_flipped: bool,
}

/// Result of [`FrameLoop::frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// A frame was drawn and presented.
    Presented(FrameReport),
    /// Quit was requested; nothing was drawn and the loop should stop.
    Exit,
}

/// Owns the viewer state and runs one frame at a time.
pub struct FrameLoop {
    camera: CameraController,
    input: InputProcessor,
    toggle: TransparencyToggle,
    timing: FrameTiming,
    scene: Arc<SceneConfig>,
    thresholds: LodThresholds,
    /// Fixed at startup from the configured window size.
    aspect: f32,
    znear: f32,
    zfar: f32,
    clear_color: [f32; 4],
    last_lod: Option<LodLevel>,
    last_fps_log: f64,
}

impl FrameLoop {
    /// Build the loop from `options`, with the first frame measured from
    /// `start`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidOptions`] if `options` fail
    /// [`Options::validate`].
    pub fn new(options: &Options, start: f64) -> Result<Self, ViewerError> {
        options.validate()?;
        let thresholds = options.lod.thresholds().ok_or_else(|| {
            ViewerError::InvalidOptions(format!(
                "LOD distances must satisfy 0 <= medium <= low, got {} and {}",
                options.lod.medium_distance, options.lod.low_distance
            ))
        })?;
        let scene = Arc::new(SceneConfig::from_options(options));
        let toggle = TransparencyToggle::new(
            scene.material.opaque_alpha,
            scene.material.translucent_alpha,
        );

        Ok(Self {
            camera: CameraController::from_options(&options.camera),
            input: InputProcessor::new(options.keybindings.clone()),
            toggle,
            timing: FrameTiming::new(start),
            scene,
            thresholds,
            aspect: options.window.aspect_ratio(),
            znear: options.camera.znear,
            zfar: options.camera.zfar,
            clear_color: options.window.clear_color,
            last_lod: None,
            last_fps_log: start,
        })
    }

    /// Replace the shared light and material.
    #[must_use]
    pub fn with_scene(mut self, scene: Arc<SceneConfig>) -> Self {
        self.toggle = TransparencyToggle::new(
            scene.material.opaque_alpha,
            scene.material.translucent_alpha,
        );
        self.scene = scene;
        self
    }

    /// The camera.
    #[must_use]
    pub const fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Mutable camera access, e.g. to place it programmatically.
    pub fn camera_mut(&mut self) -> &mut CameraController {
        &mut self.camera
    }

    /// The transparency toggle.
    #[must_use]
    pub const fn toggle(&self) -> &TransparencyToggle {
        &self.toggle
    }

    /// Frame timing and FPS.
    #[must_use]
    pub const fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// Shared light and material.
    #[must_use]
    pub const fn scene(&self) -> &Arc<SceneConfig> {
        &self.scene
    }

    /// Level drawn by the most recent frame.
    #[must_use]
    pub const fn last_lod(&self) -> Option<LodLevel> {
        self.last_lod
    }

    /// Run one frame: time, input, state update, then draw through
    /// `backend`. Returns [`FrameOutcome::Exit`] without touching the
    /// backend when quit was requested.
    pub fn frame<B: RenderBackend + ?Sized>(
        &mut self,
        clock: &impl Clock,
        events: impl IntoIterator<Item = InputEvent>,
        backend: &mut B,
    ) -> FrameOutcome {
        let now = clock.now();
        let dt = self.timing.advance(now);
        self.log_fps(now);

        let input = self.input.drain(events);
        let alpha_flipped = self.apply_input(&input, dt);
        if input.quit {
            log::info!("quit requested");
            return FrameOutcome::Exit;
        }

        backend.clear(self.clear_color);
        self.publish_uniforms(backend);

        let distance = self.camera.distance_from_origin();
        let lod = self.thresholds.select(distance);
        let lod_changed = self.last_lod != Some(lod);
        if lod_changed {
            log::debug!("LOD {:?} -> {lod:?} at distance {distance:.3}", self.last_lod);
        }
        self.last_lod = Some(lod);

        backend.draw_mesh(lod);
        backend.present();

        FrameOutcome::Presented(FrameReport {
            dt,
            distance,
            lod,
            alpha: self.toggle.alpha(),
            lod_changed,
            alpha_flipped,
        })
    }

    /// Apply one frame of input. Returns whether alpha flipped.
    fn apply_input(&mut self, input: &FrameInput, dt: f32) -> bool {
        for &movement in &input.movements {
            self.camera.move_in(movement, dt);
        }
        if input.look != Vec2::ZERO {
            self.camera.look(input.look.x, input.look.y);
        }
        if input.scroll != 0.0 {
            self.camera.zoom_by(input.scroll);
        }

        let mut flipped = false;
        for &pressed in &input.toggle_levels {
            if self.toggle.update(pressed) {
                flipped = !flipped;
                log::debug!("alpha -> {}", self.toggle.alpha());
            }
        }
        flipped
    }

    fn publish_uniforms<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
        let light = &self.scene.light;
        let material = &self.scene.material;

        backend.set_vec3(LIGHT_AMBIENT, light.ambient);
        backend.set_vec3(LIGHT_DIFFUSE, light.diffuse);
        backend.set_vec3(LIGHT_SPECULAR, light.specular);
        backend.set_vec3(LIGHT_POSITION, light.position);
        backend.set_vec3(VIEW_POS, self.camera.position());
        backend.set_float(ALPHA, self.toggle.alpha());
        backend.set_vec3(MATERIAL_AMBIENT, material.ambient);
        backend.set_vec3(MATERIAL_DIFFUSE, material.diffuse);
        backend.set_vec3(MATERIAL_SPECULAR, material.specular);
        backend.set_float(MATERIAL_SHININESS, material.shininess);
        backend.set_mat4(
            PROJECTION,
            self.camera.projection_matrix(self.aspect, self.znear, self.zfar),
        );
        backend.set_mat4(VIEW, self.camera.view_matrix());
        backend.set_mat4(MODEL, Mat4::IDENTITY);
    }

    fn log_fps(&mut self, now: f64) {
        if now - self.last_fps_log >= FPS_LOG_INTERVAL {
            self.last_fps_log = now;
            log::debug!(
                "{:.1} fps ({} frames)",
                self.timing.fps(),
                self.timing.frame_count()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::renderer::{RecordingBackend, RenderCall};

    fn frame_loop() -> FrameLoop {
        FrameLoop::new(&Options::default(), 0.0).unwrap()
    }

    fn presented(outcome: FrameOutcome) -> FrameReport {
        match outcome {
            FrameOutcome::Presented(report) => report,
            FrameOutcome::Exit => panic!("expected a presented frame"),
        }
    }

    #[test]
    fn starting_camera_draws_low_detail() {
        let mut viewer = frame_loop();
        let clock = ManualClock::new(0.016);
        let mut backend = RecordingBackend::default();

        let report = presented(viewer.frame(&clock, [], &mut backend));
        assert_eq!(report.lod, LodLevel::Low);
        assert!(report.lod_changed);
        assert_eq!(backend.draws(), vec![LodLevel::Low]);
        assert_eq!(backend.calls.last(), Some(&RenderCall::Present));
    }

    #[test]
    fn close_camera_draws_high_detail() {
        let mut viewer = frame_loop();
        viewer.camera_mut().set_position(Vec3::new(0.0, 0.0, 1.0));
        let clock = ManualClock::new(0.016);
        let mut backend = RecordingBackend::default();

        let report = presented(viewer.frame(&clock, [], &mut backend));
        assert_eq!(report.lod, LodLevel::High);
        assert_eq!(backend.draws(), vec![LodLevel::High]);
    }

    #[test]
    fn uniforms_are_published_in_fixed_order() {
        let mut viewer = frame_loop();
        let clock = ManualClock::new(0.016);
        let mut backend = RecordingBackend::default();
        let _ = viewer.frame(&clock, [], &mut backend);

        assert_eq!(backend.calls[0], RenderCall::Clear([0.85, 0.85, 0.85, 1.0]));
        assert_eq!(
            backend.uniform_names(),
            vec![
                "light.ambient",
                "light.diffuse",
                "light.specular",
                "light.position",
                "viewPos",
                "alpha",
                "material.ambient",
                "material.diffuse",
                "material.specular",
                "material.shininess",
                "projection",
                "view",
                "model",
            ]
        );
    }

    #[test]
    fn published_matrices_follow_camera() {
        let mut viewer = frame_loop();
        let clock = ManualClock::new(0.016);
        let mut backend = RecordingBackend::default();
        let _ = viewer.frame(&clock, [], &mut backend);

        let expected_projection =
            Mat4::perspective_rh(45.0_f32.to_radians(), 1600.0 / 1200.0, 0.1, 100.0);
        assert_eq!(backend.last_mat4(PROJECTION), Some(expected_projection));
        assert_eq!(backend.last_mat4(VIEW), Some(viewer.camera().view_matrix()));
        assert_eq!(backend.last_mat4(MODEL), Some(Mat4::IDENTITY));
        assert_eq!(backend.last_vec3(VIEW_POS), Some(Vec3::new(0.0, 0.0, 3.0)));
        assert_eq!(backend.last_float(MATERIAL_SHININESS), Some(32.0));
    }

    #[test]
    fn held_forward_key_moves_into_medium_range() {
        let mut viewer = frame_loop();
        let clock = ManualClock::new(0.0);
        let mut backend = RecordingBackend::default();

        clock.set(0.5);
        let report = presented(viewer.frame(
            &clock,
            [InputEvent::key("KeyW", true)],
            &mut backend,
        ));
        // 2.5 units/s for 0.5 s toward the origin
        assert!((report.distance - 1.75).abs() < 1e-5);
        assert_eq!(report.lod, LodLevel::Medium);
    }

    #[test]
    fn toggle_flips_alpha_once_per_release() {
        let mut viewer = frame_loop();
        let clock = ManualClock::new(0.0);
        let mut backend = RecordingBackend::default();

        clock.advance(0.016);
        let pressed = presented(viewer.frame(&clock, [InputEvent::key("KeyT", true)], &mut backend));
        assert!(!pressed.alpha_flipped);
        assert_eq!(pressed.alpha, 1.0);

        clock.advance(0.016);
        let held = presented(viewer.frame(&clock, [], &mut backend));
        assert_eq!(held.alpha, 1.0);

        clock.advance(0.016);
        let released =
            presented(viewer.frame(&clock, [InputEvent::key("KeyT", false)], &mut backend));
        assert!(released.alpha_flipped);
        assert_eq!(released.alpha, 0.3);
        assert_eq!(backend.last_float(ALPHA), Some(0.3));

        clock.advance(0.016);
        let tapped = presented(viewer.frame(
            &clock,
            [InputEvent::key("KeyT", true), InputEvent::key("KeyT", false)],
            &mut backend,
        ));
        assert!(tapped.alpha_flipped);
        assert_eq!(tapped.alpha, 1.0);
    }

    #[test]
    fn quit_skips_drawing() {
        let mut viewer = frame_loop();
        let clock = ManualClock::new(0.016);
        let mut backend = RecordingBackend::default();

        let outcome = viewer.frame(&clock, [InputEvent::key("Escape", true)], &mut backend);
        assert_eq!(outcome, FrameOutcome::Exit);
        assert!(backend.calls.is_empty());

        let outcome = viewer.frame(&clock, [InputEvent::CloseRequested], &mut backend);
        assert_eq!(outcome, FrameOutcome::Exit);
    }

    #[test]
    fn backwards_clock_does_not_move_camera() {
        let mut viewer = frame_loop();
        let clock = ManualClock::new(1.0);
        let mut backend = RecordingBackend::default();
        let _ = viewer.frame(&clock, [], &mut backend);

        clock.set(0.5);
        let report = presented(viewer.frame(
            &clock,
            [InputEvent::key("KeyW", true)],
            &mut backend,
        ));
        assert_eq!(report.dt, 0.0);
        assert_eq!(viewer.camera().position(), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn mouse_and_scroll_reach_the_camera() {
        let mut viewer = frame_loop();
        let clock = ManualClock::new(0.016);
        let mut backend = RecordingBackend::default();
        let _ = viewer.frame(
            &clock,
            [
                InputEvent::MouseMotion { dx: 100.0, dy: -50.0 },
                InputEvent::Scroll { delta: 5.0 },
            ],
            &mut backend,
        );

        let camera = viewer.camera();
        assert!((camera.yaw() - -80.0).abs() < 1e-4);
        assert!((camera.pitch() - 5.0).abs() < 1e-4);
        assert_eq!(camera.zoom(), 40.0);
    }

    #[test]
    fn lod_change_is_reported_only_on_transition() {
        let mut viewer = frame_loop();
        let clock = ManualClock::new(0.0);
        let mut backend = RecordingBackend::default();

        clock.advance(0.016);
        assert!(presented(viewer.frame(&clock, [], &mut backend)).lod_changed);
        clock.advance(0.016);
        assert!(!presented(viewer.frame(&clock, [], &mut backend)).lod_changed);
        assert_eq!(viewer.last_lod(), Some(LodLevel::Low));
    }

    #[test]
    fn rejects_inverted_lod_distances() {
        let mut options = Options::default();
        options.lod.medium_distance = 4.0;
        assert!(matches!(
            FrameLoop::new(&options, 0.0),
            Err(ViewerError::InvalidOptions(_))
        ));
    }

    #[test]
    fn rejects_unvalidated_camera_bounds() {
        let mut options = Options::default();
        options.camera.zoom_min = f32::NAN;
        assert!(matches!(
            FrameLoop::new(&options, 0.0),
            Err(ViewerError::InvalidOptions(_))
        ));

        let mut options = Options::default();
        options.camera.pitch_limit = f32::NAN;
        assert!(FrameLoop::new(&options, 0.0).is_err());
    }

    #[test]
    fn rejects_out_of_range_alpha() {
        let mut options = Options::default();
        options.material.translucent_alpha = 1.5;
        assert!(matches!(
            FrameLoop::new(&options, 0.0),
            Err(ViewerError::InvalidOptions(_))
        ));
    }

    #[test]
    fn focus_loss_stops_held_movement() {
        let mut viewer = frame_loop();
        let clock = ManualClock::new(0.0);
        let mut backend = RecordingBackend::default();

        clock.advance(0.1);
        let _ = viewer.frame(&clock, [InputEvent::key("KeyW", true)], &mut backend);
        let moved_to = viewer.camera().position();
        assert!(moved_to.z < 3.0);

        clock.advance(0.1);
        let _ = viewer.frame(&clock, [InputEvent::FocusLost], &mut backend);
        clock.advance(0.1);
        let _ = viewer.frame(&clock, [], &mut backend);
        assert_eq!(viewer.camera().position(), moved_to);
    }
}
