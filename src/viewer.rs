//! Standalone viewer window backed by winit.
//!
//! Window callbacks never touch the camera or toggle directly. They only
//! translate platform events into [`InputEvent`]s and queue them; the
//! [`FrameLoop`] drains the queue once per redraw.
//!
//! ```no_run
//! # use lodview::Viewer;
//! Viewer::builder()
//!     .with_title("LOD sphere")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{DeviceEvent, DeviceId, ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

use crate::engine::{Clock, FrameLoop, FrameOutcome, SystemClock};
use crate::error::ViewerError;
use crate::input::InputEvent;
use crate::options::Options;
use crate::renderer::MeshRenderer;
use crate::scene::LodMeshSet;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    /// Create a builder with default options.
    const fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title, overriding `[window] title`.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.window.title = title;
        }
        Viewer { options }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing the LOD mesh family from a first-person camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub const fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or the quit key is pressed.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError`] if the options are invalid, or if the event
    /// loop, window, GPU context, or shaders fail to initialize.
    pub fn run(self) -> Result<(), ViewerError> {
        self.options.validate()?;

        let event_loop =
            EventLoop::new().map_err(|e| ViewerError::EventLoop(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let clock = SystemClock::new();
        let frame_loop = FrameLoop::new(&self.options, clock.now())?;
        let meshes = LodMeshSet::from_options(&self.options.lod);

        let mut app = ViewerApp {
            renderer: None,
            window: None,
            frame_loop,
            meshes,
            events: VecDeque::new(),
            clock,
            options: self.options,
            startup_error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ViewerError::EventLoop(e.to_string()))?;

        app.startup_error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
///
/// `renderer` is declared before `window` so the surface is dropped first.
struct ViewerApp {
    renderer: Option<MeshRenderer>,
    window: Option<Arc<Window>>,
    frame_loop: FrameLoop,
    meshes: LodMeshSet,
    events: VecDeque<InputEvent>,
    clock: SystemClock,
    options: Options,
    startup_error: Option<ViewerError>,
}

/// Compute the wgpu surface size, never zero.
fn viewport_size(inner: PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: ViewerError) {
        log::error!("{error}");
        self.startup_error = Some(error);
        event_loop.exit();
    }

    fn create_window(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<Arc<Window>, ViewerError> {
        let opts = &self.options.window;
        let attrs = Window::default_attributes()
            .with_title(&opts.title)
            .with_inner_size(LogicalSize::new(opts.width, opts.height));
        let window = event_loop
            .create_window(attrs)
            .map_err(|e| ViewerError::Window(e.to_string()))?;

        if opts.halve_on_create {
            let _ = window.request_inner_size(LogicalSize::new(
                opts.width / 2,
                opts.height / 2,
            ));
        }

        if opts.grab_cursor {
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Confined)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked));
            match grabbed {
                Ok(()) => window.set_cursor_visible(false),
                Err(e) => log::warn!("cursor grab unavailable: {e}"),
            }
        }

        Ok(Arc::new(window))
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };
        let outcome =
            self.frame_loop
                .frame(&self.clock, self.events.drain(..), renderer);

        match outcome {
            FrameOutcome::Exit => event_loop.exit(),
            FrameOutcome::Presented(report) => {
                log::trace!("frame {report:?}");
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }
        }
    }

    fn queue(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(w) => w,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        let size = viewport_size(window.inner_size());
        let renderer = match pollster::block_on(MeshRenderer::new(
            window.clone(),
            size,
            &self.options.window,
            &self.meshes,
        )) {
            Ok(r) => r,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        log::info!("viewer ready at {}x{}", size.0, size.1);
        window.request_redraw();
        self.renderer = Some(renderer);
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.queue(InputEvent::CloseRequested);
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(vp_w, vp_h);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            WindowEvent::Focused(false) => self.queue(InputEvent::FocusLost),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.queue(InputEvent::Key {
                    key: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                if !self.options.window.grab_cursor {
                    #[allow(clippy::cast_possible_truncation)]
                    self.queue(InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    });
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.queue(InputEvent::Scroll {
                    delta: scroll_delta,
                });
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if !self.options.window.grab_cursor {
            return;
        }
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            #[allow(clippy::cast_possible_truncation)]
            self.queue(InputEvent::MouseMotion {
                dx: dx as f32,
                dy: dy as f32,
            });
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!(
            "exiting after {} frames",
            self.frame_loop.timing().frame_count()
        );
        self.renderer = None;
    }
}
