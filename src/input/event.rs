/// Platform-agnostic input events.
///
/// The platform layer only enqueues these. An
/// [`InputProcessor`](super::InputProcessor) drains the queue once per frame
/// into a [`FrameInput`](super::FrameInput) snapshot.
///
/// # Example
///
/// ```
/// use lodview::input::{InputEvent, InputProcessor};
/// use lodview::options::KeybindingOptions;
///
/// let mut processor = InputProcessor::new(KeybindingOptions::default());
/// let frame = processor.drain([
///     InputEvent::key("KeyW", true),
///     InputEvent::Scroll { delta: 1.0 },
/// ]);
/// assert_eq!(frame.scroll, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A physical key changed state.
    Key {
        /// Key in `winit::keyboard::KeyCode` debug format (`"KeyW"`).
        key: String,
        /// `true` for press (including auto-repeat), `false` for release.
        pressed: bool,
    },
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downward.
        y: f32,
    },
    /// Raw relative mouse motion, used while the cursor is grabbed.
    MouseMotion {
        /// Horizontal motion in device units.
        dx: f32,
        /// Vertical motion in device units, growing downward.
        dy: f32,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// The window lost keyboard focus. Releases every held key, since some
    /// platforms never deliver the matching key-up events.
    FocusLost,
    /// The window was asked to close.
    CloseRequested,
}

impl InputEvent {
    /// Shorthand for a [`InputEvent::Key`] event.
    #[must_use]
    pub fn key(key: impl Into<String>, pressed: bool) -> Self {
        Self::Key {
            key: key.into(),
            pressed,
        }
    }
}
