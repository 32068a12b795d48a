//! Input handling: platform-agnostic events, the per-frame event drain,
//! key actions, and the edge-triggered transparency toggle.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Drains queued events into per-frame snapshots.
pub mod processor;
/// Edge-triggered transparency toggle.
pub mod toggle;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::{FrameInput, InputProcessor};
pub use toggle::{ToggleKeyState, TransparencyToggle};
