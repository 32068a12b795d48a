//! Converts queued platform events into one per-frame input snapshot.
//!
//! The `InputProcessor` owns all transient input state (held keys, last
//! cursor position) and the key-binding map. Events are only queued by the
//! platform layer; the frame loop drains them here once per frame so the
//! whole frame observes a single consistent camera/alpha update.

use std::collections::HashSet;

use glam::Vec2;

use super::event::InputEvent;
use super::keyboard::KeyAction;
use crate::camera::CameraMovement;
use crate::options::KeybindingOptions;

/// Everything the frame loop needs from one frame's worth of input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Movement directions whose keys are held after the drain, in
    /// forward/backward/left/right order without duplicates.
    pub movements: Vec<CameraMovement>,
    /// Toggle-key levels in arrival order (`true` = pressed).
    pub toggle_levels: Vec<bool>,
    /// Accumulated look offset in pixels; positive y looks up.
    pub look: Vec2,
    /// Accumulated scroll in lines.
    pub scroll: f32,
    /// Close request or quit key seen this frame.
    pub quit: bool,
}

/// Drains queued [`InputEvent`]s into a [`FrameInput`].
pub struct InputProcessor {
    /// Key strings currently held down.
    held_keys: HashSet<String>,
    /// Last absolute cursor position; `None` until the first sample.
    last_cursor: Option<Vec2>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeybindingOptions::default())
    }
}

impl InputProcessor {
    /// Create a processor with the given key bindings.
    #[must_use]
    pub fn new(key_bindings: KeybindingOptions) -> Self {
        Self {
            held_keys: HashSet::new(),
            last_cursor: None,
            key_bindings,
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Whether any key bound to `action` is held.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held_keys
            .iter()
            .any(|key| self.key_bindings.lookup(key) == Some(action))
    }

    /// Consume one frame's events in arrival order.
    pub fn drain(
        &mut self,
        events: impl IntoIterator<Item = InputEvent>,
    ) -> FrameInput {
        let mut frame = FrameInput::default();

        for event in events {
            match event {
                InputEvent::Key { key, pressed } => {
                    self.handle_key(key, pressed, &mut frame);
                }
                InputEvent::CursorMoved { x, y } => {
                    frame.look += self.handle_cursor_moved(Vec2::new(x, y));
                }
                InputEvent::MouseMotion { dx, dy } => {
                    frame.look += Vec2::new(dx, -dy);
                }
                InputEvent::Scroll { delta } => frame.scroll += delta,
                InputEvent::FocusLost => {
                    self.held_keys.clear();
                    self.last_cursor = None;
                }
                InputEvent::CloseRequested => frame.quit = true,
            }
        }

        frame.movements = [
            KeyAction::MoveForward,
            KeyAction::MoveBackward,
            KeyAction::MoveLeft,
            KeyAction::MoveRight,
        ]
        .into_iter()
        .filter(|&action| self.is_held(action))
        .filter_map(KeyAction::movement)
        .collect();

        frame
    }

    fn handle_key(&mut self, key: String, pressed: bool, frame: &mut FrameInput) {
        let action = self.key_bindings.lookup(&key);
        match action {
            Some(KeyAction::ToggleTransparency) => frame.toggle_levels.push(pressed),
            Some(KeyAction::Quit) if pressed => frame.quit = true,
            _ => {}
        }
        if pressed {
            let _ = self.held_keys.insert(key);
        } else {
            let _ = self.held_keys.remove(&key);
        }
    }

    /// Offset since the previous cursor sample, with y flipped so that
    /// moving the mouse up looks up. The first sample only primes the
    /// tracker.
    fn handle_cursor_moved(&mut self, position: Vec2) -> Vec2 {
        let offset = self.last_cursor.map_or(Vec2::ZERO, |last| {
            Vec2::new(position.x - last.x, last.y - position.y)
        });
        self.last_cursor = Some(position);
        offset
    }
}
