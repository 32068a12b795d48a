use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
/// Configurable keyboard bindings mapping key codes to actions.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"ArrowUp"`, `"Escape"`, etc. Several keys may share an
/// action.
pub struct KeybindingOptions {
    /// Maps key string → action (e.g. `"KeyT"` → `ToggleTransparency`).
    pub bindings: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), KeyAction::MoveForward),
            ("KeyS".into(), KeyAction::MoveBackward),
            ("KeyA".into(), KeyAction::MoveLeft),
            ("KeyD".into(), KeyAction::MoveRight),
            ("KeyT".into(), KeyAction::ToggleTransparency),
            ("Escape".into(), KeyAction::Quit),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }
}
