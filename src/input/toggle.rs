//! Edge-triggered transparency toggle.
//!
//! A held key produces exactly one flip, on release, regardless of how many
//! frames (or auto-repeat events) it stays down.

/// Whether the toggle key is currently down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleKeyState {
    /// Key is up. Initial state.
    #[default]
    Released,
    /// Key went down and has not been released yet.
    Pressed,
}

/// Two-state machine that flips the published alpha on key release.
#[derive(Debug, Clone, PartialEq)]
pub struct TransparencyToggle {
    state: ToggleKeyState,
    alpha: f32,
    opaque_alpha: f32,
    translucent_alpha: f32,
}

impl Default for TransparencyToggle {
    fn default() -> Self {
        Self::new(1.0, 0.3)
    }
}

impl TransparencyToggle {
    /// Start released and opaque.
    #[must_use]
    pub fn new(opaque_alpha: f32, translucent_alpha: f32) -> Self {
        Self {
            state: ToggleKeyState::Released,
            alpha: opaque_alpha,
            opaque_alpha,
            translucent_alpha,
        }
    }

    /// Alpha to publish to the material uniform.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Current key state.
    #[must_use]
    pub fn state(&self) -> ToggleKeyState {
        self.state
    }

    /// Whether the translucent endpoint is active.
    #[must_use]
    pub fn is_translucent(&self) -> bool {
        self.alpha != self.opaque_alpha
    }

    /// Feed the key level observed now. Returns `true` if alpha flipped.
    pub fn update(&mut self, pressed: bool) -> bool {
        match (self.state, pressed) {
            (ToggleKeyState::Released, true) => {
                self.state = ToggleKeyState::Pressed;
                false
            }
            (ToggleKeyState::Pressed, false) => {
                self.state = ToggleKeyState::Released;
                self.alpha = if self.is_translucent() {
                    self.opaque_alpha
                } else {
                    self.translucent_alpha
                };
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flips(toggle: &mut TransparencyToggle, levels: &[bool]) -> usize {
        levels.iter().filter(|&&pressed| toggle.update(pressed)).count()
    }

    #[test]
    fn starts_released_and_opaque() {
        let toggle = TransparencyToggle::default();
        assert_eq!(toggle.state(), ToggleKeyState::Released);
        assert_eq!(toggle.alpha(), 1.0);
    }

    #[test]
    fn held_key_flips_once_on_release() {
        let mut toggle = TransparencyToggle::default();
        assert_eq!(flips(&mut toggle, &[true, true, true, false]), 1);
        assert_eq!(toggle.alpha(), 0.3);
    }

    #[test]
    fn two_taps_flip_twice() {
        let mut toggle = TransparencyToggle::default();
        assert_eq!(flips(&mut toggle, &[true, false, true, false]), 2);
        assert_eq!(toggle.alpha(), 1.0);
    }

    #[test]
    fn holding_never_flips() {
        let mut toggle = TransparencyToggle::default();
        assert_eq!(flips(&mut toggle, &[true; 120]), 0);
        assert_eq!(toggle.state(), ToggleKeyState::Pressed);
        assert_eq!(toggle.alpha(), 1.0);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut toggle = TransparencyToggle::default();
        assert_eq!(flips(&mut toggle, &[false, false]), 0);
        assert!(!toggle.is_translucent());
    }
}
