use serde::{Deserialize, Serialize};

/// Gallery-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// KeyW = "move_forward"
/// Escape = "reset_view"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Walk along the view direction.
    MoveForward,
    /// Walk against the view direction.
    MoveBackward,
    /// Step along camera-local `-X`.
    StrafeLeft,
    /// Step along camera-local `+X`.
    StrafeRight,
    /// Rise along world up.
    Ascend,
    /// Sink along world down.
    Descend,
    /// Enter the gallery (discrete).
    EnterGallery,
    /// Return to the overview pose (discrete).
    ResetView,
}

impl KeyAction {
    /// Whether the action is held for continuous movement rather than
    /// triggered once.
    #[must_use]
    pub fn is_movement(self) -> bool {
        !matches!(self, Self::EnterGallery | Self::ResetView)
    }
}

/// Canonical held-state of each movement action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct MovementState {
    /// [`KeyAction::MoveForward`] is held.
    pub forward: bool,
    /// [`KeyAction::MoveBackward`] is held.
    pub backward: bool,
    /// [`KeyAction::StrafeLeft`] is held.
    pub left: bool,
    /// [`KeyAction::StrafeRight`] is held.
    pub right: bool,
    /// [`KeyAction::Ascend`] is held.
    pub up: bool,
    /// [`KeyAction::Descend`] is held.
    pub down: bool,
}

impl MovementState {
    /// Mark `action` as held. Discrete actions are ignored.
    pub fn hold(&mut self, action: KeyAction) {
        match action {
            KeyAction::MoveForward => self.forward = true,
            KeyAction::MoveBackward => self.backward = true,
            KeyAction::StrafeLeft => self.left = true,
            KeyAction::StrafeRight => self.right = true,
            KeyAction::Ascend => self.up = true,
            KeyAction::Descend => self.down = true,
            KeyAction::EnterGallery | KeyAction::ResetView => {}
        }
    }

    /// Whether any movement action is held.
    #[must_use]
    pub fn any(&self) -> bool {
        self.forward
            || self.backward
            || self.left
            || self.right
            || self.up
            || self.down
    }
}

impl FromIterator<KeyAction> for MovementState {
    fn from_iter<I: IntoIterator<Item = KeyAction>>(iter: I) -> Self {
        let mut state = Self::default();
        for action in iter {
            state.hold(action);
        }
        state
    }
}
