use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping key codes to actions.
///
/// Key strings are physical key codes as reported by the DOM
/// `KeyboardEvent.code` and by winit's `KeyCode` debug format: `"KeyW"`,
/// `"Space"`, `"ShiftLeft"`, `"Escape"`. Several keys may share an action.
pub struct KeybindingOptions {
    /// Maps key string → action (e.g. `"KeyW"` → `MoveForward`).
    pub bindings: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), KeyAction::MoveForward),
            ("KeyS".into(), KeyAction::MoveBackward),
            ("KeyA".into(), KeyAction::StrafeLeft),
            ("KeyD".into(), KeyAction::StrafeRight),
            ("Space".into(), KeyAction::Ascend),
            ("ShiftLeft".into(), KeyAction::Descend),
            ("ShiftRight".into(), KeyAction::Descend),
            ("Enter".into(), KeyAction::EnterGallery),
            ("Escape".into(), KeyAction::ResetView),
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

    /// Key strings bound to `action`, sorted.
    #[must_use]
    pub fn keys_for(&self, action: KeyAction) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}
