//! Converts raw platform events into gallery commands.
//!
//! The `InputProcessor` owns all transient input state (drag tracking and
//! held keys) and the key-binding map. It is the only thing that sits
//! between raw window events and [`Gallery::execute`](crate::Gallery::execute).

use glam::Vec2;

use super::event::{InputEvent, InputResponse};
use super::keyboard::{KeyAction, MovementState};
use super::tracker::InputTracker;
use crate::gallery::GalleryCommand;
use crate::options::KeybindingOptions;

/// Converts raw input events into [`GalleryCommand`]s.
///
/// # Usage
///
/// ```ignore
/// match processor.handle_event(&event, gallery.mode().locomotion_enabled()) {
///     InputResponse::Command(cmd) => gallery.execute(cmd, now),
///     other => suppress_default = other.is_consumed(),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Drag and held-key state.
    tracker: InputTracker,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Read-only access to the tracked input state.
    #[must_use]
    pub fn tracker(&self) -> &InputTracker {
        &self.tracker
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings. Held keys were resolved against the old
    /// map, so they are released.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
        self.tracker.release_all_keys();
    }

    /// Release every held key.
    pub fn release_keys(&mut self) {
        self.tracker.release_all_keys();
    }

    /// Canonical movement flags for the current tick.
    #[must_use]
    pub fn movement(&self) -> MovementState {
        self.tracker.movement()
    }

    /// Process a raw input event.
    ///
    /// `movement_enabled` gates whether movement keys are recorded; key
    /// releases are always honoured so nothing stays stuck.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        movement_enabled: bool,
    ) -> InputResponse {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.tracker.pointer_down(Vec2::new(*x, *y));
                InputResponse::Consumed
            }
            InputEvent::PointerMove { x, y } => {
                self.handle_pointer_move(Vec2::new(*x, *y))
            }
            InputEvent::PointerUp => {
                let was_dragging = self.tracker.drag_active();
                self.tracker.pointer_up();
                if was_dragging {
                    InputResponse::Consumed
                } else {
                    InputResponse::Ignored
                }
            }
            InputEvent::Wheel { delta_y } => {
                InputResponse::Command(GalleryCommand::Zoom {
                    delta_y: *delta_y,
                })
            }
            InputEvent::KeyDown { code, repeat } => {
                self.handle_key_down(code, *repeat, movement_enabled)
            }
            InputEvent::KeyUp { code } => {
                if self.tracker.key_up(code) {
                    InputResponse::Consumed
                } else {
                    InputResponse::Ignored
                }
            }
            InputEvent::FocusLost => {
                self.tracker.release_all_keys();
                InputResponse::Ignored
            }
            InputEvent::SurfaceClicked => {
                InputResponse::Command(GalleryCommand::FocusSurface)
            }
        }
    }

    /// Pointer moved: produce an orbit command while dragging.
    fn handle_pointer_move(&mut self, position: Vec2) -> InputResponse {
        match self.tracker.pointer_move(position) {
            None => InputResponse::Ignored,
            Some(delta) if delta == Vec2::ZERO => InputResponse::Consumed,
            Some(delta) => {
                InputResponse::Command(GalleryCommand::Orbit { delta })
            }
        }
    }

    /// Key pressed: hold movement keys or fire a discrete action.
    ///
    /// Discrete actions fire on the first press only; auto-repeat while the
    /// key stays down is swallowed.
    fn handle_key_down(
        &mut self,
        code: &str,
        repeat: bool,
        movement_enabled: bool,
    ) -> InputResponse {
        match self.key_bindings.lookup(code) {
            None => InputResponse::Ignored,
            Some(action) if repeat && !action.is_movement() => {
                InputResponse::Consumed
            }
            Some(KeyAction::EnterGallery) => {
                InputResponse::Command(GalleryCommand::EnterGallery)
            }
            Some(KeyAction::ResetView) => {
                InputResponse::Command(GalleryCommand::ResetView)
            }
            Some(action) if movement_enabled => {
                self.tracker.key_down(code, action);
                InputResponse::Consumed
            }
            Some(_) => InputResponse::Ignored,
        }
    }
}
