use glam::Vec2;
use rustc_hash::FxHashMap;

use super::keyboard::{KeyAction, MovementState};

/// Tracks pointer-drag state and held keys.
///
/// Keys are stored already resolved to their bound [`KeyAction`], so the
/// per-frame movement query never looks at key strings.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: FxHashMap<String, KeyAction>,
    drag_active: bool,
    last_pointer: Vec2,
}

impl InputTracker {
    /// Create a tracker with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the drag start position and begin dragging.
    pub fn pointer_down(&mut self, position: Vec2) {
        self.last_pointer = position;
        self.drag_active = true;
    }

    /// Record a pointer move, returning the delta since the last recorded
    /// position if a drag is in progress.
    pub fn pointer_move(&mut self, position: Vec2) -> Option<Vec2> {
        if !self.drag_active {
            return None;
        }
        let delta = position - self.last_pointer;
        self.last_pointer = position;
        Some(delta)
    }

    /// End any drag in progress.
    pub fn pointer_up(&mut self) {
        self.drag_active = false;
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Last recorded pointer position.
    #[must_use]
    pub fn last_pointer(&self) -> Vec2 {
        self.last_pointer
    }

    /// Mark `code` as held, bound to `action`.
    pub fn key_down(&mut self, code: &str, action: KeyAction) {
        let _ = self.held.insert(code.to_owned(), action);
    }

    /// Release `code`. Returns whether it was held.
    pub fn key_up(&mut self, code: &str) -> bool {
        self.held.remove(code).is_some()
    }

    /// Release every held key.
    pub fn release_all_keys(&mut self) {
        self.held.clear();
    }

    /// Whether `code` is currently held.
    #[must_use]
    pub fn is_held(&self, code: &str) -> bool {
        self.held.contains_key(code)
    }

    /// Canonical movement flags from the held keys.
    #[must_use]
    pub fn movement(&self) -> MovementState {
        self.held.values().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_reports_deltas_between_moves() {
        let mut tracker = InputTracker::new();
        assert_eq!(tracker.pointer_move(Vec2::new(5.0, 5.0)), None);

        tracker.pointer_down(Vec2::new(10.0, 20.0));
        assert!(tracker.drag_active());
        assert_eq!(
            tracker.pointer_move(Vec2::new(14.0, 17.0)),
            Some(Vec2::new(4.0, -3.0))
        );
        assert_eq!(
            tracker.pointer_move(Vec2::new(15.0, 17.0)),
            Some(Vec2::new(1.0, 0.0))
        );

        tracker.pointer_up();
        assert_eq!(tracker.pointer_move(Vec2::new(99.0, 99.0)), None);
        assert_eq!(tracker.last_pointer(), Vec2::new(15.0, 17.0));
    }

    #[test]
    fn pointer_up_is_idempotent() {
        let mut tracker = InputTracker::new();
        tracker.pointer_up();
        tracker.pointer_up();
        assert!(!tracker.drag_active());
    }

    #[test]
    fn synonymous_keys_count_once() {
        let mut tracker = InputTracker::new();
        tracker.key_down("ShiftLeft", KeyAction::Descend);
        tracker.key_down("ShiftRight", KeyAction::Descend);
        assert_eq!(
            tracker.movement(),
            MovementState {
                down: true,
                ..MovementState::default()
            }
        );

        // Releasing one shift keeps the other holding the action.
        assert!(tracker.key_up("ShiftLeft"));
        assert!(tracker.movement().down);
        assert!(tracker.key_up("ShiftRight"));
        assert!(!tracker.movement().any());
    }

    #[test]
    fn releasing_unknown_key_is_a_no_op() {
        let mut tracker = InputTracker::new();
        assert!(!tracker.key_up("KeyQ"));
    }

    #[test]
    fn release_all_clears_held_keys() {
        let mut tracker = InputTracker::new();
        tracker.key_down("KeyW", KeyAction::MoveForward);
        tracker.key_down("KeyD", KeyAction::StrafeRight);
        tracker.release_all_keys();
        assert!(!tracker.is_held("KeyW"));
        assert!(!tracker.movement().any());
    }
}
