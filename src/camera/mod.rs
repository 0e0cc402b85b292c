//! Camera system for walking the gallery.
//!
//! Provides a free first-person camera with orbit drag, wheel zoom and
//! eased position transitions.

/// Orbit-drag and wheel-zoom controller.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Timed, eased camera position transitions.
pub mod transition;

pub use self::controller::CameraController;
pub use self::core::{Camera, CameraOrientation, CameraPose, CameraUniform};
pub use self::transition::{CameraTransition, TransitionAnimator, TransitionId};
