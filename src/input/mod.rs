//! Input handling: event types, drag / held-key tracking, and the input
//! processor that converts raw window events into gallery commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable actions and canonical movement flags.
pub mod keyboard;
/// Converts raw events into gallery commands.
pub mod processor;
/// Pointer-drag and held-key state.
pub mod tracker;

pub use event::{InputEvent, InputResponse};
pub use keyboard::{KeyAction, MovementState};
pub use processor::InputProcessor;
pub use tracker::InputTracker;
