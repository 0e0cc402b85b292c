/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`GalleryCommand`](crate::GalleryCommand) values.
/// Native and browser front ends translate their own events into this
/// vocabulary.
///
/// # Example
///
/// ```ignore
/// let response = gallery.handle_input(
///     &InputEvent::PointerMove { x: 100.0, y: 200.0 },
///     Instant::now(),
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary pointer pressed on the drawing surface.
    PointerDown {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Pointer moved to an absolute position.
    PointerMove {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Primary pointer released, on the surface or anywhere else.
    PointerUp,
    /// Scroll wheel, DOM sign convention.
    Wheel {
        /// Vertical wheel delta (positive = scroll down / zoom out).
        delta_y: f32,
    },
    /// Key pressed.
    KeyDown {
        /// Physical key code, e.g. `"KeyW"`, `"Space"`, `"ShiftLeft"`.
        code: String,
        /// Auto-repeat while the key stays down.
        repeat: bool,
    },
    /// Key released.
    KeyUp {
        /// Physical key code.
        code: String,
    },
    /// The window or page lost input focus.
    FocusLost,
    /// The drawing surface was clicked.
    SurfaceClicked,
}

/// What became of an input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputResponse {
    /// The event was not relevant; the host may apply its default handling.
    Ignored,
    /// The event updated input state; the host should suppress its default
    /// handling (page scroll, key repeat into text fields, ...).
    Consumed,
    /// The event produced a command for the gallery.
    Command(crate::GalleryCommand),
}

impl InputResponse {
    /// Whether the host should suppress default handling for this event.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
