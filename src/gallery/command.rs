use glam::Vec2;

/// A discrete request against the gallery, produced by the
/// [`InputProcessor`](crate::input::InputProcessor) or issued directly by
/// the embedder (UI buttons, scripts).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GalleryCommand {
    /// Switch to walking mode and glide to the gallery pose.
    EnterGallery,
    /// Return to the overview pose from any state.
    ResetView,
    /// Rotate the camera by a pointer-drag delta in pixels.
    Orbit {
        /// Pointer movement since the previous drag sample.
        delta: Vec2,
    },
    /// Slide the camera along its view direction.
    Zoom {
        /// Raw wheel delta, positive = scroll down (DOM convention).
        delta_y: f32,
    },
    /// The drawing surface was clicked.
    FocusSurface,
}
