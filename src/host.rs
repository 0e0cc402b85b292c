//! The seam between the navigation layer and the external 3D engine.
//!
//! A [`RenderHost`] owns the scene graph, the GPU surface and the status
//! display. The gallery never draws anything itself: once per tick it hands
//! the host a [`FrameSubmission`] describing the camera and the photo
//! frames, and the host renders them however it likes.

use crate::camera::{Camera, CameraUniform};
use crate::error::GalleryError;
use crate::gallery::frames::PhotoFrames;

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameSubmission<'a> {
    /// Camera to render from.
    pub camera: &'a Camera,
    /// Photo frames hanging on the walls.
    pub frames: &'a PhotoFrames,
}

impl FrameSubmission<'_> {
    /// GPU-ready snapshot of the camera.
    #[must_use]
    pub fn camera_uniform(&self) -> CameraUniform {
        CameraUniform::from_camera(self.camera)
    }
}

/// Capabilities the gallery consumes from the embedding 3D engine.
pub trait RenderHost {
    /// Drawable surface size in pixels, or `None` if no surface is bound.
    fn surface_size(&self) -> Option<(u32, u32)>;

    /// Resize the viewport to `width` × `height` pixels.
    fn resize_viewport(&mut self, width: u32, height: u32);

    /// Render one frame.
    fn submit_frame(
        &mut self,
        frame: &FrameSubmission<'_>,
    ) -> Result<(), GalleryError>;

    /// Replace the text of the status line. An empty message clears it.
    fn set_status(&mut self, _message: &str) {}

    /// Move keyboard focus to the drawing surface.
    fn focus_surface(&mut self) {}
}

impl<H: RenderHost + ?Sized> RenderHost for Box<H> {
    fn surface_size(&self) -> Option<(u32, u32)> {
        (**self).surface_size()
    }

    fn resize_viewport(&mut self, width: u32, height: u32) {
        (**self).resize_viewport(width, height);
    }

    fn submit_frame(
        &mut self,
        frame: &FrameSubmission<'_>,
    ) -> Result<(), GalleryError> {
        (**self).submit_frame(frame)
    }

    fn set_status(&mut self, message: &str) {
        (**self).set_status(message);
    }

    fn focus_surface(&mut self) {
        (**self).focus_surface();
    }
}
