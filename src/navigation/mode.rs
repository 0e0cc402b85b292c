/// Navigation state of the gallery.
///
/// `Overview` is both the initial state and the target of every reset;
/// `InGallery` is entered explicitly and is the only state in which held
/// keys move the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryMode {
    /// Static overview pose, keyboard locomotion disabled.
    #[default]
    Overview,
    /// Walking the gallery, keyboard locomotion enabled.
    InGallery,
}

impl GalleryMode {
    /// Whether held movement keys move the camera.
    #[must_use]
    pub fn locomotion_enabled(self) -> bool {
        matches!(self, Self::InGallery)
    }
}
