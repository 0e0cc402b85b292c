//! Gallery navigation: the overview / in-gallery mode machine and
//! held-key locomotion.

/// Held-key first-person movement.
pub mod locomotion;
/// Overview / in-gallery mode.
pub mod mode;

pub use locomotion::Locomotion;
pub use mode::GalleryMode;
