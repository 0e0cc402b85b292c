//! Crate-level error types.

use std::fmt;

/// Errors produced by the gallery crate.
#[derive(Debug)]
pub enum GalleryError {
    /// The drawable surface or rendering capability is unavailable.
    SurfaceMissing(String),
    /// A photo failed to load or decode.
    AssetLoad(String),
    /// The render host failed to submit a frame.
    Render(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceMissing(msg) => {
                write!(f, "drawable surface unavailable: {msg}")
            }
            Self::AssetLoad(msg) => write!(f, "photo load error: {msg}"),
            Self::Render(msg) => write!(f, "render error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for GalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GalleryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
