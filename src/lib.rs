// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math compares against exact constants and casts pixel sizes
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]

//! Camera and input navigation layer for a walkable 3D memorial photo
//! gallery.
//!
//! The gallery room itself (walls, lights, decorative geometry, photo
//! textures) is drawn by an external 3D engine plugged in through
//! [`host::RenderHost`]. This crate owns everything that moves the camera:
//! orbit drag, wheel zoom, first-person locomotion, eased camera
//! transitions and the overview / in-gallery mode machine, plus the
//! bookkeeping for photo frames placed on the walls.
//!
//! # Key entry points
//!
//! - [`gallery::Gallery`] - the caller-owned gallery instance
//! - [`input::InputEvent`] - platform-agnostic pointer / wheel / key events
//! - [`options::Options`] - runtime configuration with TOML presets
//! - `viewer::Viewer` - standalone winit window (`viewer` feature)
//! - `web` - browser DOM adapters (`web` feature)
//!
//! # Frame loop
//!
//! Every render tick calls [`gallery::Gallery::frame`], which advances the
//! in-flight camera transition, applies held-key locomotion and then asks
//! the host to submit one frame. Input events are handled between ticks
//! and simply mutate the camera; the next tick observes the result.

pub mod camera;
pub mod error;
pub mod gallery;
pub mod host;
pub mod input;
pub mod navigation;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
#[cfg(feature = "web")]
pub mod web;

pub use error::GalleryError;
pub use gallery::{Gallery, GalleryCommand};
pub use host::{FrameSubmission, RenderHost};
pub use input::{InputEvent, InputResponse};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
