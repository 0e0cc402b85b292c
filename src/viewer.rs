//! Standalone gallery window backed by winit.
//!
//! The window has no rasterizer of its own: [`WindowHost`] accepts frame
//! submissions and reflects the gallery status line in the window title,
//! which is enough to walk the camera around and inspect it from logs.
//!
//! ```no_run
//! # use memorial_gallery::Viewer;
//! Viewer::builder()
//!     .with_photo("photos/grandmother.jpg")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{path::Path, sync::Arc};

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    camera::CameraUniform,
    error::GalleryError,
    host::{FrameSubmission, RenderHost},
    options::Options,
    Gallery, InputEvent,
};

/// Pixels per wheel line, matching what browsers report for one notch.
const PIXELS_PER_LINE: f32 = 100.0;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    photos: Vec<String>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "Memorial Gallery", no photos,
    /// default options).
    fn new() -> Self {
        Self {
            options: None,
            photos: Vec::new(),
            title: "Memorial Gallery".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Hang a photo from a file path. Frames fill slots in call order.
    #[must_use]
    pub fn with_photo(mut self, path: impl Into<String>) -> Self {
        self.photos.push(path.into());
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            photos: self.photos,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window hosting one gallery.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Option<Options>,
    photos: Vec<String>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), GalleryError> {
        let event_loop = EventLoop::new()
            .map_err(|e| GalleryError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            gallery: None,
            cursor: (0.0, 0.0),
            options: self.options,
            photos: self.photos,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| GalleryError::Viewer(e.to_string()))
    }
}

// ── Window host ──────────────────────────────────────────────────────────

/// [`RenderHost`] over a bare winit window.
///
/// The window has no texture storage, so there is nothing to decode a
/// photo into: a photo path counts as loaded when the file exists and
/// fails otherwise.
pub struct WindowHost {
    window: Arc<Window>,
    title: String,
    last_uniform: Option<CameraUniform>,
}

impl WindowHost {
    /// Wrap `window`, using `title` as the base window title.
    #[must_use]
    pub fn new(window: Arc<Window>, title: impl Into<String>) -> Self {
        Self {
            window,
            title: title.into(),
            last_uniform: None,
        }
    }

    /// Camera uniform from the most recent submission.
    #[must_use]
    pub fn last_uniform(&self) -> Option<&CameraUniform> {
        self.last_uniform.as_ref()
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

impl RenderHost for WindowHost {
    fn surface_size(&self) -> Option<(u32, u32)> {
        let inner = self.window.inner_size();
        Some((inner.width, inner.height))
    }

    fn resize_viewport(&mut self, width: u32, height: u32) {
        log::debug!("viewport resized to {width}x{height}");
    }

    fn submit_frame(
        &mut self,
        frame: &FrameSubmission<'_>,
    ) -> Result<(), GalleryError> {
        self.last_uniform = Some(frame.camera_uniform());
        Ok(())
    }

    fn set_status(&mut self, message: &str) {
        if message.is_empty() {
            self.window.set_title(&self.title);
        } else {
            self.window.set_title(&format!("{} | {message}", self.title));
        }
    }

    fn focus_surface(&mut self) {
        self.window.focus_window();
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    gallery: Option<Gallery<WindowHost>>,
    /// Last cursor position in physical pixels.
    cursor: (f32, f32),
    options: Option<Options>,
    photos: Vec<String>,
    title: String,
}

/// Convert a winit wheel delta to the DOM convention (positive = scroll
/// down, in pixels).
fn dom_wheel_delta(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
        MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
    }
}

/// Hang the configured photos and settle each load immediately from the
/// file's existence.
fn hang_photos(gallery: &mut Gallery<WindowHost>, photos: &[String]) {
    for path in photos {
        let (_, ticket) = gallery.add_photo(path.as_str());
        let result = if Path::new(path).is_file() {
            Ok(())
        } else {
            Err(GalleryError::AssetLoad(format!("{path}: no such file")))
        };
        let _ = gallery.finish_photo_load(ticket, result);
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gallery.is_some() {
            return;
        }

        let attrs = Window::default_attributes().with_title(&self.title);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let options = self.options.take().unwrap_or_default();
        let title = self.title.clone();
        let host_window = Arc::clone(&window);
        let Some(gallery) =
            Gallery::ensure_initialized(&mut self.gallery, options, move || {
                Ok(WindowHost::new(host_window, title))
            })
        else {
            event_loop.exit();
            return;
        };

        hang_photos(gallery, &self.photos);
        window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let Some(gallery) = &mut self.gallery else {
            return;
        };
        let now = Instant::now();

        match event {
            WindowEvent::Resized(size) => {
                gallery.resize(size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                gallery.frame(now);
                gallery.host().request_redraw();
            }

            WindowEvent::Focused(false) => {
                let _ = gallery.handle_input(&InputEvent::FocusLost, now);
            }

            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                if state == ElementState::Pressed {
                    let (x, y) = self.cursor;
                    let _ = gallery
                        .handle_input(&InputEvent::PointerDown { x, y }, now);
                } else {
                    let _ = gallery.handle_input(&InputEvent::PointerUp, now);
                    let _ =
                        gallery.handle_input(&InputEvent::SurfaceClicked, now);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                self.cursor = (x, y);
                let pointer = InputEvent::PointerMove { x, y };
                let _ = gallery.handle_input(&pointer, now);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = dom_wheel_delta(delta);
                let wheel = InputEvent::Wheel { delta_y };
                let _ = gallery.handle_input(&wheel, now);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                // winit key codes debug-print as DOM `KeyboardEvent.code`
                // strings ("KeyW", "ShiftLeft", ...).
                let code = format!("{code:?}");
                let input = if event.state == ElementState::Pressed {
                    InputEvent::KeyDown {
                        code,
                        repeat: event.repeat,
                    }
                } else {
                    InputEvent::KeyUp { code }
                };
                let _ = gallery.handle_input(&input, now);
            }

            _ => (),
        }
    }
}
