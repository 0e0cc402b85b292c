//! Browser bindings: DOM event conversion and a canvas-backed
//! [`RenderHost`].
//!
//! The embedder registers its own DOM listeners, converts each event with
//! the functions here, and passes the result to
//! [`Gallery::handle_input`](crate::Gallery::handle_input). Drawing is left
//! to the page's 3D engine through the closure given to [`WebHost::new`].

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent,
    WheelEvent,
};

use crate::{
    error::GalleryError,
    host::{FrameSubmission, RenderHost},
    InputEvent, InputResponse,
};

/// Left mouse button as reported by `MouseEvent.button`.
const PRIMARY_BUTTON: i16 = 0;

/// Callback that renders one frame with the page's 3D engine.
pub type SubmitFn =
    Box<dyn FnMut(&FrameSubmission<'_>) -> Result<(), GalleryError>>;

/// Install `console_log` as the `log` backend and route panics to the
/// browser console. Safe to call more than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}

// ── Event conversion ─────────────────────────────────────────────────────

/// Convert a `mousedown` / `mousemove` / `mouseup` / `click` event.
///
/// Only the primary button starts a drag. Other event types map to `None`.
#[must_use]
pub fn mouse_event(event: &MouseEvent) -> Option<InputEvent> {
    let x = event.client_x() as f32;
    let y = event.client_y() as f32;
    match event.type_().as_str() {
        "mousedown" if event.button() == PRIMARY_BUTTON => {
            Some(InputEvent::PointerDown { x, y })
        }
        "mousemove" => Some(InputEvent::PointerMove { x, y }),
        "mouseup" => Some(InputEvent::PointerUp),
        "click" => Some(InputEvent::SurfaceClicked),
        _ => None,
    }
}

/// Convert a `wheel` event. The DOM sign convention is kept as is.
#[must_use]
pub fn wheel_event(event: &WheelEvent) -> InputEvent {
    InputEvent::Wheel {
        delta_y: event.delta_y() as f32,
    }
}

/// Convert a `keydown` / `keyup` event using its layout-independent
/// `code`.
#[must_use]
pub fn keyboard_event(event: &KeyboardEvent) -> Option<InputEvent> {
    let code = event.code();
    match event.type_().as_str() {
        "keydown" => Some(InputEvent::KeyDown {
            code,
            repeat: event.repeat(),
        }),
        "keyup" => Some(InputEvent::KeyUp { code }),
        _ => None,
    }
}

/// A `blur` on the canvas or window. Held keys are released.
#[must_use]
pub fn focus_lost() -> InputEvent {
    InputEvent::FocusLost
}

/// Suppress the browser default (page scroll, text selection) for events
/// the gallery used.
pub fn apply_response(event: &Event, response: &InputResponse) {
    if response.is_consumed() {
        event.prevent_default();
    }
}

// ── Canvas host ──────────────────────────────────────────────────────────

/// [`RenderHost`] over a `<canvas>` and an optional status element.
pub struct WebHost {
    canvas: HtmlCanvasElement,
    status: Option<HtmlElement>,
    submit: SubmitFn,
}

impl WebHost {
    /// Bind to the canvas with id `canvas_id`.
    ///
    /// `status_id` names the element whose text shows the status line; a
    /// missing element only disables status output. Fails with
    /// [`GalleryError::SurfaceMissing`] when there is no document or no
    /// canvas with that id.
    pub fn new(
        canvas_id: &str,
        status_id: Option<&str>,
        submit: SubmitFn,
    ) -> Result<Self, GalleryError> {
        let document = current_document()?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| {
                GalleryError::SurfaceMissing(format!(
                    "no element with id `{canvas_id}`"
                ))
            })?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| {
                GalleryError::SurfaceMissing(format!(
                    "`{canvas_id}` is not a canvas"
                ))
            })?;
        // A tab index lets the canvas take keyboard focus.
        canvas.set_tab_index(0);

        let status = status_id.and_then(|id| {
            let element = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if element.is_none() {
                log::warn!("status element `{id}` not found");
            }
            element
        });

        Ok(Self {
            canvas,
            status,
            submit,
        })
    }

    /// The bound canvas.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

fn current_document() -> Result<Document, GalleryError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| {
            GalleryError::SurfaceMissing("no browser document".into())
        })
}

impl RenderHost for WebHost {
    fn surface_size(&self) -> Option<(u32, u32)> {
        let width = u32::try_from(self.canvas.client_width()).ok()?;
        let height = u32::try_from(self.canvas.client_height()).ok()?;
        Some((width, height))
    }

    fn resize_viewport(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn submit_frame(
        &mut self,
        frame: &FrameSubmission<'_>,
    ) -> Result<(), GalleryError> {
        (self.submit)(frame)
    }

    fn set_status(&mut self, message: &str) {
        if let Some(status) = &self.status {
            status.set_text_content(Some(message));
        }
    }

    fn focus_surface(&mut self) {
        if let Err(e) = self.canvas.focus() {
            log::warn!("canvas focus failed: {e:?}");
        }
    }
}
