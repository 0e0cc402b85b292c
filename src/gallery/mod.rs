//! The gallery instance: camera, input, navigation and photo frames wired
//! to a [`RenderHost`].
//!
//! A [`Gallery`] is owned by the embedder and driven from its event loop:
//! raw events go through [`Gallery::handle_input`], and [`Gallery::frame`]
//! runs once per display refresh.

mod command;
/// Photo frames and their load tracking.
pub mod frames;

pub use command::GalleryCommand;
use frames::{FrameId, LoadTicket, PhotoFrame, PhotoFrames};
use web_time::Instant;

use crate::camera::{Camera, CameraController, CameraPose, TransitionAnimator};
use crate::error::GalleryError;
use crate::host::{FrameSubmission, RenderHost};
use crate::input::{InputEvent, InputProcessor, InputResponse};
use crate::navigation::{GalleryMode, Locomotion};
use crate::options::Options;

/// Last message pushed to the host's status line.
#[derive(Debug, Clone, Default)]
struct StatusLine {
    current: String,
}

impl StatusLine {
    /// Forward `message` to the host unless it is already showing.
    fn show<H: RenderHost>(&mut self, host: &mut H, message: &str) {
        if self.current == message {
            return;
        }
        message.clone_into(&mut self.current);
        host.set_status(message);
    }
}

/// A running memorial gallery bound to one render host.
pub struct Gallery<H: RenderHost> {
    host: H,
    options: Options,
    camera: CameraController,
    input: InputProcessor,
    locomotion: Locomotion,
    transition: TransitionAnimator,
    mode: GalleryMode,
    frames: PhotoFrames,
    status: StatusLine,
}

impl<H: RenderHost> Gallery<H> {
    /// Bind a gallery to `host`.
    ///
    /// Fails with [`GalleryError::SurfaceMissing`] when the host has no
    /// drawable surface. The camera starts at the overview pose.
    pub fn new(host: H, options: Options) -> Result<Self, GalleryError> {
        let Some((width, height)) = host.surface_size() else {
            return Err(GalleryError::SurfaceMissing(
                "host reports no drawable surface".into(),
            ));
        };

        let camera = CameraController::new(
            &options.camera,
            CameraPose::at(options.navigation.overview_position()),
            aspect_ratio(width, height),
        );
        let input =
            InputProcessor::with_key_bindings(options.keybindings.clone());
        let locomotion = Locomotion::new(&options.navigation);
        let transition =
            TransitionAnimator::new(options.navigation.entry_easing);

        log::info!("gallery initialized on a {width}x{height} surface");

        Ok(Self {
            host,
            options,
            camera,
            input,
            locomotion,
            transition,
            mode: GalleryMode::Overview,
            frames: PhotoFrames::new(),
            status: StatusLine::default(),
        })
    }

    /// Create the gallery in `slot` unless one already lives there.
    ///
    /// `make_host` runs only when `slot` is empty. Any failure is logged and
    /// leaves `slot` empty, so a later call can retry.
    pub fn ensure_initialized<F>(
        slot: &mut Option<Self>,
        options: Options,
        make_host: F,
    ) -> Option<&mut Self>
    where
        F: FnOnce() -> Result<H, GalleryError>,
    {
        if slot.is_some() {
            log::debug!("gallery already initialized");
            return slot.as_mut();
        }

        let built = make_host().and_then(|host| Self::new(host, options));
        let gallery = match built {
            Ok(gallery) => gallery,
            Err(e) => {
                log::error!("gallery initialization failed: {e}");
                return None;
            }
        };
        Some(slot.insert(gallery))
    }

    /// Feed one raw input event. Commands it produces are executed
    /// immediately and returned to the caller.
    pub fn handle_input(
        &mut self,
        event: &InputEvent,
        now: Instant,
    ) -> InputResponse {
        let response = self
            .input
            .handle_event(event, self.mode.locomotion_enabled());
        if let InputResponse::Command(cmd) = response {
            self.execute(cmd, now);
        }
        response
    }

    /// Execute a gallery command.
    pub fn execute(&mut self, cmd: GalleryCommand, now: Instant) {
        match cmd {
            GalleryCommand::EnterGallery => self.enter_gallery(now),
            GalleryCommand::ResetView => self.reset_view(),
            GalleryCommand::Orbit { delta } => self.camera.orbit(delta),
            GalleryCommand::Zoom { delta_y } => self.camera.zoom(delta_y),
            GalleryCommand::FocusSurface => {
                if self.mode.locomotion_enabled() {
                    self.status.show(
                        &mut self.host,
                        &self.options.status.keyboard_enabled,
                    );
                    self.host.focus_surface();
                }
            }
        }
    }

    /// Advance one tick and hand the frame to the host.
    ///
    /// The transition is sampled first, then held-key locomotion runs on
    /// top of it. A failed submission is logged and does not stop the next
    /// tick.
    pub fn frame(&mut self, now: Instant) {
        if let Some(position) = self.transition.sample(now) {
            self.camera.set_position(position);
        }

        if self.mode.locomotion_enabled() {
            let held = self.input.movement();
            if self.locomotion.step(held, &mut self.camera.camera) {
                self.status.show(&mut self.host, &self.options.status.moving);
            }
        }

        let submission = FrameSubmission {
            camera: &self.camera.camera,
            frames: &self.frames,
        };
        if let Err(e) = self.host.submit_frame(&submission) {
            log::error!("frame submission failed: {e}");
        }
        log::trace!("frame at {:?}", self.camera.camera.position);
    }

    /// Follow a surface resize. Zero-sized surfaces are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("ignoring resize to {width}x{height}");
            return;
        }
        self.camera.resize(width, height);
        self.host.resize_viewport(width, height);
    }

    /// Switch to walking mode and glide from the current position to the
    /// gallery pose. Calling it again restarts the glide from wherever
    /// the camera is.
    pub fn enter_gallery(&mut self, now: Instant) {
        let navigation = &self.options.navigation;
        let _ = self.transition.start(
            self.camera.camera.position,
            navigation.gallery_position(),
            navigation.entry_duration(),
            now,
        );
        if self.mode != GalleryMode::InGallery {
            log::info!("entering gallery");
            self.mode = GalleryMode::InGallery;
        }
        self.status.show(&mut self.host, &self.options.status.entered);
        self.host.focus_surface();
    }

    /// Return to the overview: cancel any glide, snap to the overview pose,
    /// release held keys and clear the status line.
    pub fn reset_view(&mut self) {
        if let Some(id) = self.transition.cancel() {
            log::debug!("transition {id:?} cancelled by reset");
        }
        if self.mode != GalleryMode::Overview {
            log::info!("returning to overview");
            self.mode = GalleryMode::Overview;
        }
        self.camera.snap_to(CameraPose::at(
            self.options.navigation.overview_position(),
        ));
        self.input.release_keys();
        self.status.show(&mut self.host, "");
    }

    /// Hang a new photo frame. The host decodes `source` and reports back
    /// through [`finish_photo_load`](Self::finish_photo_load).
    pub fn add_photo(
        &mut self,
        source: impl Into<String>,
    ) -> (FrameId, LoadTicket) {
        self.frames.add(source)
    }

    /// Report the outcome of a photo load. Returns `false` for stale
    /// tickets.
    pub fn finish_photo_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<(), GalleryError>,
    ) -> bool {
        self.frames.finish_load(ticket, result)
    }

    /// Take a frame down.
    pub fn remove_photo(&mut self, id: FrameId) -> Option<PhotoFrame> {
        self.frames.remove(id)
    }

    /// Replace the options, re-applying camera, navigation and key-binding
    /// settings. The current pose and mode are kept.
    pub fn set_options(&mut self, options: Options) {
        self.camera.apply_options(&options.camera);
        self.locomotion = Locomotion::new(&options.navigation);
        self.transition.set_easing(options.navigation.entry_easing);
        if options.keybindings != self.options.keybindings {
            self.input.set_key_bindings(options.keybindings.clone());
        }
        self.options = options;
        log::info!("gallery options updated");
    }

    /// Current navigation mode.
    #[must_use]
    pub fn mode(&self) -> GalleryMode {
        self.mode
    }

    /// The camera as it will be rendered next.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera.camera
    }

    /// Photo frames currently hanging.
    #[must_use]
    pub fn frames(&self) -> &PhotoFrames {
        &self.frames
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Text currently on the status line.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status.current
    }

    /// The render host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the render host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Whether the entry glide is still running.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        return 1.0;
    }
    width as f32 / height as f32
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use glam::{Vec2, Vec3};

    use super::*;
    use crate::camera::CameraOrientation;

    const OVERVIEW: Vec3 = Vec3::new(0.0, 5.0, 20.0);
    const INSIDE: Vec3 = Vec3::new(0.0, 8.0, 10.0);

    #[derive(Debug, Default)]
    struct RecordingHost {
        size: Option<(u32, u32)>,
        viewport: Option<(u32, u32)>,
        statuses: Vec<String>,
        focus_requests: usize,
        submissions: usize,
        rendered: Vec<Vec3>,
        failures_left: usize,
    }

    impl RecordingHost {
        fn with_surface() -> Self {
            Self {
                size: Some((800, 600)),
                ..Self::default()
            }
        }
    }

    impl RenderHost for RecordingHost {
        fn surface_size(&self) -> Option<(u32, u32)> {
            self.size
        }

        fn resize_viewport(&mut self, width: u32, height: u32) {
            self.viewport = Some((width, height));
        }

        fn submit_frame(
            &mut self,
            frame: &FrameSubmission<'_>,
        ) -> Result<(), GalleryError> {
            self.submissions += 1;
            if self.failures_left > 0 {
                self.failures_left -= 1;
                return Err(GalleryError::Render("device lost".into()));
            }
            self.rendered.push(frame.camera.position);
            Ok(())
        }

        fn set_status(&mut self, message: &str) {
            self.statuses.push(message.to_owned());
        }

        fn focus_surface(&mut self) {
            self.focus_requests += 1;
        }
    }

    fn gallery() -> Gallery<RecordingHost> {
        Gallery::new(RecordingHost::with_surface(), Options::default()).unwrap()
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn key(code: &str, down: bool) -> InputEvent {
        if down {
            InputEvent::KeyDown {
                code: code.into(),
                repeat: false,
            }
        } else {
            InputEvent::KeyUp { code: code.into() }
        }
    }

    /// Enter the gallery and let the glide finish.
    fn walk_in(gallery: &mut Gallery<RecordingHost>, t0: Instant) -> Instant {
        gallery.enter_gallery(t0);
        let done = t0 + ms(2000);
        gallery.frame(done);
        done
    }

    fn assert_overview(gallery: &Gallery<RecordingHost>) {
        assert_eq!(gallery.mode(), GalleryMode::Overview);
        assert_eq!(gallery.camera().position, OVERVIEW);
        assert_eq!(gallery.camera().orientation, CameraOrientation::ZERO);
        assert!(!gallery.is_transitioning());
    }

    #[test]
    fn missing_surface_is_an_error() {
        let result = Gallery::new(RecordingHost::default(), Options::default());
        assert!(matches!(result, Err(GalleryError::SurfaceMissing(_))));
    }

    #[test]
    fn starts_in_overview_with_surface_aspect() {
        let gallery = gallery();
        assert_overview(&gallery);
        assert!((gallery.camera().aspect - 800.0 / 600.0).abs() < 1e-6);
        assert!(gallery.frames().is_empty());
        assert_eq!(gallery.status(), "");
    }

    #[test]
    fn double_initialization_creates_one_instance() {
        let built = Cell::new(0);
        let make_host = || -> Result<RecordingHost, GalleryError> {
            built.set(built.get() + 1);
            Ok(RecordingHost::with_surface())
        };

        let mut slot = None;
        for _ in 0..2 {
            let gallery = Gallery::ensure_initialized(
                &mut slot,
                Options::default(),
                make_host,
            );
            assert!(gallery.is_some());
        }
        assert_eq!(built.get(), 1);
        assert!(slot.is_some());
    }

    #[test]
    fn failed_initialization_leaves_slot_empty() {
        let mut slot: Option<Gallery<RecordingHost>> = None;
        let result = Gallery::ensure_initialized(
            &mut slot,
            Options::default(),
            || Ok(RecordingHost::default()),
        );
        assert!(result.is_none());
        assert!(slot.is_none());

        let result = Gallery::ensure_initialized(
            &mut slot,
            Options::default(),
            || Err(GalleryError::SurfaceMissing("no canvas".into())),
        );
        assert!(result.is_none());
        assert!(slot.is_none());
    }

    #[test]
    fn entering_glides_to_the_gallery_pose() {
        let mut gallery = gallery();
        let t0 = Instant::now();
        gallery.enter_gallery(t0);

        assert_eq!(gallery.mode(), GalleryMode::InGallery);
        assert!(gallery.is_transitioning());
        assert_eq!(
            gallery.host().statuses,
            vec!["미술관에 입장했습니다. WASD로 이동하세요!".to_owned()]
        );
        assert_eq!(gallery.host().focus_requests, 1);

        gallery.frame(t0);
        assert_eq!(gallery.camera().position, OVERVIEW);

        gallery.frame(t0 + ms(1000));
        let expected = OVERVIEW.lerp(INSIDE, 0.875);
        assert!((gallery.camera().position - expected).length() < 1e-5);

        gallery.frame(t0 + ms(2000));
        assert_eq!(gallery.camera().position, INSIDE);
        assert!(!gallery.is_transitioning());
        assert_eq!(gallery.host().rendered.len(), 3);
    }

    #[test]
    fn enter_command_from_keyboard() {
        let mut gallery = gallery();
        let response =
            gallery.handle_input(&key("Enter", true), Instant::now());
        assert_eq!(
            response,
            InputResponse::Command(GalleryCommand::EnterGallery)
        );
        assert_eq!(gallery.mode(), GalleryMode::InGallery);
    }

    #[test]
    fn held_keys_move_only_inside_the_gallery() {
        let mut gallery = gallery();
        let t0 = Instant::now();

        let _ = gallery.handle_input(&key("KeyW", true), t0);
        gallery.frame(t0);
        assert_eq!(gallery.camera().position, OVERVIEW);

        let now = walk_in(&mut gallery, t0);
        let _ = gallery.handle_input(&key("KeyW", true), now);
        gallery.frame(now + ms(16));
        let expected = INSIDE - Vec3::new(0.0, 0.0, 0.3);
        assert!((gallery.camera().position - expected).length() < 1e-5);
        assert_eq!(gallery.status(), "이동 중...");

        let _ = gallery.handle_input(&key("KeyW", false), now);
        let before = gallery.camera().position;
        gallery.frame(now + ms(32));
        assert_eq!(gallery.camera().position, before);
    }

    #[test]
    fn focus_loss_stops_movement() {
        let mut gallery = gallery();
        let now = walk_in(&mut gallery, Instant::now());

        let _ = gallery.handle_input(&key("KeyW", true), now);
        let _ = gallery.handle_input(&InputEvent::FocusLost, now);
        let before = gallery.camera().position;
        gallery.frame(now + ms(16));
        assert_eq!(gallery.camera().position, before);
    }

    #[test]
    fn moving_status_is_sent_once_while_moving() {
        let mut gallery = gallery();
        let now = walk_in(&mut gallery, Instant::now());
        let _ = gallery.handle_input(&key("KeyD", true), now);
        for i in 1..=5 {
            gallery.frame(now + ms(16 * i));
        }
        let moving = gallery
            .host()
            .statuses
            .iter()
            .filter(|s| s.as_str() == "이동 중...")
            .count();
        assert_eq!(moving, 1);
    }

    #[test]
    fn holding_enter_does_not_restart_the_glide() {
        let mut gallery = gallery();
        let t0 = Instant::now();
        let _ = gallery.handle_input(&key("Enter", true), t0);
        let held = InputEvent::KeyDown {
            code: "Enter".into(),
            repeat: true,
        };
        for i in 1..=60 {
            let now = t0 + ms(33 * i);
            let _ = gallery.handle_input(&held, now);
            gallery.frame(now);
        }

        gallery.frame(t0 + ms(2000));
        assert!(!gallery.is_transitioning());
        assert_eq!(gallery.camera().position, INSIDE);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut gallery = gallery();
        let t0 = Instant::now();
        let now = walk_in(&mut gallery, t0);
        let _ = gallery.handle_input(&key("KeyA", true), now);
        gallery.frame(now + ms(16));
        let orbit = GalleryCommand::Orbit {
            delta: Vec2::new(40.0, 25.0),
        };
        gallery.execute(orbit, now);

        gallery.reset_view();
        assert_overview(&gallery);
        assert_eq!(gallery.status(), "");
        gallery.reset_view();
        assert_overview(&gallery);

        // Keys held before the reset no longer move the camera.
        gallery.frame(now + ms(32));
        assert_eq!(gallery.camera().position, OVERVIEW);
    }

    #[test]
    fn reset_cancels_the_glide() {
        let mut gallery = gallery();
        let t0 = Instant::now();
        gallery.enter_gallery(t0);
        gallery.frame(t0 + ms(500));

        let response = gallery.handle_input(&key("Escape", true), t0 + ms(600));
        assert_eq!(response, InputResponse::Command(GalleryCommand::ResetView));

        gallery.frame(t0 + ms(1500));
        assert_overview(&gallery);
    }

    #[test]
    fn entering_twice_restarts_from_current_position() {
        let mut gallery = gallery();
        let t0 = Instant::now();
        gallery.enter_gallery(t0);
        gallery.frame(t0 + ms(1000));
        let midway = gallery.camera().position;

        gallery.enter_gallery(t0 + ms(1000));
        gallery.frame(t0 + ms(1000));
        assert!((gallery.camera().position - midway).length() < 1e-6);
        gallery.frame(t0 + ms(3000));
        assert_eq!(gallery.camera().position, INSIDE);
    }

    #[test]
    fn click_focuses_only_inside_the_gallery() {
        let mut gallery = gallery();
        let t0 = Instant::now();
        let _ = gallery.handle_input(&InputEvent::SurfaceClicked, t0);
        assert!(gallery.host().statuses.is_empty());
        assert_eq!(gallery.host().focus_requests, 0);

        let now = walk_in(&mut gallery, t0);
        let _ = gallery.handle_input(&InputEvent::SurfaceClicked, now);
        assert_eq!(gallery.status(), "키보드 활성화됨");
        assert_eq!(gallery.host().focus_requests, 2);
    }

    #[test]
    fn drag_orbits_without_moving() {
        let mut gallery = gallery();
        let t0 = Instant::now();
        let drag = [
            InputEvent::PointerDown { x: 100.0, y: 100.0 },
            InputEvent::PointerMove { x: 200.0, y: 100.0 },
        ];
        for event in &drag {
            let _ = gallery.handle_input(event, t0);
        }
        let _ = gallery.handle_input(&InputEvent::PointerUp, t0);

        assert!((gallery.camera().orientation.yaw + 0.5).abs() < 1e-6);
        assert_eq!(gallery.camera().position, OVERVIEW);
    }

    #[test]
    fn wheel_zooms_in_any_mode() {
        let mut gallery = gallery();
        let wheel = InputEvent::Wheel { delta_y: -100.0 };
        let _ = gallery.handle_input(&wheel, Instant::now());
        assert!((gallery.camera().position.z - 19.9).abs() < 1e-5);
    }

    #[test]
    fn render_failure_does_not_stop_ticks() {
        let mut host = RecordingHost::with_surface();
        host.failures_left = 1;
        let mut gallery = Gallery::new(host, Options::default()).unwrap();
        let t0 = Instant::now();
        gallery.frame(t0);
        gallery.frame(t0 + ms(16));
        assert_eq!(gallery.host().submissions, 2);
        assert_eq!(gallery.host().rendered, vec![OVERVIEW]);
    }

    #[test]
    fn zero_resize_is_ignored() {
        let mut gallery = gallery();
        gallery.resize(0, 600);
        assert!(gallery.host().viewport.is_none());
        gallery.resize(1024, 512);
        assert_eq!(gallery.host().viewport, Some((1024, 512)));
        assert!((gallery.camera().aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn late_photo_load_for_removed_frame_is_ignored() {
        let mut gallery = gallery();
        let (id, ticket) = gallery.add_photo("data:image/png;base64,AAAA");
        assert!(gallery.remove_photo(id).is_some());
        assert!(!gallery.finish_photo_load(ticket, Ok(())));
        assert!(gallery.frames().is_empty());
    }

    #[test]
    fn options_apply_to_a_running_gallery() {
        let mut gallery = gallery();
        let mut options = Options::default();
        options.navigation.move_speed = 1.0;
        options.camera.fovy = 60.0;
        gallery.set_options(options);
        assert_eq!(gallery.camera().fovy, 60.0);

        let now = walk_in(&mut gallery, Instant::now());
        let _ = gallery.handle_input(&key("Space", true), now);
        gallery.frame(now + ms(16));
        assert!((gallery.camera().position.y - 9.0).abs() < 1e-5);
    }
}
