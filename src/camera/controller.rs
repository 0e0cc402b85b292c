use glam::{Vec2, Vec3};

use crate::camera::core::{Camera, CameraOrientation, CameraPose};
use crate::options::CameraOptions;

/// Orbit-drag and wheel-zoom controller around a free-standing camera.
///
/// Orbit rotates the camera in place (the position does not change); zoom
/// slides it along its view direction.
#[derive(Debug, Clone)]
pub struct CameraController {
    /// The controlled camera.
    pub camera: Camera,
    rotate_speed: f32,
    zoom_speed: f32,
    pitch_limit: f32,
}

impl CameraController {
    /// Build a controller whose camera starts at `pose`.
    #[must_use]
    pub fn new(options: &CameraOptions, pose: CameraPose, aspect: f32) -> Self {
        let camera = Camera {
            position: pose.position,
            orientation: pose.orientation,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut controller = Self {
            camera,
            rotate_speed: options.rotate_speed,
            zoom_speed: options.zoom_speed,
            pitch_limit: options.pitch_limit,
        };
        controller.clamp_pitch();
        controller
    }

    /// Re-read projection and sensitivity settings.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.rotate_speed = options.rotate_speed;
        self.zoom_speed = options.zoom_speed;
        self.pitch_limit = options.pitch_limit;
        self.clamp_pitch();
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height as f32;
    }

    /// Rotate by a pointer-drag delta in pixels.
    ///
    /// Dragging right turns right, dragging down looks down. Pitch is clamped
    /// to `±pitch_limit` after every update.
    pub fn orbit(&mut self, delta: Vec2) {
        self.camera.orientation.yaw -= delta.x * self.rotate_speed;
        self.camera.orientation.pitch -= delta.y * self.rotate_speed;
        self.clamp_pitch();
    }

    /// Slide along the view direction for one wheel notch.
    ///
    /// Wheel deltas follow the DOM convention: positive scrolls down and
    /// backs the camera away, anything else moves it forward. There is no
    /// distance limit.
    pub fn zoom(&mut self, delta_y: f32) {
        let forward = self.camera.forward();
        let step = if delta_y > 0.0 {
            -self.zoom_speed
        } else {
            self.zoom_speed
        };
        self.camera.position += forward * step;
    }

    /// Move to `pose` immediately.
    pub fn snap_to(&mut self, pose: CameraPose) {
        self.camera.position = pose.position;
        self.camera.orientation = pose.orientation;
        self.clamp_pitch();
    }

    /// Overwrite the eye position, leaving orientation untouched.
    pub fn set_position(&mut self, position: Vec3) {
        self.camera.position = position;
    }

    /// Current orientation.
    #[must_use]
    pub fn orientation(&self) -> CameraOrientation {
        self.camera.orientation
    }

    fn clamp_pitch(&mut self) {
        let limit = self.pitch_limit.abs();
        self.camera.orientation.pitch =
            self.camera.orientation.pitch.clamp(-limit, limit);
    }
}
