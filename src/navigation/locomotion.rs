use glam::Vec3;

use crate::camera::Camera;
use crate::input::MovementState;
use crate::options::NavigationOptions;

/// First-person movement from held keys.
///
/// Each held action contributes `move_speed` along its axis: camera
/// forward / back, camera right / left, world up / down. Contributions add
/// up without normalization, so diagonal movement is faster than moving
/// along a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Locomotion {
    move_speed: f32,
    min_height: f32,
}

impl Locomotion {
    /// Build from navigation options.
    #[must_use]
    pub fn new(options: &NavigationOptions) -> Self {
        Self {
            move_speed: options.move_speed,
            min_height: options.min_height,
        }
    }

    /// Lowest eye height after a step.
    #[must_use]
    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    /// Vector sum of the held actions' contributions.
    #[must_use]
    pub fn displacement(&self, held: MovementState, camera: &Camera) -> Vec3 {
        let forward = camera.forward();
        let right = camera.right();
        let speed = self.move_speed;

        let mut movement = Vec3::ZERO;
        if held.forward {
            movement += forward * speed;
        }
        if held.backward {
            movement -= forward * speed;
        }
        if held.left {
            movement -= right * speed;
        }
        if held.right {
            movement += right * speed;
        }
        if held.up {
            movement += Vec3::Y * speed;
        }
        if held.down {
            movement -= Vec3::Y * speed;
        }
        movement
    }

    /// Apply one tick of movement, clamping the eye to `min_height`.
    ///
    /// Returns `true` when any movement action was held, even if the
    /// contributions cancelled out.
    pub fn step(&self, held: MovementState, camera: &mut Camera) -> bool {
        if !held.any() {
            return false;
        }
        camera.position += self.displacement(held, camera);
        camera.position.y = camera.position.y.max(self.min_height);
        true
    }
}

impl Default for Locomotion {
    fn default() -> Self {
        Self::new(&NavigationOptions::default())
    }
}
