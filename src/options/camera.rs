use std::f32::consts::FRAC_PI_3;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Radians of yaw / pitch per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// World units moved per wheel event.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Maximum absolute pitch in radians.
    #[schemars(skip)]
    pub pitch_limit: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            pitch_limit: FRAC_PI_3,
        }
    }
}
