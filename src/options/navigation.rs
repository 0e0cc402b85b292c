use std::time::Duration;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Locomotion speeds, the fixed poses and the entry transition.
pub struct NavigationOptions {
    /// World units per held key per frame.
    #[schemars(title = "Move Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub move_speed: f32,
    /// Lowest eye height locomotion may reach.
    #[schemars(title = "Minimum Height", range(min = 0.0, max = 10.0), extend("step" = 0.5))]
    pub min_height: f32,
    /// Eye position of the overview (initial and reset) pose.
    #[schemars(skip)]
    pub overview_position: [f32; 3],
    /// Where the entry transition lands.
    #[schemars(skip)]
    pub gallery_position: [f32; 3],
    /// Length of the entry transition in milliseconds.
    #[schemars(title = "Entry Duration (ms)", range(min = 0, max = 10000))]
    pub entry_duration_ms: u64,
    /// Curve used by the entry transition.
    #[schemars(skip)]
    pub entry_easing: EasingFunction,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            move_speed: 0.3,
            min_height: 2.0,
            overview_position: [0.0, 5.0, 20.0],
            gallery_position: [0.0, 8.0, 10.0],
            entry_duration_ms: 2000,
            entry_easing: EasingFunction::CubicOut,
        }
    }
}

impl NavigationOptions {
    /// Overview eye position as a vector.
    #[must_use]
    pub fn overview_position(&self) -> Vec3 {
        Vec3::from_array(self.overview_position)
    }

    /// Entry transition target as a vector.
    #[must_use]
    pub fn gallery_position(&self) -> Vec3 {
        Vec3::from_array(self.gallery_position)
    }

    /// Entry transition length.
    #[must_use]
    pub fn entry_duration(&self) -> Duration {
        Duration::from_millis(self.entry_duration_ms)
    }
}
