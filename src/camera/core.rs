use glam::{Mat4, Quat, Vec3};

/// Yaw / pitch pair driving the camera rotation.
///
/// The rotation is the Euler triple `(pitch, yaw, 0)` applied in X, Y, Z
/// order, i.e. `Rx(pitch) · Ry(yaw)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraOrientation {
    /// Rotation around the vertical axis in radians.
    pub yaw: f32,
    /// Rotation around the horizontal axis in radians.
    pub pitch: f32,
}

impl CameraOrientation {
    /// Looking straight down `-Z`.
    pub const ZERO: Self = Self {
        yaw: 0.0,
        pitch: 0.0,
    };

    /// Quaternion for this orientation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch) * Quat::from_rotation_y(self.yaw)
    }
}

/// Position plus orientation; used for default and reset poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// View orientation.
    pub orientation: CameraOrientation,
}

impl CameraPose {
    /// Pose at `position` looking down `-Z`.
    #[must_use]
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            orientation: CameraOrientation::ZERO,
        }
    }
}

/// Perspective camera defined by eye position, orientation and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Current yaw / pitch.
    pub orientation: CameraOrientation,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

const _: () = assert!(size_of::<CameraUniform>() == 96);

impl Camera {
    /// Quaternion rotating camera-local axes into world space.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.orientation.rotation()
    }

    /// Unit view direction (camera-local `-Z`).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Unit camera-local `+X` in world space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            orientation: self.orientation,
        }
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position)
            .inverse()
    }

    /// Projection matrix. `perspective_rh` uses the [0,1] depth range
    /// (wgpu/Vulkan convention).
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }
}

impl CameraUniform {
    /// Snapshot of the given camera's current state.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.build_matrix().to_cols_array_2d(),
            position: camera.position.to_array(),
            aspect: camera.aspect,
            forward: camera.forward().to_array(),
            fovy: camera.fovy,
        }
    }
}
