//! Perspective camera and the viewport-responsive field-of-view map.

use glam::{Mat4, Vec3};

use crate::constants::{
    CAMERA_EYE, CAMERA_FAR, CAMERA_NEAR, FOV_NARROW_DEG, FOV_NARROW_WIDTH, FOV_WIDE_DEG,
    FOV_WIDE_WIDTH, ORBIT_TARGET,
};

/// Map the viewport width (CSS pixels) to a vertical field of view in
/// degrees. Narrow viewports get a wide angle, wide viewports a narrow one,
/// with a linear-ish blend between the clamp points.
///
/// The percent term divides by 1920 rather than the 1560-wide span between
/// the clamps, so the blend never reaches the wide clamp from inside the
/// open interval; changing the divisor alters every mid-range framing.
pub fn fov_for_width(width: f32) -> f32 {
    if width <= FOV_NARROW_WIDTH {
        FOV_NARROW_DEG
    } else if width >= FOV_WIDE_WIDTH {
        FOV_WIDE_DEG
    } else {
        let percent = (width - FOV_NARROW_WIDTH) * 100.0 / FOV_WIDE_WIDTH;
        FOV_WIDE_DEG + ((100.0 - percent) * (FOV_NARROW_DEG - FOV_WIDE_DEG) / 100.0)
    }
}

/// Right-handed perspective camera.
///
/// `fov_deg` is derived state: it is recomputed from the viewport width on
/// every resize and must never be set independently.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            eye: Vec3::from(CAMERA_EYE),
            target: Vec3::from(ORBIT_TARGET),
            up: Vec3::Y,
            fov_deg: fov_for_width(width),
            aspect: width / height.max(1.0),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    /// Recompute FOV and aspect for a new viewport size. Stateless: the
    /// result depends only on the dimensions passed in.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.fov_deg = fov_for_width(width);
        self.aspect = width / height.max(1.0);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
