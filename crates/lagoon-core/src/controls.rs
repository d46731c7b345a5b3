//! Damped orbit interaction around a fixed target point.

use glam::Vec3;

use crate::camera::Camera;
use crate::constants::ORBIT_DAMPING;

/// Orbit controls pivoting around a fixed target.
///
/// Disabled by default; input is ignored until `set_enabled(true)`.
/// `update` must run once per frame regardless of the enabled state so
/// pending motion keeps decaying consistently if the controls are enabled
/// mid-flight.
pub struct OrbitControls {
    target: Vec3,
    enabled: bool,
    damping: f32,
    radius: f32,
    azimuth: f32,
    polar: f32,
    pending_azimuth: f32,
    pending_polar: f32,
}

impl OrbitControls {
    /// Derive the spherical orbit state from the camera's current eye
    /// position relative to `target`.
    pub fn new(camera: &Camera, target: Vec3) -> Self {
        let offset = camera.eye - target;
        let radius = offset.length().max(1e-6);
        let azimuth = offset.x.atan2(offset.z);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        Self {
            target,
            enabled: false,
            damping: ORBIT_DAMPING,
            radius,
            azimuth,
            polar,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Queue a rotation delta in radians. Ignored while disabled.
    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        if !self.enabled {
            return;
        }
        self.pending_azimuth += d_azimuth;
        self.pending_polar += d_polar;
    }

    /// Apply one damping step to the queued rotation and reposition the
    /// camera eye on the orbit sphere. Keeps the camera aimed at the target.
    pub fn update(&mut self, camera: &mut Camera) {
        let step_az = self.pending_azimuth * self.damping;
        let step_po = self.pending_polar * self.damping;
        self.pending_azimuth -= step_az;
        self.pending_polar -= step_po;
        self.azimuth += step_az;
        // keep the polar angle off the poles so look_at stays well defined
        self.polar = (self.polar + step_po).clamp(0.01, std::f32::consts::PI - 0.01);

        let sin_p = self.polar.sin();
        camera.eye = self.target
            + Vec3::new(
                self.radius * sin_p * self.azimuth.sin(),
                self.radius * self.polar.cos(),
                self.radius * sin_p * self.azimuth.cos(),
            );
        camera.target = self.target;
    }
}
