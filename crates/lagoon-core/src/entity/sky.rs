use glam::Vec3;

use crate::constants::{
    SUN_AZIMUTH_BASE, SUN_DRIFT_RATE, SUN_ELEVATION_BASE, SUN_ELEVATION_SWAY,
};
use crate::entity::FrameTick;

/// Sky dome parameters.
///
/// The sun direction tracks the water phase so the reflection reference
/// drifts with the surface. It must read the phase the water reached this
/// frame, which the registry order (water first, sky last) guarantees.
#[derive(Clone, Debug)]
pub struct Sky {
    sun: Vec3,
    elevation: f32,
    azimuth: f32,
}

impl Sky {
    pub fn new() -> Self {
        let mut sky = Self {
            sun: Vec3::Y,
            elevation: SUN_ELEVATION_BASE,
            azimuth: SUN_AZIMUTH_BASE,
        };
        sky.recompute_sun();
        sky
    }

    /// Unit direction toward the sun.
    pub fn sun(&self) -> Vec3 {
        self.sun
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn update(&mut self, tick: &FrameTick) {
        self.azimuth = SUN_AZIMUTH_BASE + tick.water_phase * SUN_DRIFT_RATE;
        self.elevation =
            SUN_ELEVATION_BASE + (tick.water_phase * 0.25).sin() * SUN_ELEVATION_SWAY;
        self.recompute_sun();
    }

    fn recompute_sun(&mut self) {
        let (sin_e, cos_e) = self.elevation.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.sun = Vec3::new(cos_e * cos_a, sin_e, cos_e * sin_a);
    }
}

impl Default for Sky {
    fn default() -> Self {
        Self::new()
    }
}
