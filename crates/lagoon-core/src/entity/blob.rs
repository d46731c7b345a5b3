use glam::Vec2;

use crate::constants::{BLOB_BOB_AMPLITUDE, BLOB_BOB_FREQ, BLOB_PULSE_FREQ, BLOB_SETTLE};
use crate::entity::FrameTick;

/// Color family a blob renders with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlobPalette {
    Green,
    Gold,
}

impl BlobPalette {
    pub fn rgb(self) -> [f32; 3] {
        match self {
            BlobPalette::Green => [0.18, 0.86, 0.44],
            BlobPalette::Gold => [0.98, 0.76, 0.18],
        }
    }
}

/// Toggleable animated emitter.
///
/// While on, `update` drives a bob/pulse cycle from the frame's elapsed
/// time; while off the motion settles back toward rest. The on/off
/// capability is driven solely by the playback machine.
#[derive(Clone, Debug)]
pub struct Blob {
    position: Vec2,
    palette: BlobPalette,
    active: bool,
    bob: f32,
    pulse: f32,
}

impl Blob {
    pub fn new(x: f32, z: f32, palette: BlobPalette) -> Self {
        Self {
            position: Vec2::new(x, z),
            palette,
            active: false,
            bob: 0.0,
            pulse: 0.0,
        }
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn palette(&self) -> BlobPalette {
        self.palette
    }

    /// (x, z) placement on the water plane.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Vertical offset above the hover height, world units.
    pub fn bob(&self) -> f32 {
        self.bob
    }

    /// Emissive drive in [0, 1].
    pub fn pulse(&self) -> f32 {
        self.pulse
    }

    pub fn update(&mut self, tick: &FrameTick) {
        if self.active {
            self.bob = (tick.elapsed * BLOB_BOB_FREQ).sin() * BLOB_BOB_AMPLITUDE;
            self.pulse = 0.5 + 0.5 * (tick.elapsed * BLOB_PULSE_FREQ).sin();
        } else {
            self.bob *= BLOB_SETTLE;
            self.pulse *= BLOB_SETTLE;
        }
    }
}
