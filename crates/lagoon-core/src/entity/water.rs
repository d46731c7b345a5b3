use crate::constants::WATER_PHASE_STEP;
use crate::entity::FrameTick;

/// Animated water surface.
///
/// The shader phase advances by a fixed step per rendered frame rather than
/// by the frame's elapsed time; two frames always move the surface by the
/// same amount no matter how far apart they were.
#[derive(Clone, Debug, Default)]
pub struct Water {
    phase: f32,
}

impl Water {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn update(&mut self, _tick: &FrameTick) {
        self.phase += WATER_PHASE_STEP;
    }
}
