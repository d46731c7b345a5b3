use glam::Vec2;

use crate::entity::FrameTick;

/// Static platform. Lives in the registry so the layout stays declarative;
/// it carries no time-varying state and its update is a no-op.
#[derive(Clone, Debug)]
pub struct Base {
    position: Vec2,
}

impl Base {
    pub fn new(x: f32, z: f32) -> Self {
        Self {
            position: Vec2::new(x, z),
        }
    }

    /// (x, z) placement on the water plane.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn update(&mut self, _tick: &FrameTick) {}
}
