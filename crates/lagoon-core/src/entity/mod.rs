//! Animated scene entities and the ordered registry that drives them.

mod base;
mod blob;
mod sky;
mod wall;
mod water;

pub use base::Base;
pub use blob::{Blob, BlobPalette};
pub use sky::Sky;
pub use wall::{Wall, WallMesh, WallStatus};
pub use water::Water;

use crate::constants::{BASE_POSITIONS, BLOB_POSITIONS};

/// Per-frame context handed to every entity.
///
/// The same sampled `elapsed` value is used for the whole frame.
/// `water_phase` is refreshed as soon as the water entry has advanced, so
/// entities later in the registry read the value the water reached this
/// frame, not last frame's.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameTick {
    pub elapsed: f32,
    pub water_phase: f32,
}

/// One animated entity. The registry holds these in update order.
pub enum Entity {
    Water(Water),
    Base(Base),
    Blob(Blob),
    Wall(Wall),
    Sky(Sky),
}

impl Entity {
    pub fn update(&mut self, tick: &FrameTick) {
        match self {
            Entity::Water(w) => w.update(tick),
            Entity::Base(b) => b.update(tick),
            Entity::Blob(b) => b.update(tick),
            Entity::Wall(w) => w.update(tick),
            Entity::Sky(s) => s.update(tick),
        }
    }
}

/// Ordered entity collection.
///
/// Declared order is Water, Base x5, Blob x5, Wall, Sky: a single in-order
/// walk advances the water surface before the sky reads it. That ordering is
/// an invariant, not a convenience.
pub struct EntityRegistry {
    entries: Vec<Entity>,
}

impl EntityRegistry {
    pub fn with_default_layout() -> Self {
        let mut entries = Vec::with_capacity(3 + BASE_POSITIONS.len() + BLOB_POSITIONS.len());
        entries.push(Entity::Water(Water::new()));
        for pos in BASE_POSITIONS {
            entries.push(Entity::Base(Base::new(pos[0], pos[1])));
        }
        for (i, pos) in BLOB_POSITIONS.iter().enumerate() {
            let palette = if i < 3 {
                BlobPalette::Green
            } else {
                BlobPalette::Gold
            };
            entries.push(Entity::Blob(Blob::new(pos[0], pos[1], palette)));
        }
        entries.push(Entity::Wall(Wall::new()));
        entries.push(Entity::Sky(Sky::new()));
        Self { entries }
    }

    /// Walk the registry once in declared order with a shared tick.
    pub fn step(&mut self, elapsed: f32) -> FrameTick {
        let mut tick = FrameTick {
            elapsed,
            water_phase: self.water().phase(),
        };
        for entry in self.entries.iter_mut() {
            entry.update(&tick);
            if let Entity::Water(w) = entry {
                tick.water_phase = w.phase();
            }
        }
        tick
    }

    pub fn entries(&self) -> &[Entity] {
        &self.entries
    }

    pub fn water(&self) -> &Water {
        self.entries
            .iter()
            .find_map(|e| match e {
                Entity::Water(w) => Some(w),
                _ => None,
            })
            .expect("registry always holds a water entry")
    }

    pub fn sky(&self) -> &Sky {
        self.entries
            .iter()
            .find_map(|e| match e {
                Entity::Sky(s) => Some(s),
                _ => None,
            })
            .expect("registry always holds a sky entry")
    }

    pub fn wall(&self) -> &Wall {
        self.entries
            .iter()
            .find_map(|e| match e {
                Entity::Wall(w) => Some(w),
                _ => None,
            })
            .expect("registry always holds a wall entry")
    }

    pub fn wall_mut(&mut self) -> &mut Wall {
        self.entries
            .iter_mut()
            .find_map(|e| match e {
                Entity::Wall(w) => Some(w),
                _ => None,
            })
            .expect("registry always holds a wall entry")
    }

    pub fn bases(&self) -> impl Iterator<Item = &Base> {
        self.entries.iter().filter_map(|e| match e {
            Entity::Base(b) => Some(b),
            _ => None,
        })
    }

    pub fn blobs(&self) -> impl Iterator<Item = &Blob> {
        self.entries.iter().filter_map(|e| match e {
            Entity::Blob(b) => Some(b),
            _ => None,
        })
    }

    /// Flip blob capabilities so that exactly the blob in `active` (1-based
    /// slot) is on, or all are off for `None`.
    pub fn set_active_blob(&mut self, active: Option<usize>) {
        let mut slot = 0;
        for entry in self.entries.iter_mut() {
            if let Entity::Blob(b) = entry {
                slot += 1;
                b.set_active(active == Some(slot));
            }
        }
    }
}
