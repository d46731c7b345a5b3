use crate::entity::FrameTick;

/// CPU-side mesh data decoded from the wall asset.
#[derive(Clone, Debug, Default)]
pub struct WallMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

#[derive(Clone, Debug, Default)]
pub enum WallStatus {
    #[default]
    Pending,
    Loaded(WallMesh),
}

/// Wall model, delivered asynchronously by the embedding layer's loader.
/// Stays `Pending` forever if the load fails; the scene renders without it.
#[derive(Clone, Debug, Default)]
pub struct Wall {
    status: WallStatus,
}

impl Wall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, _tick: &FrameTick) {}

    pub fn set_loaded(&mut self, mesh: WallMesh) {
        self.status = WallStatus::Loaded(mesh);
    }

    pub fn mesh(&self) -> Option<&WallMesh> {
        match &self.status {
            WallStatus::Loaded(mesh) => Some(mesh),
            WallStatus::Pending => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.status, WallStatus::Loaded(_))
    }
}
