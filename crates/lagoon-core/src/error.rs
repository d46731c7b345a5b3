use thiserror::Error;

/// Initialization and asset failures surfaced to the embedder.
///
/// Missing viewport and unsupported rendering context are hard errors; a
/// non-interactive embedding must be able to distinguish them instead of
/// getting a silently degraded scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("viewport element `{0}` not found in the host document")]
    MissingViewport(String),
    #[error("viewport has invalid dimensions {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("rendering context unsupported: {0}")]
    ContextUnsupported(String),
    #[error("asset decode failed: {0}")]
    AssetDecode(String),
}
