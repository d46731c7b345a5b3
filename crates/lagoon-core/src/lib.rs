//! Platform-neutral orchestration for the lagoon scene: camera and
//! field-of-view math, damped orbit controls, the playback state machine,
//! the typed event channel and the ordered entity registry. No `web-sys`,
//! no `wgpu`; everything here runs and tests on the host.

pub mod camera;
pub mod constants;
pub mod controls;
pub mod entity;
pub mod error;
pub mod events;
pub mod playback;
pub mod scene;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static MARKERS_WGSL: &str = include_str!("../shaders/markers.wgsl");
pub static WALL_WGSL: &str = include_str!("../shaders/wall.wgsl");

pub use camera::{fov_for_width, Camera};
pub use constants::*;
pub use controls::OrbitControls;
pub use entity::{
    Base, Blob, BlobPalette, Entity, EntityRegistry, FrameTick, Sky, Wall, WallMesh, WallStatus,
    Water,
};
pub use error::SceneError;
pub use events::{EventBus, EventKind, SceneEvent, Subscription};
pub use playback::Playback;
pub use scene::{SceneState, Viewport};
