//! Composition root for the lagoon scene.

use glam::Vec3;

use crate::camera::Camera;
use crate::constants::{MAX_PIXEL_RATIO, ORBIT_TARGET};
use crate::controls::OrbitControls;
use crate::entity::{EntityRegistry, FrameTick, WallMesh};
use crate::error::SceneError;
use crate::events::{EventBus, EventKind, SceneEvent, Subscription};
use crate::playback::Playback;

/// Host viewport description, sampled at init and resize time only.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// Device pixel ratio with the upper bound applied.
    pub fn clamped_pixel_ratio(&self) -> f64 {
        self.pixel_ratio.min(MAX_PIXEL_RATIO)
    }

    /// Backing-store size in physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        let ratio = self.clamped_pixel_ratio();
        let w = (self.width as f64 * ratio) as u32;
        let h = (self.height as f64 * ratio) as u32;
        (w.max(1), h.max(1))
    }
}

/// Owns the camera, controls, playback machine, event channel and the
/// ordered entity registry, and advances them all by one frame at a time.
///
/// Construction is pure: no frame callback is scheduled and no listeners
/// are bound. The embedding layer drives `step` from its own frame source
/// and forwards resize/pointer input.
pub struct SceneState {
    camera: Camera,
    controls: OrbitControls,
    playback: Playback,
    events: EventBus,
    entities: EntityRegistry,
    viewport: Viewport,
    elapsed: f32,
}

impl SceneState {
    pub fn new(viewport: Viewport) -> Result<Self, SceneError> {
        if !(viewport.width > 0.0 && viewport.height > 0.0) {
            return Err(SceneError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let camera = Camera::new(viewport.width, viewport.height);
        let controls = OrbitControls::new(&camera, Vec3::from(ORBIT_TARGET));
        Ok(Self {
            camera,
            controls,
            playback: Playback::default(),
            events: EventBus::new(),
            entities: EntityRegistry::with_default_layout(),
            viewport,
            elapsed: 0.0,
        })
    }

    /// Advance one frame. Fixed order: the entity registry walk (water
    /// first, sky last), then the controls damping step. The renderer reads
    /// the resulting state afterwards.
    pub fn step(&mut self, elapsed_seconds: f32) -> FrameTick {
        self.elapsed = elapsed_seconds;
        let tick = self.entities.step(elapsed_seconds);
        self.controls.update(&mut self.camera);
        tick
    }

    /// Playback transition: blob 1..=5 turns that emitter on and every
    /// other one off; any other value turns all of them off.
    pub fn play(&mut self, blob: i32) {
        self.playback.play(blob);
        let active = self.playback.active();
        log::debug!("[playback] play({blob}) -> active={active:?}");
        self.entities.set_active_blob(active);
        self.events.emit(&SceneEvent::PlaybackChanged { active });
    }

    /// Recompute the camera for a new viewport. Stateless with respect to
    /// any previous size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_viewport(viewport.width, viewport.height);
        self.events.emit(&SceneEvent::Resized {
            width: viewport.width,
            height: viewport.height,
            fov_deg: self.camera.fov_deg,
        });
    }

    pub fn on(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&SceneEvent) + 'static,
    ) -> Subscription {
        self.events.on(kind, callback)
    }

    pub fn off(&mut self, subscription: Subscription) {
        self.events.off(subscription);
    }

    /// Called by the embedder once wiring is complete.
    pub fn mark_ready(&mut self) {
        log::info!("[scene] ready");
        self.events.emit(&SceneEvent::Ready);
    }

    /// Deliver the asynchronously loaded wall mesh.
    pub fn wall_loaded(&mut self, mesh: WallMesh) {
        let vertex_count = mesh.positions.len();
        self.entities.wall_mut().set_loaded(mesh);
        self.events.emit(&SceneEvent::WallLoaded { vertex_count });
    }

    /// Reserved extension point; move events from both input paths land
    /// here and do nothing yet.
    pub fn pointer_moved(&mut self, _x: f32, _y: f32) {}

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn entities(&self) -> &EntityRegistry {
        &self.entities
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
