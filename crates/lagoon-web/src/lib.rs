#![cfg(target_arch = "wasm32")]
//! WASM front-end for the lagoon scene: canvas discovery, WebGPU bring-up,
//! listener wiring and the frame loop. All scene logic lives in
//! `lagoon-core`; this crate only drives it.

use lagoon_core::{EventKind, SceneEvent, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod assets;
mod dom;
mod frame;
mod input;
mod overlay;
mod render;

const SCENE_CANVAS_ID: &str = "scene";

thread_local! {
    static SCENE: RefCell<Option<Rc<RefCell<SceneState>>>> = RefCell::new(None);
    static LOOP: RefCell<Option<frame::LoopHandle>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lagoon-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] start already triggered; ignoring");
        return Ok(());
    }

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

/// Two phases: construct the scene (pure, no side effects), then wire the
/// renderer, listeners, asset fetch and frame loop around it.
async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::scene_canvas(&document, SCENE_CANVAS_ID)?;
    dom::sync_canvas_backing_size(&canvas);

    let viewport = dom::current_viewport()
        .ok_or_else(|| anyhow::anyhow!("no window metrics"))?;
    let scene = Rc::new(RefCell::new(SceneState::new(viewport)?));
    SCENE.with(|s| *s.borrow_mut() = Some(scene.clone()));

    let gpu = frame::init_gpu(&canvas).await?;

    scene.borrow_mut().on(EventKind::PlaybackChanged, |ev| {
        if let SceneEvent::PlaybackChanged { active } = ev {
            log::info!("[playback] active emitter: {active:?}");
        }
    });
    scene.borrow_mut().on(EventKind::WallLoaded, |ev| {
        if let SceneEvent::WallLoaded { vertex_count } = ev {
            log::info!("[scene] wall in place ({vertex_count} vertices)");
        }
    });

    overlay::wire_hint_button(&document);
    input::wire_listeners(scene.clone(), &canvas);
    assets::spawn_wall_fetch(scene.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene.clone(),
        gpu,
        canvas,
    )));
    let handle = frame::start_loop(frame_ctx);
    LOOP.with(|l| *l.borrow_mut() = Some(handle));

    scene.borrow_mut().mark_ready();
    Ok(())
}

/// Playback command from the host page (audio/UI triggers). Total over any
/// integer: 1..=5 activates that emitter, anything else turns all off.
#[wasm_bindgen]
pub fn play(blob: i32) {
    SCENE.with(|s| {
        if let Some(scene) = s.borrow().as_ref() {
            scene.borrow_mut().play(blob);
        }
    });
}

/// Enable or disable the damped orbit interaction.
#[wasm_bindgen]
pub fn set_orbit_enabled(enabled: bool) {
    SCENE.with(|s| {
        if let Some(scene) = s.borrow().as_ref() {
            scene.borrow_mut().controls_mut().set_enabled(enabled);
        }
    });
}

/// Stop the frame loop and drop the scene. The RAF chain stops scheduling
/// at the next tick.
#[wasm_bindgen]
pub fn shutdown() {
    LOOP.with(|l| {
        if let Some(handle) = l.borrow_mut().take() {
            handle.stop();
        }
    });
    SCENE.with(|s| s.borrow_mut().take());
    log::info!("[init] shut down");
}
