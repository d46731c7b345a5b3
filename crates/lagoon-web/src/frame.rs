//! The self-sustaining requestAnimationFrame loop.

use instant::Instant;
use lagoon_core::{SceneError, SceneState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;

/// Per-frame driving state: the scene, the GPU surface and the monotonic
/// clock elapsed time is sampled from once per frame.
pub struct FrameContext {
    scene: Rc<RefCell<SceneState>>,
    gpu: render::GpuState<'static>,
    canvas: web::HtmlCanvasElement,
    started_at: Instant,
}

impl FrameContext {
    pub fn new(
        scene: Rc<RefCell<SceneState>>,
        gpu: render::GpuState<'static>,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        Self {
            scene,
            gpu,
            canvas,
            started_at: Instant::now(),
        }
    }

    /// One frame: sample elapsed time once, advance the scene, keep the
    /// surface sized to the canvas backing store, render.
    pub fn frame(&mut self) {
        let elapsed = self.started_at.elapsed().as_secs_f32();
        let tick = self.scene.borrow_mut().step(elapsed);

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);

        let scene = self.scene.borrow();
        if let Err(e) = self.gpu.render(&scene, &tick) {
            log::error!("render error: {e:?}");
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Result<render::GpuState<'static>, SceneError> {
    // leak a canvas clone to satisfy 'static lifetime for the surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas).await
}

/// Stops the loop at the next tick; scheduling simply ceases.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }
}

/// Start the recurring frame callback. The next frame is requested before
/// frame work runs, so an error raised while rendering cannot silently stop
/// future scheduling.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let handle = LoopHandle {
        running: running.clone(),
    };

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            return;
        }
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
        frame_ctx_tick.borrow_mut().frame();
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    handle
}
