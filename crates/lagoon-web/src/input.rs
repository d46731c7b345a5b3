//! Resize and move-event wiring.
//!
//! The move-event source is decided once, at wiring time: touch-capable
//! hosts get `touchmove`, everything else `pointermove`. Both paths feed
//! the scene's reserved pointer hook. The binding is never re-evaluated.

use lagoon_core::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub fn wire_listeners(scene: Rc<RefCell<SceneState>>, canvas: &web::HtmlCanvasElement) {
    wire_resize(scene.clone(), canvas.clone());
    if dom::has_touch() {
        wire_touch_move(scene);
    } else {
        wire_pointer_move(scene);
    }
}

fn wire_resize(scene: Rc<RefCell<SceneState>>, canvas: web::HtmlCanvasElement) {
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        if let Some(viewport) = dom::current_viewport() {
            scene.borrow_mut().resize(viewport);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointer_move(scene: Rc<RefCell<SceneState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        scene
            .borrow_mut()
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(document) = dom::window_document() {
        let _ = document
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touch_move(scene: Rc<RefCell<SceneState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            scene
                .borrow_mut()
                .pointer_moved(touch.client_x() as f32, touch.client_y() as f32);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(document) = dom::window_document() {
        let _ = document
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
