use lagoon_core::{SceneError, Viewport, MAX_PIXEL_RATIO};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Resolve the scene canvas by id. Absence is a hard initialization error,
/// as is an element of the wrong kind.
pub fn scene_canvas(
    document: &web::Document,
    id: &str,
) -> Result<web::HtmlCanvasElement, SceneError> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| SceneError::MissingViewport(id.to_string()))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| SceneError::ContextUnsupported(format!("element `{id}` is not a canvas")))
}

/// Sample the host viewport: CSS size plus device pixel ratio.
pub fn current_viewport() -> Option<Viewport> {
    let window = web::window()?;
    let width = window.inner_width().ok()?.as_f64()? as f32;
    let height = window.inner_height().ok()?.as_f64()? as f32;
    Some(Viewport {
        width,
        height,
        pixel_ratio: window.device_pixel_ratio(),
    })
}

/// Keep the canvas backing store at CSS size x device pixel ratio, with the
/// ratio capped so dense displays don't quadruple the fragment load.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Touch capability, probed once at wiring time and never re-evaluated.
pub fn has_touch() -> bool {
    web::window()
        .map(|w| js_sys::Reflect::has(w.as_ref(), &"ontouchstart".into()).unwrap_or(false))
        .unwrap_or(false)
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
