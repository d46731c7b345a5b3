use web_sys as web;

use crate::dom;

const HINT_PANEL_ID: &str = "hint-panel";
const HINT_BUTTON_ID: &str = "hint-button";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_PANEL_ID) {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_PANEL_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(HINT_PANEL_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Toggle the hint panel from its button, when the page has one.
pub fn wire_hint_button(document: &web::Document) {
    dom::add_click_listener(document, HINT_BUTTON_ID, move || {
        if let Some(doc) = dom::window_document() {
            toggle(&doc);
        }
    });
}
