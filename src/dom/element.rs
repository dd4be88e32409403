// ============================================================================
// ELEMENT HELPERS
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .create_element(tag)
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Drop all children. Their listeners stay registered until
/// `release_listeners`.
pub fn clear(element: &Element) {
    element.set_inner_html("");
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Focused control and caret, captured before a re-render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Focus {
    pub id: String,
    pub caret: Option<u32>,
}

pub fn capture_focus() -> Option<Focus> {
    let active = document()?.active_element()?;
    let id = active.id();
    if id.is_empty() {
        return None;
    }
    let caret = if let Some(input) = active.dyn_ref::<HtmlInputElement>() {
        input.selection_start().ok().flatten()
    } else if let Some(area) = active.dyn_ref::<HtmlTextAreaElement>() {
        area.selection_start().ok().flatten()
    } else {
        None
    };
    Some(Focus { id, caret })
}

pub fn restore_focus(focus: &Focus) {
    let Some(element) = get_element_by_id(&focus.id) else {
        return;
    };
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
    if let Some(caret) = focus.caret {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            let _ = input.set_selection_range(caret, caret);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            let _ = area.set_selection_range(caret, caret);
        }
    }
}
