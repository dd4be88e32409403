// ============================================================================
// ELEMENT BUILDER
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, MouseEvent};

use crate::dom::{append_child, create_element, on_click, on_event, set_attribute};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Replaces every class on the element
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    pub fn text(self, text: &str) -> Self {
        self.element.set_text_content(Some(text));
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    pub fn children(self, children: impl IntoIterator<Item = Element>) -> Result<Self, JsValue> {
        for child in children {
            append_child(&self.element, &child)?;
        }
        Ok(self)
    }

    pub fn on_click(self, handler: impl FnMut(MouseEvent) + 'static) -> Result<Self, JsValue> {
        on_click(&self.element, handler)?;
        Ok(self)
    }

    pub fn on(self, event_type: &str, handler: impl FnMut(Event) + 'static) -> Result<Self, JsValue> {
        on_event(&self.element, event_type, handler)?;
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}
