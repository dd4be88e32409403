// ============================================================================
// EVENTS
// ============================================================================
// Listener closures are owned here instead of leaked with `forget()`. The app
// rebuilds the whole tree on every render, so it releases the previous
// render's closures right after clearing the old elements.
// ============================================================================

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

thread_local! {
    static LISTENERS: RefCell<Vec<Closure<dyn FnMut(Event)>>> = const { RefCell::new(Vec::new()) };
}

pub fn on_event<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    LISTENERS.with(|listeners| listeners.borrow_mut().push(closure));
    Ok(())
}

pub fn on_click<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    on_event(element, "click", move |event: Event| {
        if let Ok(event) = event.dyn_into::<MouseEvent>() {
            handler(event);
        }
    })
}

/// Free every listener registered so far. Only call once their elements are
/// out of the document, and never from inside a handler.
pub fn release_listeners() -> usize {
    LISTENERS.with(|listeners| {
        let released = listeners.borrow().len();
        listeners.borrow_mut().clear();
        released
    })
}
