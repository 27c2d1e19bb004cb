use page_widgets_shared::{
    error::{Result, WidgetError},
    motion::{MotionSurface, REDUCED_MOTION_ATTRIBUTE},
    PreferenceStorage,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

/// First element matching `selector`. Invalid selectors count as absent.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Register `handler` for the rest of the page session.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        web_sys::console::error_1(&err);
    }
    closure.forget();
}

/// Same as [`listen`], registered as a passive listener.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        web_sys::console::error_1(&err);
    }
    closure.forget();
}

pub fn set_flag_attribute(element: &Element, name: &str, on: bool) {
    let _ = element.toggle_attribute_with_force(name, on);
}

/// `window.localStorage`, when the browser lets us have it.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// `None` in private modes and sandboxed frames that deny storage.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

fn storage_error(key: &str, err: wasm_bindgen::JsValue) -> WidgetError {
    WidgetError::Storage {
        key: key.to_string(),
        message: format!("{err:?}"),
    }
}

impl PreferenceStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|err| storage_error(key, err))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| storage_error(key, err))
    }
}

/// The `<html>` element, where page-wide flags live.
pub struct DocumentRoot(pub Element);

impl MotionSurface for DocumentRoot {
    fn set_reduced_motion(&mut self, reduced: bool) {
        set_flag_attribute(&self.0, REDUCED_MOTION_ATTRIBUTE, reduced);
    }
}
