use page_widgets_shared::motion::{mirror_reduced_motion, REDUCED_MOTION_QUERY};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, MediaQueryList};

use crate::dom::DocumentRoot;

/// Mirror `prefers-reduced-motion` onto the document and follow changes.
pub fn mount(document: &Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    let Some(query) = web_sys::window()
        .and_then(|win| win.match_media(REDUCED_MOTION_QUERY).ok().flatten())
    else {
        return;
    };

    let mut surface = DocumentRoot(root);
    mirror_reduced_motion(&mut surface, query.matches());

    let watched = query.clone();
    let on_change = Closure::<dyn FnMut()>::new(move || {
        mirror_reduced_motion(&mut surface, watched.matches());
    });
    subscribe(&query, &on_change);
    on_change.forget();
}

// Older engines only know `MediaQueryList.addListener`.
fn subscribe(query: &MediaQueryList, on_change: &Closure<dyn FnMut()>) {
    let callback = on_change.as_ref().unchecked_ref();
    if query.add_event_listener_with_callback("change", callback).is_err() {
        let _ = query.add_listener_with_opt_callback(Some(callback));
    }
}
