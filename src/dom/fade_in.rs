use leptos::prelude::document;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Mark each `.fade-in` element `visible` the first time it scrolls into view.
pub fn observe(threshold: f64) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    if let Err(e) = entry.target().class_list().add_1("visible") {
                        log::warn!("Failed to reveal fade-in element: {:?}", e);
                    }
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // Lives for the whole page.
    callback.forget();

    let nodes = document().query_selector_all(".fade-in")?;
    let mut count = 0;
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&el);
            count += 1;
        }
    }
    log::debug!("Observing {} fade-in elements", count);
    Ok(())
}
