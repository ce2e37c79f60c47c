use std::cell::RefCell;
use std::rc::Weak;

use riobravo_core::{Gesture, GestureHooks};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, KeyboardEvent};

use crate::state::DomPage;

const LOCK_CLASS: &str = "no-scroll";

fn intercepts(page: &Weak<RefCell<DomPage>>, gesture: &Gesture) -> bool {
    let Some(page) = page.upgrade() else {
        return false;
    };
    page.try_borrow()
        .map(|page| page.lightbox().scroll_lock().should_intercept(gesture))
        .unwrap_or(false)
}

fn warn_on_err(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("Failed to {}: {:?}", what, e);
    }
}

/// Window-level wheel / touchmove / keydown interceptors.
///
/// The closures live as long as the hooks; `attach`/`detach` only change
/// whether the window holds a reference to them.
pub struct DomGestureHooks {
    on_wheel: Closure<dyn FnMut(Event)>,
    on_touch: Closure<dyn FnMut(Event)>,
    on_key: Closure<dyn FnMut(KeyboardEvent)>,
}

impl DomGestureHooks {
    pub fn new(page: Weak<RefCell<DomPage>>) -> Self {
        let page_wheel = page.clone();
        let on_wheel = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            if intercepts(&page_wheel, &Gesture::Wheel) {
                ev.prevent_default();
                ev.stop_propagation();
            }
        });
        let page_touch = page.clone();
        let on_touch = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            if intercepts(&page_touch, &Gesture::TouchMove) {
                ev.prevent_default();
                ev.stop_propagation();
            }
        });
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
            if intercepts(&page, &Gesture::Key(ev.key())) {
                ev.prevent_default();
                ev.stop_propagation();
            }
        });
        Self { on_wheel, on_touch, on_key }
    }

    fn listeners(&self) -> [(&'static str, &js_sys::Function); 3] {
        [
            ("wheel", self.on_wheel.as_ref().unchecked_ref()),
            ("touchmove", self.on_touch.as_ref().unchecked_ref()),
            ("keydown", self.on_key.as_ref().unchecked_ref()),
        ]
    }
}

impl GestureHooks for DomGestureHooks {
    fn attach(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        // Non-passive, or the browser ignores preventDefault on wheel/touch.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        for (name, cb) in self.listeners() {
            if let Err(e) =
                window.add_event_listener_with_callback_and_add_event_listener_options(name, cb, &options)
            {
                log::warn!("Failed to add {} interceptor: {:?}", name, e);
            }
        }
    }

    fn detach(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        for (name, cb) in self.listeners() {
            if let Err(e) = window.remove_event_listener_with_callback(name, cb) {
                log::warn!("Failed to remove {} interceptor: {:?}", name, e);
            }
        }
    }

    fn mark_locked(&mut self) {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            warn_on_err("mark body locked", body.class_list().add_1(LOCK_CLASS));
        }
    }

    fn clear_locked(&mut self) {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(body) = doc.body() {
            warn_on_err("unmark body", body.class_list().remove_1(LOCK_CLASS));
            warn_on_err("clear body overflow", body.style().remove_property("overflow").map(|_| ()));
        }
        if let Some(root) = doc.document_element() {
            warn_on_err("unmark root", root.class_list().remove_1(LOCK_CLASS));
        }
    }
}
