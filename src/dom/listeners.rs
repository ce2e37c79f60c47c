use std::cell::RefCell;

use leptos::ev;
use leptos::prelude::*;
use riobravo_core::{EventKind, PageEvent};
use web_sys::Event;

use crate::dom::effects;
use crate::dom::targets::{resolve, EventScope};
use crate::state::{MathRandom, Runtime};

thread_local! {
    static HANDLES: RefCell<Vec<WindowListenerHandle>> = RefCell::new(Vec::new());
}

fn dispatch(rt: &Runtime, kind: EventKind, event: PageEvent, scope: EventScope) {
    let out = match rt.page.try_borrow_mut() {
        Ok(mut page) => page.handle(event, &mut MathRandom),
        Err(_) => {
            log::warn!("Page busy, dropping {} event {:?}", kind.dom_name(), event);
            return;
        }
    };
    effects::apply(&out, &scope, &rt.sounds);
}

fn on_delegated(rt: &Runtime, kind: EventKind, ev: &Event) {
    let (hits, scope) = resolve(kind, ev);
    if hits.is_empty() {
        return;
    }
    let event = match kind {
        EventKind::Change => PageEvent::Change(hits),
        _ => PageEvent::Click(hits),
    };
    dispatch(rt, kind, event, scope);
}

/// Register the window-level listeners that feed the page controller.
pub fn install(rt: &Runtime) {
    let rt_click = rt.clone();
    let click = window_event_listener(ev::click, move |e| {
        on_delegated(&rt_click, EventKind::Click, &e);
    });

    let rt_change = rt.clone();
    let change = window_event_listener(ev::change, move |e| {
        on_delegated(&rt_change, EventKind::Change, &e);
    });

    let rt_key = rt.clone();
    let keydown = window_event_listener(ev::keydown, move |e| {
        let scope = EventScope {
            event: Some(e.clone().into()),
            ..EventScope::default()
        };
        dispatch(&rt_key, EventKind::KeyDown, PageEvent::KeyDown { key: e.key() }, scope);
    });

    let rt_scroll = rt.clone();
    let scroll = window_event_listener(ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        dispatch(&rt_scroll, EventKind::Scroll, PageEvent::Scroll { scroll_y }, EventScope::default());
    });

    HANDLES.with(|h| h.borrow_mut().extend([click, change, keydown, scroll]));
}
