use std::cell::RefCell;
use std::time::Duration;

use leptos::prelude::{document, set_timeout, window};
use riobravo_core::parallax::{background_offset, background_position};
use riobravo_core::{Decoration, Effect, PollResults, SoundPool};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlImageElement};

use crate::audio::sound_pool::AudioClip;
use crate::dom::targets::EventScope;

fn html_by_id(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn html_by_selector(selector: &str) -> Option<HtmlElement> {
    document()
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn spawn_decoration(item: &Element, deco: &Decoration) -> Result<(), JsValue> {
    let hole: HtmlElement = document().create_element("div")?.unchecked_into();
    hole.set_class_name(&deco.class);
    let style = hole.style();
    style.set_property("left", &deco.left())?;
    style.set_property("top", &deco.top())?;
    style.set_property("transform", &deco.transform())?;
    item.append_child(&hole)?;
    // Removing an already-detached node is a no-op.
    set_timeout(move || hole.remove(), Duration::from_millis(deco.lifetime_ms as u64));
    Ok(())
}

fn show_lightbox(src: &str, caption: Option<&str>) -> Result<(), JsValue> {
    if let Some(img) = document()
        .get_element_by_id("lightbox-img")
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    {
        img.set_src(src);
    }
    if let Some(cap) = html_by_id("lightbox-caption") {
        match caption {
            Some(text) => {
                cap.set_text_content(Some(text));
                cap.style().set_property("display", "block")?;
            }
            None => cap.style().set_property("display", "none")?,
        }
    }
    if let Some(overlay) = html_by_id("lightbox") {
        overlay.class_list().add_1("active")?;
    }
    Ok(())
}

fn hide_lightbox() -> Result<(), JsValue> {
    if let Some(overlay) = html_by_id("lightbox") {
        overlay.class_list().remove_1("active")?;
    }
    Ok(())
}

fn set_menu_open(open: bool) -> Result<(), JsValue> {
    if let Some(links) = html_by_selector(".nav-links") {
        links.class_list().toggle_with_force("active", open)?;
    }
    if let Some(toggle) = html_by_selector(".menu-toggle") {
        toggle.class_list().toggle_with_force("open", open)?;
    }
    Ok(())
}

fn apply_parallax(scroll_y: f64) -> Result<(), JsValue> {
    let nodes = document().query_selector_all("[data-parallax]")?;
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let speed = el.get_attribute("data-parallax").unwrap_or_default();
        if let Some(offset) = background_offset(scroll_y, &speed) {
            el.style()
                .set_property("background-position-y", &background_position(offset))?;
        }
    }
    Ok(())
}

fn show_poll_message(text: &str) -> Result<(), JsValue> {
    if let Some(msg) = html_by_id("poll-message") {
        msg.style().set_property("opacity", "1")?;
        msg.set_text_content(Some(text));
    }
    Ok(())
}

/// Fill every `.poll-btn` bar and label, then disable the buttons.
fn render_poll(results: &PollResults) -> Result<(), JsValue> {
    let buttons = document().query_selector_all(".poll-btn")?;
    for i in 0..buttons.length() {
        let Some(btn) = buttons.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        btn.set_onclick(None);
        btn.set_attribute("disabled", "")?;
        btn.style().set_property("cursor", "default")?;

        let key = btn.get_attribute("data-candidate");
        let Some(row) = results.row_for_button(key.as_deref(), &btn.inner_text()) else {
            log::debug!("Poll button {} matches no candidate", i);
            continue;
        };
        let percent = format!("{}%", row.percent);
        if let Some(bar) = btn
            .query_selector(".poll-bar")?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            bar.style().set_property("width", &percent)?;
        }
        if let Some(label) = btn.query_selector(".poll-percent")? {
            label.set_text_content(Some(percent.as_str()));
        }
    }
    Ok(())
}

fn apply_one(effect: &Effect, scope: &EventScope, sounds: &RefCell<SoundPool<AudioClip>>) -> Result<(), JsValue> {
    match effect {
        Effect::PreventDefault => {
            if let Some(ev) = &scope.event {
                ev.prevent_default();
            }
        }
        Effect::PlaySound { volume } => {
            sounds.borrow_mut().play(*volume);
        }
        Effect::SpawnDecoration(deco) => {
            if let Some(item) = &scope.gallery_item {
                spawn_decoration(item, deco)?;
            }
        }
        Effect::ShowLightbox { src, caption } => show_lightbox(src, caption.as_deref())?,
        Effect::HideLightbox => hide_lightbox()?,
        Effect::ToggleSepia => {
            if let Some(body) = document().body() {
                body.class_list().toggle("sepia-mode")?;
            }
        }
        Effect::SetMenuOpen(open) => set_menu_open(*open)?,
        Effect::ToggleCardFlip => {
            if let Some(card) = &scope.card {
                card.class_list().toggle("flipped")?;
            }
        }
        Effect::ApplyParallax { scroll_y } => apply_parallax(*scroll_y)?,
        Effect::Alert(text) => window().alert_with_message(text)?,
        Effect::PollMessage(text) => show_poll_message(text)?,
        Effect::RenderPoll(results) => render_poll(results)?,
    }
    Ok(())
}

/// Apply effects in order. A failing effect is logged and the rest still run.
pub fn apply(effects: &[Effect], scope: &EventScope, sounds: &RefCell<SoundPool<AudioClip>>) {
    for effect in effects {
        if let Err(e) = apply_one(effect, scope, sounds) {
            log::warn!("Failed to apply {:?}: {:?}", effect, e);
        }
    }
}
