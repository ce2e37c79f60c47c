use riobravo_core::routes::routes_for;
use riobravo_core::{EventKind, GalleryHit, GalleryImage, Hit, MatchMode, Route, RouteTarget};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlImageElement, MouseEvent};

/// Elements matched for one event, kept so effects can act on them.
#[derive(Default)]
pub struct EventScope {
    pub event: Option<Event>,
    pub gallery_item: Option<Element>,
    pub card: Option<Element>,
}

fn matched(route: &Route, target: &Element) -> Option<Element> {
    match route.mode {
        MatchMode::Closest => target.closest(route.selector).ok().flatten(),
        MatchMode::Exact => target
            .matches(route.selector)
            .unwrap_or(false)
            .then(|| target.clone()),
    }
}

fn gallery_hit(item: &Element, event: &Event) -> GalleryHit {
    let (x, y) = match event.dyn_ref::<MouseEvent>() {
        Some(mouse) => {
            let rect = item.get_bounding_client_rect();
            (mouse.client_x() as f64 - rect.left(), mouse.client_y() as f64 - rect.top())
        }
        None => (0.0, 0.0),
    };
    let image = item
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        .map(|img| GalleryImage { src: img.src(), alt: img.alt() });
    GalleryHit {
        x,
        y,
        image,
        caption: item.get_attribute("data-caption"),
    }
}

fn label_of(el: &Element) -> String {
    match el.dyn_ref::<HtmlElement>() {
        Some(html) => html.inner_text(),
        None => el.text_content().unwrap_or_default(),
    }
}

/// Walk the routes registered for `kind` and collect every match for the
/// event's target, in table order.
pub fn resolve(kind: EventKind, event: &Event) -> (Vec<Hit>, EventScope) {
    let mut scope = EventScope {
        event: Some(event.clone()),
        ..EventScope::default()
    };
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return (Vec::new(), scope);
    };

    let mut hits = Vec::new();
    for route in routes_for(kind) {
        let Some(el) = matched(route, &target) else {
            continue;
        };
        let hit = match route.target {
            RouteTarget::GalleryItem => {
                let hit = gallery_hit(&el, event);
                scope.gallery_item = Some(el);
                Hit::GalleryItem(hit)
            }
            RouteTarget::LightboxBackdrop => Hit::LightboxBackdrop,
            RouteTarget::LightboxClose => Hit::LightboxClose,
            RouteTarget::CastCard => {
                scope.card = Some(el);
                Hit::CastCard
            }
            RouteTarget::MenuToggle => Hit::MenuToggle,
            RouteTarget::NavLink => Hit::NavLink,
            RouteTarget::PollButton => Hit::PollButton {
                candidate: el.get_attribute("data-candidate"),
                label: label_of(&el),
            },
            RouteTarget::SepiaToggle => Hit::SepiaToggle,
        };
        hits.push(hit);
    }
    (hits, scope)
}
