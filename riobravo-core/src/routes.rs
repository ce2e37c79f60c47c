//! Dispatch table for delegated DOM events.
//!
//! The browser layer walks [`ROUTES`] for an event kind, resolves each
//! selector against the event target, and hands the resulting [`Hit`]s to
//! [`crate::page::Page::handle`] in table order.

use crate::gallery::GalleryHit;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    KeyDown,
    Change,
    Scroll,
}

impl EventKind {
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::KeyDown => "keydown",
            EventKind::Change => "change",
            EventKind::Scroll => "scroll",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// Target or any ancestor matches (`Element.closest`).
    Closest,
    /// Only the target itself matches.
    Exact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    GalleryItem,
    LightboxBackdrop,
    LightboxClose,
    CastCard,
    MenuToggle,
    NavLink,
    PollButton,
    SepiaToggle,
}

#[derive(Clone, Copy, Debug)]
pub struct Route {
    pub kind: EventKind,
    pub selector: &'static str,
    pub mode: MatchMode,
    pub target: RouteTarget,
}

const fn route(kind: EventKind, selector: &'static str, mode: MatchMode, target: RouteTarget) -> Route {
    Route { kind, selector, mode, target }
}

/// Order matters: a gallery click is handled before the lightbox close check
/// on the same event.
pub const ROUTES: &[Route] = &[
    route(EventKind::Click, ".gallery-item", MatchMode::Closest, RouteTarget::GalleryItem),
    route(EventKind::Click, "#lightbox", MatchMode::Exact, RouteTarget::LightboxBackdrop),
    route(EventKind::Click, ".lightbox-close", MatchMode::Exact, RouteTarget::LightboxClose),
    route(EventKind::Click, ".cast-card", MatchMode::Closest, RouteTarget::CastCard),
    route(EventKind::Click, ".menu-toggle", MatchMode::Closest, RouteTarget::MenuToggle),
    route(EventKind::Click, ".nav-links a", MatchMode::Closest, RouteTarget::NavLink),
    route(EventKind::Click, ".poll-btn", MatchMode::Closest, RouteTarget::PollButton),
    route(EventKind::Change, "#sepia-toggle", MatchMode::Exact, RouteTarget::SepiaToggle),
];

pub fn routes_for(kind: EventKind) -> impl Iterator<Item = &'static Route> {
    ROUTES.iter().filter(move |r| r.kind == kind)
}

/// A resolved route plus whatever the handler needs to know about the
/// matched element.
#[derive(Clone, Debug, PartialEq)]
pub enum Hit {
    GalleryItem(GalleryHit),
    LightboxBackdrop,
    LightboxClose,
    CastCard,
    MenuToggle,
    NavLink,
    PollButton {
        /// `data-candidate`, when the markup provides one.
        candidate: Option<String>,
        /// Visible label text.
        label: String,
    },
    SepiaToggle,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    Click(Vec<Hit>),
    KeyDown { key: String },
    Change(Vec<Hit>),
    Scroll { scroll_y: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_route_precedes_lightbox_close() {
        let clicks: Vec<RouteTarget> = routes_for(EventKind::Click).map(|r| r.target).collect();
        let gallery = clicks.iter().position(|t| *t == RouteTarget::GalleryItem);
        let backdrop = clicks.iter().position(|t| *t == RouteTarget::LightboxBackdrop);
        assert!(gallery < backdrop);
    }

    #[test]
    fn test_lightbox_close_routes_are_exact() {
        for route in ROUTES {
            if matches!(route.target, RouteTarget::LightboxBackdrop | RouteTarget::LightboxClose) {
                assert_eq!(route.mode, MatchMode::Exact);
            }
        }
    }

    #[test]
    fn test_each_target_routed_once() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.target, b.target);
            }
        }
    }

    #[test]
    fn test_dom_names() {
        assert_eq!(EventKind::Click.dom_name(), "click");
        assert_eq!(EventKind::KeyDown.dom_name(), "keydown");
    }

    #[test]
    fn test_change_routes() {
        let change: Vec<&str> = routes_for(EventKind::Change).map(|r| r.selector).collect();
        assert_eq!(change, vec!["#sepia-toggle"]);
    }
}
