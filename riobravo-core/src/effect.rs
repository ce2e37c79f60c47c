use crate::gallery::Decoration;
use crate::poll::PollResults;

/// A render instruction produced by [`crate::page::Page::handle`].
///
/// Effects that act on "the" card or item refer to the element resolved for
/// the event being handled.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Cancel the browser's default action for the current event.
    PreventDefault,
    PlaySound { volume: f64 },
    /// Append to the clicked gallery item, remove after `lifetime_ms`.
    SpawnDecoration(Decoration),
    ShowLightbox { src: String, caption: Option<String> },
    HideLightbox,
    ToggleSepia,
    SetMenuOpen(bool),
    ToggleCardFlip,
    ApplyParallax { scroll_y: f64 },
    /// Blocking notice, e.g. a repeat vote.
    Alert(String),
    PollMessage(String),
    RenderPoll(PollResults),
}
