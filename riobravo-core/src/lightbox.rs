use crate::effect::Effect;
use crate::scroll_lock::{GestureHooks, ScrollLock};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { src: String, caption: Option<String> },
}

/// The single overlay image viewer. Owns the scroll lock so that an open
/// lightbox always implies locked scrolling.
pub struct Lightbox<H> {
    state: LightboxState,
    scroll_lock: ScrollLock<H>,
}

impl<H: GestureHooks> Lightbox<H> {
    pub fn new(scroll_lock: ScrollLock<H>) -> Self {
        Self {
            state: LightboxState::Closed,
            scroll_lock,
        }
    }

    /// Show `src`. An empty caption hides the caption region.
    pub fn open(&mut self, src: &str, caption: Option<&str>) -> Effect {
        log::info!("Opening lightbox: {}", src);
        let caption = caption.filter(|c| !c.is_empty()).map(str::to_string);
        self.state = LightboxState::Open {
            src: src.to_string(),
            caption: caption.clone(),
        };
        self.scroll_lock.disable();
        Effect::ShowLightbox {
            src: src.to_string(),
            caption,
        }
    }

    /// Hide the overlay. Re-releases the scroll lock even when already closed.
    pub fn close(&mut self) -> Effect {
        log::info!("Closing lightbox");
        self.state = LightboxState::Closed;
        self.scroll_lock.enable();
        Effect::HideLightbox
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    pub fn scroll_lock(&self) -> &ScrollLock<H> {
        &self.scroll_lock
    }
}
