/// Keys whose default action scrolls the page.
pub const SCROLL_KEYS: [&str; 7] = ["ArrowUp", "ArrowDown", " ", "PageUp", "PageDown", "Home", "End"];

/// A user gesture that may scroll the document.
#[derive(Clone, Debug, PartialEq)]
pub enum Gesture {
    Wheel,
    TouchMove,
    Key(String),
}

impl Gesture {
    pub fn is_scroll(&self) -> bool {
        match self {
            Gesture::Wheel | Gesture::TouchMove => true,
            Gesture::Key(key) => SCROLL_KEYS.contains(&key.as_str()),
        }
    }
}

/// Side of the scroll lock that touches the outside world: listener
/// registration and the `no-scroll` marker.
pub trait GestureHooks {
    /// Register the wheel, touch-move and key interceptors.
    fn attach(&mut self);
    /// Unregister everything `attach` registered.
    fn detach(&mut self);
    fn mark_locked(&mut self);
    fn clear_locked(&mut self);
}

/// Suppresses scroll gestures while an overlay is open, without touching
/// layout-affecting styles.
///
/// `active` and `attached` move together: interceptors are only registered
/// while the lock is active, and never twice.
pub struct ScrollLock<H> {
    active: bool,
    attached: bool,
    hooks: H,
}

impl<H: GestureHooks> ScrollLock<H> {
    pub fn new(hooks: H) -> Self {
        Self { active: false, attached: false, hooks }
    }

    /// Start swallowing scroll gestures.
    pub fn disable(&mut self) {
        self.active = true;
        if !self.attached {
            self.hooks.attach();
            self.attached = true;
        }
        self.hooks.mark_locked();
    }

    /// Let scroll gestures through again.
    pub fn enable(&mut self) {
        self.active = false;
        if self.attached {
            self.hooks.detach();
            self.attached = false;
        }
        self.hooks.clear_locked();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether an interceptor receiving `gesture` should cancel it.
    pub fn should_intercept(&self, gesture: &Gesture) -> bool {
        self.active && gesture.is_scroll()
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }
}
