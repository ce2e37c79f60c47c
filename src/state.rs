use std::cell::RefCell;
use std::rc::{Rc, Weak};

use riobravo_core::{Entropy, Page, PageConfig, SoundPool};

use crate::audio::sound_pool::{build_pool, AudioClip};
use crate::dom::scroll_lock::DomGestureHooks;
use crate::storage::LocalVoteStore;

pub type DomPage = Page<DomGestureHooks, LocalVoteStore>;

/// Everything the event listeners share. Built once at start-up.
#[derive(Clone)]
pub struct Runtime {
    pub page: Rc<RefCell<DomPage>>,
    pub sounds: Rc<RefCell<SoundPool<AudioClip>>>,
}

impl Runtime {
    pub fn new(config: PageConfig) -> Self {
        let sounds = Rc::new(RefCell::new(build_pool(&config)));
        let store = LocalVoteStore::new(&config.voted_key);
        // Scroll interceptors read the lock state back through a weak handle.
        let page = Rc::new_cyclic(|weak: &Weak<RefCell<DomPage>>| {
            RefCell::new(Page::new(config, DomGestureHooks::new(weak.clone()), store))
        });
        Self { page, sounds }
    }

    pub fn fade_threshold(&self) -> f64 {
        self.page.borrow().config().fade_threshold
    }
}

/// `Math.random()`.
pub struct MathRandom;

impl Entropy for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
