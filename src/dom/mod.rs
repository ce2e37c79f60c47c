pub mod effects;
pub mod fade_in;
pub mod listeners;
pub mod scroll_lock;
pub mod targets;

use crate::state::Runtime;

/// Attach every page behavior to the existing markup.
pub fn install(rt: &Runtime) {
    listeners::install(rt);
    if let Err(e) = fade_in::observe(rt.fade_threshold()) {
        log::warn!("Fade-in observer unavailable: {:?}", e);
    }
}
