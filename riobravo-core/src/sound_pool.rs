/// A playable clip handle. `restart` must not block: playback is
/// fire-and-forget and failures are the implementation's to log.
pub trait Clip {
    fn restart(&self, volume: f64);
}

/// Round-robin pool of identical clips so rapid triggers overlap instead of
/// cutting each other off.
pub struct SoundPool<C> {
    clips: Vec<C>,
    cursor: usize,
}

impl<C: Clip> SoundPool<C> {
    pub fn new(clips: Vec<C>) -> Self {
        Self { clips, cursor: 0 }
    }

    /// Restart the clip under the cursor at `volume` (clamped to 0..=1) and
    /// advance. Returns the slot used, or `None` for an empty pool.
    pub fn play(&mut self, volume: f64) -> Option<usize> {
        let slot = self.cursor;
        let clip = self.clips.get(slot)?;
        clip.restart(volume.clamp(0.0, 1.0));
        self.cursor = (slot + 1) % self.clips.len();
        Some(slot)
    }

    /// Slot the next `play` will reuse.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
