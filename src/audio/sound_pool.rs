use riobravo_core::{Clip, PageConfig, SoundPool};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// One preloaded `<audio>` element.
pub struct AudioClip {
    el: HtmlAudioElement,
}

impl AudioClip {
    pub fn load(src: &str) -> Result<Self, JsValue> {
        let el = HtmlAudioElement::new_with_src(src)?;
        el.set_preload("auto");
        el.set_volume(0.5);
        Ok(Self { el })
    }
}

impl Clip for AudioClip {
    fn restart(&self, volume: f64) {
        self.el.set_current_time(0.0);
        self.el.set_volume(volume);
        let promise = match self.el.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("Sound play failed: {:?}", e);
                return;
            }
        };
        // Autoplay policy rejects asynchronously; nothing waits on this.
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("Sound play failed: {:?}", e);
            }
        });
    }
}

/// Load `pool_size` copies of the configured sound. Slots that fail to load
/// are dropped so the pool only cycles through playable clips.
pub fn build_pool(config: &PageConfig) -> SoundPool<AudioClip> {
    let clips: Vec<AudioClip> = (0..config.pool_size)
        .filter_map(|i| match AudioClip::load(&config.sound_src) {
            Ok(clip) => Some(clip),
            Err(e) => {
                log::warn!("Failed to load sound slot {}: {:?}", i, e);
                None
            }
        })
        .collect();
    log::debug!("Sound pool ready: {} x {}", clips.len(), config.sound_src);
    SoundPool::new(clips)
}
