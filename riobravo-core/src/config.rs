use serde::Deserialize;

/// One poll candidate and the count it starts with.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PollSeed {
    pub name: String,
    pub votes: u32,
}

impl PollSeed {
    pub fn new(name: &str, votes: u32) -> Self {
        Self { name: name.to_string(), votes }
    }
}

/// Tunables for the page runtime.
///
/// Every field has a default matching the shipped page, so a config block only
/// needs to name what it overrides.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Audio asset loaded into every pool slot.
    pub sound_src: String,
    pub pool_size: usize,
    /// Lowest gallery click volume.
    pub volume_min: f64,
    /// Random volume added on top of `volume_min`, exclusive upper bound.
    pub volume_spread: f64,
    pub decoration_class: String,
    pub decoration_lifetime_ms: u32,
    /// IntersectionObserver threshold for `.fade-in` elements.
    pub fade_threshold: f64,
    /// localStorage key holding the "already voted" flag.
    pub voted_key: String,
    pub poll_seed: Vec<PollSeed>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sound_src: "assets/gunshot.mp3".to_string(),
            pool_size: 5,
            volume_min: 0.4,
            volume_spread: 0.2,
            decoration_class: "bullet-hole".to_string(),
            decoration_lifetime_ms: 600,
            fade_threshold: 0.1,
            voted_key: "voted".to_string(),
            poll_seed: vec![
                PollSeed::new("Chance", 35),
                PollSeed::new("Dude", 42),
                PollSeed::new("Stumpy", 18),
                PollSeed::new("Colorado", 5),
            ],
        }
    }
}

impl PageConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<PageConfig>(text).map(PageConfig::sanitized)
    }

    /// Clamp values that would otherwise break the pool or produce an
    /// out-of-range volume.
    pub fn sanitized(mut self) -> Self {
        self.pool_size = self.pool_size.max(1);
        self.volume_min = self.volume_min.clamp(0.0, 1.0);
        self.volume_spread = self.volume_spread.clamp(0.0, 1.0 - self.volume_min);
        self.fade_threshold = self.fade_threshold.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_page() {
        let cfg = PageConfig::default();
        assert_eq!(cfg.pool_size, 5);
        assert_eq!(cfg.decoration_lifetime_ms, 600);
        assert_eq!(cfg.voted_key, "voted");
        let total: u32 = cfg.poll_seed.iter().map(|s| s.votes).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_json_overrides_only_named_fields() {
        let cfg = PageConfig::from_json(r#"{ "pool_size": 8, "sound_src": "a.ogg" }"#).unwrap();
        assert_eq!(cfg.pool_size, 8);
        assert_eq!(cfg.sound_src, "a.ogg");
        assert_eq!(cfg.decoration_lifetime_ms, 600);
        assert_eq!(cfg.poll_seed.len(), 4);
    }

    #[test]
    fn test_json_poll_seed_keeps_order() {
        let cfg = PageConfig::from_json(
            r#"{ "poll_seed": [ { "name": "Feathers", "votes": 3 }, { "name": "Burdette", "votes": 1 } ] }"#,
        )
        .unwrap();
        assert_eq!(cfg.poll_seed, vec![PollSeed::new("Feathers", 3), PollSeed::new("Burdette", 1)]);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(PageConfig::from_json("{ pool_size: ").is_err());
        assert!(PageConfig::from_json(r#"{ "pool_size": "five" }"#).is_err());
    }

    #[test]
    fn test_sanitized_clamps() {
        let cfg = PageConfig::from_json(r#"{ "pool_size": 0, "volume_min": 0.9, "volume_spread": 0.5 }"#).unwrap();
        assert_eq!(cfg.pool_size, 1);
        assert!((cfg.volume_min - 0.9).abs() < 1e-9);
        assert!(cfg.volume_min + cfg.volume_spread <= 1.0 + 1e-9);
    }
}
