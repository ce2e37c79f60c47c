use crate::config::PageConfig;

/// Source of uniform randoms in `[0, 1)`.
pub trait Entropy {
    fn next_unit(&mut self) -> f64;
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    /// Resolved image URL.
    pub src: String,
    pub alt: String,
}

/// What the event layer learned about a click inside a `.gallery-item`.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryHit {
    /// Click point relative to the item's bounding box.
    pub x: f64,
    pub y: f64,
    pub image: Option<GalleryImage>,
    /// The item's `data-caption`, if any.
    pub caption: Option<String>,
}

impl GalleryHit {
    /// Image alt text, falling back to the item's caption attribute.
    pub fn lightbox_caption(&self) -> Option<&str> {
        let alt = self.image.as_ref().map(|img| img.alt.as_str()).filter(|a| !a.is_empty());
        alt.or(self.caption.as_deref())
    }
}

/// Transient bullet-hole mark dropped at the click point.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoration {
    pub class: String,
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    pub lifetime_ms: u32,
}

impl Decoration {
    pub fn left(&self) -> String {
        format!("{}px", self.x)
    }

    pub fn top(&self) -> String {
        format!("{}px", self.y)
    }

    /// Centers the mark on the click point, then spins it.
    pub fn transform(&self) -> String {
        format!("translate(-50%, -50%) rotate({}deg)", self.rotation_deg)
    }
}

/// Everything one gallery click asks for, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryClick {
    pub volume: f64,
    pub decoration: Decoration,
    /// `(src, caption)` when the item holds an image.
    pub open: Option<(String, Option<String>)>,
}

pub fn route_click(hit: &GalleryHit, config: &PageConfig, entropy: &mut dyn Entropy) -> GalleryClick {
    let volume = config.volume_min + entropy.next_unit() * config.volume_spread;
    let decoration = Decoration {
        class: config.decoration_class.clone(),
        x: hit.x,
        y: hit.y,
        rotation_deg: entropy.next_unit() * 360.0,
        lifetime_ms: config.decoration_lifetime_ms,
    };
    let open = hit
        .image
        .as_ref()
        .map(|img| (img.src.clone(), hit.lightbox_caption().map(str::to_string)));
    GalleryClick { volume, decoration, open }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Replays a fixed sequence, wrapping at the end.
    pub(crate) struct Sequence {
        values: Vec<f64>,
        next: usize,
    }

    impl Sequence {
        pub(crate) fn new(values: &[f64]) -> Self {
            Self { values: values.to_vec(), next: 0 }
        }
    }

    impl Entropy for Sequence {
        fn next_unit(&mut self) -> f64 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }
    }

    pub(crate) fn hit_with_image(alt: &str, caption: Option<&str>) -> GalleryHit {
        GalleryHit {
            x: 40.0,
            y: 25.5,
            image: Some(GalleryImage {
                src: "https://example.org/img/stumpy.jpg".to_string(),
                alt: alt.to_string(),
            }),
            caption: caption.map(str::to_string),
        }
    }

    #[test]
    fn test_volume_and_rotation_ranges() {
        let cfg = PageConfig::default();
        let hit = hit_with_image("", None);
        for &(r_vol, r_rot) in &[(0.0, 0.0), (0.5, 0.25), (0.999_999, 0.999_999)] {
            let click = route_click(&hit, &cfg, &mut Sequence::new(&[r_vol, r_rot]));
            assert!(click.volume >= 0.4 && click.volume < 0.6, "volume {}", click.volume);
            assert!(click.decoration.rotation_deg >= 0.0 && click.decoration.rotation_deg < 360.0);
        }
    }

    #[test]
    fn test_decoration_styles() {
        let cfg = PageConfig::default();
        let click = route_click(&hit_with_image("", None), &cfg, &mut Sequence::new(&[0.5, 0.25]));
        let deco = &click.decoration;
        assert_eq!(deco.class, "bullet-hole");
        assert_eq!(deco.lifetime_ms, 600);
        assert_eq!(deco.left(), "40px");
        assert_eq!(deco.top(), "25.5px");
        assert_eq!(deco.transform(), "translate(-50%, -50%) rotate(90deg)");
    }

    #[test]
    fn test_caption_prefers_alt() {
        let hit = hit_with_image("Stumpy on the porch", Some("fallback"));
        assert_eq!(hit.lightbox_caption(), Some("Stumpy on the porch"));
        let hit = hit_with_image("", Some("fallback"));
        assert_eq!(hit.lightbox_caption(), Some("fallback"));
        let hit = hit_with_image("", None);
        assert_eq!(hit.lightbox_caption(), None);
    }

    #[test]
    fn test_item_without_image_does_not_open() {
        let cfg = PageConfig::default();
        let hit = GalleryHit { x: 1.0, y: 2.0, image: None, caption: Some("text only".to_string()) };
        let click = route_click(&hit, &cfg, &mut Sequence::new(&[0.1]));
        assert!(click.open.is_none());
    }
}
