use crate::config::PageConfig;
use crate::effect::Effect;
use crate::gallery::{self, Entropy, GalleryHit};
use crate::lightbox::Lightbox;
use crate::poll::{identify_candidate, Poll, VoteOutcome, VoteStore};
use crate::routes::{Hit, PageEvent};
use crate::scroll_lock::{GestureHooks, ScrollLock};

pub const ALREADY_VOTED_NOTICE: &str = "You've already voted!";

/// Owns one instance of every stateful concern on the page and turns routed
/// events into render instructions.
pub struct Page<H, S> {
    config: PageConfig,
    lightbox: Lightbox<H>,
    poll: Poll<S>,
    menu_open: bool,
}

impl<H: GestureHooks, S: VoteStore> Page<H, S> {
    pub fn new(config: PageConfig, hooks: H, store: S) -> Self {
        let poll = Poll::new(&config.poll_seed, store);
        Self {
            config,
            lightbox: Lightbox::new(ScrollLock::new(hooks)),
            poll,
            menu_open: false,
        }
    }

    pub fn handle(&mut self, event: PageEvent, entropy: &mut dyn Entropy) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            PageEvent::Click(hits) | PageEvent::Change(hits) => {
                for hit in hits {
                    self.on_hit(hit, entropy, &mut effects);
                }
            }
            PageEvent::KeyDown { key } => {
                if key == "Escape" {
                    effects.push(self.lightbox.close());
                }
            }
            PageEvent::Scroll { scroll_y } => effects.push(Effect::ApplyParallax { scroll_y }),
        }
        effects
    }

    fn on_hit(&mut self, hit: Hit, entropy: &mut dyn Entropy, effects: &mut Vec<Effect>) {
        match hit {
            Hit::GalleryItem(item) => self.on_gallery_click(&item, entropy, effects),
            Hit::LightboxBackdrop | Hit::LightboxClose => effects.push(self.lightbox.close()),
            Hit::CastCard => effects.push(Effect::ToggleCardFlip),
            Hit::MenuToggle => {
                self.menu_open = !self.menu_open;
                effects.push(Effect::SetMenuOpen(self.menu_open));
            }
            Hit::NavLink => {
                self.menu_open = false;
                effects.push(Effect::SetMenuOpen(false));
            }
            Hit::PollButton { candidate, label } => self.on_poll_click(candidate.as_deref(), &label, effects),
            Hit::SepiaToggle => effects.push(Effect::ToggleSepia),
        }
    }

    fn on_gallery_click(&mut self, item: &GalleryHit, entropy: &mut dyn Entropy, effects: &mut Vec<Effect>) {
        let click = gallery::route_click(item, &self.config, entropy);
        effects.push(Effect::PreventDefault);
        effects.push(Effect::PlaySound { volume: click.volume });
        effects.push(Effect::SpawnDecoration(click.decoration));
        if let Some((src, caption)) = click.open {
            effects.push(self.lightbox.open(&src, caption.as_deref()));
        }
    }

    fn on_poll_click(&mut self, candidate: Option<&str>, label: &str, effects: &mut Vec<Effect>) {
        if self.poll.is_closed() {
            return;
        }
        let tally = self.poll.tally();
        let name = candidate
            .filter(|key| tally.get(key).is_some())
            .or_else(|| identify_candidate(label, tally.names()))
            .map(str::to_string);
        let Some(name) = name else {
            log::debug!("Poll button {:?} matches no candidate", label);
            return;
        };
        match self.poll.vote(&name) {
            VoteOutcome::Recorded { candidate, results } => {
                effects.push(Effect::PollMessage(format!("You voted for {}!", candidate)));
                effects.push(Effect::RenderPoll(results));
            }
            VoteOutcome::AlreadyVoted { results } => {
                effects.push(Effect::Alert(ALREADY_VOTED_NOTICE.to_string()));
                effects.push(Effect::RenderPoll(results));
            }
            VoteOutcome::UnknownCandidate(_) => {}
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn lightbox(&self) -> &Lightbox<H> {
        &self.lightbox
    }

    pub fn poll(&self) -> &Poll<S> {
        &self.poll
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::tests::{hit_with_image, Sequence};
    use crate::poll::tests::MemoryStore;
    use crate::scroll_lock::tests::{dispatch, CountingHooks};
    use crate::scroll_lock::Gesture;
    use crate::sound_pool::{Clip, SoundPool};
    use std::cell::Cell;
    use std::rc::Rc;

    type TestPage = Page<CountingHooks, MemoryStore>;

    fn page() -> TestPage {
        Page::new(PageConfig::default(), CountingHooks::default(), MemoryStore::default())
    }

    fn click(page: &mut TestPage, hits: Vec<Hit>) -> Vec<Effect> {
        page.handle(PageEvent::Click(hits), &mut Sequence::new(&[0.5, 0.25]))
    }

    fn poll_button(label: &str) -> Hit {
        Hit::PollButton { candidate: None, label: label.to_string() }
    }

    struct CountingClip(Rc<Cell<usize>>);

    impl Clip for CountingClip {
        fn restart(&self, _volume: f64) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_gallery_click_plays_decorates_and_opens() {
        let mut page = page();
        let plays = Rc::new(Cell::new(0));
        let mut pool = SoundPool::new((0..5).map(|_| CountingClip(plays.clone())).collect());

        let effects = click(&mut page, vec![Hit::GalleryItem(hit_with_image("Dude", None))]);

        let mut decorations = 0;
        for effect in &effects {
            match effect {
                Effect::PlaySound { volume } => {
                    pool.play(*volume);
                }
                Effect::SpawnDecoration(deco) => {
                    decorations += 1;
                    assert_eq!(deco.lifetime_ms, 600);
                }
                _ => {}
            }
        }
        assert_eq!(plays.get(), 1);
        assert_eq!(decorations, 1);
        assert_eq!(effects.first(), Some(&Effect::PreventDefault));
        assert_eq!(
            effects.last(),
            Some(&Effect::ShowLightbox {
                src: "https://example.org/img/stumpy.jpg".to_string(),
                caption: Some("Dude".to_string()),
            })
        );
        assert!(page.lightbox().is_open());
        assert!(page.lightbox().scroll_lock().is_active());
    }

    #[test]
    fn test_gallery_item_without_image() {
        let mut page = page();
        let hit = GalleryHit { x: 0.0, y: 0.0, image: None, caption: None };
        let effects = click(&mut page, vec![Hit::GalleryItem(hit)]);
        assert!(effects.iter().any(|e| matches!(e, Effect::PlaySound { .. })));
        assert!(effects.iter().any(|e| matches!(e, Effect::SpawnDecoration(_))));
        assert!(!effects.iter().any(|e| matches!(e, Effect::ShowLightbox { .. })));
        assert!(!page.lightbox().is_open());
    }

    #[test]
    fn test_backdrop_and_close_button_close() {
        for closer in [Hit::LightboxBackdrop, Hit::LightboxClose] {
            let mut page = page();
            click(&mut page, vec![Hit::GalleryItem(hit_with_image("", None))]);
            let effects = click(&mut page, vec![closer]);
            assert_eq!(effects, vec![Effect::HideLightbox]);
            assert!(!page.lightbox().is_open());
            assert!(!page.lightbox().scroll_lock().is_active());
        }
    }

    #[test]
    fn test_escape_closes_from_any_state() {
        let mut page = page();
        let mut rng = Sequence::new(&[0.0]);
        let effects = page.handle(PageEvent::KeyDown { key: "Escape".to_string() }, &mut rng);
        assert_eq!(effects, vec![Effect::HideLightbox]);

        click(&mut page, vec![Hit::GalleryItem(hit_with_image("", None))]);
        page.handle(PageEvent::KeyDown { key: "Escape".to_string() }, &mut rng);
        assert!(!page.lightbox().is_open());
        assert_eq!(dispatch(page.lightbox().scroll_lock(), &Gesture::Wheel), 0);
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut page = page();
        let effects = page.handle(PageEvent::KeyDown { key: "Enter".to_string() }, &mut Sequence::new(&[0.0]));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_vote_then_repeat() {
        let mut page = page();
        let effects = click(&mut page, vec![poll_button("Dude")]);
        assert_eq!(effects[0], Effect::PollMessage("You voted for Dude!".to_string()));
        let Effect::RenderPoll(results) = &effects[1] else {
            panic!("expected results, got {:?}", effects[1]);
        };
        assert_eq!(results.total, 101);
        assert_eq!(results.row("Dude").map(|r| r.percent), Some(43));

        // Controls are disabled once results show.
        assert!(click(&mut page, vec![poll_button("Chance")]).is_empty());
        assert_eq!(page.poll().tally().total(), 101);
    }

    #[test]
    fn test_repeat_vote_after_reload_shows_notice() {
        let mut page: TestPage = Page::new(
            PageConfig::default(),
            CountingHooks::default(),
            MemoryStore { voted: true, writes: 0 },
        );
        let effects = click(&mut page, vec![poll_button("Vote for Stumpy")]);
        assert_eq!(effects[0], Effect::Alert(ALREADY_VOTED_NOTICE.to_string()));
        assert!(matches!(effects[1], Effect::RenderPoll(_)));
        assert_eq!(page.poll().tally().get("Stumpy"), Some(18));
    }

    #[test]
    fn test_candidate_key_beats_label() {
        let mut page = page();
        let hit = Hit::PollButton { candidate: Some("Colorado".to_string()), label: "Dude".to_string() };
        click(&mut page, vec![hit]);
        assert_eq!(page.poll().tally().get("Colorado"), Some(6));
        assert_eq!(page.poll().tally().get("Dude"), Some(42));
    }

    #[test]
    fn test_unmatched_poll_button_is_skipped() {
        let mut page = page();
        assert!(click(&mut page, vec![poll_button("Nathan Burdette")]).is_empty());
        assert!(!page.poll().is_closed());
    }

    #[test]
    fn test_menu_toggle_and_nav_link() {
        let mut page = page();
        assert_eq!(click(&mut page, vec![Hit::MenuToggle]), vec![Effect::SetMenuOpen(true)]);
        assert_eq!(click(&mut page, vec![Hit::MenuToggle]), vec![Effect::SetMenuOpen(false)]);
        click(&mut page, vec![Hit::MenuToggle]);
        assert_eq!(click(&mut page, vec![Hit::NavLink]), vec![Effect::SetMenuOpen(false)]);
        assert!(!page.menu_open());
    }

    #[test]
    fn test_card_sepia_and_scroll() {
        let mut page = page();
        assert_eq!(click(&mut page, vec![Hit::CastCard]), vec![Effect::ToggleCardFlip]);
        let mut rng = Sequence::new(&[0.0]);
        assert_eq!(
            page.handle(PageEvent::Change(vec![Hit::SepiaToggle]), &mut rng),
            vec![Effect::ToggleSepia]
        );
        assert_eq!(
            page.handle(PageEvent::Scroll { scroll_y: 320.0 }, &mut rng),
            vec![Effect::ApplyParallax { scroll_y: 320.0 }]
        );
    }
}
