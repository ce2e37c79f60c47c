pub mod config;
pub mod effect;
pub mod gallery;
pub mod lightbox;
pub mod page;
pub mod parallax;
pub mod poll;
pub mod routes;
pub mod scroll_lock;
pub mod sound_pool;

pub use config::{PageConfig, PollSeed};
pub use effect::Effect;
pub use gallery::{Decoration, Entropy, GalleryHit, GalleryImage};
pub use page::Page;
pub use poll::{PollResults, VoteStore};
pub use routes::{EventKind, Hit, MatchMode, PageEvent, Route, RouteTarget, ROUTES};
pub use scroll_lock::{Gesture, GestureHooks};
pub use sound_pool::{Clip, SoundPool};
