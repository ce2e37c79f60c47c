use riobravo_core::VoteStore;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// "Already voted" flag kept in `localStorage`. Absent or empty means no vote.
pub struct LocalVoteStore {
    key: String,
}

impl LocalVoteStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }
}

impl VoteStore for LocalVoteStore {
    fn has_voted(&self) -> bool {
        let Some(store) = local_storage() else {
            return false;
        };
        match store.get_item(&self.key) {
            Ok(Some(v)) => !v.is_empty(),
            Ok(None) => false,
            Err(e) => {
                log::warn!("localStorage read failed: {:?}", e);
                false
            }
        }
    }

    fn mark_voted(&mut self) {
        let Some(store) = local_storage() else {
            log::warn!("localStorage unavailable, vote flag not saved");
            return;
        };
        if let Err(e) = store.set_item(&self.key, "true") {
            log::warn!("localStorage write failed: {:?}", e);
        }
    }
}
