use crate::config::PollSeed;

/// Persisted "already voted" flag. Shared by every tab using the same
/// storage scope, last write wins.
pub trait VoteStore {
    fn has_voted(&self) -> bool;
    fn mark_voted(&mut self);
}

/// Ordered candidate counts.
#[derive(Clone, Debug, PartialEq)]
pub struct Tally {
    entries: Vec<(String, u32)>,
}

impl Tally {
    pub fn from_seed(seed: &[PollSeed]) -> Self {
        Self {
            entries: seed.iter().map(|s| (s.name.clone(), s.votes)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.iter().find(|(n, _)| n == name).map(|&(_, v)| v)
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|&(_, v)| v).sum()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    fn increment(&mut self, name: &str) -> bool {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => {
                *v = v.saturating_add(1);
                true
            }
            None => false,
        }
    }
}

/// Guess which candidate a control belongs to from its visible label.
///
/// Every candidate whose name appears in the label is a match; the last one
/// in candidate order wins. `None` when nothing matches.
pub fn identify_candidate<'a, I>(label: &str, names: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().filter(|name| label.contains(name)).last()
}

#[derive(Clone, Debug, PartialEq)]
pub struct PollRow {
    pub name: String,
    pub votes: u32,
    /// Share of the total, rounded to the nearest integer.
    pub percent: u32,
}

/// A rendered snapshot of the tally.
#[derive(Clone, Debug, PartialEq)]
pub struct PollResults {
    pub total: u32,
    pub rows: Vec<PollRow>,
}

impl PollResults {
    pub fn from_tally(tally: &Tally) -> Self {
        let total = tally.total();
        let rows = tally
            .entries
            .iter()
            .map(|(name, votes)| PollRow {
                name: name.clone(),
                votes: *votes,
                percent: percent_of(*votes, total),
            })
            .collect();
        Self { total, rows }
    }

    pub fn row(&self, name: &str) -> Option<&PollRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Row for a poll button. A `data-candidate` key wins; otherwise the label
    /// is matched against candidate names.
    pub fn row_for_button(&self, candidate_key: Option<&str>, label: &str) -> Option<&PollRow> {
        if let Some(row) = candidate_key.and_then(|key| self.row(key)) {
            return Some(row);
        }
        let name = identify_candidate(label, self.rows.iter().map(|r| r.name.as_str()))?;
        self.row(name)
    }
}

fn percent_of(votes: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (votes as f64 / total as f64 * 100.0).round() as u32
}

#[derive(Clone, Debug, PartialEq)]
pub enum VoteOutcome {
    Recorded { candidate: String, results: PollResults },
    /// The persisted flag was already set; nothing changed.
    AlreadyVoted { results: PollResults },
    /// Name outside the candidate set; nothing changed.
    UnknownCandidate(String),
}

/// Fan poll with a locally seeded tally.
pub struct Poll<S> {
    tally: Tally,
    store: S,
    closed: bool,
}

impl<S: VoteStore> Poll<S> {
    pub fn new(seed: &[PollSeed], store: S) -> Self {
        Self {
            tally: Tally::from_seed(seed),
            store,
            closed: false,
        }
    }

    pub fn vote(&mut self, candidate: &str) -> VoteOutcome {
        if self.store.has_voted() {
            log::info!("Repeat vote ignored");
            return VoteOutcome::AlreadyVoted { results: self.render() };
        }
        if !self.tally.increment(candidate) {
            log::warn!("Vote for unknown candidate {:?}", candidate);
            return VoteOutcome::UnknownCandidate(candidate.to_string());
        }
        self.store.mark_voted();
        log::info!("Vote recorded for {}", candidate);
        VoteOutcome::Recorded {
            candidate: candidate.to_string(),
            results: self.render(),
        }
    }

    /// Snapshot the percentages and mark the controls closed. Closing only
    /// affects the click layer; `vote` still answers repeat calls.
    pub fn render(&mut self) -> PollResults {
        self.closed = true;
        PollResults::from_tally(&self.tally)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
