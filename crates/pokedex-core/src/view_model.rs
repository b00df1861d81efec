//! View state shared by the input controller and the presentation tree.
//!
//! [`ViewState`] is the single source of truth for rendering: the query
//! text, the current [`LookupResult`] (or nothing), and the image-loading
//! indicator keyed to the result's artwork URL.
use crate::{config::CommitPolicy, query::QueryInput};

/// Flat record produced by a successful lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupResult {
    pub name: String,
    pub numeric_id: u32,
    pub image_url: Option<String>,
    pub categories: Vec<String>,
    pub description: String,
    pub abilities: Vec<Ability>,
}

impl LookupResult {
    /// Ability names in catalog order.
    pub fn ability_names(&self) -> impl Iterator<Item = &str> {
        self.abilities.iter().map(|ability| ability.name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

/// Sequence number stamped on each issued lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub u64);

/// A lookup the frontend should start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingLookup {
    pub ticket: Ticket,
    pub query: String,
}

/// What happened when a completed lookup was offered to the view state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The outcome replaced the view state. `load_artwork` names a URL the
    /// frontend must start loading because the image key changed.
    Applied { load_artwork: Option<String> },
    /// A newer lookup was issued and the policy discards this one.
    Stale,
}

/// Loading flag tied to the identity of an image key.
///
/// Whenever the observed key changes the flag is forced to `true` (or to
/// `false` when there is no key) until [`ImageLoadIndicator::finish`] is
/// called with the same key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageLoadIndicator {
    last_key: Option<String>,
    loading: bool,
}

impl ImageLoadIndicator {
    /// Records the current key. Returns `true` when a new load should start.
    pub fn observe(&mut self, key: Option<&str>) -> bool {
        if self.last_key.as_deref() == key {
            return false;
        }

        self.last_key = key.map(str::to_owned);
        self.loading = key.is_some();
        self.loading
    }

    /// Clears the flag when `key` is still the current one.
    ///
    /// Returns `false` for completions that belong to an older key.
    pub fn finish(&mut self, key: &str) -> bool {
        if self.last_key.as_deref() != Some(key) {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn key(&self) -> Option<&str> {
        self.last_key.as_deref()
    }
}

/// Query text, current result and image-loading flag.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub query: QueryInput,
    result: Option<LookupResult>,
    image: ImageLoadIndicator,
    policy: CommitPolicy,
    next_ticket: u64,
    latest_issued: Option<Ticket>,
}

impl ViewState {
    pub fn new(policy: CommitPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn result(&self) -> Option<&LookupResult> {
        self.result.as_ref()
    }

    pub fn image_loading(&self) -> bool {
        self.image.is_loading()
    }

    pub fn image_key(&self) -> Option<&str> {
        self.image.key()
    }

    pub fn policy(&self) -> CommitPolicy {
        self.policy
    }

    /// Submit action shared by the Enter key and the search button.
    ///
    /// Returns `None` (and leaves the state untouched) for blank queries.
    pub fn submit(&mut self) -> Option<PendingLookup> {
        let query = self.query.submission()?;

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.latest_issued = Some(ticket);

        Some(PendingLookup { ticket, query })
    }

    /// Offers a completed lookup to the view state.
    ///
    /// `None` means the lookup failed and clears the current result.
    pub fn commit(&mut self, ticket: Ticket, outcome: Option<LookupResult>) -> CommitOutcome {
        if self.policy == CommitPolicy::LatestIssued && self.latest_issued != Some(ticket) {
            return CommitOutcome::Stale;
        }

        self.result = outcome;
        let key = self
            .result
            .as_ref()
            .and_then(|result| result.image_url.as_deref());
        let load_artwork = if self.image.observe(key) {
            key.map(str::to_owned)
        } else {
            None
        };

        CommitOutcome::Applied { load_artwork }
    }

    /// Marks the image for `key` as finished loading.
    pub fn finish_image(&mut self, key: &str) -> bool {
        self.image.finish(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, image: Option<&str>) -> LookupResult {
        LookupResult {
            name: name.to_string(),
            numeric_id: 1,
            image_url: image.map(str::to_owned),
            categories: vec![],
            description: String::new(),
            abilities: vec![],
        }
    }

    #[test]
    fn indicator_restarts_on_key_change() {
        let mut indicator = ImageLoadIndicator::default();
        assert!(!indicator.is_loading());

        assert!(indicator.observe(Some("a.png")));
        assert!(indicator.is_loading());
        assert!(indicator.finish("a.png"));
        assert!(!indicator.is_loading());

        // Same key again does not restart.
        assert!(!indicator.observe(Some("a.png")));
        assert!(!indicator.is_loading());

        assert!(indicator.observe(Some("b.png")));
        assert!(indicator.is_loading());
    }

    #[test]
    fn indicator_ignores_stale_finish() {
        let mut indicator = ImageLoadIndicator::default();
        indicator.observe(Some("a.png"));
        indicator.observe(Some("b.png"));

        assert!(!indicator.finish("a.png"));
        assert!(indicator.is_loading());
    }

    #[test]
    fn indicator_is_false_without_key() {
        let mut indicator = ImageLoadIndicator::default();
        indicator.observe(Some("a.png"));
        assert!(!indicator.observe(None));
        assert!(!indicator.is_loading());
    }

    #[test]
    fn blank_submit_is_noop() {
        let mut state = ViewState::default();
        state.commit(Ticket(99), Some(result("pikachu", None)));
        state.query.set("   ");

        assert_eq!(state.submit(), None);
        assert_eq!(state.result().map(|r| r.name.as_str()), Some("pikachu"));
    }

    #[test]
    fn submit_issues_increasing_tickets() {
        let mut state = ViewState::default();
        state.query.set("Pikachu");
        let first = state.submit().unwrap();
        let second = state.submit().unwrap();

        assert_eq!(first.query, "pikachu");
        assert!(second.ticket > first.ticket);
    }

    #[test]
    fn failure_clears_previous_result() {
        let mut state = ViewState::default();
        state.commit(Ticket(0), Some(result("pikachu", Some("25.png"))));
        assert!(state.image_loading());

        let outcome = state.commit(Ticket(1), None);
        assert_eq!(outcome, CommitOutcome::Applied { load_artwork: None });
        assert!(state.result().is_none());
        assert!(!state.image_loading());
    }

    #[test]
    fn last_completed_wins_by_default() {
        let mut state = ViewState::default();
        state.query.set("pikachu");
        let pikachu = state.submit().unwrap();
        state.query.set("bulbasaur");
        let bulbasaur = state.submit().unwrap();

        state.commit(bulbasaur.ticket, Some(result("bulbasaur", Some("1.png"))));
        state.commit(pikachu.ticket, Some(result("pikachu", Some("25.png"))));

        assert_eq!(state.result().unwrap().name, "pikachu");
    }

    #[test]
    fn latest_issued_discards_stale_completion() {
        let mut state = ViewState::new(CommitPolicy::LatestIssued);
        state.query.set("pikachu");
        let pikachu = state.submit().unwrap();
        state.query.set("bulbasaur");
        let bulbasaur = state.submit().unwrap();

        state.commit(bulbasaur.ticket, Some(result("bulbasaur", None)));
        let late = state.commit(pikachu.ticket, Some(result("pikachu", None)));

        assert_eq!(late, CommitOutcome::Stale);
        assert_eq!(state.result().unwrap().name, "bulbasaur");
    }

    #[test]
    fn commit_requests_artwork_only_on_key_change() {
        let mut state = ViewState::default();
        let first = state.commit(Ticket(0), Some(result("pikachu", Some("25.png"))));
        assert_eq!(
            first,
            CommitOutcome::Applied {
                load_artwork: Some("25.png".to_string())
            }
        );

        let again = state.commit(Ticket(1), Some(result("pikachu", Some("25.png"))));
        assert_eq!(again, CommitOutcome::Applied { load_artwork: None });
    }
}
