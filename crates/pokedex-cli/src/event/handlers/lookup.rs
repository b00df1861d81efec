//! Lookup and artwork handlers.
//!
//! Both kinds of work run on spawned tasks; their results come back through
//! the event loop's channels and are applied here.

use pokedex_core::{CommitOutcome, PendingLookup};

use super::super::{
    EventLoop,
    r#loop::{ArtworkCompleted, LookupCompleted},
};
use crate::artwork::Artwork;

impl EventLoop {
    /// Submit the current query, spawning the lookup if it is non-blank.
    pub(in crate::event) fn submit(&mut self) {
        let Some(PendingLookup { ticket, query }) = self.state.submit() else {
            tracing::debug!("Ignoring submit with a blank query");
            return;
        };

        tracing::debug!("Lookup {} issued for {:?}", ticket.0, query);

        let lookups = self.lookups.clone();
        let tx = self.tx_lookup.clone();
        tokio::spawn(async move {
            let outcome = lookups.lookup(&query).await;
            let done = LookupCompleted {
                ticket,
                query,
                outcome,
            };
            if tx.send(done).await.is_err() {
                tracing::debug!("Event loop closed before lookup {} completed", ticket.0);
            }
        });
    }

    pub(in crate::event) fn handle_lookup_completed(&mut self, done: LookupCompleted) {
        let LookupCompleted {
            ticket,
            query,
            outcome,
        } = done;

        match self.state.commit(ticket, outcome) {
            CommitOutcome::Applied { load_artwork } => {
                tracing::debug!("Lookup {} for {:?} committed", ticket.0, query);
                if let Some(url) = load_artwork {
                    self.app_state.artwork = None;
                    self.load_artwork(url);
                }
            }
            CommitOutcome::Stale => {
                tracing::debug!("Dropping stale lookup {} for {:?}", ticket.0, query);
            }
        }
    }

    /// Download and decode artwork off the input path.
    fn load_artwork(&self, url: String) {
        let lookups = self.lookups.clone();
        let tx = self.tx_artwork.clone();

        tokio::spawn(async move {
            let outcome = match lookups.artwork(&url).await {
                Ok(bytes) => {
                    let key = url.clone();
                    tokio::task::spawn_blocking(move || Artwork::decode(key, &bytes))
                        .await
                        .map_err(|e| format!("decode task failed: {e}"))
                        .and_then(|decoded| decoded.map_err(|e| format!("{e:#}")))
                }
                Err(e) => Err(e.to_string()),
            };

            if tx.send(ArtworkCompleted { url, outcome }).await.is_err() {
                tracing::debug!("Event loop closed before artwork completed");
            }
        });
    }

    pub(in crate::event) fn handle_artwork_completed(&mut self, done: ArtworkCompleted) {
        let ArtworkCompleted { url, outcome } = done;

        if self.state.image_key() != Some(url.as_str()) {
            tracing::debug!("Dropping artwork for superseded image {}", url);
            return;
        }

        match outcome {
            Ok(artwork) => self.app_state.artwork = Some(artwork),
            Err(e) => tracing::warn!("Artwork unavailable: {}", e),
        }
        self.state.finish_image(&url);
    }
}
