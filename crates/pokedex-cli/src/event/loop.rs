//! Event loop orchestrating user input, background fetches and rendering.
//!
//! This module coordinates three concerns:
//! - Keyboard and mouse input (query editing, submit, quit)
//! - Lookup and artwork completions arriving from spawned tasks
//! - Rendering the projected main card

use anyhow::{Context, Result};
use pokedex_core::{LookupResult, LookupService, Ticket, ViewState};
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};

use crate::{
    artwork::Artwork, config::CliConfig, input::InputHandler, presentation::terminal::Tui,
    state::AppState,
};

const COMPLETION_BUFFER: usize = 32;

/// A finished lookup, sent back from its task.
#[derive(Debug)]
pub(crate) struct LookupCompleted {
    pub ticket: Ticket,
    pub query: String,
    /// `None` when the lookup failed; the failure is already logged.
    pub outcome: Option<LookupResult>,
}

/// A finished artwork download and decode.
#[derive(Debug)]
pub(crate) struct ArtworkCompleted {
    pub url: String,
    pub outcome: std::result::Result<Artwork, String>,
}

pub(crate) struct Receivers {
    pub lookups: mpsc::Receiver<LookupCompleted>,
    pub artwork: mpsc::Receiver<ArtworkCompleted>,
}

/// Event loop owning the view state.
///
/// Every lookup is spawned onto the runtime and reports back through a
/// channel, so input stays responsive while requests are in flight. Several
/// lookups may overlap; the view state's commit policy decides which result
/// ends up on screen.
pub struct EventLoop {
    pub(crate) state: ViewState,
    pub(crate) app_state: AppState,
    pub(crate) input: InputHandler,
    pub(crate) lookups: LookupService,
    pub(crate) cli_config: CliConfig,
    pub(crate) tx_lookup: mpsc::Sender<LookupCompleted>,
    pub(crate) tx_artwork: mpsc::Sender<ArtworkCompleted>,
    pub(crate) receivers: Option<Receivers>,
}

impl EventLoop {
    pub fn new(lookups: LookupService, cli_config: CliConfig) -> Self {
        let (tx_lookup, rx_lookup) = mpsc::channel(COMPLETION_BUFFER);
        let (tx_artwork, rx_artwork) = mpsc::channel(COMPLETION_BUFFER);

        Self {
            state: ViewState::new(lookups.config().commit_policy),
            app_state: AppState::new(),
            input: InputHandler::new(),
            lookups,
            cli_config,
            tx_lookup,
            tx_artwork,
            receivers: Some(Receivers {
                lookups: rx_lookup,
                artwork: rx_artwork,
            }),
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        let Receivers {
            lookups: mut rx_lookup,
            artwork: mut rx_artwork,
        } = self
            .receivers
            .take()
            .context("event loop receivers already taken")?;

        let frame = Duration::from_millis(self.cli_config.ui.frame_interval_ms);
        let mut spinner =
            time::interval(Duration::from_millis(self.cli_config.ui.spinner_interval_ms));
        spinner.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                Some(done) = rx_lookup.recv() => {
                    self.handle_lookup_completed(done);
                    self.render(terminal)?;
                }
                Some(done) = rx_artwork.recv() => {
                    self.handle_artwork_completed(done);
                    self.render(terminal)?;
                }
                _ = time::sleep(frame) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
                _ = spinner.tick() => {
                    if self.state.image_loading() {
                        self.app_state.advance_spinner();
                        self.render(terminal)?;
                    }
                }
            }
        }

        Ok(())
    }
}
