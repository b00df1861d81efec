//! Glue code tying the lookup service and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use pokedex_core::{Frontend, LookupService};

use crate::{config::CliConfig, event::EventLoop, presentation::terminal};

/// Terminal frontend.
///
/// Owns nothing but its configuration; the event loop and view state are
/// created fresh on every [`Frontend::run`].
pub struct CliFrontend {
    config: CliConfig,
}

impl CliFrontend {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, lookups: LookupService) -> Result<()> {
        tracing::info!(
            "CLI frontend starting (commit policy: {})",
            lookups.config().commit_policy
        );

        let event_loop = EventLoop::new(lookups, self.config.clone());

        let mut terminal = terminal::init(self.config.ui.mouse_capture)?;
        let _guard = terminal::TerminalGuard;

        event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting");

        Ok(())
    }
}
