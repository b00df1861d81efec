//! Input handling (keyboard and mouse).

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl EventLoop {
    /// Drain pending terminal events and redraw once if anything changed.
    ///
    /// Returns `true` when the user asked to quit.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        let mut dirty = false;

        while term_event::poll(Duration::from_millis(0))? {
            let action = match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    self.input.handle_key(key)
                }
                TermEvent::Mouse(mouse) => {
                    self.input.handle_mouse(mouse, self.app_state.search_button)
                }
                TermEvent::Resize(_, _) => {
                    dirty = true;
                    continue;
                }
                _ => continue,
            };

            if action == KeyAction::Quit {
                tracing::info!("Quit requested");
                return Ok(true);
            }
            dirty |= self.apply_action(action);
        }

        if dirty {
            self.render(terminal)?;
        }
        Ok(false)
    }

    /// Apply one input command to the view state.
    ///
    /// Returns whether the screen needs a redraw.
    pub(in crate::event) fn apply_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Insert(ch) => {
                self.state.query.push(ch);
                true
            }
            KeyAction::Backspace | KeyAction::ClearQuery => {
                let had_text = !self.state.query.text().is_empty();
                if action == KeyAction::Backspace {
                    self.state.query.backspace();
                } else {
                    self.state.query.clear();
                }
                had_text
            }
            KeyAction::Submit => {
                self.submit();
                false
            }
            KeyAction::Quit | KeyAction::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pokedex_core::{LookupConfig, LookupService, mock::MockCatalog};

    use super::*;
    use crate::config::CliConfig;

    fn event_loop() -> EventLoop {
        let lookups = LookupService::new(Arc::new(MockCatalog::new()), LookupConfig::default());
        EventLoop::new(lookups, CliConfig::default())
    }

    #[tokio::test]
    async fn editing_actions_update_query() {
        let mut event_loop = event_loop();

        assert!(event_loop.apply_action(KeyAction::Insert('a')));
        assert!(event_loop.apply_action(KeyAction::Insert('b')));
        assert_eq!(event_loop.state.query.text(), "ab");

        assert!(event_loop.apply_action(KeyAction::Backspace));
        assert_eq!(event_loop.state.query.text(), "a");

        assert!(event_loop.apply_action(KeyAction::ClearQuery));
        assert!(!event_loop.apply_action(KeyAction::ClearQuery));
        assert!(!event_loop.apply_action(KeyAction::Backspace));
        assert_eq!(event_loop.state.query.text(), "");
    }

    #[tokio::test]
    async fn blank_submit_spawns_nothing() {
        let mut event_loop = event_loop();
        event_loop.state.query.set("   ");

        assert!(!event_loop.apply_action(KeyAction::Submit));

        let receivers = event_loop.receivers.as_mut().unwrap();
        assert!(receivers.lookups.try_recv().is_err());
    }
}
