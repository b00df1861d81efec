//! Input processing for the CLI client.
//!
//! This module owns the keyboard/mouse-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// High-level outcome of processing an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Run the submit action (Enter anywhere, or a click on the button).
    Submit,
    /// Append a character to the query.
    Insert(char),
    /// Delete the last character of the query.
    Backspace,
    /// Empty the query field.
    ClearQuery,
    /// No meaningful command was produced.
    None,
}

/// Translates terminal events into commands.
///
/// Enter is global: it maps to [`KeyAction::Submit`] regardless of which
/// region the pointer last touched. The non-empty guard is applied by the
/// view state at submit time.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('d') => KeyAction::Quit,
                KeyCode::Char('u') => KeyAction::ClearQuery,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(ch) => KeyAction::Insert(ch),
            _ => KeyAction::None,
        }
    }

    /// Left click inside the search button submits; everything else is ignored.
    pub fn handle_mouse(&self, mouse: MouseEvent, search_button: Option<Rect>) -> KeyAction {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return KeyAction::None;
        };

        match search_button {
            Some(button) if button.contains(Position::new(mouse.column, mouse.row)) => {
                KeyAction::Submit
            }
            _ => KeyAction::None,
        }
    }
}
