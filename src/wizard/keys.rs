//! Key bindings: maps terminal key events to wizard actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::Action;

/// Translate a key press into a wizard action.
///
/// The mapping does not depend on the current step; `WizardState::apply`
/// ignores actions that are not valid where the wizard currently is.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursorDown),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::AppendChar(c)),
        _ => None,
    }
}
