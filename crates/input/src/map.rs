//! Key mapping from terminal events to control actions.

use crate::types::ControlAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to control actions.
///
/// Ctrl+C is mapped here as well: raw mode swallows the usual SIGINT, so
/// it has to be an ordinary shutdown key.
pub fn handle_key_event(key: KeyEvent) -> Option<ControlAction> {
    match key.code {
        KeyCode::Char('t') | KeyCode::Char('T') => Some(ControlAction::Shutdown),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(ControlAction::Shutdown)
        }
        _ => None,
    }
}
