//! Key bindings for the menu and score scenes.
//!
//! Arrow keys double with vi-style letters: up/k, down/j for lists,
//! left/h, right/l for the archive pager.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Semantic navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Up,
    Down,
    Left,
    Right,
    Submit,
}

/// Map a key event to a navigation action, if it is one.
pub fn map_nav_key(key: KeyEvent) -> Option<NavAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(NavAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(NavAction::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(NavAction::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(NavAction::Right),
        KeyCode::Enter => Some(NavAction::Submit),
        _ => None,
    }
}

/// Quit chord for scenes without free-text entry: q, Esc, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Cancel chord for scenes where letters are typeable: Esc or Ctrl-C only.
pub fn should_cancel(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
