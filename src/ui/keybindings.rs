// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent};

/// Actions available while the list has focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationAction {
    Up,
    Down,
    ToggleFinished,
    OpenComposer,
    Quit,
    None,
}

/// Convert a key event to a list action.
pub fn key_to_action(key: &KeyEvent) -> NavigationAction {
    match key.code {
        KeyCode::Down => NavigationAction::Down,
        KeyCode::Up => NavigationAction::Up,
        KeyCode::Char(' ') => NavigationAction::ToggleFinished,
        KeyCode::Char('a') => NavigationAction::OpenComposer,
        KeyCode::Char('q') => NavigationAction::Quit,
        _ => NavigationAction::None,
    }
}

/// Actions available while the add-item dialog has focus. List keys are
/// inert here; every printable character goes into the draft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComposerAction {
    Insert(char),
    DeleteBack,
    Submit,
    Dismiss,
    None,
}

/// Convert a key event to a dialog action.
pub fn key_to_composer_action(key: &KeyEvent) -> ComposerAction {
    match key.code {
        KeyCode::Char(c) => ComposerAction::Insert(c),
        KeyCode::Backspace => ComposerAction::DeleteBack,
        KeyCode::Enter => ComposerAction::Submit,
        KeyCode::Esc => ComposerAction::Dismiss,
        _ => ComposerAction::None,
    }
}
