// src/app/state.rs
//! Application state management.

use crossterm::event::KeyEvent;
use ratatui::{Frame, widgets::ListState};
use tracing::debug;

use crate::{
    config::Theme,
    todo::ToDoListStore,
    ui::{
        keybindings::{ComposerAction, NavigationAction, key_to_action, key_to_composer_action},
        layout::compute_layout,
        widgets::{render_composer, render_header, render_todo_list},
    },
};

/// Main application state.
pub struct App {
    /// To-do list state, created with the screen and dropped with it
    pub store: ToDoListStore,
    /// List widget state
    pub state: ListState,
    /// Currently selected row
    pub selected: usize,
    /// Color scheme
    theme: Theme,
}

impl App {
    /// Create a new application instance.
    pub fn new(theme: Theme) -> Self {
        let mut state = ListState::default();
        state.select(Some(0));

        Self {
            store: ToDoListStore::new(),
            state,
            selected: 0,
            theme,
        }
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        if self.store.is_composer_open() {
            self.on_composer_key(key);
            self.state.select(Some(self.selected));
            return false;
        }

        match key_to_action(&key) {
            NavigationAction::Down => {
                if self.selected + 1 < self.store.items().len() {
                    self.selected += 1;
                }
            }
            NavigationAction::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            NavigationAction::ToggleFinished => {
                // Toggle carries the row's key and the flipped flag, the
                // same pair the checkbox row just rendered
                let toggled = self
                    .store
                    .items()
                    .get(self.selected)
                    .map(|item| (item.key, !item.is_finished));
                if let Some((key, finished)) = toggled {
                    self.store.toggle(key, finished);
                    debug!(key, finished, "toggled to-do");
                }
            }
            NavigationAction::OpenComposer => self.store.open_composer(),
            NavigationAction::Quit => return true,
            NavigationAction::None => {}
        }

        self.state.select(Some(self.selected));
        false
    }

    /// Handle a key event while the add-item dialog is up.
    fn on_composer_key(&mut self, key: KeyEvent) {
        match key_to_composer_action(&key) {
            ComposerAction::Insert(c) => {
                let mut draft = self.store.pending_text().to_owned();
                draft.push(c);
                self.store.set_pending_text(draft);
            }
            ComposerAction::DeleteBack => {
                let mut draft = self.store.pending_text().to_owned();
                draft.pop();
                self.store.set_pending_text(draft);
            }
            ComposerAction::Submit => {
                let text = self.store.pending_text().to_owned();
                let key = self.store.add(text);
                self.store.close_composer();
                // Land on the row that was just added
                self.selected = self.store.items().len() - 1;
                debug!(key, "added to-do");
            }
            ComposerAction::Dismiss => self.store.close_composer(),
            ComposerAction::None => {}
        }
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area());

        let open_count = self
            .store
            .items()
            .iter()
            .filter(|item| !item.is_finished)
            .count();
        render_header(f, layout.header, open_count, &self.theme);
        render_todo_list(
            f,
            layout.list,
            self.store.items(),
            &mut self.state,
            &self.theme,
        );

        // The dialog draws last so it sits on top of the list
        if self.store.is_composer_open() {
            render_composer(f, f.area(), self.store.pending_text(), &self.theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_chars(app: &mut App, text: &str) {
        for c in text.chars() {
            app.on_key(key(KeyCode::Char(c)));
        }
    }

    fn app_with_items(texts: &[&str]) -> App {
        let mut app = App::new(Theme::default());
        for text in texts {
            app.store.add(*text);
        }
        app
    }

    #[test]
    fn typing_in_the_composer_builds_the_draft() {
        let mut app = App::new(Theme::default());
        app.on_key(key(KeyCode::Char('a')));
        assert!(app.store.is_composer_open());

        type_chars(&mut app, "milk");
        app.on_key(key(KeyCode::Backspace));

        assert_eq!(app.store.pending_text(), "mil");
    }

    #[test]
    fn submit_adds_the_item_and_closes_the_dialog() {
        let mut app = App::new(Theme::default());
        app.on_key(key(KeyCode::Char('a')));
        type_chars(&mut app, "buy milk");
        app.on_key(key(KeyCode::Enter));

        assert!(!app.store.is_composer_open());
        assert_eq!(app.store.items().len(), 1);
        assert_eq!(app.store.items()[0].text, "buy milk");
        assert_eq!(app.store.pending_text(), "");
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn submit_lands_on_the_new_row() {
        let mut app = app_with_items(&["one", "two"]);
        app.on_key(key(KeyCode::Char('a')));
        type_chars(&mut app, "three");
        app.on_key(key(KeyCode::Enter));

        assert_eq!(app.selected, 2);
        assert_eq!(app.state.selected(), Some(2));
    }

    #[test]
    fn dismiss_keeps_the_draft() {
        let mut app = App::new(Theme::default());
        app.on_key(key(KeyCode::Char('a')));
        type_chars(&mut app, "half");
        app.on_key(key(KeyCode::Esc));

        assert!(!app.store.is_composer_open());
        assert_eq!(app.store.pending_text(), "half");
        assert!(app.store.items().is_empty());
    }

    #[test]
    fn space_toggles_the_selected_row() {
        let mut app = app_with_items(&["one", "two"]);
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Char(' ')));

        assert!(!app.store.items()[0].is_finished);
        assert!(app.store.items()[1].is_finished);

        app.on_key(key(KeyCode::Char(' ')));
        assert!(!app.store.items()[1].is_finished);
    }

    #[test]
    fn space_on_an_empty_list_is_inert() {
        let mut app = App::new(Theme::default());
        assert!(!app.on_key(key(KeyCode::Char(' '))));
        assert!(app.store.items().is_empty());
    }

    #[test]
    fn q_quits_in_list_mode_but_types_in_the_composer() {
        let mut app = App::new(Theme::default());
        app.on_key(key(KeyCode::Char('a')));
        assert!(!app.on_key(key(KeyCode::Char('q'))));
        assert_eq!(app.store.pending_text(), "q");

        app.on_key(key(KeyCode::Esc));
        assert!(app.on_key(key(KeyCode::Char('q'))));
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app_with_items(&["one", "two"]);
        app.on_key(key(KeyCode::Up));
        assert_eq!(app.selected, 0);

        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Down));
        assert_eq!(app.selected, 1);
    }
}
