//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, BookForm, CoreState, DialogState, ShelfState, UiState};

use crate::features::Settings;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        Self::with_settings(Settings::load())
    }

    /// Create an application instance with explicit settings
    pub fn with_settings(settings: Settings) -> (Self, Task<Message>) {
        let core = CoreState::new(settings);
        let shelf = ShelfState::default();
        let ui = UiState::default();

        let api = core.api.clone();
        let app = Self { core, shelf, ui };

        // Initial read-all fetch
        let init_task = Task::perform(async move { api.list_books().await }, Message::BooksLoaded);

        (app, init_task)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title reflecting the loaded collection
    pub fn title(&self) -> String {
        if self.shelf.books.is_empty() {
            "Folio".to_string()
        } else {
            format!("Folio - {} books", self.shelf.books.len())
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}
