// src/app/state.rs
//! Application state definitions

use crate::api::{Book, BookDraft, BooksApi};
use crate::features::Settings;
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, API client)
    pub core: CoreState,
    /// Book collection mirrored from the server
    pub shelf: ShelfState,
    /// UI state (form fields, dialog, toasts)
    pub ui: UiState,
}

/// Core infrastructure and services
pub struct CoreState {
    pub settings: Settings,
    pub api: BooksApi,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings) -> Self {
        let api = BooksApi::new(settings.network.base_url.clone());
        Self { settings, api }
    }
}

/// In-memory mirror of the server's book collection
pub struct ShelfState {
    /// Books in server response order
    pub books: Vec<Book>,
    /// Initial read-all fetch in flight
    pub loading: bool,
    /// Create request in flight
    pub creating: bool,
}

impl Default for ShelfState {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            loading: true,
            creating: false,
        }
    }
}

/// Form fields shared by the add bar and the edit dialog
#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub title: String,
    pub release_year: String,
}

impl BookForm {
    /// Pre-populate from an existing book
    pub fn prefill(&mut self, book: &Book) {
        self.title = book.title.clone();
        self.release_year = book.release_year.to_string();
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.release_year.clear();
    }

    /// Current field values as a write payload
    ///
    /// An empty or unparseable year becomes 0.
    pub fn draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            release_year: self.release_year.trim().parse().unwrap_or(0),
        }
    }
}

/// Edit dialog state
#[derive(Debug, Default)]
pub struct DialogState {
    pub open: bool,
    /// The book being edited; `None` outside the dialog
    pub selected: Option<Book>,
    /// Update or delete request in flight
    pub saving: bool,
}

/// UI view state
#[derive(Default)]
pub struct UiState {
    pub form: BookForm,
    pub dialog: DialogState,
    pub toast: Option<Toast>,
    pub toast_visible: bool,
}

impl UiState {
    /// Close the edit dialog and reset the shared form
    ///
    /// The form is shared with the add bar, so closing the dialog clears
    /// both surfaces.
    pub fn close_dialog(&mut self) {
        self.dialog.open = false;
        self.dialog.selected = None;
        self.dialog.saving = false;
        self.form.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_parses_the_year_field() {
        let form = BookForm {
            title: "Dune".to_string(),
            release_year: "1965".to_string(),
        };
        let draft = form.draft();
        assert_eq!(draft.title, "Dune");
        assert_eq!(draft.release_year, 1965);
    }

    #[test]
    fn empty_or_unparseable_year_becomes_zero() {
        let mut form = BookForm::default();
        assert_eq!(form.draft().release_year, 0);

        form.release_year = "not a year".to_string();
        assert_eq!(form.draft().release_year, 0);
    }

    #[test]
    fn prefill_mirrors_the_selected_book() {
        let book = Book {
            id: 9,
            title: "Hyperion".to_string(),
            release_year: 1989,
        };
        let mut form = BookForm::default();
        form.prefill(&book);
        assert_eq!(form.title, "Hyperion");
        assert_eq!(form.release_year, "1989");
    }
}
