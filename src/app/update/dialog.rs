// src/app/update/dialog.rs
//! Edit dialog message handlers

use iced::Task;
use tracing::{error, info};

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle edit-dialog messages
    pub fn handle_dialog(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::EditBook(id) => {
                if let Some(book) = self.shelf.books.iter().find(|b| b.id == *id).cloned() {
                    info!("editing book {}", book.id);
                    self.ui.form.prefill(&book);
                    self.ui.dialog.selected = Some(book);
                    self.ui.dialog.open = true;
                }
                Some(Task::none())
            }

            Message::SaveBookEdits => {
                let Some(book) = &self.ui.dialog.selected else {
                    return Some(Task::none());
                };
                if self.ui.dialog.saving {
                    return Some(Task::none());
                }
                self.ui.dialog.saving = true;

                let api = self.core.api.clone();
                let id = book.id;
                let draft = self.ui.form.draft();
                info!("updating book {id}");
                Some(Task::perform(
                    async move { api.update_book(id, &draft).await },
                    Message::BookUpdated,
                ))
            }

            Message::BookUpdated(result) => match result {
                Ok(updated) => {
                    info!("book {} updated", updated.id);
                    if let Some(slot) = self.shelf.books.iter_mut().find(|b| b.id == updated.id) {
                        *slot = updated.clone();
                    }
                    self.ui.close_dialog();
                    Some(Task::none())
                }
                Err(err) => {
                    // The dialog stays open so the edits are not lost
                    error!("failed to update book: {err}");
                    self.ui.dialog.saving = false;
                    Some(Task::done(Message::ShowErrorToast(
                        "Could not save the changes".to_string(),
                    )))
                }
            },

            Message::DeleteBook => {
                let Some(book) = &self.ui.dialog.selected else {
                    return Some(Task::none());
                };
                if self.ui.dialog.saving {
                    return Some(Task::none());
                }
                self.ui.dialog.saving = true;

                let api = self.core.api.clone();
                let id = book.id;
                info!("deleting book {id}");
                Some(Task::perform(
                    async move { api.delete_book(id).await.map(|()| id) },
                    Message::BookDeleted,
                ))
            }

            Message::BookDeleted(result) => match result {
                Ok(id) => {
                    info!("book {id} deleted");
                    self.shelf.books.retain(|b| b.id != *id);
                    self.ui.close_dialog();
                    Some(Task::done(Message::ShowToast("Book deleted".to_string())))
                }
                Err(err) => {
                    error!("failed to delete book: {err}");
                    self.ui.dialog.saving = false;
                    Some(Task::done(Message::ShowErrorToast(
                        "Could not delete the book".to_string(),
                    )))
                }
            },

            Message::CloseEditDialog => {
                self.ui.close_dialog();
                Some(Task::none())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Book};
    use crate::features::Settings;

    fn book(id: i64, title: &str, release_year: i32) -> Book {
        Book {
            id,
            title: title.to_string(),
            release_year,
        }
    }

    fn app_with_books(books: Vec<Book>) -> App {
        let mut app = App::with_settings(Settings::default()).0;
        let _ = app.update(Message::BooksLoaded(Ok(books)));
        app
    }

    fn two_books() -> Vec<Book> {
        vec![book(1, "Dune", 1965), book(2, "Hyperion", 1989)]
    }

    mod select {
        use super::*;

        #[test]
        fn prefills_the_form_and_opens_the_dialog() {
            let mut app = app_with_books(two_books());

            let _ = app.update(Message::EditBook(1));

            assert!(app.ui.dialog.open);
            assert_eq!(app.ui.dialog.selected.as_ref().map(|b| b.id), Some(1));
            assert_eq!(app.ui.form.title, "Dune");
            assert_eq!(app.ui.form.release_year, "1965");
        }

        #[test]
        fn unknown_id_changes_nothing() {
            let mut app = app_with_books(two_books());

            let _ = app.update(Message::EditBook(42));

            assert!(!app.ui.dialog.open);
            assert!(app.ui.dialog.selected.is_none());
            assert!(app.ui.form.title.is_empty());
        }
    }

    mod update_book {
        use super::*;

        #[test]
        fn success_replaces_the_record_in_place_and_closes() {
            let mut app = app_with_books(two_books());
            let _ = app.update(Message::EditBook(1));

            let _ = app.update(Message::BookUpdated(Ok(book(1, "Dune", 1966))));

            assert_eq!(app.shelf.books.len(), 2);
            assert_eq!(app.shelf.books[0].release_year, 1966);
            assert_eq!(app.shelf.books[1].id, 2);
            assert!(!app.ui.dialog.open);
            assert!(app.ui.dialog.selected.is_none());
            assert!(app.ui.form.title.is_empty());
        }

        #[test]
        fn failure_keeps_the_dialog_open_and_the_state_unchanged() {
            let mut app = app_with_books(two_books());
            let _ = app.update(Message::EditBook(1));
            let _ = app.update(Message::SaveBookEdits);
            assert!(app.ui.dialog.saving);

            let _ = app.update(Message::BookUpdated(Err(ApiError::Transport(
                "connection reset".to_string(),
            ))));

            assert!(app.ui.dialog.open);
            assert!(!app.ui.dialog.saving);
            assert_eq!(app.shelf.books[0].release_year, 1965);
            assert_eq!(app.ui.form.title, "Dune");
        }

        #[test]
        fn save_without_a_selection_is_ignored() {
            let mut app = app_with_books(two_books());

            let _ = app.update(Message::SaveBookEdits);

            assert!(!app.ui.dialog.saving);
        }

        #[test]
        fn duplicate_saves_are_ignored_while_in_flight() {
            let mut app = app_with_books(two_books());
            let _ = app.update(Message::EditBook(1));

            let _ = app.update(Message::SaveBookEdits);
            let _ = app.update(Message::SaveBookEdits);

            assert!(app.ui.dialog.saving);
        }
    }

    mod delete_book {
        use super::*;

        #[test]
        fn success_removes_the_record_and_closes() {
            let mut app = app_with_books(two_books());
            let _ = app.update(Message::EditBook(1));

            let _ = app.update(Message::BookDeleted(Ok(1)));

            assert_eq!(app.shelf.books.len(), 1);
            assert_eq!(app.shelf.books[0].id, 2);
            assert!(!app.ui.dialog.open);
            assert!(app.ui.dialog.selected.is_none());
        }

        #[test]
        fn failure_keeps_the_collection_and_the_selection() {
            let mut app = app_with_books(two_books());
            let _ = app.update(Message::EditBook(1));
            let _ = app.update(Message::DeleteBook);

            let _ = app.update(Message::BookDeleted(Err(ApiError::Status {
                endpoint: "/api/books/1".to_string(),
                status: 500,
            })));

            assert_eq!(app.shelf.books.len(), 2);
            assert!(app.ui.dialog.open);
            assert_eq!(app.ui.dialog.selected.as_ref().map(|b| b.id), Some(1));
            assert!(!app.ui.dialog.saving);
        }
    }

    mod cancel {
        use super::*;

        #[test]
        fn returns_to_no_selection_with_a_cleared_form() {
            let mut app = app_with_books(two_books());
            let _ = app.update(Message::EditBook(2));
            assert!(app.ui.dialog.open);

            let _ = app.update(Message::CloseEditDialog);

            assert!(!app.ui.dialog.open);
            assert!(app.ui.dialog.selected.is_none());
            assert!(app.ui.form.title.is_empty());
            assert!(app.ui.form.release_year.is_empty());
            assert_eq!(app.shelf.books.len(), 2);
        }
    }
}
