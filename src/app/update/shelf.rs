// src/app/update/shelf.rs
//! Shelf message handlers: list fetch, create, and the toast lifecycle

use iced::Task;
use tracing::{error, info};

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::Toast;

impl App {
    /// Handle collection-level messages
    pub fn handle_shelf(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::BooksLoaded(result) => {
                self.shelf.loading = false;
                match result {
                    Ok(books) => {
                        info!("loaded {} books", books.len());
                        self.shelf.books = books.clone();
                        Some(Task::none())
                    }
                    Err(err) => {
                        error!("failed to load books: {err}");
                        Some(Task::done(Message::ShowErrorToast(
                            "Could not load books from the server".to_string(),
                        )))
                    }
                }
            }

            Message::TitleChanged(title) => {
                self.ui.form.title = title.clone();
                Some(Task::none())
            }

            Message::ReleaseYearChanged(year) => {
                // Year field accepts digits only
                self.ui.form.release_year = year.chars().filter(char::is_ascii_digit).collect();
                Some(Task::none())
            }

            Message::AddBook => {
                if self.shelf.creating {
                    return Some(Task::none());
                }
                self.shelf.creating = true;

                let api = self.core.api.clone();
                let draft = self.ui.form.draft();
                info!("creating book: {:?}", draft.title);
                Some(Task::perform(
                    async move { api.create_book(&draft).await },
                    Message::BookCreated,
                ))
            }

            Message::BookCreated(result) => {
                self.shelf.creating = false;
                match result {
                    Ok(book) => {
                        // Form values are kept after a create
                        info!("book {} created", book.id);
                        self.shelf.books.push(book.clone());
                        Some(Task::none())
                    }
                    Err(err) => {
                        error!("failed to create book: {err}");
                        Some(Task::done(Message::ShowErrorToast(
                            "Could not create the book".to_string(),
                        )))
                    }
                }
            }

            Message::ShowToast(msg) => {
                self.ui.toast = Some(Toast::success(msg.clone()));
                self.ui.toast_visible = true;
                // Auto-hide toast after 3 seconds
                Some(Task::perform(
                    async {
                        tokio::time::sleep(std::time::Duration::from_secs(3)).await;
                    },
                    |_| Message::HideToast,
                ))
            }

            Message::ShowErrorToast(msg) => {
                self.ui.toast = Some(Toast::error(msg.clone()));
                self.ui.toast_visible = true;
                // Auto-hide error toast after 4 seconds
                Some(Task::perform(
                    async {
                        tokio::time::sleep(std::time::Duration::from_secs(4)).await;
                    },
                    |_| Message::HideToast,
                ))
            }

            Message::HideToast => {
                self.ui.toast_visible = false;
                Some(Task::none())
            }

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

    fn app() -> App {
        App::with_settings(Settings::default()).0
    }

    fn app_with_books(books: Vec<Book>) -> App {
        let mut app = app();
        let _ = app.update(Message::BooksLoaded(Ok(books)));
        app
    }

    mod list_fetch {
        use super::*;

        #[test]
        fn success_replaces_the_collection_in_response_order() {
            let mut app = app();
            assert!(app.shelf.loading);

            let _ = app.update(Message::BooksLoaded(Ok(vec![
                book(3, "Dune", 1965),
                book(1, "Hyperion", 1989),
            ])));

            assert!(!app.shelf.loading);
            assert_eq!(app.shelf.books.len(), 2);
            assert_eq!(app.shelf.books[0].id, 3);
            assert_eq!(app.shelf.books[1].id, 1);
        }

        #[test]
        fn failure_leaves_the_collection_unchanged() {
            let mut app = app_with_books(vec![book(1, "Dune", 1965)]);

            let _ = app.update(Message::BooksLoaded(Err(ApiError::Transport(
                "connection refused".to_string(),
            ))));

            assert!(!app.shelf.loading);
            assert_eq!(app.shelf.books, vec![book(1, "Dune", 1965)]);
        }
    }

    mod create {
        use super::*;

        #[test]
        fn success_appends_the_server_record() {
            let mut app = app_with_books(vec![book(1, "Dune", 1965)]);

            let _ = app.update(Message::BookCreated(Ok(book(2, "Hyperion", 1989))));

            assert_eq!(app.shelf.books.len(), 2);
            assert_eq!(app.shelf.books[1].id, 2);
        }

        #[test]
        fn success_keeps_the_form_values() {
            let mut app = app_with_books(Vec::new());
            let _ = app.update(Message::TitleChanged("Hyperion".to_string()));
            let _ = app.update(Message::ReleaseYearChanged("1989".to_string()));

            let _ = app.update(Message::AddBook);
            let _ = app.update(Message::BookCreated(Ok(book(2, "Hyperion", 1989))));

            assert_eq!(app.ui.form.title, "Hyperion");
            assert_eq!(app.ui.form.release_year, "1989");
        }

        #[test]
        fn failure_leaves_the_collection_unchanged() {
            let mut app = app_with_books(vec![book(1, "Dune", 1965)]);

            let _ = app.update(Message::BookCreated(Err(ApiError::Status {
                endpoint: "/api/books/create".to_string(),
                status: 500,
            })));

            assert_eq!(app.shelf.books.len(), 1);
            assert!(!app.shelf.creating);
        }

        #[test]
        fn duplicate_submissions_are_ignored_while_in_flight() {
            let mut app = app_with_books(Vec::new());

            let _ = app.update(Message::AddBook);
            assert!(app.shelf.creating);

            // Second submit while the first is still in flight
            let _ = app.update(Message::AddBook);
            assert!(app.shelf.creating);
            assert!(app.shelf.books.is_empty());
        }
    }

    mod year_input {
        use super::*;

        #[test]
        fn non_digit_characters_are_stripped() {
            let mut app = app();
            let _ = app.update(Message::ReleaseYearChanged("19a6b5".to_string()));
            assert_eq!(app.ui.form.release_year, "1965");
        }
    }

    mod toasts {
        use super::*;

        #[test]
        fn show_then_hide() {
            let mut app = app();

            let _ = app.update(Message::ShowErrorToast("boom".to_string()));
            assert!(app.ui.toast_visible);
            assert!(app.ui.toast.is_some());

            let _ = app.update(Message::HideToast);
            assert!(!app.ui.toast_visible);
        }
    }
}
