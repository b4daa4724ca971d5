//! Application messages

use crate::api::{ApiError, Book};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// No-op message for event interception (modal backdrop clicks)
    Noop,

    // ============ Shelf ============
    /// Result of the read-all fetch issued at startup
    BooksLoaded(Result<Vec<Book>, ApiError>),
    /// Title form field edited
    TitleChanged(String),
    /// Release year form field edited
    ReleaseYearChanged(String),
    /// Submit the add-book form
    AddBook,
    /// Server reply for a create request
    BookCreated(Result<Book, ApiError>),

    // ============ Edit dialog ============
    /// Open the edit dialog for a listed book
    EditBook(i64),
    /// Submit the edit form for the selected book
    SaveBookEdits,
    /// Server reply for an update request
    BookUpdated(Result<Book, ApiError>),
    /// Delete the selected book
    DeleteBook,
    /// Server reply for a delete request, carrying the deleted id
    BookDeleted(Result<i64, ApiError>),
    /// Close the edit dialog without saving
    CloseEditDialog,

    // ============ Settings ============
    /// Toggle dark mode and persist the preference
    UpdateDarkMode(bool),

    // ============ Toasts ============
    /// Show a success toast
    ShowToast(String),
    /// Show an error toast
    ShowErrorToast(String),
    /// Hide the visible toast
    HideToast,
}
