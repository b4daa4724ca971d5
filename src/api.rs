//! Books REST API module
//!
//! Client, data model, and typed errors for the books backend.

mod books;
mod error;
pub mod model;

pub use books::{BooksApi, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use model::{Book, BookDraft};
