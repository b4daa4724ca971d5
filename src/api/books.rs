//! Books API client
//!
//! Thin wrapper over reqwest for the four CRUD endpoints of the books backend.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Response};

use super::error::ApiError;
use super::model::{Book, BookDraft};

/// Default backend address, matching the development server
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const TIMEOUT: u64 = 30;

/// REST client for the books backend
#[derive(Clone)]
pub struct BooksApi {
    client: Client,
    base_url: String,
}

impl fmt::Debug for BooksApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BooksApi")
            .field("client", &"<HttpClient>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl BooksApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT))
            .build()
            .expect("failed to initialize HTTP client");
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the whole collection, in server order
    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let response = self.client.get(self.endpoint("/api/books/")).send().await?;
        let response = check_status("/api/books/", response)?;
        Ok(response.json().await?)
    }

    /// Create a new book and return the server-assigned record
    pub async fn create_book(&self, draft: &BookDraft) -> Result<Book, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/api/books/create"))
            .json(draft)
            .send()
            .await?;
        let response = check_status("/api/books/create", response)?;
        Ok(response.json().await?)
    }

    /// Replace the book with the given id and return the updated record
    pub async fn update_book(&self, id: i64, draft: &BookDraft) -> Result<Book, ApiError> {
        let path = format!("/api/books/{id}");
        let response = self
            .client
            .put(self.endpoint(&path))
            .json(draft)
            .send()
            .await?;
        let response = check_status(&path, response)?;
        Ok(response.json().await?)
    }

    /// Delete the book with the given id; the response body is ignored
    pub async fn delete_book(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/api/books/{id}");
        let response = self.client.delete(self.endpoint(&path)).send().await?;
        check_status(&path, response)?;
        Ok(())
    }
}

fn check_status(endpoint: &str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_the_base_url() {
        let api = BooksApi::new("http://localhost:8000/");
        assert_eq!(
            api.endpoint("/api/books/"),
            "http://localhost:8000/api/books/"
        );
    }

    #[test]
    fn endpoints_are_joined_onto_the_base_url() {
        let api = BooksApi::new(DEFAULT_BASE_URL);
        assert_eq!(api.endpoint("/api/books/3"), "http://127.0.0.1:8000/api/books/3");
    }
}
