//! Data model for the books API

use serde::{Deserialize, Serialize};

/// A book as stored by the server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    /// Server-assigned identifier, immutable
    pub id: i64,
    pub title: String,
    pub release_year: i32,
}

/// Write payload for create and update calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDraft {
    pub title: String,
    pub release_year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_list_decodes_in_response_order() {
        let json = r#"[
            {"id": 3, "title": "Dune", "release_year": 1965},
            {"id": 1, "title": "Hyperion", "release_year": 1989}
        ]"#;
        let books: Vec<Book> = serde_json::from_str(json).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, 3);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[1].release_year, 1989);
    }

    #[test]
    fn draft_serializes_title_and_release_year_only() {
        let draft = BookDraft {
            title: "Dune".to_string(),
            release_year: 1966,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"title": "Dune", "release_year": 1966})
        );
    }

    #[test]
    fn extra_fields_from_the_server_are_ignored() {
        let json = r#"{"id": 7, "title": "Dune", "release_year": 1965, "created_at": "2024-01-01"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, 7);
        assert_eq!(book.release_year, 1965);
    }
}
