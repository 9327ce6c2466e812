//! Book resource representation

use serde::{Deserialize, Serialize};

/// A persisted book
///
/// Serializes with keys in declaration order: `id`, `title`, `author`,
/// `description`. Row decoding is by column name, so the SELECT list order
/// cannot shuffle fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
}

/// Mutable book fields as sent by clients on create and update
///
/// Every field is optional on the wire; a missing field reads as empty and is
/// then rejected by validation when it is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl BookPayload {
    /// Split into `(title, author, description)`, treating missing as empty
    pub fn into_parts(self) -> (String, String, String) {
        (
            self.title.unwrap_or_default(),
            self.author.unwrap_or_default(),
            self.description.unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_serializes_in_declared_order() {
        let book = Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            description: String::new(),
        };
        assert_eq!(
            serde_json::to_string(&book).unwrap(),
            r#"{"id":1,"title":"Dune","author":"Herbert","description":""}"#
        );
    }

    #[test]
    fn test_book_escapes_quotes_and_control_characters() {
        let book = Book {
            id: 2,
            title: "The \"Best\" Book".to_string(),
            author: "O'Brien\\Smith".to_string(),
            description: "line one\nline two\ttab".to_string(),
        };
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains(r#""title":"The \"Best\" Book""#));
        assert!(json.contains(r#""author":"O'Brien\\Smith""#));
        assert!(json.contains(r#""description":"line one\nline two\ttab""#));

        let parsed: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, book);
    }

    #[test]
    fn test_payload_accepts_missing_and_null_fields() {
        let payload: BookPayload =
            serde_json::from_str(r#"{"title":"Dune","description":null}"#).unwrap();
        assert_eq!(
            payload.into_parts(),
            ("Dune".to_string(), String::new(), String::new())
        );
    }
}
