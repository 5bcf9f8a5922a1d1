//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Row as stored in the `books` table
#[derive(Debug, Clone, FromRow)]
pub struct BookRow {
    pub id: i64,
    pub title: String,
    /// Normalized title, indexed for lookups
    pub title_key: String,
    pub author: String,
    pub year: i32,
    pub cover_url: Option<String>,
    pub is_read: bool,
}

/// Book record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Server-assigned identifier
    pub id: i64,
    /// Title exactly as submitted
    pub title: String,
    pub author: String,
    /// Publication year
    pub year: i32,
    pub cover_url: Option<String>,
    /// Whether the book has been read
    pub is_read: bool,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            author: row.author,
            year: row.year,
            cover_url: row.cover_url,
            is_read: row.is_read,
        }
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    /// Cover image, must be an absolute URL
    #[validate(url(message = "Invalid URL"))]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub is_read: bool,
}

/// Update read status request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBookStatus {
    pub is_read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create(cover_url: Option<&str>) -> CreateBook {
        CreateBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: 1965,
            cover_url: cover_url.map(str::to_string),
            is_read: false,
        }
    }

    #[test]
    fn row_maps_every_public_field() {
        let row = BookRow {
            id: 7,
            title: "Reina Roja".to_string(),
            title_key: "reina roja".to_string(),
            author: "Juan Gómez-Jurado".to_string(),
            year: 2018,
            cover_url: Some("https://example.com/rr.jpg".to_string()),
            is_read: true,
        };

        let book = Book::from(row);
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({
                "id": 7,
                "title": "Reina Roja",
                "author": "Juan Gómez-Jurado",
                "year": 2018,
                "cover_url": "https://example.com/rr.jpg",
                "is_read": true
            })
        );
    }

    #[test]
    fn missing_cover_serializes_as_null() {
        let book = Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: 1965,
            cover_url: None,
            is_read: false,
        };
        assert_eq!(serde_json::to_value(&book).unwrap()["cover_url"], json!(null));
    }

    #[test]
    fn cover_url_must_be_absolute() {
        assert!(create(None).validate().is_ok());
        assert!(create(Some("https://images.example.com/dune.jpg")).validate().is_ok());

        let errors = create(Some("not a url")).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cover_url"));
        assert!(create(Some("/covers/dune.jpg")).validate().is_err());
    }

    #[test]
    fn is_read_defaults_to_false() {
        let data: CreateBook =
            serde_json::from_value(json!({"title": "DUNE", "author": "X", "year": 1})).unwrap();
        assert!(!data.is_read);
        assert!(data.cover_url.is_none());
    }
}
