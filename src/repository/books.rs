//! Book queries on a request Session

use super::Session;
use crate::{
    error::AppResult,
    models::book::{BookRow, CreateBook},
};

const BOOK_COLUMNS: &str = "id, title, title_key, author, year, cover_url, is_read";

impl Session {
    /// List all books in storage order
    pub async fn books_list(&mut self) -> AppResult<Vec<BookRow>> {
        let rows = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {} FROM books ORDER BY id",
            BOOK_COLUMNS
        ))
        .fetch_all(self.conn())
        .await?;
        Ok(rows)
    }

    /// First book (lowest id) whose normalized title equals `title_key`
    pub async fn books_find_by_key(&mut self, title_key: &str) -> AppResult<Option<BookRow>> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {} FROM books WHERE title_key = ? ORDER BY id LIMIT 1",
            BOOK_COLUMNS
        ))
        .bind(title_key)
        .fetch_optional(self.conn())
        .await?;
        Ok(row)
    }

    /// Insert a book and return the stored row
    pub async fn books_insert(&mut self, data: &CreateBook, title_key: &str) -> AppResult<BookRow> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            INSERT INTO books (title, title_key, author, year, cover_url, is_read)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            BOOK_COLUMNS
        ))
        .bind(&data.title)
        .bind(title_key)
        .bind(&data.author)
        .bind(data.year)
        .bind(&data.cover_url)
        .bind(data.is_read)
        .fetch_one(self.conn())
        .await?;
        Ok(row)
    }

    /// Overwrite the read flag of book `id`
    pub async fn books_set_read(&mut self, id: i64, is_read: bool) -> AppResult<BookRow> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "UPDATE books SET is_read = ? WHERE id = ? RETURNING {}",
            BOOK_COLUMNS
        ))
        .bind(is_read)
        .bind(id)
        .fetch_one(self.conn())
        .await?;
        Ok(row)
    }

    /// Remove book `id`
    pub async fn books_delete(&mut self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(self.conn())
            .await?;
        Ok(())
    }
}
