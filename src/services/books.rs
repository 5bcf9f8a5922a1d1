//! Reading list service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookRow, CreateBook, UpdateBookStatus},
    normalize::normalize_title,
    repository::{Repository, Session},
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book unless one with the same normalized title exists.
    ///
    /// The check and the insert are separate statements, so two concurrent
    /// requests whose titles normalize alike can both get through.
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        tracing::info!(title = %data.title, "received book");
        let title_key = normalize_title(&data.title);

        let mut session = self.repository.session().await?;
        if let Some(existing) = session.books_find_by_key(&title_key).await? {
            tracing::warn!(
                title = %data.title,
                existing_id = existing.id,
                "book already exists"
            );
            return Err(AppError::Conflict("Book already exists".to_string()));
        }

        let row = session.books_insert(data, &title_key).await?;
        tracing::info!(id = row.id, title = %row.title, "book created");
        Ok(row.into())
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let mut session = self.repository.session().await?;
        let rows = session.books_list().await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    pub async fn get_by_title(&self, title: &str) -> AppResult<Book> {
        let mut session = self.repository.session().await?;
        let row = find_by_title(&mut session, title).await?;
        Ok(row.into())
    }

    pub async fn update_status(&self, title: &str, data: &UpdateBookStatus) -> AppResult<Book> {
        let mut session = self.repository.session().await?;
        let row = find_by_title(&mut session, title).await?;
        let updated = session.books_set_read(row.id, data.is_read).await?;
        tracing::info!(id = updated.id, is_read = updated.is_read, "read status updated");
        Ok(updated.into())
    }

    /// Delete a book, returning its last stored values
    pub async fn delete(&self, title: &str) -> AppResult<Book> {
        let mut session = self.repository.session().await?;
        let row = find_by_title(&mut session, title).await?;
        session.books_delete(row.id).await?;
        tracing::info!(id = row.id, title = %row.title, "book deleted");
        Ok(row.into())
    }
}

async fn find_by_title(session: &mut Session, title: &str) -> AppResult<BookRow> {
    let title_key = normalize_title(title);
    tracing::debug!(%title, %title_key, "looking up book");
    session
        .books_find_by_key(&title_key)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
}
