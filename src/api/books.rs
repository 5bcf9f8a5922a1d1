//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppResult, ErrorResponse},
    models::book::{Book, CreateBook, UpdateBookStatus},
};

use super::ValidatedJson;

/// Add a book to the library
#[utoipa::path(
    post,
    path = "/books/",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 409, description = "A book with the same title already exists", body = ErrorResponse),
        (status = 422, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(&data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// List every book
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get a book by title, ignoring accents and case
#[utoipa::path(
    get,
    path = "/books/{title}",
    tag = "books",
    params(("title" = String, Path, description = "Book title")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_title(&title).await?;
    Ok(Json(book))
}

/// Mark a book as read or unread
#[utoipa::path(
    put,
    path = "/books/{title}",
    tag = "books",
    params(("title" = String, Path, description = "Book title")),
    request_body = UpdateBookStatus,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 422, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn update_book_status(
    State(state): State<crate::AppState>,
    Path(title): Path<String>,
    ValidatedJson(data): ValidatedJson<UpdateBookStatus>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update_status(&title, &data).await?;
    Ok(Json(book))
}

/// Delete a book by title
#[utoipa::path(
    delete,
    path = "/books/{title}",
    tag = "books",
    params(("title" = String, Path, description = "Book title")),
    responses(
        (status = 200, description = "Deleted book", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.delete(&title).await?;
    Ok(Json(book))
}
