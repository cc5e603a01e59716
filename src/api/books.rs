//! Book endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{BookDto, CreateBook, UpdateBook},
        response::ApiResponse,
    },
};

/// List all books
#[utoipa::path(
    get,
    path = "/book",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = ApiResponse<Vec<BookDto>>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<Vec<BookDto>>>> {
    let books = state.services.books.list().await?;
    Ok(Json(ApiResponse::success(books, StatusCode::OK, None)))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = ApiResponse<BookDto>),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<BookDto>>> {
    let book = state.services.books.get(id).await?;
    Ok(Json(ApiResponse::success(book, StatusCode::OK, None)))
}

/// Create a new book with author/genre associations
#[utoipa::path(
    post,
    path = "/book",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = ApiResponse<BookDto>),
        (status = 400, description = "Invalid input or missing referenced ids"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateBook>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.books.create(payload).await?;
    let location = format!("/api/book/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(
            created,
            StatusCode::CREATED,
            Some("Book created successfully.".to_string()),
        )),
    ))
}

/// Update an existing book, replacing its association set
#[utoipa::path(
    put,
    path = "/book/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated"),
        (status = 400, description = "Invalid input or missing referenced ids"),
        (status = 404, description = "Book not found"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBook>,
) -> AppResult<Json<ApiResponse<BookDto>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    state.services.books.update(id, payload).await?;

    Ok(Json(ApiResponse::message_only(
        StatusCode::OK,
        "Book updated successfully.",
    )))
}

/// Delete a book and all of its association rows
#[utoipa::path(
    delete,
    path = "/book/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Book not found"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<BookDto>>> {
    state.services.books.delete(id).await?;

    Ok(Json(ApiResponse::message_only(
        StatusCode::OK,
        "Book deleted successfully.",
    )))
}
