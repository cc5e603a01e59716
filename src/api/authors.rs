//! Author endpoints

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
        author::{AuthorDetailDto, AuthorDto, CreateAuthor, UpdateAuthor},
        response::ApiResponse,
    },
};

/// List all authors
#[utoipa::path(
    get,
    path = "/author",
    tag = "authors",
    responses(
        (status = 200, description = "List of authors", body = ApiResponse<Vec<AuthorDto>>)
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<Vec<AuthorDto>>>> {
    let authors = state.services.authors.list().await?;
    Ok(Json(ApiResponse::success(authors, StatusCode::OK, None)))
}

/// Get author details by ID, including linked books
#[utoipa::path(
    get,
    path = "/author/{id}",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = ApiResponse<AuthorDetailDto>),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<AuthorDetailDto>>> {
    let author = state.services.authors.get(id).await?;
    Ok(Json(ApiResponse::success(author, StatusCode::OK, None)))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/author",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = ApiResponse<AuthorDto>),
        (status = 400, description = "Invalid input"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateAuthor>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.authors.create(payload).await?;
    let location = format!("/api/author/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(
            created,
            StatusCode::CREATED,
            Some("Author created successfully.".to_string()),
        )),
    ))
}

/// Update an existing author
#[utoipa::path(
    put,
    path = "/author/{id}",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated"),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAuthor>,
) -> AppResult<Json<ApiResponse<AuthorDto>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    state.services.authors.update(id, payload).await?;

    Ok(Json(ApiResponse::message_only(
        StatusCode::OK,
        "Author updated successfully.",
    )))
}

/// Delete an author (books keep their other associations)
#[utoipa::path(
    delete,
    path = "/author/{id}",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author deleted"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<AuthorDto>>> {
    state.services.authors.delete(id).await?;

    Ok(Json(ApiResponse::message_only(
        StatusCode::OK,
        "Author deleted successfully.",
    )))
}
