//! Genre endpoints

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
        genre::{CreateGenre, GenreDto, UpdateGenre},
        response::ApiResponse,
    },
};

/// List all genres
#[utoipa::path(
    get,
    path = "/genre",
    tag = "genres",
    responses(
        (status = 200, description = "List of genres", body = ApiResponse<Vec<GenreDto>>)
    )
)]
pub async fn list_genres(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<Vec<GenreDto>>>> {
    let genres = state.services.genres.list().await?;
    Ok(Json(ApiResponse::success(genres, StatusCode::OK, None)))
}

/// Get genre details by ID
#[utoipa::path(
    get,
    path = "/genre/{id}",
    tag = "genres",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre details", body = ApiResponse<GenreDto>),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn get_genre(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<GenreDto>>> {
    let genre = state.services.genres.get(id).await?;
    Ok(Json(ApiResponse::success(genre, StatusCode::OK, None)))
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/genre",
    tag = "genres",
    request_body = CreateGenre,
    responses(
        (status = 201, description = "Genre created", body = ApiResponse<GenreDto>),
        (status = 400, description = "Invalid input"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn create_genre(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateGenre>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.genres.create(payload).await?;
    let location = format!("/api/genre/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(
            created,
            StatusCode::CREATED,
            Some("Genre created successfully.".to_string()),
        )),
    ))
}

/// Update an existing genre
#[utoipa::path(
    put,
    path = "/genre/{id}",
    tag = "genres",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    request_body = UpdateGenre,
    responses(
        (status = 200, description = "Genre updated"),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn update_genre(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGenre>,
) -> AppResult<Json<ApiResponse<GenreDto>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    state.services.genres.update(id, payload).await?;

    Ok(Json(ApiResponse::message_only(
        StatusCode::OK,
        "Genre updated successfully.",
    )))
}

/// Delete a genre (books keep their other associations)
#[utoipa::path(
    delete,
    path = "/genre/{id}",
    tag = "genres",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre deleted"),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn delete_genre(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<GenreDto>>> {
    state.services.genres.delete(id).await?;

    Ok(Json(ApiResponse::message_only(
        StatusCode::OK,
        "Genre deleted successfully.",
    )))
}
