//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use genre_types::{AppError, CreateGenreRequest, GenreRepository, UpdateGenreRequest};

use crate::GenreService;

/// Application state shared across handlers.
pub struct AppState<R: GenreRepository> {
    pub service: GenreService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Internal(msg) => {
                // Store failures are logged server-side; the client only sees
                // a generic message.
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// List all genres.
#[tracing::instrument(skip(state))]
pub async fn list_genres<R: GenreRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let genres = state.service.list_genres().await?;
    Ok(Json(genres))
}

/// Create a new genre.
#[tracing::instrument(skip(state), fields(name = %req.name))]
pub async fn create_genre<R: GenreRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<CreateGenreRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let genre = state.service.create_genre(req).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

/// Get a genre by slug.
#[tracing::instrument(skip(state), fields(slug = %slug))]
pub async fn get_genre<R: GenreRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let genre = state.service.find_genre(&slug).await?;
    Ok(Json(genre))
}

/// Rename a genre; the slug is recomputed from the new name.
#[tracing::instrument(skip(state), fields(slug = %slug, name = %req.name))]
pub async fn update_genre<R: GenreRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(slug): Path<String>,
    Json(req): Json<UpdateGenreRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let genre = state.service.update_genre(&slug, req).await?;
    Ok(Json(genre))
}

/// Delete a genre by slug.
#[tracing::instrument(skip(state), fields(slug = %slug))]
pub async fn delete_genre<R: GenreRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.delete_genre(&slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
