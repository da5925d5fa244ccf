//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use genre_types::domain::{Genre, GenreId};
use genre_types::dto::{CreateGenreRequest, UpdateGenreRequest};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List all genres
#[utoipa::path(
    get,
    path = "/genres",
    tag = "genres",
    responses(
        (status = 200, description = "List of genres ordered by name", body = Vec<Genre>)
    )
)]
async fn list_genres() {}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/genres",
    tag = "genres",
    request_body = CreateGenreRequest,
    responses(
        (status = 201, description = "Genre created successfully", body = Genre),
        (status = 400, description = "Empty or invalid genre name"),
        (status = 409, description = "A genre with the same slug already exists")
    )
)]
async fn create_genre() {}

/// Get a genre by slug
#[utoipa::path(
    get,
    path = "/genres/{slug}",
    tag = "genres",
    params(
        ("slug" = String, Path, description = "URL-safe genre key")
    ),
    responses(
        (status = 200, description = "The genre", body = Genre),
        (status = 404, description = "Genre not found")
    )
)]
async fn get_genre() {}

/// Rename a genre
#[utoipa::path(
    put,
    path = "/genres/{slug}",
    tag = "genres",
    request_body = UpdateGenreRequest,
    params(
        ("slug" = String, Path, description = "URL-safe genre key")
    ),
    responses(
        (status = 200, description = "Genre updated; slug recomputed from the new name", body = Genre),
        (status = 400, description = "Empty or invalid genre name"),
        (status = 404, description = "Genre not found"),
        (status = 409, description = "A genre with the same slug already exists")
    )
)]
async fn update_genre() {}

/// Delete a genre by slug
#[utoipa::path(
    delete,
    path = "/genres/{slug}",
    tag = "genres",
    params(
        ("slug" = String, Path, description = "URL-safe genre key")
    ),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Genre not found")
    )
)]
async fn delete_genre() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Genre Taxonomy API",
        description = "CRUD API for comic genre taxonomy entries",
        version = "0.1.0"
    ),
    paths(
        health,
        list_genres,
        create_genre,
        get_genre,
        update_genre,
        delete_genre,
    ),
    components(
        schemas(
            Genre,
            GenreId,
            CreateGenreRequest,
            UpdateGenreRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "genres", description = "Genre taxonomy management"),
    )
)]
pub struct ApiDoc;
