//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create a new genre.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateGenreRequest {
    /// Display name of the genre; the slug is derived from it
    #[schema(example = "Science Fiction")]
    pub name: String,
}

/// Request to rename an existing genre.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateGenreRequest {
    /// New display name; the slug is recomputed from it
    #[schema(example = "Sci-Fi")]
    pub name: String,
}
