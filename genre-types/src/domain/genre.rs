//! Genre domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::slug::slugify;
use crate::error::DomainError;

/// Unique identifier for a Genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct GenreId(Uuid);

impl GenreId {
    /// Creates a new random GenreId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a GenreId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for GenreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A taxonomy entry grouping comics by category.
///
/// The `slug` is always derived from `name` and serves as the external
/// lookup key; the `id` stays the primary key and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Genre {
    /// Unique identifier, immutable after creation
    pub id: GenreId,
    /// Human-readable display name
    #[schema(example = "Science Fiction")]
    pub name: String,
    /// URL-safe key derived from the name
    #[schema(example = "science-fiction")]
    pub slug: String,
    /// When the genre was created
    pub created_at: DateTime<Utc>,
    /// When the genre was last modified
    pub updated_at: DateTime<Utc>,
}

impl Genre {
    /// Creates a new genre, stamping id, slug, and both timestamps.
    ///
    /// # Validation
    /// - Name cannot be empty or whitespace-only
    pub fn new(name: String) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationFailed(
                "Genre name cannot be empty".into(),
            ));
        }

        let now = Utc::now();
        let slug = slugify(&name);
        Ok(Self {
            id: GenreId::new(),
            name,
            slug,
            created_at: now,
            updated_at: now,
        })
    }

    /// Creates a genre with all fields specified (for database reconstruction).
    pub fn from_parts(
        id: GenreId,
        name: String,
        slug: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            slug,
            created_at,
            updated_at,
        }
    }

    /// Renames the genre, recomputing the slug and refreshing `updated_at`.
    ///
    /// `id` and `created_at` are preserved.
    pub fn rename(&mut self, new_name: String) -> Result<(), DomainError> {
        if new_name.trim().is_empty() {
            return Err(DomainError::ValidationFailed(
                "Genre name cannot be empty".into(),
            ));
        }

        self.slug = slugify(&new_name);
        self.name = new_name;
        self.updated_at = Utc::now();
        Ok(())
    }
}
