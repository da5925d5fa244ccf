//! Shared database types with feature-gated fields for SQLite and PostgreSQL.

use sqlx::FromRow;

use genre_types::{Genre, GenreId, RepoError};

#[cfg(not(feature = "sqlite"))]
use chrono::{DateTime, Utc};
#[cfg(not(feature = "sqlite"))]
use uuid::Uuid;

/// Genre row from database.
///
/// SQLite has no native uuid/timestamp types, so its fields come back as
/// TEXT and are parsed in `into_domain`.
#[derive(FromRow)]
pub struct DbGenre {
    #[cfg(not(feature = "sqlite"))]
    pub id: Uuid,
    #[cfg(feature = "sqlite")]
    pub id: String,

    pub name: String,
    pub slug: String,

    #[cfg(not(feature = "sqlite"))]
    pub created_at: DateTime<Utc>,
    #[cfg(feature = "sqlite")]
    pub created_at: String,

    #[cfg(not(feature = "sqlite"))]
    pub updated_at: DateTime<Utc>,
    #[cfg(feature = "sqlite")]
    pub updated_at: String,
}

impl DbGenre {
    #[cfg(not(feature = "sqlite"))]
    pub fn into_domain(self) -> Result<Genre, RepoError> {
        Ok(Genre::from_parts(
            GenreId::from_uuid(self.id),
            self.name,
            self.slug,
            self.created_at,
            self.updated_at,
        ))
    }

    #[cfg(feature = "sqlite")]
    pub fn into_domain(self) -> Result<Genre, RepoError> {
        let id =
            uuid::Uuid::parse_str(&self.id).map_err(|e| RepoError::Database(e.to_string()))?;

        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| RepoError::Database(e.to_string()))?
            .with_timezone(&chrono::Utc);

        let updated_at = chrono::DateTime::parse_from_rfc3339(&self.updated_at)
            .map_err(|e| RepoError::Database(e.to_string()))?
            .with_timezone(&chrono::Utc);

        Ok(Genre::from_parts(
            GenreId::from_uuid(id),
            self.name,
            self.slug,
            created_at,
            updated_at,
        ))
    }
}

/// Maps a sqlx error to the domain vocabulary.
///
/// Unique-index violations (duplicate slug) become `Conflict`; everything
/// else stays a generic database failure.
pub fn map_sqlx_error(err: sqlx::Error) -> RepoError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return RepoError::Conflict("A genre with this slug already exists".into());
        }
    }
    RepoError::Database(err.to_string())
}
