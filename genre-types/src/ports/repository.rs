//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (Postgres, SQLite, InMemory) will implement this trait.

use crate::domain::Genre;
use crate::error::RepoError;

/// The main repository port for genre persistence.
///
/// "Row absent" is translated into `RepoError::NotFound` here, at the
/// adapter boundary; slug unique-index violations surface as
/// `RepoError::Conflict`.
#[async_trait::async_trait]
pub trait GenreRepository: Send + Sync + 'static {
    /// Lists all genres ordered by name ascending.
    ///
    /// Returns an empty vec (never an error) when no rows exist.
    async fn list(&self) -> Result<Vec<Genre>, RepoError>;

    /// Inserts a full genre row. Timestamps and id come from the caller.
    async fn create(&self, genre: &Genre) -> Result<(), RepoError>;

    /// Fetches one genre by its slug.
    async fn get_by_slug(&self, slug: &str) -> Result<Genre, RepoError>;

    /// Updates name, slug, and updated_at, keyed by id.
    async fn update(&self, genre: &Genre) -> Result<(), RepoError>;

    /// Deletes one genre by its slug.
    async fn delete_by_slug(&self, slug: &str) -> Result<(), RepoError>;
}
