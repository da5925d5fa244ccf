//! Genre Application Service
//!
//! Orchestrates domain operations through the repository port.
//! Contains NO infrastructure logic - pure business orchestration.

use genre_types::{
    AppError, CreateGenreRequest, Genre, GenreRepository, UpdateGenreRequest,
};

/// Application service for genre taxonomy operations.
///
/// Generic over `R: GenreRepository` - the adapter is injected at compile time.
/// This enables:
/// - Swapping repositories without code changes
/// - Testing with an in-memory repo
/// - Compile-time checks for port implementation
pub struct GenreService<R: GenreRepository> {
    repo: R,
}

impl<R: GenreRepository> GenreService<R> {
    /// Creates a new genre service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all genres in store order (name ascending).
    pub async fn list_genres(&self) -> Result<Vec<Genre>, AppError> {
        self.repo.list().await.map_err(Into::into)
    }

    /// Creates a new genre from a display name.
    ///
    /// The domain constructor stamps id, slug, and both timestamps; no
    /// uniqueness probe happens here - the store's unique slug index decides.
    pub async fn create_genre(&self, req: CreateGenreRequest) -> Result<Genre, AppError> {
        let genre = Genre::new(req.name)?;

        self.repo.create(&genre).await?;
        Ok(genre)
    }

    /// Finds a genre by its slug.
    pub async fn find_genre(&self, slug: &str) -> Result<Genre, AppError> {
        self.repo.get_by_slug(slug).await.map_err(Into::into)
    }

    /// Renames the genre identified by `slug`.
    ///
    /// Recomputes the slug and refreshes `updated_at`; id and `created_at`
    /// are preserved.
    pub async fn update_genre(
        &self,
        slug: &str,
        req: UpdateGenreRequest,
    ) -> Result<Genre, AppError> {
        let mut genre = self.repo.get_by_slug(slug).await?;

        genre.rename(req.name)?;

        self.repo.update(&genre).await?;
        Ok(genre)
    }

    /// Deletes the genre identified by `slug`.
    pub async fn delete_genre(&self, slug: &str) -> Result<(), AppError> {
        self.repo.delete_by_slug(slug).await.map_err(Into::into)
    }
}
