//! SQLite repository adapter.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use genre_types::{Genre, GenreRepository, RepoError};

use crate::types::{DbGenre, map_sqlx_error};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        // Run migration from migration file
        let ddl = include_str!("../migrations/0001_create_genres.sql");
        for statement in ddl.split(';') {
            let stmt = statement.trim();
            if !stmt.is_empty() {
                sqlx::query(stmt).execute(&pool).await?;
            }
        }

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl GenreRepository for SqliteRepo {
    async fn list(&self) -> Result<Vec<Genre>, RepoError> {
        let rows: Vec<DbGenre> = sqlx::query_as(
            r#"SELECT id, name, slug, created_at, updated_at FROM genres ORDER BY name ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(DbGenre::into_domain).collect()
    }

    async fn create(&self, genre: &Genre) -> Result<(), RepoError> {
        sqlx::query(
            r#"INSERT INTO genres (id, name, slug, created_at, updated_at) VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(genre.id.to_string())
        .bind(&genre.name)
        .bind(&genre.slug)
        .bind(genre.created_at.to_rfc3339())
        .bind(genre.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Genre, RepoError> {
        let row: Option<DbGenre> = sqlx::query_as(
            r#"SELECT id, name, slug, created_at, updated_at FROM genres WHERE slug = ?"#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        match row {
            Some(row) => row.into_domain(),
            None => {
                tracing::debug!(slug, "no genre row for slug");
                Err(RepoError::NotFound)
            }
        }
    }

    async fn update(&self, genre: &Genre) -> Result<(), RepoError> {
        let result =
            sqlx::query(r#"UPDATE genres SET name = ?, slug = ?, updated_at = ? WHERE id = ?"#)
                .bind(&genre.name)
                .bind(&genre.slug)
                .bind(genre.updated_at.to_rfc3339())
                .bind(genre.id.to_string())
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<(), RepoError> {
        let result = sqlx::query(r#"DELETE FROM genres WHERE slug = ?"#)
            .bind(slug)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
