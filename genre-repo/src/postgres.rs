//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use genre_types::{Genre, GenreRepository, RepoError};

use crate::types::{DbGenre, map_sqlx_error};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_genres_pg.sql"),
        "0001",
    )
    .await?;

    Ok(())
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the database schema (for testing with existing pool).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        run_migrations(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl GenreRepository for PostgresRepo {
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
            r#"INSERT INTO genres (id, name, slug, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(genre.id.into_uuid())
        .bind(&genre.name)
        .bind(&genre.slug)
        .bind(genre.created_at)
        .bind(genre.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Genre, RepoError> {
        let row: Option<DbGenre> = sqlx::query_as(
            r#"SELECT id, name, slug, created_at, updated_at FROM genres WHERE slug = $1"#,
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
            sqlx::query(r#"UPDATE genres SET name = $1, slug = $2, updated_at = $3 WHERE id = $4"#)
                .bind(&genre.name)
                .bind(&genre.slug)
                .bind(genre.updated_at)
                .bind(genre.id.into_uuid())
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<(), RepoError> {
        let result = sqlx::query(r#"DELETE FROM genres WHERE slug = $1"#)
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
