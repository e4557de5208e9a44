//! Genres repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{error::AppResult, models::Genre};

#[derive(Clone)]
pub struct GenresRepository {
    pool: Pool<Postgres>,
}

impl GenresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All genres, sorted by name.
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>(
            "SELECT id, name FROM genres ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(genres)
    }

    /// Absence is an empty result, not an error.
    pub async fn get(&self, id: Uuid) -> AppResult<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>(
            "SELECT id, name FROM genres WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(genre)
    }

    /// Case-insensitive name lookup under the database collation: case
    /// differences are ignored, base-letter and accent differences are not.
    pub async fn find_by_name_collated(&self, name: &str) -> AppResult<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>(
            "SELECT id, name FROM genres WHERE lower(name) = lower($1) LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(genre)
    }

    pub async fn insert(&self, genre: &Genre) -> AppResult<()> {
        sqlx::query("INSERT INTO genres (id, name) VALUES ($1, $2)")
            .bind(genre.id)
            .bind(&genre.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Full replacement keyed by id; a no-op when the id does not exist.
    pub async fn update(&self, genre: &Genre) -> AppResult<()> {
        sqlx::query("UPDATE genres SET name = $2 WHERE id = $1")
            .bind(genre.id)
            .bind(&genre.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
