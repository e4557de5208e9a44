//! BookInstances repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{error::AppResult, models::BookInstance};

#[derive(Clone)]
pub struct BookInstancesRepository {
    pool: Pool<Postgres>,
}

impl BookInstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All copies with the referenced book title resolved, sorted by status.
    /// The LEFT JOIN keeps rows whose book reference dangles.
    pub async fn list(&self) -> AppResult<Vec<BookInstance>> {
        let instances = sqlx::query_as::<_, BookInstance>(
            r#"
            SELECT bi.id, bi.book_id, bi.imprint, bi.status, bi.due_back,
                   b.title AS book_title
            FROM book_instances bi
            LEFT JOIN books b ON b.id = bi.book_id
            ORDER BY bi.status
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(instances)
    }

    /// One copy with the referenced book title resolved. Absence is an empty
    /// result, not an error.
    pub async fn get(&self, id: Uuid) -> AppResult<Option<BookInstance>> {
        let instance = sqlx::query_as::<_, BookInstance>(
            r#"
            SELECT bi.id, bi.book_id, bi.imprint, bi.status, bi.due_back,
                   b.title AS book_title
            FROM book_instances bi
            LEFT JOIN books b ON b.id = bi.book_id
            WHERE bi.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(instance)
    }

    pub async fn insert(&self, instance: &BookInstance) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO book_instances (id, book_id, imprint, status, due_back)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(instance.id)
        .bind(instance.book_id)
        .bind(&instance.imprint)
        .bind(instance.status)
        .bind(instance.due_back)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Full replacement keyed by id; a no-op when the id does not exist.
    pub async fn update(&self, instance: &BookInstance) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE book_instances
            SET book_id = $2, imprint = $3, status = $4, due_back = $5
            WHERE id = $1
            "#,
        )
        .bind(instance.id)
        .bind(instance.book_id)
        .bind(&instance.imprint)
        .bind(instance.status)
        .bind(instance.due_back)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete by id. Deleting an id that no longer exists is not an error.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM book_instances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
