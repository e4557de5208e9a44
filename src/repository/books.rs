//! Books repository
//!
//! The Book workflows have their own controller; the catalog workflows here
//! only need the short projection, for detail-page joins and selector lists.

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{error::AppResult, models::BookShort};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All books, sorted by title (form selector lists).
    pub async fn list_short(&self) -> AppResult<Vec<BookShort>> {
        let books = sqlx::query_as::<_, BookShort>(
            "SELECT id, title, summary FROM books ORDER BY title",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// Books referencing the given author.
    pub async fn by_author(&self, author_id: Uuid) -> AppResult<Vec<BookShort>> {
        let books = sqlx::query_as::<_, BookShort>(
            "SELECT id, title, summary FROM books WHERE author_id = $1 ORDER BY title",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// Books referencing the given genre, via the junction table.
    pub async fn by_genre(&self, genre_id: Uuid) -> AppResult<Vec<BookShort>> {
        let books = sqlx::query_as::<_, BookShort>(
            r#"
            SELECT b.id, b.title, b.summary
            FROM books b
            JOIN book_genres bg ON bg.book_id = b.id
            WHERE bg.genre_id = $1
            ORDER BY b.title
            "#,
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }
}
