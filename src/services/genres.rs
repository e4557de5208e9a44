//! Genre workflows, including the duplicate-avoidance resolver

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{BookShort, Genre},
    repository::Repository,
};

#[derive(Clone)]
pub struct GenresService {
    repository: Repository,
}

impl GenresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All genres, sorted by name.
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list().await
    }

    /// The record plus all books referencing it, fetched concurrently.
    pub async fn detail(&self, id: Uuid) -> AppResult<Option<(Genre, Vec<BookShort>)>> {
        let (genre, books) = tokio::try_join!(
            self.repository.genres.get(id),
            self.repository.books.by_genre(id),
        )?;
        Ok(genre.map(|genre| (genre, books)))
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Option<Genre>> {
        self.repository.genres.get(id).await
    }

    /// Idempotent create-by-name: a case-insensitive match short-circuits to
    /// the existing record instead of inserting. The check-then-insert pair
    /// is not atomic; concurrent submissions of the same name can still
    /// insert twice.
    pub async fn create(&self, name: String) -> AppResult<Genre> {
        if let Some(existing) = self.repository.genres.find_by_name_collated(&name).await? {
            tracing::info!(genre = %existing.id, "genre create: name already exists, reusing record");
            return Ok(existing);
        }
        let genre = Genre::new(name);
        self.repository.genres.insert(&genre).await?;
        Ok(genre)
    }

    pub async fn update(&self, genre: &Genre) -> AppResult<()> {
        self.repository.genres.update(genre).await
    }
}
