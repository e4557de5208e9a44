//! Author workflows

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Author, BookShort},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All authors, sorted by family name.
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    /// The record plus all books referencing it, fetched concurrently.
    /// Either query failing aborts the read with the originating error; an
    /// unknown id is an empty result.
    pub async fn detail(&self, id: Uuid) -> AppResult<Option<(Author, Vec<BookShort>)>> {
        let (author, books) = tokio::try_join!(
            self.repository.authors.get(id),
            self.repository.books.by_author(id),
        )?;
        Ok(author.map(|author| (author, books)))
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Option<Author>> {
        self.repository.authors.get(id).await
    }

    pub async fn create(&self, author: &Author) -> AppResult<()> {
        self.repository.authors.insert(author).await
    }

    pub async fn update(&self, author: &Author) -> AppResult<()> {
        self.repository.authors.update(author).await
    }
}
