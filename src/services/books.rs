//! Book reads used by the other workflows (selector lists)

use crate::{error::AppResult, models::BookShort, repository::Repository};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All books sorted by title, for form selectors.
    pub async fn list_short(&self) -> AppResult<Vec<BookShort>> {
        self.repository.books.list_short().await
    }
}
