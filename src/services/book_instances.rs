//! BookInstance workflows

use uuid::Uuid;

use crate::{error::AppResult, models::BookInstance, repository::Repository};

#[derive(Clone)]
pub struct BookInstancesService {
    repository: Repository,
}

impl BookInstancesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All copies, sorted by status, book titles resolved where possible.
    pub async fn list(&self) -> AppResult<Vec<BookInstance>> {
        self.repository.book_instances.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Option<BookInstance>> {
        self.repository.book_instances.get(id).await
    }

    pub async fn create(&self, instance: &BookInstance) -> AppResult<()> {
        self.repository.book_instances.insert(instance).await
    }

    pub async fn update(&self, instance: &BookInstance) -> AppResult<()> {
        self.repository.book_instances.update(instance).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.book_instances.delete(id).await
    }
}
