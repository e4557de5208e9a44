//! Genre model

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::FromRow;
use uuid::Uuid;

/// Genre record. Name uniqueness is enforced by the create workflow
/// (case-insensitive lookup before insert), not by the store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
}

impl Genre {
    /// Construct a new record with a fresh id.
    pub fn new(name: String) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Rebuild a record carrying an existing id (update workflows).
    pub fn with_id(id: Uuid, name: String) -> Self {
        Self { id, name }
    }

    /// Canonical detail URL for this record.
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }

    pub fn view(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "url": self.url(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        let genre = Genre::new("Fantasy".into());
        assert_eq!(genre.url(), format!("/catalog/genre/{}", genre.id));
    }

    #[test]
    fn test_view() {
        let genre = Genre::new("Fantasy".into());
        let view = genre.view();
        assert_eq!(view["name"], "Fantasy");
        assert_eq!(view["url"], genre.url());
    }
}
