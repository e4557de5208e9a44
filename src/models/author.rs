//! Author model and derived fields

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::FromRow;
use uuid::Uuid;

/// Author record.
///
/// Derived fields (`full_name`, formatted dates, canonical URL) are pure
/// functions of the stored fields and are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Construct a new record with a fresh id.
    pub fn new(
        first_name: String,
        family_name: String,
        date_of_birth: Option<NaiveDate>,
        date_of_death: Option<NaiveDate>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), first_name, family_name, date_of_birth, date_of_death)
    }

    /// Rebuild a record carrying an existing id (update workflows).
    pub fn with_id(
        id: Uuid,
        first_name: String,
        family_name: String,
        date_of_birth: Option<NaiveDate>,
        date_of_death: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            first_name,
            family_name,
            date_of_birth,
            date_of_death,
        }
    }

    /// "family_name, first_name", or empty when either name is missing.
    pub fn full_name(&self) -> String {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            return String::new();
        }
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// Canonical detail URL for this record.
    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }

    pub fn date_of_birth_formatted(&self) -> String {
        self.date_of_birth.map(super::format_long).unwrap_or_default()
    }

    pub fn date_of_death_formatted(&self) -> String {
        self.date_of_death.map(super::format_long).unwrap_or_default()
    }

    pub fn date_of_birth_iso(&self) -> String {
        self.date_of_birth.map(super::format_iso).unwrap_or_default()
    }

    pub fn date_of_death_iso(&self) -> String {
        self.date_of_death.map(super::format_iso).unwrap_or_default()
    }

    /// View-model: stored fields plus the derived ones.
    pub fn view(&self) -> Value {
        json!({
            "id": self.id,
            "first_name": self.first_name,
            "family_name": self.family_name,
            "name": self.full_name(),
            "url": self.url(),
            "date_of_birth": self.date_of_birth,
            "date_of_birth_formatted": self.date_of_birth_formatted(),
            "date_of_birth_iso": self.date_of_birth_iso(),
            "date_of_death": self.date_of_death,
            "date_of_death_formatted": self.date_of_death_formatted(),
            "date_of_death_iso": self.date_of_death_iso(),
        })
    }
}
