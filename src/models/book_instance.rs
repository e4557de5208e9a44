//! BookInstance (physical copy) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::FromRow;
use uuid::Uuid;

/// Loan status of a copy. Declared in list-sort order, matching the
/// `copy_status` type in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "copy_status")]
pub enum CopyStatus {
    Available,
    Loaned,
    Maintenance,
    Reserved,
}

impl CopyStatus {
    pub const ALL: [CopyStatus; 4] = [
        CopyStatus::Available,
        CopyStatus::Loaned,
        CopyStatus::Maintenance,
        CopyStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CopyStatus::Available => "Available",
            CopyStatus::Loaned => "Loaned",
            CopyStatus::Maintenance => "Maintenance",
            CopyStatus::Reserved => "Reserved",
        }
    }

    /// Parse a status label; `None` for anything outside the enumeration.
    pub fn parse(s: &str) -> Option<Self> {
        CopyStatus::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

impl Default for CopyStatus {
    fn default() -> Self {
        CopyStatus::Maintenance
    }
}

impl std::fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// BookInstance record: one physical/loan copy of a book.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookInstance {
    pub id: Uuid,
    pub book_id: Uuid,
    pub imprint: String,
    pub status: CopyStatus,
    pub due_back: Option<NaiveDate>,
    // Referenced book title, populated by JOIN queries and absent otherwise.
    // A missing book is a representable state: the reference may dangle.
    #[sqlx(default)]
    #[serde(default)]
    pub book_title: Option<String>,
}

impl BookInstance {
    /// Construct a new record with a fresh id.
    pub fn new(
        book_id: Uuid,
        imprint: String,
        status: CopyStatus,
        due_back: Option<NaiveDate>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), book_id, imprint, status, due_back)
    }

    /// Rebuild a record carrying an existing id (update workflows).
    pub fn with_id(
        id: Uuid,
        book_id: Uuid,
        imprint: String,
        status: CopyStatus,
        due_back: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            book_id,
            imprint,
            status,
            due_back,
            book_title: None,
        }
    }

    /// Canonical detail URL for this record.
    pub fn url(&self) -> String {
        format!("/catalog/bookinstance/{}", self.id)
    }

    pub fn due_back_formatted(&self) -> String {
        self.due_back.map(super::format_long).unwrap_or_default()
    }

    pub fn due_back_iso(&self) -> String {
        self.due_back.map(super::format_iso).unwrap_or_default()
    }

    /// View-model: stored fields, derived fields, and the resolved-or-absent
    /// book reference.
    pub fn view(&self) -> Value {
        let book = match &self.book_title {
            Some(title) => json!({
                "id": self.book_id,
                "title": title,
                "url": format!("/catalog/book/{}", self.book_id),
            }),
            None => Value::Null,
        };
        json!({
            "id": self.id,
            "book": book,
            "book_id": self.book_id,
            "imprint": self.imprint,
            "status": self.status,
            "due_back": self.due_back,
            "due_back_formatted": self.due_back_formatted(),
            "due_back_iso": self.due_back_iso(),
            "url": self.url(),
        })
    }
}
