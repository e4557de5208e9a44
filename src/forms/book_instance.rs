//! BookInstance form payload and rule set

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{optional_date, FieldError, Report};
use crate::models::CopyStatus;

/// Raw create/update submission.
#[derive(Debug, Deserialize)]
pub struct BookInstanceForm {
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub imprint: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub due_back: String,
}

/// Sanitized echo of one submission. `book` and `status` are `None` when the
/// submitted value did not name a usable reference or status; in that case a
/// matching failure is always present in the error list.
#[derive(Debug, Clone, Serialize)]
pub struct BookInstanceInput {
    pub book: Option<Uuid>,
    pub imprint: String,
    pub status: Option<CopyStatus>,
    pub due_back: Option<NaiveDate>,
}

impl BookInstanceForm {
    pub fn validate(self) -> (BookInstanceInput, Vec<FieldError>) {
        let mut report = Report::new();

        let book_value = report
            .field("book", &self.book)
            .trim()
            .min_length(1, "Book must be specified")
            .escape()
            .finish();
        // An unparseable reference is treated the same as a missing one;
        // whether the book actually exists is not re-checked here.
        let book = match Uuid::parse_str(&book_value) {
            Ok(id) => Some(id),
            Err(_) => {
                if !book_value.is_empty() {
                    report.push("book", "Book must be specified");
                }
                None
            }
        };

        let imprint = report
            .field("imprint", &self.imprint)
            .trim()
            .min_length(2, "Imprint must be specified")
            .escape()
            .finish();

        let status_value = report.field("status", &self.status).escape().finish();
        let status = match CopyStatus::parse(&status_value) {
            Some(status) => Some(status),
            None => {
                report.push("status", "Invalid status");
                None
            }
        };

        let due_back = optional_date(&mut report, "due_back", &self.due_back, "Invalid date");

        (
            BookInstanceInput {
                book,
                imprint,
                status,
                due_back,
            },
            report.into_errors(),
        )
    }
}
