//! Genre form payload and rule set

use serde::{Deserialize, Serialize};

use super::{FieldError, Report};

/// Raw create/update submission.
#[derive(Debug, Deserialize)]
pub struct GenreForm {
    #[serde(default)]
    pub name: String,
}

/// Sanitized echo of one submission.
#[derive(Debug, Clone, Serialize)]
pub struct GenreInput {
    pub name: String,
}

impl GenreForm {
    pub fn validate(self) -> (GenreInput, Vec<FieldError>) {
        let mut report = Report::new();

        let name = report
            .field("name", &self.name)
            .trim()
            .min_length(3, "Genre name must contain at least 3 characters")
            .escape()
            .finish();

        (GenreInput { name }, report.into_errors())
    }
}
