//! Form validation and sanitization pipeline.
//!
//! Raw form input is a mapping of field name to string. Each recognized field
//! runs an ordered rule chain: sanitizers rewrite the value, validators append
//! a field-tagged failure to the shared report, and later rules see the value
//! as sanitized by earlier rules. All rules for all fields run before the
//! report is read, so a single submission can surface several failures at
//! once. Nothing here persists; the pipeline only classifies.

pub mod author;
pub mod book_instance;
pub mod genre;

pub use author::{AuthorForm, AuthorInput};
pub use book_instance::{BookInstanceForm, BookInstanceInput};
pub use genre::{GenreForm, GenreInput};

use chrono::NaiveDate;
use serde::Serialize;

/// One field-tagged validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Accumulated, ordered failures for one submission.
#[derive(Debug, Default)]
pub struct Report {
    errors: Vec<FieldError>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an ordered rule chain over one field's raw value.
    pub fn field<'r>(&'r mut self, name: &'static str, raw: &str) -> Chain<'r> {
        Chain {
            report: self,
            field: name,
            value: raw.to_string(),
        }
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

/// Ordered rule chain over a single field. Sanitizers rewrite the value;
/// validators record failures against the owning report.
pub struct Chain<'r> {
    report: &'r mut Report,
    field: &'static str,
    value: String,
}

impl<'r> Chain<'r> {
    pub fn trim(mut self) -> Self {
        self.value = self.value.trim().to_string();
        self
    }

    pub fn min_length(self, min: usize, message: &str) -> Self {
        if self.value.chars().count() < min {
            self.report.push(self.field, message);
        }
        self
    }

    pub fn escape(mut self) -> Self {
        self.value = escape_html(&self.value);
        self
    }

    /// Fails on any non-alphabetic character in the value as sanitized so
    /// far. Runs after `escape`, so escaped punctuation fails too.
    pub fn alphabetic(self, message: &str) -> Self {
        if !self.value.chars().all(|c| c.is_alphabetic()) {
            self.report.push(self.field, message);
        }
        self
    }

    /// End the chain, yielding the sanitized value.
    pub fn finish(self) -> String {
        self.value
    }
}

/// Neutralize characters with structural meaning in HTML. A pure string
/// transform; the value stays embeddable in rendered markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

/// Optional ISO-8601 calendar date: empty input is accepted as absent;
/// anything else must parse or the failure is recorded.
pub fn optional_date(
    report: &mut Report,
    field: &'static str,
    raw: &str,
    message: &str,
) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            report.push(field, message);
            None
        }
    }
}
