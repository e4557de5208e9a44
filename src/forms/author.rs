//! Author form payload and rule set

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{optional_date, FieldError, Report};

/// Raw create/update submission. Missing fields default to empty strings so
/// every rule chain always runs.
#[derive(Debug, Deserialize)]
pub struct AuthorForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub date_of_death: String,
}

/// Sanitized echo of one submission. Feeds persistence when the failure list
/// is empty and the form re-render when it is not.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorInput {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl AuthorForm {
    pub fn validate(self) -> (AuthorInput, Vec<FieldError>) {
        let mut report = Report::new();

        let first_name = report
            .field("first_name", &self.first_name)
            .trim()
            .min_length(2, "First name must be at least 2 characters long")
            .escape()
            .alphabetic("First name has non-alpha characters")
            .finish();

        let family_name = report
            .field("family_name", &self.family_name)
            .trim()
            .min_length(2, "Family name must be at least 2 characters long")
            .escape()
            .alphabetic("Family name has non-alpha characters")
            .finish();

        let date_of_birth = optional_date(
            &mut report,
            "date_of_birth",
            &self.date_of_birth,
            "Invalid date of birth",
        );
        let date_of_death = optional_date(
            &mut report,
            "date_of_death",
            &self.date_of_death,
            "Invalid date of death",
        );

        (
            AuthorInput {
                first_name,
                family_name,
                date_of_birth,
                date_of_death,
            },
            report.into_errors(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(first: &str, family: &str, birth: &str, death: &str) -> AuthorForm {
        AuthorForm {
            first_name: first.into(),
            family_name: family.into(),
            date_of_birth: birth.into(),
            date_of_death: death.into(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let (input, errors) = form(" Jorge ", "Borges", "1899-08-24", "1986-06-14").validate();
        assert!(errors.is_empty());
        assert_eq!(input.first_name, "Jorge");
        assert_eq!(input.family_name, "Borges");
        assert_eq!(input.date_of_birth, NaiveDate::from_ymd_opt(1899, 8, 24));
        assert_eq!(input.date_of_death, NaiveDate::from_ymd_opt(1986, 6, 14));
    }

    #[test]
    fn test_digit_fails_alpha_check_but_not_length() {
        // "A1" satisfies the minimum length, so only the alpha failure fires
        let (_, errors) = form("A1", "Borges", "", "").validate();
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert!(messages.contains(&"First name has non-alpha characters"));
        assert!(!messages.contains(&"First name must be at least 2 characters long"));
    }

    #[test]
    fn test_short_alphabetic_fails_length_check_only() {
        let (_, errors) = form("J", "Borges", "", "").validate();
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert!(messages.contains(&"First name must be at least 2 characters long"));
        assert!(!messages.contains(&"First name has non-alpha characters"));
    }

    #[test]
    fn test_short_digit_fails_both_checks() {
        let (_, errors) = form("1", "Borges", "", "").validate();
        let first_name_errors: Vec<&str> = errors
            .iter()
            .filter(|e| e.field == "first_name")
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(
            first_name_errors,
            vec![
                "First name must be at least 2 characters long",
                "First name has non-alpha characters",
            ]
        );
    }

    #[test]
    fn test_failures_accumulate_across_fields() {
        let (_, errors) = form("J", "B", "bad-date", "").validate();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, "first_name");
        assert_eq!(errors[1].field, "family_name");
        assert_eq!(errors[2].field, "date_of_birth");
        assert_eq!(errors[2].message, "Invalid date of birth");
    }

    #[test]
    fn test_invalid_death_date_message() {
        let (input, errors) = form("Jorge", "Borges", "", "14/06/1986").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Invalid date of death");
        assert_eq!(input.date_of_death, None);
    }

    #[test]
    fn test_markup_is_escaped_in_echo() {
        let (input, _) = form("<Jorge>", "Borges", "", "").validate();
        assert_eq!(input.first_name, "&lt;Jorge&gt;");
    }
}
