//! Data models for Libris

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookShort};
pub use book_instance::{BookInstance, CopyStatus};
pub use genre::Genre;

use chrono::{Datelike, NaiveDate};

/// Format a calendar date as "Jan 5th, 1980".
pub fn format_long(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%b"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// Format a calendar date as ISO-8601 ("1980-01-05").
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn ordinal_suffix(day: u32) -> &'static str {
    // 11th, 12th, 13th
    if (11..=13).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_long() {
        assert_eq!(format_long(date(1980, 1, 5)), "Jan 5th, 1980");
        assert_eq!(format_long(date(2024, 3, 1)), "Mar 1st, 2024");
        assert_eq!(format_long(date(2024, 3, 22)), "Mar 22nd, 2024");
        assert_eq!(format_long(date(2024, 3, 23)), "Mar 23rd, 2024");
        assert_eq!(format_long(date(2024, 3, 11)), "Mar 11th, 2024");
        assert_eq!(format_long(date(2024, 3, 13)), "Mar 13th, 2024");
    }

    #[test]
    fn test_format_iso_round_trips() {
        let d = date(2024, 3, 1);
        let iso = format_iso(d);
        assert_eq!(iso, "2024-03-01");
        let reparsed = NaiveDate::parse_from_str(&iso, "%Y-%m-%d").unwrap();
        assert_eq!(reparsed, d);
    }
}
