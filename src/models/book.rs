//! Book model and the short projection used by joins and selectors

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::FromRow;
use uuid::Uuid;

/// Full book record. The Book workflows have their own controller; the
/// catalog workflows covered here only read books through [`BookShort`],
/// but the record shape constrains those queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<Uuid>,
}

impl Book {
    /// Construct a new record with a fresh id.
    pub fn new(
        title: String,
        author_id: Uuid,
        summary: String,
        isbn: String,
        genre_ids: Vec<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            author_id,
            summary,
            isbn,
            genre_ids,
        }
    }

    /// Canonical detail URL for this record.
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }
}

/// Short projection (`id`, `title`, `summary`) fetched for detail-page joins
/// ("all books by this author") and for form selector lists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookShort {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
}

impl BookShort {
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }

    pub fn view(&self) -> Value {
        json!({
            "id": self.id,
            "title": self.title,
            "summary": self.summary,
            "url": self.url(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_url() {
        let book = Book::new(
            "Ficciones".into(),
            Uuid::new_v4(),
            "Short stories".into(),
            "9780802130303".into(),
            vec![],
        );
        assert_eq!(book.url(), format!("/catalog/book/{}", book.id));
    }

    #[test]
    fn test_book_short_view() {
        let short = BookShort {
            id: Uuid::new_v4(),
            title: "Ficciones".into(),
            summary: "Short stories".into(),
        };
        let view = short.view();
        assert_eq!(view["title"], "Ficciones");
        assert_eq!(view["url"], short.url());
    }
}
