//! HTTP handlers for the catalog workflows

pub mod authors;
pub mod book_instances;
pub mod genres;
pub mod health;
