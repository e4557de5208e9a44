//! Author workflow endpoints

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    forms::AuthorForm,
    models::{Author, BookShort},
    views, AppState,
};

/// List all authors.
pub async fn author_list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let authors = state.services.authors.list().await?;
    let author_list: Vec<_> = authors.iter().map(Author::view).collect();
    Ok(views::render(
        "author_list",
        json!({ "title": "Author List", "author_list": author_list }),
    ))
}

/// Author detail page: the record plus all books referencing it.
pub async fn author_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Html<String>> {
    let (author, books) = state
        .services
        .authors
        .detail(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;
    let author_books: Vec<_> = books.iter().map(BookShort::view).collect();
    Ok(views::render(
        "author_detail",
        json!({
            "title": "Author Detail",
            "author": author.view(),
            "author_books": author_books,
        }),
    ))
}

/// Empty create form.
pub async fn author_create_get() -> Html<String> {
    views::render("author_form", json!({ "title": "Create Author" }))
}

/// Create submission: validate and sanitize, then persist and redirect to
/// the new record's detail page, or re-render the form with the sanitized
/// values and the failure list.
pub async fn author_create_post(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    let (input, errors) = form.validate();

    if !errors.is_empty() {
        return Ok(views::render(
            "author_form",
            json!({ "title": "Create Author", "author": input, "errors": errors }),
        )
        .into_response());
    }

    let author = Author::new(
        input.first_name,
        input.family_name,
        input.date_of_birth,
        input.date_of_death,
    );
    state.services.authors.create(&author).await?;
    Ok(Redirect::to(&author.url()).into_response())
}

/// Update form, pre-filled with current values.
pub async fn author_update_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Html<String>> {
    let author = state
        .services
        .authors
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;
    Ok(views::render(
        "author_form",
        json!({ "title": "Update Author", "author": author.view() }),
    ))
}

/// Update submission: full replacement of the record's fields keyed by id.
pub async fn author_update_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    let (input, errors) = form.validate();

    if !errors.is_empty() {
        // The echoed record carries the target id but is never persisted.
        let mut author = json!(input);
        author["id"] = json!(id);
        return Ok(views::render(
            "author_form",
            json!({ "title": "Update Author", "author": author, "errors": errors }),
        )
        .into_response());
    }

    let author = Author::with_id(
        id,
        input.first_name,
        input.family_name,
        input.date_of_birth,
        input.date_of_death,
    );
    state.services.authors.update(&author).await?;
    Ok(Redirect::to(&author.url()).into_response())
}

/// Delete confirmation: not implemented for authors.
pub async fn author_delete_get(Path(_id): Path<Uuid>) -> Html<String> {
    views::render(
        "author_delete",
        json!({ "title": "Delete Author", "message": "Author delete is not implemented" }),
    )
}

/// Delete submission: not implemented for authors.
pub async fn author_delete_post(Path(_id): Path<Uuid>) -> Html<String> {
    views::render(
        "author_delete",
        json!({ "title": "Delete Author", "message": "Author delete is not implemented" }),
    )
}
