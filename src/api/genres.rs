//! Genre workflow endpoints

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    forms::GenreForm,
    models::{BookShort, Genre},
    views, AppState,
};

/// List all genres.
pub async fn genre_list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let genres = state.services.genres.list().await?;
    let genre_list: Vec<_> = genres.iter().map(Genre::view).collect();
    Ok(views::render(
        "genre_list",
        json!({ "title": "Genre List", "genre_list": genre_list }),
    ))
}

/// Genre detail page: the record plus all books referencing it.
pub async fn genre_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Html<String>> {
    let (genre, books) = state
        .services
        .genres
        .detail(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Genre not found".to_string()))?;
    let genre_books: Vec<_> = books.iter().map(BookShort::view).collect();
    Ok(views::render(
        "genre_detail",
        json!({
            "title": "Genre Detail",
            "genre": genre.view(),
            "genre_books": genre_books,
        }),
    ))
}

/// Empty create form.
pub async fn genre_create_get() -> Html<String> {
    views::render("genre_form", json!({ "title": "Create Genre" }))
}

/// Create submission. A name matching an existing genre case-insensitively
/// redirects to that record instead of inserting (idempotent create by name).
pub async fn genre_create_post(
    State(state): State<AppState>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    let (input, errors) = form.validate();

    if !errors.is_empty() {
        return Ok(views::render(
            "genre_form",
            json!({ "title": "Create Genre", "genre": input, "errors": errors }),
        )
        .into_response());
    }

    let genre = state.services.genres.create(input.name).await?;
    Ok(Redirect::to(&genre.url()).into_response())
}

/// Update form, pre-filled with current values.
pub async fn genre_update_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Html<String>> {
    let genre = state
        .services
        .genres
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Genre not found".to_string()))?;
    Ok(views::render(
        "genre_form",
        json!({ "title": "Update Genre", "genre": genre.view() }),
    ))
}

/// Update submission: full replacement of the record's fields keyed by id.
pub async fn genre_update_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    let (input, errors) = form.validate();

    if !errors.is_empty() {
        // The echoed record carries the target id but is never persisted.
        let mut genre = json!(input);
        genre["id"] = json!(id);
        return Ok(views::render(
            "genre_form",
            json!({ "title": "Update Genre", "genre": genre, "errors": errors }),
        )
        .into_response());
    }

    let genre = Genre::with_id(id, input.name);
    state.services.genres.update(&genre).await?;
    Ok(Redirect::to(&genre.url()).into_response())
}

/// Delete confirmation: not implemented for genres.
pub async fn genre_delete_get(Path(_id): Path<Uuid>) -> Html<String> {
    views::render(
        "genre_delete",
        json!({ "title": "Delete Genre", "message": "Genre delete is not implemented" }),
    )
}

/// Delete submission: not implemented for genres.
pub async fn genre_delete_post(Path(_id): Path<Uuid>) -> Html<String> {
    views::render(
        "genre_delete",
        json!({ "title": "Delete Genre", "message": "Genre delete is not implemented" }),
    )
}
