//! BookInstance workflow endpoints

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    forms::BookInstanceForm,
    models::{BookInstance, BookShort},
    views, AppState,
};

/// List all copies with their book titles resolved where possible.
pub async fn bookinstance_list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let instances = state.services.book_instances.list().await?;
    let bookinstance_list: Vec<_> = instances.iter().map(BookInstance::view).collect();
    Ok(views::render(
        "bookinstance_list",
        json!({
            "title": "Book Instance List",
            "bookinstance_list": bookinstance_list,
        }),
    ))
}

/// Copy detail page.
pub async fn bookinstance_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Html<String>> {
    let instance = state
        .services
        .book_instances
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Book copy not found".to_string()))?;
    Ok(views::render(
        "bookinstance_detail",
        json!({ "title": "Book Instance Detail", "bookinstance": instance.view() }),
    ))
}

/// Empty create form, with the book selector list.
pub async fn bookinstance_create_get(
    State(state): State<AppState>,
) -> AppResult<Html<String>> {
    let books = state.services.books.list_short().await?;
    let book_list: Vec<_> = books.iter().map(BookShort::view).collect();
    Ok(views::render(
        "bookinstance_form",
        json!({ "title": "Create Book Instance", "book_list": book_list }),
    ))
}

/// Create submission: validate and sanitize, then persist and redirect to
/// the new record, or re-render the form (selector list refetched) with the
/// sanitized values and the failure list.
pub async fn bookinstance_create_post(
    State(state): State<AppState>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    let (input, errors) = form.validate();

    match (errors.is_empty(), input.book, input.status) {
        (true, Some(book_id), Some(status)) => {
            let instance = BookInstance::new(book_id, input.imprint, status, input.due_back);
            state.services.book_instances.create(&instance).await?;
            Ok(Redirect::to(&instance.url()).into_response())
        }
        _ => {
            let books = state.services.books.list_short().await?;
            let book_list: Vec<_> = books.iter().map(BookShort::view).collect();
            Ok(views::render(
                "bookinstance_form",
                json!({
                    "title": "Create Book Instance",
                    "bookinstance": input,
                    "book_list": book_list,
                    "errors": errors,
                }),
            )
            .into_response())
        }
    }
}

/// Update form: the record and the selector list, fetched concurrently.
pub async fn bookinstance_update_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Html<String>> {
    let (instance, books) = tokio::try_join!(
        state.services.book_instances.get(id),
        state.services.books.list_short(),
    )?;
    let instance =
        instance.ok_or_else(|| AppError::NotFound("Book Instance not found".to_string()))?;
    let book_list: Vec<_> = books.iter().map(BookShort::view).collect();
    Ok(views::render(
        "bookinstance_form",
        json!({
            "title": "Update Book Instance",
            "bookinstance": instance.view(),
            "book_list": book_list,
        }),
    ))
}

/// Update submission: full replacement of the record's fields keyed by id.
pub async fn bookinstance_update_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    let (input, errors) = form.validate();

    match (errors.is_empty(), input.book, input.status) {
        (true, Some(book_id), Some(status)) => {
            let instance =
                BookInstance::with_id(id, book_id, input.imprint, status, input.due_back);
            state.services.book_instances.update(&instance).await?;
            Ok(Redirect::to(&instance.url()).into_response())
        }
        _ => {
            let books = state.services.books.list_short().await?;
            let book_list: Vec<_> = books.iter().map(BookShort::view).collect();
            // The echoed record carries the target id but is never persisted.
            let mut bookinstance = json!(input);
            bookinstance["id"] = json!(id);
            Ok(views::render(
                "bookinstance_form",
                json!({
                    "title": "Update Book Instance",
                    "bookinstance": bookinstance,
                    "book_list": book_list,
                    "errors": errors,
                }),
            )
            .into_response())
        }
    }
}

/// Delete confirmation, or a redirect to the list when the id is unknown.
pub async fn bookinstance_delete_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    let Some(instance) = state.services.book_instances.get(id).await? else {
        return Ok(Redirect::to("/catalog/bookinstances").into_response());
    };
    Ok(views::render(
        "bookinstance_delete",
        json!({ "title": "Delete Book Instance", "bookinstance": instance.view() }),
    )
    .into_response())
}

#[derive(Deserialize)]
pub struct BookInstanceDeleteForm {
    #[serde(default)]
    pub bookinstanceid: String,
}

/// Delete submission. The target comes from the form body; the path id only
/// selected the confirmation page, and the two may differ. Redirects to the
/// list whether or not the target existed.
pub async fn bookinstance_delete_post(
    State(state): State<AppState>,
    Path(_id): Path<Uuid>,
    Form(form): Form<BookInstanceDeleteForm>,
) -> AppResult<Redirect> {
    if let Ok(target) = Uuid::parse_str(form.bookinstanceid.trim()) {
        state.services.book_instances.delete(target).await?;
    }
    Ok(Redirect::to("/catalog/bookinstances"))
}
