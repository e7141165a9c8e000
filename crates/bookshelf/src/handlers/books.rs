//! Book registration handlers.

use axum::{
    extract::{rejection::FormRejection, State},
    response::Redirect,
    Form,
};

use bookshelf_core::catalog::{parse_html_date, CatalogError};

use super::{
    pages::{AddBookTemplate, HtmlTemplate},
    AppError, HOME_PATH,
};
use crate::{models::BookForm, state::AppState};

/// Render the book registration form (GET /add_book).
pub async fn add_book_form(
    State(state): State<AppState>,
) -> Result<HtmlTemplate<AddBookTemplate>, AppError> {
    let authors = state.catalog.authors().await?;
    Ok(HtmlTemplate(AddBookTemplate { authors }))
}

/// Register a book for an existing author (POST /add_book).
///
/// An unknown author name renders the message view instead of redirecting.
pub async fn add_book(
    State(state): State<AppState>,
    form_result: Result<Form<BookForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(payload) = form_result?;
    tracing::debug!(payload = ?payload, "Received add book request");

    let publication_year =
        parse_html_date(&payload.publication_year).map_err(CatalogError::from)?;

    state
        .catalog
        .create_book(
            &payload.name,
            payload.isbn,
            payload.title,
            publication_year,
        )
        .await?;

    Ok(Redirect::to(HOME_PATH))
}
