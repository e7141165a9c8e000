//! Author registration handlers.

use axum::{
    extract::{rejection::FormRejection, State},
    response::{IntoResponse, Redirect},
    Form,
};

use bookshelf_core::catalog::CatalogError;

use super::{
    pages::{AddAuthorTemplate, HtmlTemplate},
    AppError, HOME_PATH,
};
use crate::{models::AuthorForm, state::AppState};

/// Render the author registration form (GET /add_author).
pub async fn add_author_form() -> impl IntoResponse {
    HtmlTemplate(AddAuthorTemplate {})
}

/// Register an author and return to the catalog (POST /add_author).
///
/// Malformed dates fail the request; there is no form re-render.
pub async fn add_author(
    State(state): State<AppState>,
    form_result: Result<Form<AuthorForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(payload) = form_result?;
    tracing::debug!(payload = ?payload, "Received add author request");

    let author = payload.into_new_author().map_err(CatalogError::from)?;
    state.catalog.create_author(author).await?;

    Ok(Redirect::to(HOME_PATH))
}
