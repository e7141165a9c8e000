//! Catalog listing and deletion handlers.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Form,
};

use bookshelf_core::catalog::ListingMode;

use super::{
    pages::{HomeTemplate, HtmlTemplate, MessageTemplate},
    AppError, HOME_PATH,
};
use crate::{models::HomeForm, state::AppState};

/// Confirmation shown after a delete request.
pub const DELETE_CONFIRMATION: &str = "Delete successful!";

/// Redirect the bare root to the catalog (GET /).
pub async fn root() -> Redirect {
    Redirect::to(HOME_PATH)
}

/// Default catalog listing (GET /home).
pub async fn home(
    State(state): State<AppState>,
) -> Result<HtmlTemplate<HomeTemplate>, AppError> {
    render_listing(&state, &ListingMode::Default).await
}

/// Searched or sorted catalog listing (POST /home).
///
/// A body that cannot be read as the listing form falls back to the default
/// listing.
pub async fn home_search(
    State(state): State<AppState>,
    form_result: Result<Form<HomeForm>, FormRejection>,
) -> Result<HtmlTemplate<HomeTemplate>, AppError> {
    let mode = match form_result {
        Ok(Form(form)) => form.listing_mode(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Listing form unreadable, using default listing");
            ListingMode::Default
        }
    };

    render_listing(&state, &mode).await
}

async fn render_listing(
    state: &AppState,
    mode: &ListingMode,
) -> Result<HtmlTemplate<HomeTemplate>, AppError> {
    let books = state.catalog.list_books(mode).await?;
    Ok(HtmlTemplate(HomeTemplate { books }))
}

/// Delete a book by id (POST /book/{id}/delete).
///
/// Always answers with the confirmation view, even if the id was unknown.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<HtmlTemplate<MessageTemplate>, AppError> {
    state.catalog.delete_book(id).await?;
    Ok(HtmlTemplate(MessageTemplate::new(vec![
        DELETE_CONFIRMATION.to_string()
    ])))
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        HtmlTemplate(MessageTemplate::default()),
    )
}
