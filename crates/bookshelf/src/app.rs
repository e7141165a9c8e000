use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::Config,
    handlers::{
        authors::{add_author, add_author_form},
        books::{add_book, add_book_form},
        health::{livez, readyz},
        listing::{delete_book, home, home_search, not_found, root},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/home", get(home).post(home_search))
        .route("/add_author", get(add_author_form).post(add_author))
        .route("/add_book", get(add_book_form).post(add_book))
        .route("/book/{id}/delete", post(delete_book))
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}
