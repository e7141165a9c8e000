//! Askama page templates and the wrapper that renders them into responses.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use bookshelf_core::catalog::{Author, BookListing};

/// Message shown when no other message is supplied.
pub const DEFAULT_MESSAGE: &str = "Site not found";

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {err}"),
                )
                    .into_response()
            }
        }
    }
}

/// Catalog listing with search and sort controls.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub books: Vec<BookListing>,
}

/// Author registration form.
#[derive(Template)]
#[template(path = "add_author.html")]
pub struct AddAuthorTemplate {}

/// Book registration form. Known authors are offered as suggestions.
#[derive(Template)]
#[template(path = "add_book.html")]
pub struct AddBookTemplate {
    pub authors: Vec<Author>,
}

/// Message list used for errors and confirmations.
#[derive(Template)]
#[template(path = "message.html")]
pub struct MessageTemplate {
    pub messages: Vec<String>,
}

impl MessageTemplate {
    pub fn new(messages: Vec<String>) -> Self {
        if messages.is_empty() {
            return Self::default();
        }
        Self { messages }
    }
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            messages: vec![DEFAULT_MESSAGE.to_string()],
        }
    }
}
