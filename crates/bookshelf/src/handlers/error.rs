use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use bookshelf_core::catalog::CatalogError;
use bookshelf_core::storage::{
    catalog_error_to_status_code, repository_error_to_status_code, RepositoryError,
};

use super::pages::{HtmlTemplate, MessageTemplate};

/// Application error type that wraps `anyhow::Error`.
///
/// Catalog errors that carry user messages render the message view. Anything
/// else becomes a plain-text response with a status derived from the error.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(err) = self.0.downcast_ref::<CatalogError>() {
            catalog_error_to_status_code(err)
        } else if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(err)
        } else if let Some(rejection) = self.0.downcast_ref::<FormRejection>() {
            rejection.status().as_u16()
        } else {
            500
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Some(messages) = self
            .0
            .downcast_ref::<CatalogError>()
            .and_then(CatalogError::user_messages)
        {
            tracing::warn!(status = %status, error = %self.0, "Catalog request rejected");
            return (status, HtmlTemplate(MessageTemplate::new(messages))).into_response();
        }

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Application error");
        } else {
            tracing::warn!(status = %status, error = %self.0, "Request failed");
        }

        (status, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::catalog::DateParseError;

    #[test]
    fn test_missing_author_is_not_found() {
        let error = AppError::from(CatalogError::MissingAuthor {
            name: "Nobody".to_string(),
        });
        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_date_is_bad_request() {
        let error = AppError::from(CatalogError::from(DateParseError::WrongSegmentCount(1)));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_connection_failure_is_unavailable() {
        let error = AppError::from(RepositoryError::ConnectionFailed("closed".to_string()));
        assert_eq!(error.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_unknown_error_is_internal() {
        let error = AppError(anyhow::anyhow!("boom"));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
