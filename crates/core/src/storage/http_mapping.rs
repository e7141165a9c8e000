//! Pure functions for mapping repository and catalog errors to HTTP status codes.

use super::RepositoryError;
use crate::catalog::CatalogError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use bookshelf_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Book",
///     id: "7".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}

/// Maps a [`CatalogError`] to an HTTP status code.
///
/// Unknown authors and empty searches are reported as 404, malformed dates
/// as 400. Storage failures defer to [`repository_error_to_status_code`].
pub fn catalog_error_to_status_code(error: &CatalogError) -> u16 {
    match error {
        CatalogError::MissingAuthor { .. } => 404,
        CatalogError::NoMatches { .. } => 404,
        CatalogError::InvalidDate(_) => 400,
        CatalogError::Repository(e) => repository_error_to_status_code(e),
    }
}
