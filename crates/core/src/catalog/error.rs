use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors produced when a form date cannot be read as `YYYY-MM-DD`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("Expected a YYYY-MM-DD date, found {0} segment(s)")]
    WrongSegmentCount(usize),
    #[error("Date segment is not numeric: {0:?}")]
    NonNumeric(String),
    #[error("Date segment has the wrong number of digits: {0:?}")]
    SegmentWidth(String),
    #[error("Date out of range: {year}-{month}-{day}")]
    OutOfRange { year: i32, month: u32, day: u32 },
}

/// Errors raised by catalog operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Author not found: {name}")]
    MissingAuthor { name: String },
    #[error("No books matched search term: {term}")]
    NoMatches { term: String },
    #[error(transparent)]
    InvalidDate(#[from] DateParseError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CatalogError {
    /// Returns the messages shown to the user on the error view, or `None`
    /// when the error is not meant to be surfaced as a page.
    pub fn user_messages(&self) -> Option<Vec<String>> {
        match self {
            CatalogError::MissingAuthor { .. } => {
                Some(vec!["Please create the author before the book".to_string()])
            }
            CatalogError::NoMatches { .. } => Some(vec![
                "Sorry, no books matched with what you entered".to_string()
            ]),
            CatalogError::InvalidDate(_) | CatalogError::Repository(_) => None,
        }
    }
}
