//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! Dates are stored as `YYYY-MM-DD` text.

use bookshelf_core::catalog::{format_html_date, parse_html_date, Author, Book, BookListing};
use chrono::NaiveDate;
use rusqlite::Row;

/// Number of columns a book occupies in a result row.
const BOOK_COLUMNS: usize = 5;

/// Convert a SQLite row to an Author.
///
/// Expected columns: author_id, name, birth_date, date_of_death
pub fn row_to_author(row: &Row) -> rusqlite::Result<Author> {
    author_at(row, 0)
}

/// Convert a SQLite row to a Book.
///
/// Expected columns: book_id, isbn, title, publication_year, author_id
pub fn row_to_book(row: &Row) -> rusqlite::Result<Book> {
    book_at(row, 0)
}

/// Convert a joined row to a BookListing.
///
/// Expected columns: the five book columns followed by the four author columns.
pub fn row_to_listing(row: &Row) -> rusqlite::Result<BookListing> {
    Ok(BookListing {
        book: book_at(row, 0)?,
        author: author_at(row, BOOK_COLUMNS)?,
    })
}

fn author_at(row: &Row, offset: usize) -> rusqlite::Result<Author> {
    let id: i64 = row.get(offset)?;
    let name: Option<String> = row.get(offset + 1)?;
    let birth_date: String = row.get(offset + 2)?;
    let date_of_death: Option<String> = row.get(offset + 3)?;

    Ok(Author {
        id,
        name: name.unwrap_or_default(),
        birth_date: parse_date(offset + 2, &birth_date)?,
        date_of_death: date_of_death
            .map(|d| parse_date(offset + 3, &d))
            .transpose()?,
    })
}

fn book_at(row: &Row, offset: usize) -> rusqlite::Result<Book> {
    let id: i64 = row.get(offset)?;
    let isbn: Option<i64> = row.get(offset + 1)?;
    let title: Option<String> = row.get(offset + 2)?;
    let publication_year: String = row.get(offset + 3)?;
    let author_id: i64 = row.get(offset + 4)?;

    Ok(Book {
        id,
        isbn: isbn.unwrap_or_default(),
        title: title.unwrap_or_default(),
        publication_year: parse_date(offset + 3, &publication_year)?,
        author_id,
    })
}

/// Parse a stored date column.
fn parse_date(column: usize, s: &str) -> rusqlite::Result<NaiveDate> {
    parse_html_date(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Format a NaiveDate for SQLite storage (YYYY-MM-DD).
pub fn format_date(date: &NaiveDate) -> String {
    format_html_date(date)
}
