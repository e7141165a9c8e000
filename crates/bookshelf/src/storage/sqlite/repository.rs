//! SQLite repository implementation.
//!
//! Implements the repository traits from `bookshelf_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use bookshelf_core::catalog::{Author, Book, BookListing, ListingMode, NewAuthor, NewBook};
use bookshelf_core::storage::{AuthorRepository, BookRepository, RepositoryError, Result};

use super::conversions::{format_date, row_to_author, row_to_book, row_to_listing};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Every write is a single statement committed on its own.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Closes the underlying connection, flushing any pending work.
    pub async fn close(self) -> Result<()> {
        self.conn
            .close()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn count(&self, query: &'static str, entity_type: &'static str) -> Result<usize> {
        self.conn
            .call(move |conn| {
                let count: i64 = conn
                    .query_row(query, [], |row| row.get(0))
                    .map_err(wrap_err)?;
                Ok(count)
            })
            .await
            .map(|count| usize::try_from(count).unwrap_or_default())
            .map_err(|e| map_tokio_rusqlite_error(e, entity_type))
    }
}

// ============================================================================
// AuthorRepository implementation
// ============================================================================

#[async_trait]
impl AuthorRepository for SqliteRepository {
    async fn list_authors(&self) -> Result<Vec<Author>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_AUTHORS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_author).map_err(wrap_err)?;

                let mut authors = Vec::new();
                for row_result in rows {
                    authors.push(row_result.map_err(wrap_err)?);
                }
                Ok(authors)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Author"))
    }

    async fn get_author(&self, id: i64) -> Result<Option<Author>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_AUTHOR_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_author) {
                    Ok(author) => Ok(Some(author)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Author", id.to_string()))
    }

    async fn create_author(&self, author: &NewAuthor) -> Result<Author> {
        let name = author.name.clone();
        let birth_date = format_date(&author.birth_date);
        let date_of_death = author.date_of_death.as_ref().map(format_date);

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_AUTHOR,
                    rusqlite::params![name, birth_date, date_of_death],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Author"))?;

        Ok(author.clone().into_author(id))
    }

    async fn count_authors(&self) -> Result<usize> {
        self.count(schema::COUNT_AUTHORS, "Author").await
    }
}

// ============================================================================
// BookRepository implementation
// ============================================================================

#[async_trait]
impl BookRepository for SqliteRepository {
    async fn get_book(&self, id: i64) -> Result<Option<Book>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_BOOK_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_book) {
                    Ok(book) => Ok(Some(book)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Book", id.to_string()))
    }

    async fn create_book(&self, book: &NewBook) -> Result<Book> {
        let isbn = book.isbn;
        let title = book.title.clone();
        let publication_year = format_date(&book.publication_year);
        let author_id = book.author_id;

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_BOOK,
                    rusqlite::params![isbn, title, publication_year, author_id],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Book"))?;

        Ok(book.clone().into_book(id))
    }

    async fn list_books(&self, mode: &ListingMode) -> Result<Vec<BookListing>> {
        let (query, term) = match mode {
            ListingMode::Default => (schema::SELECT_LISTING, None),
            ListingMode::Search(term) => (schema::SELECT_LISTING_BY_TITLE_SEARCH, Some(term.clone())),
            ListingMode::SortByTitle => (schema::SELECT_LISTING_ORDER_BY_TITLE, None),
            ListingMode::SortByAuthor => (schema::SELECT_LISTING_ORDER_BY_AUTHOR, None),
        };

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(query).map_err(wrap_err)?;
                let rows = match &term {
                    Some(term) => stmt.query_map([term], row_to_listing),
                    None => stmt.query_map([], row_to_listing),
                }
                .map_err(wrap_err)?;

                let mut listings = Vec::new();
                for row_result in rows {
                    listings.push(row_result.map_err(wrap_err)?);
                }
                Ok(listings)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Book"))
    }

    async fn delete_book(&self, id: i64) -> Result<bool> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_BOOK, [id]).map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Book", id.to_string()))
    }

    async fn count_books(&self) -> Result<usize> {
        self.count(schema::COUNT_BOOKS, "Book").await
    }
}
