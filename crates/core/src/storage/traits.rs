use async_trait::async_trait;

use crate::catalog::{Author, Book, BookListing, ListingMode, NewAuthor, NewBook};

use super::Result;

/// Repository for author operations.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Lists every author in storage order.
    async fn list_authors(&self) -> Result<Vec<Author>>;

    /// Gets an author by id.
    ///
    /// Request handling resolves authors by name through `list_authors`;
    /// this lookup serves inspection and backend tests.
    async fn get_author(&self, id: i64) -> Result<Option<Author>>;

    /// Stores a new author and returns it with its assigned id.
    async fn create_author(&self, author: &NewAuthor) -> Result<Author>;

    /// Counts stored authors.
    async fn count_authors(&self) -> Result<usize>;
}

/// Repository for book operations.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Gets a book by id. Used to describe a book before it is deleted.
    async fn get_book(&self, id: i64) -> Result<Option<Book>>;

    /// Stores a new book and returns it with its assigned id.
    ///
    /// The author reference is not checked here.
    async fn create_book(&self, book: &NewBook) -> Result<Book>;

    /// Lists books joined with their authors, filtered and ordered by `mode`.
    async fn list_books(&self, mode: &ListingMode) -> Result<Vec<BookListing>>;

    /// Deletes a book. Returns whether a row was removed.
    async fn delete_book(&self, id: i64) -> Result<bool>;

    /// Counts stored books.
    async fn count_books(&self) -> Result<usize>;
}
