//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bookshelf_core::catalog::{
    apply_listing_mode, join_books_with_authors, Author, Book, BookListing, ListingMode,
    NewAuthor, NewBook,
};
use bookshelf_core::storage::{AuthorRepository, BookRepository, Result};

#[derive(Debug, Default)]
struct Tables {
    authors: BTreeMap<i64, Author>,
    books: BTreeMap<i64, Book>,
    last_author_id: i64,
    last_book_id: i64,
}

/// In-memory storage backend.
///
/// Ids are assigned from per-table counters and never reused, so key order
/// matches insertion order. Data is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryRepository {
    async fn list_authors(&self) -> Result<Vec<Author>> {
        let tables = self.tables.read().await;
        Ok(tables.authors.values().cloned().collect())
    }

    async fn get_author(&self, id: i64) -> Result<Option<Author>> {
        let tables = self.tables.read().await;
        Ok(tables.authors.get(&id).cloned())
    }

    async fn create_author(&self, author: &NewAuthor) -> Result<Author> {
        let mut tables = self.tables.write().await;
        tables.last_author_id += 1;
        let author = author.clone().into_author(tables.last_author_id);
        tables.authors.insert(author.id, author.clone());
        Ok(author)
    }

    async fn count_authors(&self) -> Result<usize> {
        Ok(self.tables.read().await.authors.len())
    }
}

#[async_trait]
impl BookRepository for InMemoryRepository {
    async fn get_book(&self, id: i64) -> Result<Option<Book>> {
        let tables = self.tables.read().await;
        Ok(tables.books.get(&id).cloned())
    }

    async fn create_book(&self, book: &NewBook) -> Result<Book> {
        let mut tables = self.tables.write().await;
        tables.last_book_id += 1;
        let book = book.clone().into_book(tables.last_book_id);
        tables.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn list_books(&self, mode: &ListingMode) -> Result<Vec<BookListing>> {
        let tables = self.tables.read().await;
        let authors: Vec<Author> = tables.authors.values().cloned().collect();
        let joined = join_books_with_authors(tables.books.values(), &authors);
        Ok(apply_listing_mode(joined, mode))
    }

    async fn delete_book(&self, id: i64) -> Result<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.books.remove(&id).is_some())
    }

    async fn count_books(&self) -> Result<usize> {
        Ok(self.tables.read().await.books.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn new_book(title: &str, author_id: i64) -> NewBook {
        NewBook {
            isbn: 42,
            title: title.to_string(),
            publication_year: make_date(1900, 1, 1),
            author_id,
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = InMemoryRepository::new();
        let first = repo
            .create_author(&NewAuthor::new("A", make_date(1900, 1, 1)))
            .await
            .unwrap();
        let second = repo
            .create_author(&NewAuthor::new("B", make_date(1900, 1, 1)))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_deleted_book_ids_are_not_reused() {
        let repo = InMemoryRepository::new();
        let book = repo.create_book(&new_book("Gone", 1)).await.unwrap();
        assert!(repo.delete_book(book.id).await.unwrap());

        let next = repo.create_book(&new_book("Next", 1)).await.unwrap();
        assert!(next.id > book.id);
    }

    #[tokio::test]
    async fn test_delete_missing_book_reports_false() {
        let repo = InMemoryRepository::new();
        assert!(!repo.delete_book(17).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_books_joins_and_sorts() {
        let repo = InMemoryRepository::new();
        let tolkien = repo
            .create_author(&NewAuthor::new("Tolkien", make_date(1892, 1, 3)))
            .await
            .unwrap();
        let adams = repo
            .create_author(&NewAuthor::new("Adams", make_date(1952, 3, 11)))
            .await
            .unwrap();
        repo.create_book(&new_book("The Hobbit", tolkien.id))
            .await
            .unwrap();
        repo.create_book(&new_book("Mostly Harmless", adams.id))
            .await
            .unwrap();

        let rows = repo.list_books(&ListingMode::SortByAuthor).await.unwrap();
        assert_eq!(rows[0].author.name, "Adams");
        assert_eq!(rows[1].book.title, "The Hobbit");
        assert_eq!(repo.count_books().await.unwrap(), 2);
        assert_eq!(repo.count_authors().await.unwrap(), 2);
    }
}
