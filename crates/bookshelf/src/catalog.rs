//! Catalog operations over the author and book repositories.
//!
//! Handlers never touch the repositories directly; they go through
//! [`Catalog`], which owns the author-linkage and listing rules.

use std::sync::Arc;

use chrono::NaiveDate;

use bookshelf_core::catalog::{
    ensure_html_date, resolve_author_id, Author, Book, BookListing, CatalogError, CatalogStats,
    ListingMode, NewAuthor, NewBook,
};
use bookshelf_core::storage::{AuthorRepository, BookRepository};

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Entry point for every catalog read and write.
#[derive(Clone)]
pub struct Catalog {
    authors: Arc<dyn AuthorRepository>,
    books: Arc<dyn BookRepository>,
}

impl Catalog {
    pub fn new(authors: Arc<dyn AuthorRepository>, books: Arc<dyn BookRepository>) -> Self {
        Self { authors, books }
    }

    /// Registers a new author. Duplicate names are accepted.
    ///
    /// Dates must fit `YYYY-MM-DD` so that every backend can read them back.
    pub async fn create_author(&self, author: NewAuthor) -> Result<Author> {
        ensure_html_date(author.birth_date)?;
        if let Some(date_of_death) = author.date_of_death {
            ensure_html_date(date_of_death)?;
        }

        let author = self.authors.create_author(&author).await?;

        tracing::info!(author_id = author.id, name = %author.name, "Created new author");
        tracing::debug!("{author}");

        Ok(author)
    }

    /// Lists every author in storage order.
    pub async fn authors(&self) -> Result<Vec<Author>> {
        Ok(self.authors.list_authors().await?)
    }

    /// Registers a new book for the author named `author_name`.
    ///
    /// Fails with [`CatalogError::MissingAuthor`] without writing anything when
    /// no author has that name. When several authors share the name, the book
    /// is linked to the first one in storage order.
    pub async fn create_book(
        &self,
        author_name: &str,
        isbn: i64,
        title: impl Into<String>,
        publication_year: NaiveDate,
    ) -> Result<Book> {
        let publication_year = ensure_html_date(publication_year)?;
        let authors = self.authors.list_authors().await?;

        let Some(author_id) = resolve_author_id(&authors, author_name) else {
            tracing::warn!(name = %author_name, "Rejected book for unknown author");
            return Err(CatalogError::MissingAuthor {
                name: author_name.to_string(),
            });
        };

        let book = self
            .books
            .create_book(&NewBook {
                isbn,
                title: title.into(),
                publication_year,
                author_id,
            })
            .await?;

        tracing::info!(book_id = book.id, author_id, title = %book.title, "Created new book");
        tracing::debug!("{book}");

        Ok(book)
    }

    /// Lists books with their authors.
    ///
    /// A search that matches nothing is reported as
    /// [`CatalogError::NoMatches`] rather than an empty list.
    pub async fn list_books(&self, mode: &ListingMode) -> Result<Vec<BookListing>> {
        let rows = self.books.list_books(mode).await?;

        tracing::debug!(mode = mode.as_str(), rows = rows.len(), "Listed books");

        match mode {
            ListingMode::Search(term) if rows.is_empty() => Err(CatalogError::NoMatches {
                term: term.clone(),
            }),
            _ => Ok(rows),
        }
    }

    /// Deletes a book by id.
    ///
    /// Succeeds whether or not the book existed.
    pub async fn delete_book(&self, id: i64) -> Result<()> {
        let existing = self.books.get_book(id).await?;
        let removed = self.books.delete_book(id).await?;

        if removed {
            let title = existing.map(|book| book.title).unwrap_or_default();
            tracing::info!(book_id = id, title = %title, "Deleted book");
        } else {
            // TODO: decide whether deleting an unknown id should surface a 404.
            tracing::warn!(book_id = id, "Delete requested for unknown book");
        }

        Ok(())
    }

    /// Counts stored authors and books.
    pub async fn stats(&self) -> Result<CatalogStats> {
        Ok(CatalogStats {
            authors: self.authors.count_authors().await?,
            books: self.books.count_books().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{InMemoryRepository, SqliteRepository};
    use bookshelf_core::catalog::DateParseError;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn in_memory_catalog() -> (Catalog, InMemoryRepository) {
        let repo = InMemoryRepository::new();
        let catalog = Catalog::new(Arc::new(repo.clone()), Arc::new(repo.clone()));
        (catalog, repo)
    }

    async fn sqlite_catalog() -> Catalog {
        let repo = Arc::new(SqliteRepository::open_in_memory().await.unwrap());
        Catalog::new(repo.clone(), repo)
    }

    async fn austen(catalog: &Catalog) -> Author {
        catalog
            .create_author(
                NewAuthor::new("Jane Austen", make_date(1775, 12, 16))
                    .with_date_of_death(make_date(1817, 7, 18)),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_end_to_end_single_pair() {
        for catalog in [in_memory_catalog().0, sqlite_catalog().await] {
            let author = austen(&catalog).await;
            let book = catalog
                .create_book(
                    "Jane Austen",
                    9780141439518,
                    "Pride and Prejudice",
                    make_date(1813, 1, 28),
                )
                .await
                .unwrap();

            let rows = catalog.list_books(&ListingMode::Default).await.unwrap();
            assert_eq!(
                rows,
                vec![BookListing {
                    book,
                    author: author.clone()
                }]
            );
            assert_eq!(rows[0].book.author_id, author.id);
        }
    }

    #[tokio::test]
    async fn test_create_book_for_missing_author_writes_nothing() {
        let (catalog, repo) = in_memory_catalog();
        austen(&catalog).await;

        let result = catalog
            .create_book("Charlotte Bronte", 1, "Jane Eyre", make_date(1847, 10, 16))
            .await;

        assert_eq!(
            result,
            Err(CatalogError::MissingAuthor {
                name: "Charlotte Bronte".to_string()
            })
        );
        assert_eq!(repo.count_books().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_author_names_link_to_first() {
        let (catalog, _) = in_memory_catalog();
        let first = catalog
            .create_author(NewAuthor::new("Anonymous", make_date(1900, 1, 1)))
            .await
            .unwrap();
        catalog
            .create_author(NewAuthor::new("Anonymous", make_date(1950, 1, 1)))
            .await
            .unwrap();

        let book = catalog
            .create_book("Anonymous", 7, "Beowulf", make_date(1000, 1, 1))
            .await
            .unwrap();

        assert_eq!(book.author_id, first.id);
    }

    #[tokio::test]
    async fn test_search_without_matches_is_distinct_error() {
        let (catalog, _) = in_memory_catalog();
        austen(&catalog).await;
        catalog
            .create_book("Jane Austen", 1, "Emma", make_date(1815, 12, 23))
            .await
            .unwrap();

        let hits = catalog
            .list_books(&ListingMode::Search("mm".to_string()))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);

        let miss = catalog
            .list_books(&ListingMode::Search("Ulysses".to_string()))
            .await;
        assert_eq!(
            miss,
            Err(CatalogError::NoMatches {
                term: "Ulysses".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_empty_catalog_default_listing_is_ok() {
        let (catalog, _) = in_memory_catalog();
        let rows = catalog.list_books(&ListingMode::Default).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_row_and_tolerates_unknown_id() {
        for catalog in [in_memory_catalog().0, sqlite_catalog().await] {
            austen(&catalog).await;
            let book = catalog
                .create_book("Jane Austen", 1, "Emma", make_date(1815, 12, 23))
                .await
                .unwrap();

            catalog.delete_book(book.id).await.unwrap();
            let rows = catalog.list_books(&ListingMode::Default).await.unwrap();
            assert!(rows.iter().all(|r| r.book.id != book.id));

            // Deleting again still reports success.
            assert_eq!(catalog.delete_book(book.id).await, Ok(()));
        }
    }

    #[tokio::test]
    async fn test_stats_counts_rows() {
        let (catalog, _) = in_memory_catalog();
        austen(&catalog).await;
        catalog
            .create_book("Jane Austen", 1, "Emma", make_date(1815, 12, 23))
            .await
            .unwrap();

        assert_eq!(
            catalog.stats().await.unwrap(),
            CatalogStats {
                authors: 1,
                books: 1
            }
        );
    }

    #[tokio::test]
    async fn test_five_digit_year_is_rejected_before_storage() {
        for catalog in [in_memory_catalog().0, sqlite_catalog().await] {
            austen(&catalog).await;
            let far_future = make_date(10000, 1, 1);

            let author = catalog
                .create_author(NewAuthor::new("Time Traveller", far_future))
                .await;
            assert!(matches!(
                author,
                Err(CatalogError::InvalidDate(DateParseError::OutOfRange {
                    year: 10000,
                    ..
                }))
            ));

            let book = catalog
                .create_book("Jane Austen", 1, "Sanditon", far_future)
                .await;
            assert!(matches!(book, Err(CatalogError::InvalidDate(_))));

            // The catalog stays readable and writable afterwards.
            assert_eq!(catalog.authors().await.unwrap().len(), 1);
            catalog
                .create_book("Jane Austen", 1, "Emma", make_date(1815, 12, 23))
                .await
                .unwrap();
            assert_eq!(
                catalog.list_books(&ListingMode::Default).await.unwrap().len(),
                1
            );
        }
    }

    #[tokio::test]
    async fn test_boundary_years_survive_sqlite() {
        let catalog = sqlite_catalog().await;
        let dates = [
            make_date(0, 1, 1),
            make_date(999, 12, 31),
            make_date(9999, 12, 31),
        ];

        for (i, date) in dates.iter().enumerate() {
            let name = format!("Author {i}");
            catalog
                .create_author(NewAuthor::new(name.clone(), *date).with_date_of_death(*date))
                .await
                .unwrap();
            catalog
                .create_book(&name, i as i64, format!("Book {i}"), *date)
                .await
                .unwrap();
        }

        let authors = catalog.authors().await.unwrap();
        let birth_dates: Vec<NaiveDate> = authors.iter().map(|a| a.birth_date).collect();
        assert_eq!(birth_dates, dates);

        let rows = catalog.list_books(&ListingMode::Default).await.unwrap();
        let published: Vec<NaiveDate> = rows.iter().map(|r| r.book.publication_year).collect();
        assert_eq!(published, dates);
        assert!(rows
            .iter()
            .all(|r| r.author.date_of_death == Some(r.book.publication_year)));
    }
}
