//! Catalog listing rules: which rows are shown and in what order.
//!
//! SQL backends express these rules in their queries. The functions here are
//! the reference behavior for backends without a query engine.

use std::collections::HashMap;

use super::types::{Author, Book, BookListing};

/// How the catalog listing is filtered or ordered. Exactly one mode applies
/// per request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListingMode {
    /// Storage order, unfiltered.
    #[default]
    Default,
    /// Rows whose title contains the term, ignoring ASCII case.
    Search(String),
    /// Ascending by title.
    SortByTitle,
    /// Ascending by author name.
    SortByAuthor,
}

impl ListingMode {
    /// Picks a mode from the listing form signals.
    ///
    /// Precedence is search, then titles, then authors. With no signal the
    /// default listing is used.
    pub fn from_signals(search: Option<String>, titles: bool, authors: bool) -> Self {
        match (search, titles, authors) {
            (Some(term), _, _) => ListingMode::Search(term),
            (None, true, _) => ListingMode::SortByTitle,
            (None, false, true) => ListingMode::SortByAuthor,
            (None, false, false) => ListingMode::Default,
        }
    }

    /// Short name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingMode::Default => "default",
            ListingMode::Search(_) => "search",
            ListingMode::SortByTitle => "sort_by_title",
            ListingMode::SortByAuthor => "sort_by_author",
        }
    }
}

/// Returns true when `title` contains `term`, ignoring ASCII case.
///
/// An empty term matches every title.
pub fn title_matches(title: &str, term: &str) -> bool {
    title
        .to_ascii_lowercase()
        .contains(&term.to_ascii_lowercase())
}

/// Inner-joins books with their authors, keeping the order of `books`.
///
/// Books whose `author_id` has no matching author are left out.
pub fn join_books_with_authors<'a>(
    books: impl IntoIterator<Item = &'a Book>,
    authors: &[Author],
) -> Vec<BookListing> {
    let by_id: HashMap<i64, &Author> = authors.iter().map(|a| (a.id, a)).collect();

    books
        .into_iter()
        .filter_map(|book| {
            by_id.get(&book.author_id).map(|author| BookListing {
                book: book.clone(),
                author: (*author).clone(),
            })
        })
        .collect()
}

/// Applies a listing mode to joined rows that are already in storage order.
///
/// Sorts are stable and break ties by book id.
pub fn apply_listing_mode(mut listings: Vec<BookListing>, mode: &ListingMode) -> Vec<BookListing> {
    match mode {
        ListingMode::Default => {}
        ListingMode::Search(term) => {
            listings.retain(|row| title_matches(&row.book.title, term));
        }
        ListingMode::SortByTitle => {
            listings.sort_by(|a, b| {
                a.book
                    .title
                    .cmp(&b.book.title)
                    .then(a.book.id.cmp(&b.book.id))
            });
        }
        ListingMode::SortByAuthor => {
            listings.sort_by(|a, b| {
                a.author
                    .name
                    .cmp(&b.author.name)
                    .then(a.book.id.cmp(&b.book.id))
            });
        }
    }
    listings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{NewAuthor, NewBook};
    use chrono::NaiveDate;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn author(id: i64, name: &str) -> Author {
        NewAuthor::new(name, make_date(1900, 1, 1)).into_author(id)
    }

    fn book(id: i64, title: &str, author_id: i64) -> Book {
        NewBook {
            isbn: 1000 + id,
            title: title.to_string(),
            publication_year: make_date(2000, 1, 1),
            author_id,
        }
        .into_book(id)
    }

    fn sample() -> Vec<BookListing> {
        let authors = vec![
            author(1, "Mary Shelley"),
            author(2, "Bram Stoker"),
            author(3, "Jane Austen"),
        ];
        let books = vec![
            book(1, "Frankenstein", 1),
            book(2, "Dracula", 2),
            book(3, "Emma", 3),
            book(4, "Persuasion", 3),
        ];
        join_books_with_authors(&books, &authors)
    }

    fn titles(rows: &[BookListing]) -> Vec<&str> {
        rows.iter().map(|r| r.book.title.as_str()).collect()
    }

    #[test]
    fn test_from_signals_precedence() {
        assert_eq!(
            ListingMode::from_signals(Some("x".to_string()), true, true),
            ListingMode::Search("x".to_string())
        );
        assert_eq!(
            ListingMode::from_signals(None, true, true),
            ListingMode::SortByTitle
        );
        assert_eq!(
            ListingMode::from_signals(None, false, true),
            ListingMode::SortByAuthor
        );
        assert_eq!(
            ListingMode::from_signals(None, false, false),
            ListingMode::Default
        );
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(ListingMode::default().as_str(), "default");
        assert_eq!(ListingMode::Search(String::new()).as_str(), "search");
        assert_eq!(ListingMode::SortByTitle.as_str(), "sort_by_title");
        assert_eq!(ListingMode::SortByAuthor.as_str(), "sort_by_author");
    }

    #[test]
    fn test_title_matches_ignores_ascii_case() {
        assert!(title_matches("Pride and Prejudice", "prejudice"));
        assert!(title_matches("Pride and Prejudice", "AND"));
        assert!(!title_matches("Pride and Prejudice", "Sense"));
        assert!(title_matches("Anything", ""));
    }

    #[test]
    fn test_join_keeps_book_order_and_pairs_authors() {
        let rows = sample();
        assert_eq!(
            titles(&rows),
            vec!["Frankenstein", "Dracula", "Emma", "Persuasion"]
        );
        assert_eq!(rows[1].author.name, "Bram Stoker");
        assert_eq!(rows[3].author.id, 3);
    }

    #[test]
    fn test_join_drops_orphaned_books() {
        let authors = vec![author(1, "Mary Shelley")];
        let books = vec![book(1, "Frankenstein", 1), book(2, "Orphan", 99)];

        let rows = join_books_with_authors(&books, &authors);
        assert_eq!(titles(&rows), vec!["Frankenstein"]);
    }

    #[test]
    fn test_default_mode_keeps_storage_order() {
        let rows = apply_listing_mode(sample(), &ListingMode::Default);
        assert_eq!(
            titles(&rows),
            vec!["Frankenstein", "Dracula", "Emma", "Persuasion"]
        );
    }

    #[test]
    fn test_search_filters_by_substring() {
        let rows = apply_listing_mode(sample(), &ListingMode::Search("ra".to_string()));
        assert_eq!(titles(&rows), vec!["Frankenstein", "Dracula"]);

        let rows = apply_listing_mode(sample(), &ListingMode::Search("Moby".to_string()));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_sort_by_title_is_non_decreasing() {
        let rows = apply_listing_mode(sample(), &ListingMode::SortByTitle);
        assert_eq!(
            titles(&rows),
            vec!["Dracula", "Emma", "Frankenstein", "Persuasion"]
        );
        assert!(rows
            .windows(2)
            .all(|w| w[0].book.title <= w[1].book.title));
    }

    #[test]
    fn test_sort_by_author_breaks_ties_by_book_id() {
        let rows = apply_listing_mode(sample(), &ListingMode::SortByAuthor);
        let authors: Vec<&str> = rows.iter().map(|r| r.author.name.as_str()).collect();

        assert_eq!(
            authors,
            vec!["Bram Stoker", "Jane Austen", "Jane Austen", "Mary Shelley"]
        );
        assert_eq!(rows[1].book.title, "Emma");
        assert_eq!(rows[2].book.title, "Persuasion");
    }
}
