use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered author.
///
/// Authors are referenced by books but never owned by them, and are never
/// updated or removed once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub birth_date: NaiveDate,
    /// `None` means the author is living or the date is unknown.
    pub date_of_death: Option<NaiveDate>,
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let death = self
            .date_of_death
            .map(|d| d.to_string())
            .unwrap_or_else(|| "None".to_string());

        write!(
            f,
            "\"{}\"\n    Date of birth: {}\n    Date of death: {}\n    Advanced(DB ID): {}",
            self.name, self.birth_date, death, self.id
        )
    }
}

/// A book in the catalog.
///
/// `publication_year` carries a full calendar date even though only the year
/// is meaningful to readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub isbn: i64,
    pub title: String,
    pub publication_year: NaiveDate,
    pub author_id: i64,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\"\n    ISBN number: {}\n    Year published: {}\n    Author: {}",
            self.title, self.isbn, self.publication_year, self.author_id
        )
    }
}

/// Insert payload for an author. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub birth_date: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birth_date,
            date_of_death: None,
        }
    }

    /// Sets the date of death.
    pub fn with_date_of_death(mut self, date: NaiveDate) -> Self {
        self.date_of_death = Some(date);
        self
    }

    /// Attaches the id assigned by the store.
    pub fn into_author(self, id: i64) -> Author {
        Author {
            id,
            name: self.name,
            birth_date: self.birth_date,
            date_of_death: self.date_of_death,
        }
    }
}

/// Insert payload for a book whose author has already been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub isbn: i64,
    pub title: String,
    pub publication_year: NaiveDate,
    pub author_id: i64,
}

impl NewBook {
    /// Attaches the id assigned by the store.
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            isbn: self.isbn,
            title: self.title,
            publication_year: self.publication_year,
            author_id: self.author_id,
        }
    }
}

/// One row of the books/authors inner join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookListing {
    pub book: Book,
    pub author: Author,
}

/// Row counts reported by the readiness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub authors: usize,
    pub books: usize,
}
