//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. `books.author_id` deliberately carries no foreign key;
//! the author reference is checked by the catalog before insert.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Authors table
CREATE TABLE IF NOT EXISTS authors (
    author_id INTEGER PRIMARY KEY,
    name TEXT,
    birth_date TEXT NOT NULL,
    date_of_death TEXT
);

-- Books table
CREATE TABLE IF NOT EXISTS books (
    book_id INTEGER PRIMARY KEY,
    isbn INTEGER,
    title TEXT,
    publication_year TEXT,
    author_id INTEGER
);

CREATE INDEX IF NOT EXISTS idx_books_author_id ON books(author_id);
"#;

// Author queries
pub const INSERT_AUTHOR: &str = r#"
INSERT INTO authors (name, birth_date, date_of_death)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_AUTHORS: &str = r#"
SELECT author_id, name, birth_date, date_of_death
FROM authors
ORDER BY author_id ASC
"#;

pub const SELECT_AUTHOR_BY_ID: &str = r#"
SELECT author_id, name, birth_date, date_of_death
FROM authors
WHERE author_id = ?1
"#;

pub const COUNT_AUTHORS: &str = "SELECT COUNT(*) FROM authors";

// Book queries
pub const INSERT_BOOK: &str = r#"
INSERT INTO books (isbn, title, publication_year, author_id)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_BOOK_BY_ID: &str = r#"
SELECT book_id, isbn, title, publication_year, author_id
FROM books
WHERE book_id = ?1
"#;

pub const DELETE_BOOK: &str = r#"
DELETE FROM books
WHERE book_id = ?1
"#;

pub const COUNT_BOOKS: &str = "SELECT COUNT(*) FROM books";

// Listing queries (books joined with authors)
pub const SELECT_LISTING: &str = r#"
SELECT b.book_id, b.isbn, b.title, b.publication_year, b.author_id,
       a.author_id, a.name, a.birth_date, a.date_of_death
FROM books b
INNER JOIN authors a ON a.author_id = b.author_id
ORDER BY b.book_id ASC
"#;

pub const SELECT_LISTING_BY_TITLE_SEARCH: &str = r#"
SELECT b.book_id, b.isbn, b.title, b.publication_year, b.author_id,
       a.author_id, a.name, a.birth_date, a.date_of_death
FROM books b
INNER JOIN authors a ON a.author_id = b.author_id
WHERE instr(lower(b.title), lower(?1)) > 0
ORDER BY b.book_id ASC
"#;

pub const SELECT_LISTING_ORDER_BY_TITLE: &str = r#"
SELECT b.book_id, b.isbn, b.title, b.publication_year, b.author_id,
       a.author_id, a.name, a.birth_date, a.date_of_death
FROM books b
INNER JOIN authors a ON a.author_id = b.author_id
ORDER BY b.title ASC, b.book_id ASC
"#;

pub const SELECT_LISTING_ORDER_BY_AUTHOR: &str = r#"
SELECT b.book_id, b.isbn, b.title, b.publication_year, b.author_id,
       a.author_id, a.name, a.birth_date, a.date_of_death
FROM books b
INNER JOIN authors a ON a.author_id = b.author_id
ORDER BY a.name ASC, b.book_id ASC
"#;
