mod dates;
mod error;
mod listing;
mod operations;
mod types;

pub use dates::{ensure_html_date, format_html_date, parse_html_date};
pub use error::{CatalogError, DateParseError};
pub use listing::{apply_listing_mode, join_books_with_authors, title_matches, ListingMode};
pub use operations::resolve_author_id;
pub use types::{Author, Book, BookListing, CatalogStats, NewAuthor, NewBook};
