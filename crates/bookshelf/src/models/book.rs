use serde::Deserialize;

/// Form payload for `POST /add_book`.
///
/// `name` is the author's name; the catalog resolves it to an author id.
#[derive(Debug, Deserialize)]
pub struct BookForm {
    pub name: String,
    pub isbn: i64,
    /// `YYYY-MM-DD`.
    pub publication_year: String,
    pub title: String,
}
