use super::types::Author;

/// Resolves an author name to an id.
///
/// Names are not unique. When several authors share `name`, the first one
/// in the given order wins.
pub fn resolve_author_id(authors: &[Author], name: &str) -> Option<i64> {
    authors
        .iter()
        .find(|author| author.name == name)
        .map(|author| author.id)
}
