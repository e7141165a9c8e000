use serde::Deserialize;

use bookshelf_core::catalog::{parse_html_date, DateParseError, NewAuthor};
use bookshelf_core::serde::deserialize_optional_string;

/// Form payload for `POST /add_author`.
#[derive(Debug, Deserialize)]
pub struct AuthorForm {
    pub name: String,
    /// `YYYY-MM-DD`, required.
    pub birthdate: String,
    /// `YYYY-MM-DD`; an empty field means the author is living or the date is unknown.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub date_of_death: Option<String>,
}

impl AuthorForm {
    /// Converts the form into an insert payload, parsing both dates.
    pub fn into_new_author(self) -> Result<NewAuthor, DateParseError> {
        let date_of_death = self
            .date_of_death
            .as_deref()
            .map(parse_html_date)
            .transpose()?;

        Ok(NewAuthor {
            name: self.name,
            birth_date: parse_html_date(&self.birthdate)?,
            date_of_death,
        })
    }
}
