use serde::Deserialize;

use bookshelf_core::catalog::ListingMode;

/// Form payload for `POST /home`.
///
/// Each field is a submit button or input on the listing page. Only the
/// presence of a field matters, except for the search term itself.
#[derive(Debug, Default, Deserialize)]
pub struct HomeForm {
    #[serde(rename = "Search")]
    pub search: Option<String>,
    #[serde(rename = "Titles A-Z")]
    pub titles: Option<String>,
    #[serde(rename = "Authors A-Z")]
    pub authors: Option<String>,
}

impl HomeForm {
    /// Selects the listing mode signalled by the form.
    pub fn listing_mode(self) -> ListingMode {
        ListingMode::from_signals(self.search, self.titles.is_some(), self.authors.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_is_default() {
        assert_eq!(HomeForm::default().listing_mode(), ListingMode::Default);
    }

    #[test]
    fn test_presence_not_value_selects_sort() {
        let form = HomeForm {
            titles: Some(String::new()),
            ..HomeForm::default()
        };
        assert_eq!(form.listing_mode(), ListingMode::SortByTitle);
    }

    #[test]
    fn test_search_wins_over_sorts() {
        let form = HomeForm {
            search: Some("Emma".to_string()),
            titles: Some("Titles A-Z".to_string()),
            authors: Some("Authors A-Z".to_string()),
        };
        assert_eq!(form.listing_mode(), ListingMode::Search("Emma".to_string()));
    }

    #[test]
    fn test_titles_win_over_authors() {
        let form = HomeForm {
            titles: Some("Titles A-Z".to_string()),
            authors: Some("Authors A-Z".to_string()),
            ..HomeForm::default()
        };
        assert_eq!(form.listing_mode(), ListingMode::SortByTitle);
    }
}
