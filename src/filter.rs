use crate::catalog::Book;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Sentinel form value meaning "no restriction".
pub const ANY: &str = "any";

/// A dropdown choice: either the wildcard or one concrete id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Any,
    Id(String),
}

impl Selection {
    fn admits(&self, id: &str) -> bool {
        match self {
            Selection::Any => true,
            Selection::Id(wanted) => wanted == id,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::Any => ANY,
            Selection::Id(id) => id,
        }
    }

    pub fn from_form_value(value: &str) -> Self {
        if value == ANY {
            Selection::Any
        } else {
            Selection::Id(value.to_string())
        }
    }
}

impl FromStr for Selection {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Selection::from_form_value(value))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values submitted from the search form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub title: String,
    pub author: Selection,
    pub genre: Selection,
}

impl FilterCriteria {
    /// Build criteria from raw form values, where `"any"` is the wildcard.
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: Selection::from_form_value(author),
            genre: Selection::from_form_value(genre),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.title.trim().is_empty()
            && self.author == Selection::Any
            && self.genre == Selection::Any
    }

    /// True when `book` passes the title, author and genre predicates.
    pub fn matches(&self, book: &Book) -> bool {
        let title_match = self.title.trim().is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase());
        let author_match = self.author.admits(&book.author);
        let genre_match = match &self.genre {
            Selection::Any => true,
            Selection::Id(genre) => book.genres.iter().any(|g| g == genre),
        };
        title_match && author_match && genre_match
    }
}

/// Scan the whole catalog and keep, in order, every book the criteria admit.
pub fn apply_search_filters(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    books
        .iter()
        .filter(|book| criteria.matches(book))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::small_catalog;
    use proptest::prelude::*;

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!("any".parse::<Selection>().unwrap(), Selection::Any);
        assert_eq!(
            "a1".parse::<Selection>().unwrap(),
            Selection::Id("a1".to_string())
        );
        assert_eq!(Selection::Any.to_string(), "any");
    }

    #[test]
    fn test_unrestricted_returns_whole_catalog() {
        let catalog = small_catalog();
        let criteria = FilterCriteria::from_form("", "any", "any");
        assert!(criteria.is_unrestricted());
        assert_eq!(
            apply_search_filters(catalog.books(), &criteria),
            catalog.books()
        );
    }

    #[test]
    fn test_whitespace_title_matches_all() {
        let catalog = small_catalog();
        let criteria = FilterCriteria::from_form("   ", "any", "any");
        assert_eq!(apply_search_filters(catalog.books(), &criteria).len(), 5);
    }

    #[test]
    fn test_title_is_case_insensitive_substring() {
        let catalog = small_catalog();
        let criteria = FilterCriteria::from_form("PRIDE", "any", "any");
        assert_eq!(ids(&apply_search_filters(catalog.books(), &criteria)), vec!["b1"]);

        let criteria = FilterCriteria::from_form("e", "any", "any");
        assert_eq!(
            ids(&apply_search_filters(catalog.books(), &criteria)),
            vec!["b1", "b2", "b3", "b4", "b5"]
        );
    }

    #[test]
    fn test_title_padding_is_not_trimmed_for_substring() {
        let catalog = small_catalog();
        let criteria = FilterCriteria::from_form(" emma ", "any", "any");
        assert!(apply_search_filters(catalog.books(), &criteria).is_empty());
    }

    #[test]
    fn test_author_and_genre_are_conjunctive() {
        let catalog = small_catalog();
        let criteria = FilterCriteria::from_form("", "a1", "g3");
        assert_eq!(
            ids(&apply_search_filters(catalog.books(), &criteria)),
            vec!["b1", "b5"]
        );

        let criteria = FilterCriteria::from_form("emma", "a1", "g3");
        assert!(apply_search_filters(catalog.books(), &criteria).is_empty());
    }

    #[test]
    fn test_unknown_genre_matches_nothing() {
        let catalog = small_catalog();
        let criteria = FilterCriteria::from_form("", "any", "g404");
        assert!(apply_search_filters(catalog.books(), &criteria).is_empty());
    }

    proptest! {
        #[test]
        fn prop_own_title_any_case_is_included(idx in 0usize..5, upper in any::<bool>()) {
            let catalog = small_catalog();
            let book = &catalog.books()[idx];
            let title = if upper { book.title.to_uppercase() } else { book.title.to_lowercase() };
            let criteria = FilterCriteria::from_form(&title, "any", "any");
            let found = apply_search_filters(catalog.books(), &criteria);
            prop_assert!(found.iter().any(|b| b.id == book.id));
        }

        #[test]
        fn prop_other_author_excludes(idx in 0usize..5, genre in prop_oneof![Just("any"), Just("g1"), Just("g3")]) {
            let catalog = small_catalog();
            let book = &catalog.books()[idx];
            let other = if book.author == "a1" { "a2" } else { "a1" };
            let criteria = FilterCriteria::from_form(&book.title, other, genre);
            let found = apply_search_filters(catalog.books(), &criteria);
            prop_assert!(found.iter().all(|b| b.id != book.id));
        }

        #[test]
        fn prop_result_is_ordered_subset(title in "[a-z ]{0,3}", author in prop_oneof![Just("any"), Just("a1"), Just("a2")]) {
            let catalog = small_catalog();
            let criteria = FilterCriteria::from_form(&title, author, "any");
            let found = apply_search_filters(catalog.books(), &criteria);
            let positions: Vec<usize> = found
                .iter()
                .map(|b| catalog.books().iter().position(|c| c.id == b.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
