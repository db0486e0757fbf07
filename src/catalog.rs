use crate::error::CatalogError;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Catalog shipped inside the binary, used when no catalog file is configured.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// A single book record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub description: String,
    pub published: DateTime<Utc>,
    pub genres: Vec<String>,
}

impl Book {
    pub fn year(&self) -> i32 {
        self.published.year()
    }
}

/// Id → display name mapping that keeps the order entries were written in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels(Vec<(String, String)>);

impl Labels {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, name)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, id: String, name: String) {
        // A repeated key keeps its first position and takes the latest name.
        match self.0.iter_mut().find(|(key, _)| *key == id) {
            Some(entry) => entry.1 = name,
            None => self.0.push((id, name)),
        }
    }
}

impl FromIterator<(String, String)> for Labels {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut labels = Labels::default();
        for (id, name) in iter {
            labels.insert(id, name);
        }
        labels
    }
}

impl<'de> Deserialize<'de> for Labels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LabelsVisitor;

        impl<'de> Visitor<'de> for LabelsVisitor {
            type Value = Labels;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping ids to display names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Labels, A::Error> {
                let mut labels = Labels::default();
                while let Some((id, name)) = map.next_entry::<String, String>()? {
                    labels.insert(id, name);
                }
                Ok(labels)
            }
        }

        deserializer.deserialize_map(LabelsVisitor)
    }
}

// ── Wire format ──

#[derive(Debug, Deserialize)]
struct RawCatalog {
    books_per_page: usize,
    authors: Labels,
    genres: Labels,
    books: Vec<RawBook>,
}

#[derive(Debug, Deserialize)]
struct RawBook {
    id: String,
    title: String,
    author: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    description: String,
    published: String,
    #[serde(default)]
    genres: Vec<String>,
}

impl RawBook {
    fn into_book(self) -> Result<Book, CatalogError> {
        let published = parse_published(&self.published).ok_or_else(|| CatalogError::InvalidDate {
            id: self.id.clone(),
            value: self.published.clone(),
        })?;
        Ok(Book {
            id: self.id,
            title: self.title,
            author: self.author,
            image: self.image,
            description: self.description,
            published,
            genres: self.genres,
        })
    }
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
fn parse_published(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// The static, read-only data set: books, author and genre names, page size.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    authors: Labels,
    genres: Labels,
    books_per_page: usize,
}

impl Catalog {
    pub fn new(
        books: Vec<Book>,
        authors: Labels,
        genres: Labels,
        books_per_page: usize,
    ) -> Result<Self, CatalogError> {
        if books_per_page == 0 {
            return Err(CatalogError::InvalidPageSize);
        }
        let mut seen = HashSet::new();
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(CatalogError::DuplicateBookId(book.id.clone()));
            }
        }
        if authors.is_empty() || genres.is_empty() {
            tracing::warn!("catalog has no authors or no genres; dropdowns will only offer \"any\"");
        }
        Ok(Self {
            books,
            authors,
            genres,
            books_per_page,
        })
    }

    /// Parse a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let books = raw
            .books
            .into_iter()
            .map(RawBook::into_book)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(books, raw.authors, raw.genres, raw.books_per_page)
    }

    /// Load a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            books = catalog.books.len(),
            authors = catalog.authors.len(),
            genres = catalog.genres.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// The catalog embedded in the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Replace the page size, e.g. from a command line override.
    pub fn with_books_per_page(mut self, books_per_page: usize) -> Result<Self, CatalogError> {
        if books_per_page == 0 {
            return Err(CatalogError::InvalidPageSize);
        }
        self.books_per_page = books_per_page;
        Ok(self)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn authors(&self) -> &Labels {
        &self.authors
    }

    pub fn genres(&self) -> &Labels {
        &self.genres
    }

    pub fn books_per_page(&self) -> usize {
        self.books_per_page
    }

    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn author_name(&self, id: &str) -> Option<&str> {
        self.authors.get(id)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn book(id: &str, title: &str, author: &str, genres: &[&str], year: i32) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            image: format!("https://covers.example/{id}.jpg"),
            description: format!("About {title}."),
            published: Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    /// Five books, two per page.
    pub fn small_catalog() -> Catalog {
        let authors: Labels = [("a1", "Jane Austen"), ("a2", "Mary Shelley")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let genres: Labels = [("g1", "Romance"), ("g2", "Horror"), ("g3", "Classic")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let books = vec![
            book("b1", "Pride and Prejudice", "a1", &["g1", "g3"], 1813),
            book("b2", "Frankenstein", "a2", &["g2", "g3"], 1818),
            book("b3", "Emma", "a1", &["g1"], 1815),
            book("b4", "The Last Man", "a2", &["g3"], 1826),
            book("b5", "Persuasion", "a1", &["g1", "g3"], 1817),
        ];
        Catalog::new(books, authors, genres, 2).unwrap()
    }
}
