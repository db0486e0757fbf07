use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a catalog document.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("books_per_page must be at least 1")]
    InvalidPageSize,

    #[error("Duplicate book id: {0}")]
    DuplicateBookId(String),

    #[error("Book {id} has an unparseable published date: {value}")]
    InvalidDate { id: String, value: String },
}

/// Errors raised while loading user configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid theme: {0} (expected day, night or system)")]
    InvalidTheme(String),
}

impl CatalogError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Io { path, .. } => {
                format!("Could not open catalog file {}", path.display())
            }
            CatalogError::Parse(e) => format!("Catalog is not valid JSON: {}", e),
            CatalogError::InvalidPageSize => {
                "The catalog's books_per_page must be a positive number".to_string()
            }
            CatalogError::DuplicateBookId(id) => {
                format!("The catalog lists book {} more than once", id)
            }
            CatalogError::InvalidDate { id, value } => {
                format!("Book {} has a bad published date ({})", id, value)
            }
        }
    }
}
