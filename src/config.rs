//! # Configuration
//!
//! Settings are read from `config.json` in the OS config directory (via the
//! `directories` crate), or from the file passed with `--config`. Command line
//! flags override file values. A missing default file means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `catalog` | built-in | Path to a catalog JSON document |
//! | `books_per_page` | catalog's value | Page size override |
//! | `theme` | `system` | `system`, `day` or `night` |
//! | `log_dir` | `<data dir>/logs` | Where the log file is written |

use crate::error::ConfigError;
use crate::theme::Theme;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE: &str = "config.json";

/// Starting theme: follow the terminal, or force one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Day,
    Night,
}

impl ThemePreference {
    pub fn resolve(self, prefers_dark: bool) -> Theme {
        match self {
            ThemePreference::System => Theme::from_preference(prefers_dark),
            ThemePreference::Day => Theme::Day,
            ThemePreference::Night => Theme::Night,
        }
    }
}

impl FromStr for ThemePreference {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("system") {
            return Ok(ThemePreference::System);
        }
        match value.parse::<Theme>()? {
            Theme::Day => Ok(ThemePreference::Day),
            Theme::Night => Ok(ThemePreference::Night),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: Option<PathBuf>,
    pub books_per_page: Option<usize>,
    pub theme: ThemePreference,
    pub log_dir: Option<PathBuf>,
}

pub fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("com", "book-explorer", "book-explorer").ok_or(ConfigError::NoConfigDir)
}

impl Settings {
    /// Load from an explicit file, or from the default location if one exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = project_dirs()?.config_dir().join(CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Apply command line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        catalog: Option<PathBuf>,
        books_per_page: Option<usize>,
        theme: Option<ThemePreference>,
    ) -> Self {
        if catalog.is_some() {
            self.catalog = catalog;
        }
        if books_per_page.is_some() {
            self.books_per_page = books_per_page;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        self
    }

    pub fn log_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(project_dirs()?.data_dir().join("logs")),
        }
    }
}
