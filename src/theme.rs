use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGB triple, written `r, g, b` the way the palette variables hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

impl From<Rgb> for ratatui::style::Color {
    fn from(rgb: Rgb) -> Self {
        ratatui::style::Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

const WHITE: Rgb = Rgb(255, 255, 255);
const INK: Rgb = Rgb(10, 10, 20);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Day,
    Night,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Night } else { Theme::Day }
    }

    /// The two palette values this theme sets.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Night => Palette {
                color_light: WHITE,
                color_dark: INK,
            },
            Theme::Day => Palette {
                color_light: INK,
                color_dark: WHITE,
            },
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            other => Err(ConfigError::InvalidTheme(other.to_string())),
        }
    }
}

/// The two color variables the screen is painted with. Text is drawn in
/// `color_light` over a `color_dark` background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub color_dark: Rgb,
    pub color_light: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Theme::Day.palette()
    }
}

/// Whether the terminal looks like it has a dark background.
///
/// Reads `COLORFGBG` (`fg;bg` or `fg;default;bg`), which most terminals
/// export. Without a usable hint the answer is dark.
pub fn prefers_dark() -> bool {
    prefers_dark_from(std::env::var("COLORFGBG").ok().as_deref())
}

fn prefers_dark_from(colorfgbg: Option<&str>) -> bool {
    let Some(bg) = colorfgbg.and_then(|v| v.rsplit(';').next()) else {
        return true;
    };
    match bg.trim().parse::<u8>() {
        Ok(idx) => idx <= 6 || idx == 8,
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_night_palette() {
        let palette = Theme::Night.palette();
        assert_eq!(palette.color_light.to_string(), "255, 255, 255");
        assert_eq!(palette.color_dark.to_string(), "10, 10, 20");
    }

    #[test]
    fn test_day_palette_reverses_night() {
        let day = Theme::Day.palette();
        let night = Theme::Night.palette();
        assert_eq!(day.color_light, night.color_dark);
        assert_eq!(day.color_dark, night.color_light);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(" Night ".parse::<Theme>().unwrap(), Theme::Night);
        assert_eq!("day".parse::<Theme>().unwrap(), Theme::Day);
        assert!(matches!(
            "Dusk".parse::<Theme>(),
            Err(ConfigError::InvalidTheme(value)) if value == "dusk"
        ));
    }

    #[test]
    fn test_preference_maps_to_theme() {
        assert_eq!(Theme::from_preference(true), Theme::Night);
        assert_eq!(Theme::from_preference(false), Theme::Day);
        assert_eq!(Theme::Day.toggled(), Theme::Night);
    }

    #[test]
    fn test_colorfgbg_detection() {
        assert!(prefers_dark_from(Some("15;0")));
        assert!(!prefers_dark_from(Some("0;15")));
        assert!(!prefers_dark_from(Some("0;default;7")));
        assert!(prefers_dark_from(Some("7;default;8")));
        assert!(prefers_dark_from(Some("garbage")));
        assert!(prefers_dark_from(None));
    }
}
