//! Dark-scheme palette values.
//!
//! The defaults reproduce the page's observed constants: light-gray titles
//! and foreground over near-black surfaces, plus the decorative shadow
//! treatment. A palette can also be loaded from a YAML definition, with
//! missing keys falling back to the defaults:
//!
//! ```yaml
//! title_fg: "#d8d8d8"
//! surface_bg: "#0a0a0a"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::color::Rgb;
use crate::error::ThemeError;

/// The color and decoration values the styler writes into inline styles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Foreground for title elements.
    pub title_fg: Rgb,
    /// Background for the principal page surface.
    pub surface_bg: Rgb,
    /// Body-level background.
    pub page_bg: Rgb,
    /// Body-level foreground.
    pub page_fg: Rgb,
    /// CSS filter applied to the shadow element (decorative styling only).
    pub shadow_filter: String,
    /// Height forced onto the shadow element (decorative styling only).
    pub shadow_height: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            title_fg: Rgb::new(0xcf, 0xcf, 0xcf),
            surface_bg: Rgb::new(0x11, 0x11, 0x11),
            page_bg: Rgb::new(0x11, 0x11, 0x11),
            page_fg: Rgb::new(0xcf, 0xcf, 0xcf),
            shadow_filter: "brightness(0.07)".to_string(),
            shadow_height: "3em".to_string(),
        }
    }
}

impl Palette {
    /// Parses a palette from YAML content.
    ///
    /// Keys not present keep their default values; unknown keys are
    /// rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pagelight_theme::{Palette, Rgb};
    ///
    /// let palette = Palette::from_yaml("title_fg: \"#ffffff\"").unwrap();
    /// assert_eq!(palette.title_fg, Rgb::new(255, 255, 255));
    /// assert_eq!(palette.surface_bg, Palette::default().surface_bg);
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, ThemeError> {
        serde_yaml::from_str(content).map_err(|e| ThemeError::Palette(e.to_string()))
    }

    /// Loads a palette from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_matches_observed_values() {
        let palette = Palette::default();
        assert_eq!(palette.title_fg.to_string(), "#cfcfcf");
        assert_eq!(palette.surface_bg.to_string(), "#111111");
        assert_eq!(palette.page_bg.to_string(), "#111111");
        assert_eq!(palette.page_fg.to_string(), "#cfcfcf");
        assert_eq!(palette.shadow_filter, "brightness(0.07)");
        assert_eq!(palette.shadow_height, "3em");
    }

    #[test]
    fn test_from_yaml_partial_override() {
        let palette = Palette::from_yaml(
            r##"
title_fg: "#ffffff"
page_bg: "#000"
"##,
        )
        .unwrap();

        assert_eq!(palette.title_fg, Rgb::new(255, 255, 255));
        assert_eq!(palette.page_bg, Rgb::new(0, 0, 0));
        // Untouched keys keep their defaults.
        assert_eq!(palette.surface_bg, Palette::default().surface_bg);
        assert_eq!(palette.shadow_filter, "brightness(0.07)");
    }

    #[test]
    fn test_from_yaml_rejects_bad_color() {
        let err = Palette::from_yaml("title_fg: \"#notacolor\"").unwrap_err();
        assert!(matches!(err, ThemeError::Palette(_)));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_key() {
        assert!(Palette::from_yaml("titlefg: \"#ffffff\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dusk.yaml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"surface_bg: \"#222222\"\n").unwrap();

        let palette = Palette::from_file(&path).unwrap();
        assert_eq!(palette.surface_bg, Rgb::new(0x22, 0x22, 0x22));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Palette::from_file("/nonexistent/dusk.yaml").unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }
}
