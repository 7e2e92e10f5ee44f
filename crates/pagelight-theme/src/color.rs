//! Hex color values.
//!
//! The palette works in RGB hex notation, the format the page's inline
//! styles use. Both shorthand (`#fff`) and full (`#cfcfcf`) forms parse;
//! display is always the canonical lowercase 6-digit form.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ThemeError;

/// An RGB color parsed from `#rgb` or `#rrggbb` notation.
///
/// # Example
///
/// ```rust
/// use pagelight_theme::Rgb;
///
/// let gray: Rgb = "#cfcfcf".parse().unwrap();
/// assert_eq!(gray, Rgb::new(0xcf, 0xcf, 0xcf));
/// assert_eq!(gray.to_string(), "#cfcfcf");
///
/// // Shorthand expands each nibble
/// let white: Rgb = "#fff".parse().unwrap();
/// assert_eq!(white, Rgb::new(255, 255, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    /// Creates a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color code, with or without the `#` prefix.
    pub fn parse(s: &str) -> Result<Self, ThemeError> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        let component = |digits: &str| {
            u8::from_str_radix(digits, 16)
                .map_err(|_| ThemeError::InvalidColor(s.to_string()))
        };

        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => Ok(Self::new(
                component(&hex[0..1])? * 17,
                component(&hex[1..2])? * 17,
                component(&hex[2..3])? * 17,
            )),
            6 => Ok(Self::new(
                component(&hex[0..2])?,
                component(&hex[2..4])?,
                component(&hex[4..6])?,
            )),
            _ => Err(ThemeError::InvalidColor(s.to_string())),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ThemeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        assert_eq!(Rgb::parse("#111111").unwrap(), Rgb::new(0x11, 0x11, 0x11));
        assert_eq!(Rgb::parse("#cfcfcf").unwrap(), Rgb::new(0xcf, 0xcf, 0xcf));
    }

    #[test]
    fn test_parse_three_digit_expands() {
        assert_eq!(Rgb::parse("#f00").unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::parse("#abc").unwrap(), Rgb::new(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_parse_without_prefix() {
        assert_eq!(Rgb::parse("cfcfcf").unwrap(), Rgb::new(0xcf, 0xcf, 0xcf));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Rgb::parse("#cfcf"),
            Err(ThemeError::InvalidColor(_))
        ));
        assert!(matches!(
            Rgb::parse("#gggggg"),
            Err(ThemeError::InvalidColor(_))
        ));
        assert!(Rgb::parse("").is_err());
    }

    #[test]
    fn test_display_is_canonical_lowercase() {
        assert_eq!(Rgb::new(0xCF, 0xCF, 0xCF).to_string(), "#cfcfcf");
        assert_eq!(Rgb::parse("#FFF").unwrap().to_string(), "#ffffff");
    }
}
