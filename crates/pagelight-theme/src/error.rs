//! Error types for the theming pass.

use thiserror::Error;

/// Error type for styling and palette operations.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A page element the styler requires is missing from the document.
    #[error("element not found: #{0}")]
    MissingElement(String),

    /// A color value could not be parsed as hex notation.
    #[error("invalid color: {0:?} (expected #rgb or #rrggbb)")]
    InvalidColor(String),

    /// A palette definition could not be parsed.
    #[error("invalid palette: {0}")]
    Palette(String),

    /// I/O error reading a palette file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_names_id() {
        let err = ThemeError::MissingElement("name-box-opague".into());
        assert_eq!(err.to_string(), "element not found: #name-box-opague");
    }

    #[test]
    fn test_invalid_color_message() {
        let err = ThemeError::InvalidColor("#zz".into());
        assert!(err.to_string().contains("#zz"));
    }
}
