//! The day/night styling pass.
//!
//! Darkness is defined as the local hours from 20:00 to 06:00. Inside that
//! window the styler rewrites the inline styles of the page's title
//! elements, its principal surface, and the body; outside it the document
//! is left untouched.
//!
//! Decorative styling (the shadow element's darkening filter and forced
//! height) is off by default and opted into with [`Styler::with_decor`].

use crate::clock::current_hour;
use crate::error::ThemeError;
use crate::page::Document;
use crate::palette::Palette;

/// Class carried by every title element.
pub const TITLE_CLASS: &str = "project-title";

/// Id of the principal background surface.
pub const SURFACE_ID: &str = "name-box-opague";

/// Id of the decorative shadow element.
pub const SHADOW_ID: &str = "name-box-shadow";

/// Returns true if the given local hour falls in the dark window.
///
/// The window is 20:00 (inclusive) through 06:00 (exclusive), boundary
/// exact:
///
/// ```rust
/// use pagelight_theme::is_dark_hour;
///
/// assert!(is_dark_hour(0));
/// assert!(is_dark_hour(5));
/// assert!(!is_dark_hour(6));
/// assert!(!is_dark_hour(19));
/// assert!(is_dark_hour(20));
/// assert!(is_dark_hour(23));
/// ```
pub fn is_dark_hour(hour: u32) -> bool {
    hour < 6 || hour >= 20
}

/// What a styling pass did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The dark scheme was applied.
    Darkened,
    /// The hour was outside the dark window; nothing was touched.
    LeftLight,
}

/// One-shot day/night styler over an injected [`Document`].
///
/// # Example
///
/// ```rust
/// use pagelight_theme::{Document, Element, Outcome, Styler, SURFACE_ID, TITLE_CLASS};
///
/// let mut doc = Document::new()
///     .with_element(Element::new().with_class(TITLE_CLASS))
///     .with_element(Element::new().with_id(SURFACE_ID));
///
/// let styler = Styler::new();
/// assert_eq!(styler.apply_at_hour(12, &mut doc).unwrap(), Outcome::LeftLight);
/// assert_eq!(styler.apply_at_hour(22, &mut doc).unwrap(), Outcome::Darkened);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Styler {
    palette: Palette,
    decor: bool,
}

impl Styler {
    /// Creates a styler with the default palette and no decorative styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a styler with the given palette.
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            decor: false,
        }
    }

    /// Enables or disables decorative styling, returning `self` for
    /// chaining.
    pub fn with_decor(mut self, decor: bool) -> Self {
        self.decor = decor;
        self
    }

    /// Returns the palette in use.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Applies the dark scheme if the current local hour is dark.
    ///
    /// Reads the hour from the ambient clock (see
    /// [`set_hour_source`](crate::set_hour_source)); otherwise identical to
    /// [`apply_at_hour`](Self::apply_at_hour).
    pub fn apply(&self, doc: &mut Document) -> Result<Outcome, ThemeError> {
        self.apply_at_hour(current_hour(), doc)
    }

    /// Applies the dark scheme if the given hour (0-23) is dark.
    ///
    /// When the hour is dark:
    /// - every element with [`TITLE_CLASS`] gets `color: <title_fg>`;
    /// - the [`SURFACE_ID`] element gets `background: <surface_bg>`;
    /// - with decorative styling enabled, the [`SHADOW_ID`] element gets
    ///   the palette's `filter` and forced `height`;
    /// - the body gets the `background`/`color` pair.
    ///
    /// When the hour is not dark, no style property anywhere is modified.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingElement`] if the surface element — or,
    /// with decorative styling, the shadow element — is absent. Title
    /// elements are matched by class and may be absent or plural.
    pub fn apply_at_hour(&self, hour: u32, doc: &mut Document) -> Result<Outcome, ThemeError> {
        if !is_dark_hour(hour) {
            log::debug!("hour {} is outside the dark window, leaving page light", hour);
            return Ok(Outcome::LeftLight);
        }

        for title in doc.by_class_mut(TITLE_CLASS) {
            title
                .style_mut()
                .set("color", self.palette.title_fg.to_string());
        }

        let surface = doc
            .by_id_mut(SURFACE_ID)
            .ok_or_else(|| ThemeError::MissingElement(SURFACE_ID.to_string()))?;
        surface
            .style_mut()
            .set("background", self.palette.surface_bg.to_string());

        if self.decor {
            let shadow = doc
                .by_id_mut(SHADOW_ID)
                .ok_or_else(|| ThemeError::MissingElement(SHADOW_ID.to_string()))?;
            shadow
                .style_mut()
                .set("filter", self.palette.shadow_filter.clone());
            // needed for some reason
            shadow
                .style_mut()
                .set("height", self.palette.shadow_height.clone());
        }

        doc.body_style_mut()
            .set("background", self.palette.page_bg.to_string());
        doc.body_style_mut()
            .set("color", self.palette.page_fg.to_string());

        log::debug!("hour {} is dark, applied dark scheme", hour);
        Ok(Outcome::Darkened)
    }
}
