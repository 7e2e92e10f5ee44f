//! # Pagelight - Static Page Tooling
//!
//! Pagelight bundles two small, independent tools for building and
//! presenting a static page:
//!
//! - the `pagelight` CLI renders a template file to HTML and writes it to
//!   disk (see [`cli`]);
//! - the day/night styler switches a loaded page to a dark color scheme
//!   during the local night hours (re-exported from `pagelight-theme`).
//!
//! The rendering layer lives in `pagelight-render` and the styling layer in
//! `pagelight-theme`; this crate re-exports both public surfaces.
//!
//! ## Rendering
//!
//! ```rust
//! use pagelight::{compile_str, RenderOptions};
//!
//! let html = compile_str("<p>Hello</p>\n", &RenderOptions::default()).unwrap();
//! assert_eq!(html, "<p>Hello</p>\n");
//! ```
//!
//! ## Day/Night Styling
//!
//! ```rust
//! use pagelight::{Document, Element, Outcome, Styler, SURFACE_ID, TITLE_CLASS};
//!
//! let mut doc = Document::new()
//!     .with_element(Element::new().with_class(TITLE_CLASS))
//!     .with_element(Element::new().with_id(SURFACE_ID));
//!
//! let outcome = Styler::new().apply_at_hour(23, &mut doc).unwrap();
//! assert_eq!(outcome, Outcome::Darkened);
//! ```

pub mod cli;

pub use pagelight_render::{
    compile_file, compile_file_with, compile_str, compile_str_with, MiniJinjaEngine, RenderError,
    RenderOptions, TemplateEngine,
};
pub use pagelight_theme::{
    current_hour, is_dark_hour, set_hour_source, Document, Element, HourSource, InlineStyle,
    Outcome, Palette, Rgb, Styler, ThemeError, SHADOW_ID, SURFACE_ID, TITLE_CLASS,
};
