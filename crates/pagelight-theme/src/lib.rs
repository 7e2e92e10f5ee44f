//! # Pagelight Theme - Day/Night Page Styling
//!
//! `pagelight-theme` switches a page to a dark color scheme when it is
//! (probably) dark outside. Darkness is defined as the local hours from
//! 20:00 to 06:00.
//!
//! The styling pass is a one-shot mutation of an injected [`Document`]: the
//! hosting environment calls it exactly once after the page structure is
//! available. There is no scheduling and no re-evaluation on hour
//! boundaries; if the hour changes while the page stays open, nothing
//! updates until the next invocation.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagelight_theme::{Document, Element, Outcome, Styler, TITLE_CLASS, SURFACE_ID};
//!
//! let mut doc = Document::new()
//!     .with_element(Element::new().with_class(TITLE_CLASS))
//!     .with_element(Element::new().with_id(SURFACE_ID));
//!
//! let outcome = Styler::new().apply_at_hour(22, &mut doc).unwrap();
//! assert_eq!(outcome, Outcome::Darkened);
//! assert_eq!(doc.body_style().get("background"), Some("#111111"));
//! ```
//!
//! The ambient entry point [`Styler::apply`] reads the hour from the
//! process-wide clock, which [`set_hour_source`] can override for tests.

mod clock;
mod color;
mod error;
mod page;
mod palette;
mod styler;

pub use clock::{current_hour, set_hour_source, HourSource};
pub use color::Rgb;
pub use error::ThemeError;
pub use page::{Document, Element, InlineStyle};
pub use palette::Palette;
pub use styler::{is_dark_hour, Outcome, Styler, SHADOW_ID, SURFACE_ID, TITLE_CLASS};
