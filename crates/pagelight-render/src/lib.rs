//! # Pagelight Render - Template-to-HTML Rendering
//!
//! `pagelight-render` turns template source files into HTML strings. The
//! actual template language is provided by an external collaborator
//! (MiniJinja); this crate wraps it behind a small engine abstraction,
//! adds the whitespace configuration the pagelight CLI needs, and maps the
//! collaborator's errors onto a stable error type.
//!
//! ## Core Concepts
//!
//! - [`TemplateEngine`]: trait abstracting the template backend
//! - [`MiniJinjaEngine`]: the default backend wrapping `minijinja`
//! - [`RenderOptions`]: the single recognized configuration knob (`pretty`)
//! - [`RenderError`]: stable error type for all rendering operations
//! - [`compile_file`] / [`compile_str`]: one-call compilation entry points
//!
//! ## Quick Start
//!
//! ```rust
//! use pagelight_render::{compile_str, RenderOptions};
//!
//! let html = compile_str(
//!     "<!DOCTYPE html>\n<html>\n  <body>\n    <p>Hello</p>\n  </body>\n</html>\n",
//!     &RenderOptions::default(),
//! ).unwrap();
//!
//! assert!(html.contains("<!DOCTYPE html>"));
//! assert!(html.contains("    <p>Hello</p>"));
//! ```
//!
//! Templates with variables take their data through the `_with` variants:
//!
//! ```rust
//! use pagelight_render::{compile_str_with, RenderOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Page { title: String }
//!
//! let html = compile_str_with(
//!     "<h1>{{ title }}</h1>",
//!     &Page { title: "Projects".into() },
//!     &RenderOptions::default(),
//! ).unwrap();
//! assert_eq!(html, "<h1>Projects</h1>");
//! ```

mod compile;
mod engine;
mod error;
mod options;

pub use compile::{compile_file, compile_file_with, compile_str, compile_str_with};
pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use error::RenderError;
pub use options::RenderOptions;
