//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait which allows
//! pagelight-render to work with different template backends. The default
//! implementation is [`MiniJinjaEngine`], which provides full template
//! functionality.

use minijinja::{Environment, Value};

use crate::error::RenderError;
use crate::options::RenderOptions;

/// A template engine that can render templates with data.
///
/// This trait abstracts over the template rendering backend. The engine is
/// consumed as a black box: given template source and a data value, it
/// returns the rendered string or an error on malformed input. Template
/// syntax is the backend's concern and is not validated here.
pub trait TemplateEngine: Send + Sync {
    /// Renders a template string with the given data.
    ///
    /// This compiles and renders the template in one step. For repeated
    /// rendering of the same template, use [`add_template`](Self::add_template)
    /// and [`render_named`](Self::render_named).
    fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError>;

    /// Adds a named template to the engine.
    ///
    /// The template is compiled and cached for later use via
    /// [`render_named`](Self::render_named).
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Renders a previously registered template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine.
///
/// This is the default template engine, providing Jinja2-compatible syntax
/// with loops, conditionals, includes, and filters. Whitespace handling is
/// configured from [`RenderOptions`] at construction time.
///
/// # Example
///
/// ```rust
/// use pagelight_render::{MiniJinjaEngine, TemplateEngine};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Data { name: String }
///
/// let engine = MiniJinjaEngine::new();
/// let data = serde_json::to_value(&Data { name: "World".into() }).unwrap();
///
/// let output = engine.render_template("Hello, {{ name }}!", &data).unwrap();
/// assert_eq!(output, "Hello, World!");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new engine with the default (pretty) whitespace settings.
    pub fn new() -> Self {
        Self::with_options(&RenderOptions::default())
    }

    /// Creates a new engine configured from the given options.
    ///
    /// `pretty` keeps template whitespace intact (including the trailing
    /// newline); compact mode enables block-tag trimming.
    pub fn with_options(options: &RenderOptions) -> Self {
        let mut env = Environment::new();
        if options.pretty {
            env.set_keep_trailing_newline(true);
        } else {
            env.set_trim_blocks(true);
            env.set_lstrip_blocks(true);
        }
        Self { env }
    }

    /// Returns a reference to the underlying MiniJinja environment.
    ///
    /// This allows advanced users to register custom filters, functions,
    /// or configure the environment directly.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError> {
        let value = Value::from_serialize(data);
        Ok(self.env.render_str(template, value)?)
    }

    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        let value = Value::from_serialize(data);
        Ok(tmpl.render(value)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}
