//! One-call template compilation.
//!
//! These functions cover the CLI's whole job: read a template source file,
//! render it through the engine, hand back the HTML string. Variants taking
//! data exist for templates with variables; the plain forms render with an
//! empty context.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::engine::{MiniJinjaEngine, TemplateEngine};
use crate::error::RenderError;
use crate::options::RenderOptions;

/// Renders a template source string with an empty data context.
pub fn compile_str(source: &str, options: &RenderOptions) -> Result<String, RenderError> {
    compile_str_with(source, &serde_json::Map::new(), options)
}

/// Renders a template source string with the given data.
///
/// # Errors
///
/// Returns [`RenderError::TemplateError`] for malformed template source and
/// [`RenderError::SerializationError`] if the data cannot be serialized.
pub fn compile_str_with<T: Serialize>(
    source: &str,
    data: &T,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let engine = MiniJinjaEngine::with_options(options);
    let value = serde_json::to_value(data)?;
    engine.render_template(source, &value)
}

/// Reads a template file and renders it with an empty data context.
///
/// This is the operation behind `pagelight <src> <dst>`: one file read, one
/// render, with the resulting HTML returned for the caller to write out.
///
/// # Errors
///
/// Returns [`RenderError::IoError`] naming the source path if the file
/// cannot be read, and the engine's error for malformed template source.
pub fn compile_file<P: AsRef<Path>>(
    source: P,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    compile_file_with(source, &serde_json::Map::new(), options)
}

/// Reads a template file and renders it with the given data.
pub fn compile_file_with<P: AsRef<Path>, T: Serialize>(
    source: P,
    data: &T,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let path = source.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| {
        RenderError::IoError(io::Error::other(format!(
            "failed to read template {}: {}",
            path.display(),
            e
        )))
    })?;
    log::debug!("compiling template {} ({} bytes)", path.display(), raw.len());
    compile_str_with(&raw, data, options)
}
