//! Rendering configuration.
//!
//! The renderer recognizes exactly one option: `pretty`, which controls
//! whitespace formatting of the output HTML. The configuration is fixed at
//! call time; there is no per-template override.

/// Whitespace configuration for a render call.
///
/// With `pretty` set (the default, and the CLI's fixed configuration), the
/// template's whitespace is preserved verbatim, including the trailing
/// newline, so indented template source produces indented HTML.
///
/// With `pretty` off, block-tag whitespace trimming is enabled — the newline
/// after a `{% ... %}` tag and the indentation before it are dropped,
/// producing compact output.
///
/// # Example
///
/// ```rust
/// use pagelight_render::RenderOptions;
///
/// let opts = RenderOptions::default();
/// assert!(opts.pretty);
///
/// let compact = RenderOptions::compact();
/// assert!(!compact.pretty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Preserve template whitespace in the output.
    pub pretty: bool,
}

impl RenderOptions {
    /// Compact output: block-tag trimming enabled.
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pretty() {
        assert_eq!(RenderOptions::default(), RenderOptions { pretty: true });
    }

    #[test]
    fn test_compact() {
        assert_eq!(RenderOptions::compact(), RenderOptions { pretty: false });
    }
}
