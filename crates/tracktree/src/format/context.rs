//! Formatter configuration and per-render state

use std::fmt;

use crate::error::{Result, TrackerError};

/// Default limit on container nesting during a render.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings shared by every formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Deepest container nesting a render will follow
    pub max_depth: usize,

    /// Render custom elements through their own
    /// [`CustomValue::render`](crate::CustomValue::render) instead of failing
    pub render_custom: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            render_custom: false,
        }
    }
}

impl FormatterConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting limit (builder pattern)
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Allow custom elements to render themselves (builder pattern)
    pub fn with_render_custom(mut self, render_custom: bool) -> Self {
        self.render_custom = render_custom;
        self
    }
}

/// Output buffer and nesting state for one render.
///
/// Output accumulates here and only reaches the caller's stream once the
/// whole tree has rendered.
pub struct RenderContext<'c> {
    out: String,
    depth: usize,
    config: &'c FormatterConfig,
}

impl<'c> RenderContext<'c> {
    /// Start an empty render.
    pub fn new(config: &'c FormatterConfig) -> Self {
        Self {
            out: String::new(),
            depth: 0,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &FormatterConfig {
        self.config
    }

    /// Current container nesting.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Append text.
    pub fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Run `f` one container level deeper.
    pub fn nested<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if self.depth >= self.config.max_depth {
            return Err(TrackerError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Text rendered so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Finish and take the text.
    pub fn into_output(self) -> String {
        self.out
    }
}

impl fmt::Write for RenderContext<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.push_str(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    #[test]
    fn test_default_config() {
        let config = FormatterConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!config.render_custom);
    }

    #[test]
    fn test_builder() {
        let config = FormatterConfig::new()
            .with_max_depth(3)
            .with_render_custom(true);
        assert_eq!(config.max_depth, 3);
        assert!(config.render_custom);
    }

    #[test]
    fn test_nested_enforces_limit() {
        let config = FormatterConfig::new().with_max_depth(1);
        let mut ctx = RenderContext::new(&config);
        let r = ctx.nested(|ctx| {
            assert_eq!(ctx.depth(), 1);
            ctx.nested(|_| Ok(()))
        });
        assert!(matches!(r, Err(TrackerError::DepthExceeded { limit: 1 })));
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_write_macro_appends() {
        let config = FormatterConfig::default();
        let mut ctx = RenderContext::new(&config);
        write!(ctx, "[{},", 1).unwrap();
        ctx.push_str("x]");
        assert_eq!(ctx.into_output(), "[1,x]");
    }
}
