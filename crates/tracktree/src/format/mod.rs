//! Formatters: turning an element tree into text
//!
//! [`ElementFormatter`] owns the traversal. Its `render` entry point
//! dispatches on the element's type to `render_scalar`, `render_sequence`,
//! `render_map` or `render_custom`; encoders implement the per-kind hooks
//! and inherit the dispatch, depth limiting, and all-or-nothing output.

mod basic;
mod context;
mod json;

pub use basic::BasicFormatter;
pub use context::{FormatterConfig, RenderContext, DEFAULT_MAX_DEPTH};
pub use json::JsonFormatter;

use std::fmt;
use std::io;

use crate::element::{Payload, TrackedElement, TrackerType};
use crate::error::{Result, TrackerError};

/// Let a custom element's value write itself into `out`.
///
/// Fails unless `config` allows custom rendering and the element holds a
/// value. Encoders that need to escape the text render into a scratch
/// buffer first.
pub(crate) fn write_custom(
    element: &TrackedElement,
    config: &FormatterConfig,
    out: &mut dyn fmt::Write,
) -> Result<()> {
    let unrenderable = TrackerError::Unrenderable {
        tag: TrackerType::Custom,
    };
    if !config.render_custom {
        return Err(unrenderable);
    }
    match &*element.payload() {
        Payload::Custom(Some(value)) => value.render(out).map_err(|_| unrenderable),
        _ => Err(unrenderable),
    }
}

/// A recursive encoder for element trees.
pub trait ElementFormatter {
    /// Settings for this formatter
    fn config(&self) -> &FormatterConfig;

    /// Render any element, dispatching on its type.
    ///
    /// Containers count one nesting level against
    /// [`FormatterConfig::max_depth`].
    fn render(&self, element: &TrackedElement, ctx: &mut RenderContext<'_>) -> Result<()> {
        match element.tag() {
            TrackerType::Vector => ctx.nested(|ctx| self.render_sequence(element, ctx)),
            TrackerType::Map | TrackerType::IntMap => {
                ctx.nested(|ctx| self.render_map(element, ctx))
            }
            TrackerType::Custom => self.render_custom(element, ctx),
            _ => self.render_scalar(element, ctx),
        }
    }

    /// Render a string, number, MAC address or UUID.
    fn render_scalar(&self, element: &TrackedElement, ctx: &mut RenderContext<'_>) -> Result<()>;

    /// Render a vector, calling [`render`](Self::render) for each child.
    fn render_sequence(&self, element: &TrackedElement, ctx: &mut RenderContext<'_>)
        -> Result<()>;

    /// Render either map kind, in ascending key order.
    fn render_map(&self, element: &TrackedElement, ctx: &mut RenderContext<'_>) -> Result<()>;

    /// Render a custom element.
    ///
    /// Fails unless [`FormatterConfig::render_custom`] is set and the
    /// element holds a value, in which case the value renders itself.
    fn render_custom(&self, element: &TrackedElement, ctx: &mut RenderContext<'_>) -> Result<()> {
        let mut text = String::new();
        write_custom(element, ctx.config(), &mut text)?;
        ctx.push_str(&text);
        Ok(())
    }

    /// Render a whole tree to a string.
    ///
    /// Any failure inside the tree fails the whole render.
    fn render_to_string(&self, element: &TrackedElement) -> Result<String> {
        let mut ctx = RenderContext::new(self.config());
        match self.render(element, &mut ctx) {
            Ok(()) => Ok(ctx.into_output()),
            Err(e) => {
                tracing::warn!(error = %e, tag = %element.tag(), "render aborted");
                Err(e)
            }
        }
    }

    /// Render a whole tree into `stream`.
    ///
    /// Nothing is written unless the entire tree renders.
    fn render_to(&self, element: &TrackedElement, stream: &mut dyn io::Write) -> Result<()> {
        let text = self.render_to_string(element)?;
        stream.write_all(text.as_bytes())?;
        Ok(())
    }
}
