//! Plain-text formatter
//!
//! Output shape:
//!
//! ```text
//! vector[1,2,]
//! map{[1,hello],[2,42],}
//! intmap{[-3,x],}
//! ```

use std::fmt::Write;

use super::{ElementFormatter, FormatterConfig, RenderContext};
use crate::element::{Payload, TrackedElement, TrackerType};
use crate::error::{Result, TrackerError};

/// Renders elements as terse, unquoted text.
#[derive(Debug, Clone, Default)]
pub struct BasicFormatter {
    config: FormatterConfig,
}

impl BasicFormatter {
    /// Create a formatter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with a custom configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }
}

impl ElementFormatter for BasicFormatter {
    fn config(&self) -> &FormatterConfig {
        &self.config
    }

    fn render_scalar(&self, element: &TrackedElement, ctx: &mut RenderContext<'_>) -> Result<()> {
        let r = match &*element.payload() {
            Payload::String(s) => write!(ctx, "{}", s),
            Payload::Int8(n) => write!(ctx, "{}", n),
            Payload::UInt8(n) => write!(ctx, "{}", n),
            Payload::Int16(n) => write!(ctx, "{}", n),
            Payload::UInt16(n) => write!(ctx, "{}", n),
            Payload::Int32(n) => write!(ctx, "{}", n),
            Payload::UInt32(n) => write!(ctx, "{}", n),
            Payload::Int64(n) => write!(ctx, "{}", n),
            Payload::UInt64(n) => write!(ctx, "{}", n),
            Payload::Float(n) => write!(ctx, "{}", n),
            Payload::Double(n) => write!(ctx, "{}", n),
            Payload::Mac(m) => write!(ctx, "{}", m),
            Payload::Uuid(u) => write!(ctx, "{}", u),
            other => return Err(TrackerError::Unrenderable { tag: other.tag() }),
        };
        r.map_err(|_| TrackerError::Unrenderable { tag: element.tag() })
    }

    fn render_sequence(
        &self,
        element: &TrackedElement,
        ctx: &mut RenderContext<'_>,
    ) -> Result<()> {
        let items = element.vector_view()?;
        ctx.push_str("vector[");
        for item in items.iter() {
            self.render(item, ctx)?;
            ctx.push_str(",");
        }
        ctx.push_str("]");
        Ok(())
    }

    fn render_map(&self, element: &TrackedElement, ctx: &mut RenderContext<'_>) -> Result<()> {
        match element.tag() {
            TrackerType::IntMap => ctx.push_str("intmap{"),
            _ => ctx.push_str("map{"),
        }
        element.try_for_each_entry(|key, child| {
            ctx.push_str("[");
            ctx.push_str(&key.to_string());
            ctx.push_str(",");
            self.render(child, ctx)?;
            ctx.push_str("],");
            Ok(())
        })?;
        ctx.push_str("}");
        Ok(())
    }
}
