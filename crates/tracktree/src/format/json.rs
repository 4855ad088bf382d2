//! JSON formatter

use std::collections::HashSet;
use std::sync::Arc;

use super::{write_custom, ElementFormatter, FormatterConfig, RenderContext};
use crate::element::{MapKey, Payload, TrackedElement};
use crate::error::{Result, TrackerError};
use crate::registry::FieldResolver;

/// Renders elements as JSON.
///
/// Vectors become arrays and both map kinds become objects. Field-keyed
/// entries use the field's registered name when a resolver is attached and
/// knows the id; otherwise the key is the number as a string.
#[derive(Clone, Default)]
pub struct JsonFormatter {
    config: FormatterConfig,
    names: Option<Arc<dyn FieldResolver + Send + Sync>>,
}

impl JsonFormatter {
    /// Create a formatter with the default configuration and numeric keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with a custom configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self {
            config,
            names: None,
        }
    }

    /// Use `resolver` to name field-keyed entries (builder pattern)
    pub fn with_names(mut self, resolver: Arc<dyn FieldResolver + Send + Sync>) -> Self {
        self.names = Some(resolver);
        self
    }

    fn key_text(&self, key: MapKey) -> String {
        match key {
            MapKey::Field(id) => self
                .names
                .as_ref()
                .and_then(|r| r.field_name(id))
                .unwrap_or_else(|| id.to_string()),
            MapKey::Int(k) => k.to_string(),
        }
    }
}

impl std::fmt::Debug for JsonFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFormatter")
            .field("config", &self.config)
            .field("names", &self.names.is_some())
            .finish()
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

impl ElementFormatter for JsonFormatter {
    fn config(&self) -> &FormatterConfig {
        &self.config
    }

    fn render_scalar(&self, element: &TrackedElement, ctx: &mut RenderContext<'_>) -> Result<()> {
        let text = match &*element.payload() {
            Payload::String(s) => to_json(s)?,
            Payload::Int8(n) => n.to_string(),
            Payload::UInt8(n) => n.to_string(),
            Payload::Int16(n) => n.to_string(),
            Payload::UInt16(n) => n.to_string(),
            Payload::Int32(n) => n.to_string(),
            Payload::UInt32(n) => n.to_string(),
            Payload::Int64(n) => n.to_string(),
            Payload::UInt64(n) => n.to_string(),
            // serde_json writes non-finite floats as null
            Payload::Float(n) => to_json(n)?,
            Payload::Double(n) => to_json(n)?,
            Payload::Mac(m) => to_json(&m.to_string())?,
            Payload::Uuid(u) => to_json(&u.hyphenated().to_string())?,
            other => return Err(TrackerError::Unrenderable { tag: other.tag() }),
        };
        ctx.push_str(&text);
        Ok(())
    }

    fn render_sequence(
        &self,
        element: &TrackedElement,
        ctx: &mut RenderContext<'_>,
    ) -> Result<()> {
        let items = element.vector_view()?;
        ctx.push_str("[");
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                ctx.push_str(",");
            }
            self.render(item, ctx)?;
        }
        ctx.push_str("]");
        Ok(())
    }

    fn render_map(&self, element: &TrackedElement, ctx: &mut RenderContext<'_>) -> Result<()> {
        ctx.push_str("{");
        let mut seen = HashSet::new();
        element.try_for_each_entry(|key, child| {
            // a resolved name may spell another entry's numeric id
            let text = self.key_text(key);
            if !seen.insert(text.clone()) {
                return Err(TrackerError::DuplicateKey { key: text });
            }
            if seen.len() > 1 {
                ctx.push_str(",");
            }
            ctx.push_str(&to_json(&text)?);
            ctx.push_str(":");
            self.render(child, ctx)
        })?;
        ctx.push_str("}");
        Ok(())
    }

    /// Custom values render as a JSON string of their own text.
    fn render_custom(&self, element: &TrackedElement, ctx: &mut RenderContext<'_>) -> Result<()> {
        let mut text = String::new();
        write_custom(element, ctx.config(), &mut text)?;
        ctx.push_str(&to_json(&text)?);
        Ok(())
    }
}
