//! Field registry: stable names for field ids
//!
//! The element tree only stores numeric field ids. Code that needs names
//! (a JSON encoder, a request handler looking up a field by path) is handed
//! a [`FieldResolver`]; [`FieldRegistry`] is the in-process implementation.

use std::sync::atomic::{AtomicI32, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::element::{FieldId, SharedElement, TrackedElement, TrackerType};
use crate::error::{Result, TrackerError};

/// Lookup between field names and ids.
pub trait FieldResolver {
    /// Id registered for `name`
    fn field_id(&self, name: &str) -> Option<FieldId>;

    /// Name registered for `id`
    fn field_name(&self, id: FieldId) -> Option<String>;
}

/// What the registry knows about a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The minted id
    pub id: FieldId,
    /// Registered name
    pub name: String,
    /// Type every element of this field has
    pub tag: TrackerType,
    /// Free-form description
    pub description: String,
}

/// Thread-safe registry minting field ids.
///
/// Ids start at 0 and are handed out in registration order. Registering a
/// name again with the same type returns the existing id.
#[derive(Debug, Default)]
pub struct FieldRegistry {
    by_name: DashMap<String, FieldId>,
    fields: DashMap<FieldId, FieldDescriptor>,
    next_id: AtomicI32,
}

impl FieldRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with its type, returning its id.
    pub fn register_field(
        &self,
        name: &str,
        tag: TrackerType,
        description: &str,
    ) -> Result<FieldId> {
        match self.by_name.entry(name.to_string()) {
            Entry::Occupied(entry) => {
                let id = *entry.get();
                match self.fields.get(&id).map(|d| d.tag) {
                    Some(existing) if existing != tag => Err(TrackerError::FieldConflict {
                        name: name.to_string(),
                        existing,
                        requested: tag,
                    }),
                    _ => Ok(id),
                }
            }
            Entry::Vacant(entry) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                self.fields.insert(
                    id,
                    FieldDescriptor {
                        id,
                        name: name.to_string(),
                        tag,
                        description: description.to_string(),
                    },
                );
                entry.insert(id);
                tracing::debug!(id, name, %tag, "registered field");
                Ok(id)
            }
        }
    }

    /// Everything known about `id`.
    pub fn describe(&self, id: FieldId) -> Option<FieldDescriptor> {
        self.fields.get(&id).map(|d| d.value().clone())
    }

    /// A fresh element of the field's type, carrying its id.
    pub fn new_element(&self, id: FieldId) -> Option<SharedElement> {
        self.fields
            .get(&id)
            .map(|d| TrackedElement::with_id(d.tag, id))
    }

    /// Register a field and create an element for it in one step.
    pub fn register_and_create(
        &self,
        name: &str,
        tag: TrackerType,
        description: &str,
    ) -> Result<SharedElement> {
        let id = self.register_field(name, tag, description)?;
        Ok(TrackedElement::with_id(tag, id))
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldResolver for FieldRegistry {
    fn field_id(&self, name: &str) -> Option<FieldId> {
        self.by_name.get(name).map(|id| *id)
    }

    fn field_name(&self, id: FieldId) -> Option<String> {
        self.fields.get(&id).map(|d| d.name.clone())
    }
}
