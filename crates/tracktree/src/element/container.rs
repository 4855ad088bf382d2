//! Container operations: field-keyed maps, integer-keyed maps, vectors
//!
//! Inserting a child takes an owning reference to it; removing or
//! replacing one releases that reference. Read views borrow the element:
//! while a view is alive, mutating calls on the same element fail with
//! [`TrackerError::Borrowed`].

use std::cell::{Ref, RefMut};
use std::fmt;

use super::{
    ElementIntMap, ElementMap, ElementVec, FieldId, IntKey, Payload, SharedElement,
    TrackedElement,
};
use crate::error::{Result, TrackerError};

/// Key of a map entry, as seen by formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MapKey {
    /// Entry of a field-keyed map
    Field(FieldId),
    /// Entry of an integer-keyed map
    Int(IntKey),
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Field(id) => write!(f, "{}", id),
            MapKey::Int(k) => write!(f, "{}", k),
        }
    }
}

impl TrackedElement {
    // ═══════════════════════════════════════════════════════════════════
    // Field-keyed map
    // ═══════════════════════════════════════════════════════════════════

    fn field_map_mut(&self) -> Result<RefMut<'_, ElementMap>> {
        RefMut::filter_map(self.payload_mut()?, |p| match p {
            Payload::Map(m) => Some(m),
            _ => None,
        })
        .map_err(|p| TrackerError::mismatch(p.tag(), "map"))
    }

    /// Read view of a map's children, in ascending field id order.
    ///
    /// Each call to `iter()` on the view starts from the lowest id.
    pub fn map_view(&self) -> Result<Ref<'_, ElementMap>> {
        Ref::filter_map(self.payload(), |p| match p {
            Payload::Map(m) => Some(m),
            _ => None,
        })
        .map_err(|p| TrackerError::mismatch(p.tag(), "map"))
    }

    /// Insert `child` under `id`, replacing and releasing any previous entry.
    pub fn map_insert(&self, id: FieldId, child: SharedElement) -> Result<()> {
        let old = self.field_map_mut()?.insert(id, child);
        if let Some(old) = old {
            tracing::debug!(id, tag = %old.tag(), "replaced map entry");
        }
        Ok(())
    }

    /// Insert `child` keyed by its own field id.
    pub fn map_insert_element(&self, child: SharedElement) -> Result<()> {
        let id = child.id().ok_or(TrackerError::MissingFieldId)?;
        self.map_insert(id, child)
    }

    /// Remove and release the entry under `id`; absent ids are ignored.
    pub fn map_remove(&self, id: FieldId) -> Result<()> {
        let old = self.field_map_mut()?.remove(&id);
        drop(old);
        Ok(())
    }

    /// Remove every entry holding `child` itself.
    pub fn map_remove_element(&self, child: &SharedElement) -> Result<()> {
        let removed = {
            let mut map = self.field_map_mut()?;
            let keys: Vec<FieldId> = map
                .iter()
                .filter(|(_, v)| v.ptr_eq(child))
                .map(|(k, _)| *k)
                .collect();
            keys.into_iter()
                .filter_map(|k| map.remove(&k))
                .collect::<Vec<_>>()
        };
        drop(removed);
        Ok(())
    }

    /// The child under `id`, or `None` if there is no such entry.
    pub fn map_get(&self, id: FieldId) -> Result<Option<SharedElement>> {
        Ok(self.map_view()?.get(&id).cloned())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Integer-keyed map
    // ═══════════════════════════════════════════════════════════════════

    fn int_map_mut(&self) -> Result<RefMut<'_, ElementIntMap>> {
        RefMut::filter_map(self.payload_mut()?, |p| match p {
            Payload::IntMap(m) => Some(m),
            _ => None,
        })
        .map_err(|p| TrackerError::mismatch(p.tag(), "intmap"))
    }

    /// Read view of an integer map's children, in ascending key order.
    pub fn intmap_view(&self) -> Result<Ref<'_, ElementIntMap>> {
        Ref::filter_map(self.payload(), |p| match p {
            Payload::IntMap(m) => Some(m),
            _ => None,
        })
        .map_err(|p| TrackerError::mismatch(p.tag(), "intmap"))
    }

    /// Insert `child` under `key`, replacing and releasing any previous entry.
    pub fn intmap_insert(&self, key: IntKey, child: SharedElement) -> Result<()> {
        let old = self.int_map_mut()?.insert(key, child);
        if let Some(old) = old {
            tracing::debug!(key, tag = %old.tag(), "replaced intmap entry");
        }
        Ok(())
    }

    /// Remove and release the entry under `key`; absent keys are ignored.
    pub fn intmap_remove(&self, key: IntKey) -> Result<()> {
        let old = self.int_map_mut()?.remove(&key);
        drop(old);
        Ok(())
    }

    /// Remove every entry holding `child` itself.
    pub fn intmap_remove_element(&self, child: &SharedElement) -> Result<()> {
        let removed = {
            let mut map = self.int_map_mut()?;
            let keys: Vec<IntKey> = map
                .iter()
                .filter(|(_, v)| v.ptr_eq(child))
                .map(|(k, _)| *k)
                .collect();
            keys.into_iter()
                .filter_map(|k| map.remove(&k))
                .collect::<Vec<_>>()
        };
        drop(removed);
        Ok(())
    }

    /// The child under `key`, or `None` if there is no such entry.
    pub fn intmap_get(&self, key: IntKey) -> Result<Option<SharedElement>> {
        Ok(self.intmap_view()?.get(&key).cloned())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Vector
    // ═══════════════════════════════════════════════════════════════════

    fn vector_mut(&self) -> Result<RefMut<'_, ElementVec>> {
        RefMut::filter_map(self.payload_mut()?, |p| match p {
            Payload::Vector(v) => Some(v),
            _ => None,
        })
        .map_err(|p| TrackerError::mismatch(p.tag(), "vector"))
    }

    /// Read view of a vector's children.
    pub fn vector_view(&self) -> Result<Ref<'_, ElementVec>> {
        Ref::filter_map(self.payload(), |p| match p {
            Payload::Vector(v) => Some(v),
            _ => None,
        })
        .map_err(|p| TrackerError::mismatch(p.tag(), "vector"))
    }

    /// Append `child` at the end.
    pub fn vector_push(&self, child: SharedElement) -> Result<()> {
        self.vector_mut()?.push(child);
        Ok(())
    }

    /// Remove and release the child at `index`.
    pub fn vector_remove(&self, index: usize) -> Result<()> {
        let old = {
            let mut items = self.vector_mut()?;
            if index >= items.len() {
                return Err(TrackerError::OutOfRange {
                    index,
                    len: items.len(),
                });
            }
            items.remove(index)
        };
        drop(old);
        Ok(())
    }

    /// The child at `index`, or `None` past the end.
    pub fn vector_get(&self, index: usize) -> Result<Option<SharedElement>> {
        Ok(self.vector_view()?.get(index).cloned())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Shared
    // ═══════════════════════════════════════════════════════════════════

    /// Number of children of a container element.
    ///
    /// Scalars, strings included, have no size and fail with a type
    /// mismatch.
    pub fn size(&self) -> Result<usize> {
        match &*self.payload() {
            Payload::Vector(v) => Ok(v.len()),
            Payload::Map(m) => Ok(m.len()),
            Payload::IntMap(m) => Ok(m.len()),
            other => Err(TrackerError::mismatch(other.tag(), "container")),
        }
    }

    /// Visit the entries of either map kind in ascending key order,
    /// stopping at the first error.
    pub fn try_for_each_entry<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(MapKey, &SharedElement) -> Result<()>,
    {
        match &*self.payload() {
            Payload::Map(m) => m.iter().try_for_each(|(k, v)| f(MapKey::Field(*k), v)),
            Payload::IntMap(m) => m.iter().try_for_each(|(k, v)| f(MapKey::Int(*k), v)),
            other => Err(TrackerError::mismatch(other.tag(), "map")),
        }
    }
}
