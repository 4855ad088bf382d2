//! Tracked elements: self-describing, shared tree nodes
//!
//! A [`TrackedElement`] holds exactly one [`Payload`] whose variant is its
//! [`TrackerType`], plus an optional field id. Elements are always handled
//! through [`SharedElement`], a reference-counted owning handle; containers
//! own their children through the same handle, so one child may sit in more
//! than one container.
//!
//! # Threading
//!
//! Elements use `Rc` and `RefCell` and are therefore neither `Send` nor
//! `Sync`: a tree lives on one thread. Code that needs to share telemetry
//! across threads renders it (see [`crate::format`]) or rebuilds it on the
//! owning thread behind its own lock.
//!
//! # Cycles
//!
//! Nothing stops a container from owning an ancestor of itself. Such a cycle
//! is never freed. Back-references must use [`WeakElement`].

mod access;
mod arith;
mod compare;
mod container;
mod display;
mod payload;
mod shared;
mod tag;

pub use access::TrackedScalar;
pub use arith::{Addend, Bits, Number};
pub use compare::{ComparableScalar, OrderedScalar};
pub use container::MapKey;
pub use payload::{CustomValue, ElementIntMap, ElementMap, ElementVec, FieldId, IntKey, Payload};
pub use shared::{Released, SharedElement, WeakElement};
pub use tag::TrackerType;

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::error::{Result, TrackerError};

/// A single node of the tracked tree.
pub struct TrackedElement {
    /// Field id assigned by a registry, if any
    id: Cell<Option<FieldId>>,

    /// The active value
    payload: RefCell<Payload>,
}

impl TrackedElement {
    /// Create an element of the given type holding its zero value.
    pub fn new(tag: TrackerType) -> SharedElement {
        Self::from_parts(None, Payload::empty(tag))
    }

    /// Create an element of the given type with a field id.
    pub fn with_id(tag: TrackerType, id: FieldId) -> SharedElement {
        Self::from_parts(Some(id), Payload::empty(tag))
    }

    /// Create a scalar element already holding `value`.
    pub fn scalar<T: TrackedScalar>(value: T) -> SharedElement {
        Self::from_parts(None, value.into_payload())
    }

    /// Create a custom element holding an extension value.
    pub fn custom(value: Box<dyn CustomValue>) -> SharedElement {
        Self::from_parts(None, Payload::Custom(Some(value)))
    }

    pub(crate) fn from_parts(id: Option<FieldId>, payload: Payload) -> SharedElement {
        SharedElement::from_rc(Rc::new(TrackedElement {
            id: Cell::new(id),
            payload: RefCell::new(payload),
        }))
    }

    /// The field id, if one has been assigned.
    pub fn id(&self) -> Option<FieldId> {
        self.id.get()
    }

    /// Assign the field id.
    pub fn set_id(&self, id: FieldId) {
        self.id.set(Some(id));
    }

    /// Remove the field id.
    pub fn clear_id(&self) {
        self.id.set(None);
    }

    /// The element's current type.
    pub fn tag(&self) -> TrackerType {
        self.payload.borrow().tag()
    }

    /// Change the element's type, discarding the old value.
    ///
    /// The new payload is the zero value of `tag`; any children held by a
    /// container payload are released.
    pub fn set_type(&self, tag: TrackerType) -> Result<()> {
        let old = {
            let mut payload = self.payload_mut()?;
            std::mem::replace(&mut *payload, Payload::empty(tag))
        };
        drop(old);
        Ok(())
    }

    /// Read-only view of the payload.
    ///
    /// Mutating calls on this element fail with [`TrackerError::Borrowed`]
    /// while the view is held.
    pub fn payload(&self) -> Ref<'_, Payload> {
        self.payload.borrow()
    }

    pub(crate) fn payload_mut(&self) -> Result<RefMut<'_, Payload>> {
        self.payload
            .try_borrow_mut()
            .map_err(|_| TrackerError::Borrowed)
    }

    /// A fresh element of the same type and id, holding the zero value.
    ///
    /// Custom payloads are copied through [`CustomValue::clone_custom`].
    pub fn clone_empty(&self) -> SharedElement {
        let fresh = match &*self.payload.borrow() {
            Payload::Custom(Some(value)) => Payload::Custom(Some(value.clone_custom())),
            other => Payload::empty(other.tag()),
        };
        Self::from_parts(self.id(), fresh)
    }

    /// Like [`clone_empty`](Self::clone_empty), with a different field id.
    pub fn clone_with_id(&self, id: FieldId) -> SharedElement {
        let dupl = self.clone_empty();
        dupl.set_id(id);
        dupl
    }
}

/// Move every child owned by a container payload into `out`.
fn take_children(payload: &mut Payload, out: &mut Vec<SharedElement>) {
    match payload {
        Payload::Vector(items) => out.append(items),
        Payload::Map(map) => out.extend(std::mem::take(map).into_values()),
        Payload::IntMap(map) => out.extend(std::mem::take(map).into_values()),
        _ => {}
    }
}

impl Drop for TrackedElement {
    fn drop(&mut self) {
        tracing::trace!(
            id = ?self.id.get(),
            tag = %self.payload.get_mut().tag(),
            "element released by last owner"
        );

        // Tear the subtree down with a work list: children this element
        // held last are emptied before they drop, so nested drops stay
        // one level deep however deep the tree is.
        let mut pending = Vec::new();
        take_children(self.payload.get_mut(), &mut pending);
        while let Some(child) = pending.pop() {
            if let Some(mut last) = child.into_unique() {
                take_children(last.payload.get_mut(), &mut pending);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_zero_value_and_no_id() {
        let e = TrackedElement::new(TrackerType::UInt32);
        assert_eq!(e.tag(), TrackerType::UInt32);
        assert_eq!(e.id(), None);
        assert_eq!(e.get_uint32().unwrap(), 0);
    }

    #[test]
    fn test_id_roundtrip() {
        let e = TrackedElement::with_id(TrackerType::String, 12);
        assert_eq!(e.id(), Some(12));
        e.set_id(40);
        assert_eq!(e.id(), Some(40));
        e.clear_id();
        assert_eq!(e.id(), None);
    }

    #[test]
    fn test_set_type_reinitializes_payload() {
        let e = TrackedElement::scalar(99u8);
        e.set_type(TrackerType::String).unwrap();
        assert_eq!(e.tag(), TrackerType::String);
        assert_eq!(e.get_string().unwrap(), "");
        assert!(e.get_uint8().is_err());
    }

    #[test]
    fn test_set_type_releases_children() {
        let parent = TrackedElement::new(TrackerType::Vector);
        let child = TrackedElement::scalar(1i32);
        parent.vector_push(child.clone()).unwrap();
        assert_eq!(child.links(), 2);

        parent.set_type(TrackerType::Int32).unwrap();
        assert_eq!(child.links(), 1);
    }

    #[test]
    fn test_set_type_while_viewed_is_refused() {
        let e = TrackedElement::new(TrackerType::Map);
        let view = e.payload();
        assert!(matches!(
            e.set_type(TrackerType::Int8),
            Err(TrackerError::Borrowed)
        ));
        drop(view);
        assert!(e.set_type(TrackerType::Int8).is_ok());
    }

    #[test]
    fn test_deep_chain_drops_without_recursion() {
        let mut root = TrackedElement::new(TrackerType::Vector);
        let leaf = root.downgrade();
        for _ in 0..100_000 {
            let parent = TrackedElement::new(TrackerType::Map);
            parent.map_insert(0, root).unwrap();
            root = parent;
        }
        assert_eq!(root.release(), Released::Destroyed);
        assert!(leaf.is_dangling());
    }

    #[test]
    fn test_drop_spares_children_with_other_owners() {
        let parent = TrackedElement::new(TrackerType::Vector);
        let kept = TrackedElement::new(TrackerType::IntMap);
        let grandchild = TrackedElement::scalar(5u8);
        let weak_grandchild = grandchild.downgrade();
        kept.intmap_insert(1, grandchild).unwrap();
        parent.vector_push(kept.clone()).unwrap();

        drop(parent);
        assert_eq!(kept.links(), 1);
        assert_eq!(kept.size().unwrap(), 1);
        assert!(!weak_grandchild.is_dangling());
    }

    #[test]
    fn test_clone_empty_keeps_type_and_id() {
        let e = TrackedElement::with_id(TrackerType::Double, 3);
        e.set_double(2.5).unwrap();

        let dupl = e.clone_empty();
        assert_eq!(dupl.tag(), TrackerType::Double);
        assert_eq!(dupl.id(), Some(3));
        assert_eq!(dupl.get_double().unwrap(), 0.0);
        assert!(!dupl.ptr_eq(&e));

        let renamed = e.clone_with_id(8);
        assert_eq!(renamed.id(), Some(8));
        assert_eq!(e.id(), Some(3));
    }
}
