//! Owning and non-owning element handles

use std::ops::Deref;
use std::rc::{Rc, Weak};

use super::TrackedElement;

/// An owning handle to a [`TrackedElement`].
///
/// Every handle is one owner. The element is destroyed, and its own
/// children released, when the last owning handle goes away. Cloning a
/// handle is the same as [`acquire`](Self::acquire).
#[derive(Clone)]
pub struct SharedElement(Rc<TrackedElement>);

/// Outcome of [`SharedElement::release`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Released {
    /// Other owners remain
    Alive {
        /// Owners left after this release
        links: usize,
    },

    /// This was the last owner; the element is gone
    Destroyed,
}

impl SharedElement {
    pub(crate) fn from_rc(rc: Rc<TrackedElement>) -> Self {
        SharedElement(rc)
    }

    /// Take another owning reference to the same element.
    pub fn acquire(&self) -> SharedElement {
        SharedElement(Rc::clone(&self.0))
    }

    /// Give up this owning reference.
    ///
    /// Consuming the handle means a release can never outnumber the
    /// acquires that preceded it.
    pub fn release(self) -> Released {
        match Rc::try_unwrap(self.0) {
            Ok(element) => {
                drop(element);
                Released::Destroyed
            }
            Err(rc) => {
                let links = Rc::strong_count(&rc) - 1;
                drop(rc);
                Released::Alive { links }
            }
        }
    }

    /// Unwrap the element if this is its last owning handle; otherwise
    /// just release the handle.
    pub(crate) fn into_unique(self) -> Option<TrackedElement> {
        Rc::try_unwrap(self.0).ok()
    }

    /// Number of owning handles currently alive, this one included.
    pub fn links(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// A non-owning handle that does not keep the element alive.
    pub fn downgrade(&self) -> WeakElement {
        WeakElement(Rc::downgrade(&self.0))
    }

    /// Whether both handles point at the same element.
    pub fn ptr_eq(&self, other: &SharedElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedElement {
    type Target = TrackedElement;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<TrackedElement> for SharedElement {
    fn as_ref(&self) -> &TrackedElement {
        &self.0
    }
}

/// A non-owning handle, for back-references from child to parent.
#[derive(Clone, Default)]
pub struct WeakElement(Weak<TrackedElement>);

impl WeakElement {
    /// A weak handle that never upgrades.
    pub fn new() -> Self {
        WeakElement(Weak::new())
    }

    /// Get an owning handle if the element still exists.
    pub fn upgrade(&self) -> Option<SharedElement> {
        self.0.upgrade().map(SharedElement)
    }

    /// Whether the element has been destroyed.
    pub fn is_dangling(&self) -> bool {
        self.0.strong_count() == 0
    }
}

impl std::fmt::Debug for WeakElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.upgrade() {
            Some(e) => write!(f, "Weak({:?})", e),
            None => write!(f, "Weak(<destroyed>)"),
        }
    }
}
