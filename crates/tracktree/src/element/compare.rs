//! Comparisons against plain values

use uuid::Uuid;

use super::{TrackedElement, TrackedScalar};
use crate::error::Result;
use crate::mac::MacAddr;

/// Scalars that support `==` and `<` against an element.
pub trait ComparableScalar: TrackedScalar + PartialOrd {}

/// Scalars that also support `>`.
///
/// MAC addresses and UUIDs are deliberately absent.
pub trait OrderedScalar: ComparableScalar {}

macro_rules! comparable {
    ($($ty:ty),*) => { $(impl ComparableScalar for $ty {})* };
}

macro_rules! ordered {
    ($($ty:ty),*) => { $(impl OrderedScalar for $ty {})* };
}

comparable!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, MacAddr, Uuid);
ordered!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl TrackedElement {
    /// `element == value`; the element must be of `T`'s type.
    pub fn equals<T: ComparableScalar>(&self, value: T) -> Result<bool> {
        Ok(self.get::<T>()? == value)
    }

    /// `element < value`; the element must be of `T`'s type.
    pub fn less_than<T: ComparableScalar>(&self, value: T) -> Result<bool> {
        Ok(self.get::<T>()? < value)
    }

    /// `element > value`; the element must be of `T`'s type.
    ///
    /// ```
    /// use tracktree::TrackedElement;
    ///
    /// let e = TrackedElement::scalar(7u32);
    /// assert!(e.greater_than(3u32).unwrap());
    /// ```
    ///
    /// Hardware addresses have no `>`:
    ///
    /// ```compile_fail
    /// use tracktree::{MacAddr, TrackedElement};
    ///
    /// let e = TrackedElement::scalar(MacAddr::default());
    /// let _ = e.greater_than(MacAddr::default());
    /// ```
    ///
    /// Neither do UUIDs:
    ///
    /// ```compile_fail
    /// use tracktree::{TrackedElement, Uuid};
    ///
    /// let e = TrackedElement::scalar(Uuid::nil());
    /// let _ = e.greater_than(Uuid::nil());
    /// ```
    pub fn greater_than<T: OrderedScalar>(&self, value: T) -> Result<bool> {
        Ok(self.get::<T>()? > value)
    }
}
