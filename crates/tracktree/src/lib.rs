//! # Tracktree
//!
//! A self-describing tree of tracked values for telemetry and reporting.
//!
//! Fields are not known at compile time: each node is a
//! [`TrackedElement`] carrying a stable [`TrackerType`] tag, an optional
//! numeric field id, and exactly one payload: a string, a fixed-width
//! number, a hardware address, a UUID, or a container of further elements.
//! Trees are built at runtime, read through type-checked accessors,
//! mutated through generic operators, and handed to an
//! [`ElementFormatter`] to produce output.
//!
//! ## Architecture
//!
//! - **Type tags**: [`TrackerType`], numeric codes fixed forever
//! - **Elements**: [`TrackedElement`] behind the owning [`SharedElement`] handle
//! - **Containers**: field-keyed maps, integer-keyed maps, vectors
//! - **Formatters**: [`BasicFormatter`], [`JsonFormatter`], or your own
//! - **Field registry**: [`FieldRegistry`] mints ids for field names
//!
//! ## Example
//!
//! ```
//! use tracktree::{BasicFormatter, ElementFormatter, TrackedElement, TrackerType};
//!
//! let device = TrackedElement::new(TrackerType::Map);
//! device.map_insert(2, TrackedElement::scalar(42i32)).unwrap();
//! device.map_insert(1, TrackedElement::scalar(String::from("hello"))).unwrap();
//!
//! let text = BasicFormatter::new().render_to_string(&device).unwrap();
//! assert_eq!(text, "map{[1,hello],[2,42],}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod error;
pub mod format;
pub mod mac;
pub mod registry;

// Re-export main types
pub use element::{
    Addend, Bits, ComparableScalar, CustomValue, ElementIntMap, ElementMap, ElementVec, FieldId,
    IntKey, MapKey, Number, OrderedScalar, Payload, Released, SharedElement, TrackedElement,
    TrackedScalar, TrackerType, WeakElement,
};
pub use error::{Result, TrackerError};
pub use format::{BasicFormatter, ElementFormatter, FormatterConfig, JsonFormatter, RenderContext};
pub use mac::MacAddr;
pub use registry::{FieldDescriptor, FieldRegistry, FieldResolver};
pub use uuid::Uuid;

/// Tracktree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
