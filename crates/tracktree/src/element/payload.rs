//! Payload storage: exactly one active value per element

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

use uuid::Uuid;

use super::{SharedElement, TrackerType};
use crate::mac::MacAddr;

/// Field identifier minted by a field registry.
pub type FieldId = i32;

/// Key type for integer-keyed maps.
pub type IntKey = i64;

/// Children of a vector element, in order.
pub type ElementVec = Vec<SharedElement>;

/// Children of a map element, ordered by field id.
pub type ElementMap = BTreeMap<FieldId, SharedElement>;

/// Children of an integer-keyed map element, ordered by key.
pub type ElementIntMap = BTreeMap<IntKey, SharedElement>;

/// Capabilities required of an extension payload stored in a
/// [`TrackerType::Custom`] element.
pub trait CustomValue: fmt::Debug {
    /// Short name used in diagnostics
    fn type_name(&self) -> &str;

    /// Produce an independent copy for [`TrackedElement::clone_empty`](super::TrackedElement::clone_empty)
    fn clone_custom(&self) -> Box<dyn CustomValue>;

    /// Write a textual rendering of this value
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Access to the concrete type for downcasting
    fn as_any(&self) -> &dyn Any;
}

/// The value held by an element.
///
/// The variant always agrees with the element's [`TrackerType`]; it is only
/// replaced wholesale (by a typed setter or by re-tagging).
pub enum Payload {
    /// UTF-8 string
    String(String),
    /// 8-bit signed integer
    Int8(i8),
    /// 8-bit unsigned integer
    UInt8(u8),
    /// 16-bit signed integer
    Int16(i16),
    /// 16-bit unsigned integer
    UInt16(u16),
    /// 32-bit signed integer
    Int32(i32),
    /// 32-bit unsigned integer
    UInt32(u32),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit unsigned integer
    UInt64(u64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
    /// Hardware address
    Mac(MacAddr),
    /// Unique identifier
    Uuid(Uuid),
    /// Owned children in order
    Vector(ElementVec),
    /// Owned children by field id
    Map(ElementMap),
    /// Owned children by integer key
    IntMap(ElementIntMap),
    /// Extension value, absent until one is stored
    Custom(Option<Box<dyn CustomValue>>),
}

impl Payload {
    /// The zero value for a type: empty string, zero, empty container.
    pub fn empty(tag: TrackerType) -> Self {
        match tag {
            TrackerType::String => Payload::String(String::new()),
            TrackerType::Int8 => Payload::Int8(0),
            TrackerType::UInt8 => Payload::UInt8(0),
            TrackerType::Int16 => Payload::Int16(0),
            TrackerType::UInt16 => Payload::UInt16(0),
            TrackerType::Int32 => Payload::Int32(0),
            TrackerType::UInt32 => Payload::UInt32(0),
            TrackerType::Int64 => Payload::Int64(0),
            TrackerType::UInt64 => Payload::UInt64(0),
            TrackerType::Float => Payload::Float(0.0),
            TrackerType::Double => Payload::Double(0.0),
            TrackerType::Mac => Payload::Mac(MacAddr::default()),
            TrackerType::Uuid => Payload::Uuid(Uuid::nil()),
            TrackerType::Vector => Payload::Vector(Vec::new()),
            TrackerType::Map => Payload::Map(BTreeMap::new()),
            TrackerType::IntMap => Payload::IntMap(BTreeMap::new()),
            TrackerType::Custom => Payload::Custom(None),
        }
    }

    /// The type tag matching the active variant.
    pub fn tag(&self) -> TrackerType {
        match self {
            Payload::String(_) => TrackerType::String,
            Payload::Int8(_) => TrackerType::Int8,
            Payload::UInt8(_) => TrackerType::UInt8,
            Payload::Int16(_) => TrackerType::Int16,
            Payload::UInt16(_) => TrackerType::UInt16,
            Payload::Int32(_) => TrackerType::Int32,
            Payload::UInt32(_) => TrackerType::UInt32,
            Payload::Int64(_) => TrackerType::Int64,
            Payload::UInt64(_) => TrackerType::UInt64,
            Payload::Float(_) => TrackerType::Float,
            Payload::Double(_) => TrackerType::Double,
            Payload::Mac(_) => TrackerType::Mac,
            Payload::Uuid(_) => TrackerType::Uuid,
            Payload::Vector(_) => TrackerType::Vector,
            Payload::Map(_) => TrackerType::Map,
            Payload::IntMap(_) => TrackerType::IntMap,
            Payload::Custom(_) => TrackerType::Custom,
        }
    }
}
