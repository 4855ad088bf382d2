//! The type tag table

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Kinds of value a tracked element can hold.
///
/// The numeric codes are part of the serialized form and MUST NOT change.
/// New kinds are appended after the last code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum TrackerType {
    /// UTF-8 string
    String = 0,

    /// 8-bit signed integer
    Int8 = 1,
    /// 8-bit unsigned integer
    UInt8 = 2,

    /// 16-bit signed integer
    Int16 = 3,
    /// 16-bit unsigned integer
    UInt16 = 4,

    /// 32-bit signed integer
    Int32 = 5,
    /// 32-bit unsigned integer
    UInt32 = 6,

    /// 64-bit signed integer
    Int64 = 7,
    /// 64-bit unsigned integer
    UInt64 = 8,

    /// 32-bit float
    Float = 9,
    /// 64-bit float
    Double = 10,

    /// Hardware (MAC) address
    Mac = 11,
    /// Unique identifier
    Uuid = 12,

    /// Ordered sequence of child elements
    Vector = 13,
    /// Children keyed by field id
    Map = 14,

    /// Children keyed by arbitrary integers (not field ids)
    IntMap = 15,

    /// Extension payload
    Custom = 16,
}

impl TrackerType {
    /// Every type, in code order.
    pub const ALL: [TrackerType; 17] = [
        TrackerType::String,
        TrackerType::Int8,
        TrackerType::UInt8,
        TrackerType::Int16,
        TrackerType::UInt16,
        TrackerType::Int32,
        TrackerType::UInt32,
        TrackerType::Int64,
        TrackerType::UInt64,
        TrackerType::Float,
        TrackerType::Double,
        TrackerType::Mac,
        TrackerType::Uuid,
        TrackerType::Vector,
        TrackerType::Map,
        TrackerType::IntMap,
        TrackerType::Custom,
    ];

    /// The stable numeric code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            TrackerType::String => "string",
            TrackerType::Int8 => "int8_t",
            TrackerType::UInt8 => "uint8_t",
            TrackerType::Int16 => "int16_t",
            TrackerType::UInt16 => "uint16_t",
            TrackerType::Int32 => "int32_t",
            TrackerType::UInt32 => "uint32_t",
            TrackerType::Int64 => "int64_t",
            TrackerType::UInt64 => "uint64_t",
            TrackerType::Float => "float",
            TrackerType::Double => "double",
            TrackerType::Mac => "mac_addr",
            TrackerType::Uuid => "uuid",
            TrackerType::Vector => "vector",
            TrackerType::Map => "map",
            TrackerType::IntMap => "intmap",
            TrackerType::Custom => "custom",
        }
    }

    /// Check if this is any integer type
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            TrackerType::Int8
                | TrackerType::UInt8
                | TrackerType::Int16
                | TrackerType::UInt16
                | TrackerType::Int32
                | TrackerType::UInt32
                | TrackerType::Int64
                | TrackerType::UInt64
        )
    }

    /// Check if this is numeric (integer or float)
    pub fn is_numeric(self) -> bool {
        self.is_integer() || matches!(self, TrackerType::Float | TrackerType::Double)
    }

    /// Check if this type holds child elements
    pub fn is_container(self) -> bool {
        matches!(
            self,
            TrackerType::Vector | TrackerType::Map | TrackerType::IntMap
        )
    }
}

impl fmt::Display for TrackerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<TrackerType> for u8 {
    fn from(t: TrackerType) -> u8 {
        t.code()
    }
}

impl TryFrom<u8> for TrackerType {
    type Error = TrackerError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        TrackerType::ALL
            .get(code as usize)
            .copied()
            .ok_or(TrackerError::UnknownTypeCode(code))
    }
}
