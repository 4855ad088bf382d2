//! Type-checked scalar getters and setters

use std::cell::Ref;

use uuid::Uuid;

use super::{CustomValue, Payload, TrackedElement, TrackerType};
use crate::error::{Result, TrackerError};
use crate::mac::MacAddr;

/// A Rust type that maps onto exactly one scalar [`TrackerType`].
pub trait TrackedScalar: Sized {
    /// The element type holding values of `Self`
    const TYPE: TrackerType;

    /// Read the value if the payload is of type [`Self::TYPE`]
    fn from_payload(payload: &Payload) -> Option<Self>;

    /// Wrap the value in its payload variant
    fn into_payload(self) -> Payload;
}

macro_rules! tracked_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl TrackedScalar for $ty {
                const TYPE: TrackerType = TrackerType::$variant;

                fn from_payload(payload: &Payload) -> Option<Self> {
                    match payload {
                        Payload::$variant(v) => Some(v.clone()),
                        _ => None,
                    }
                }

                fn into_payload(self) -> Payload {
                    Payload::$variant(self)
                }
            }
        )*
    };
}

tracked_scalar! {
    String => String,
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float,
    f64 => Double,
    MacAddr => Mac,
    Uuid => Uuid,
}

impl TrackedElement {
    /// Read the value as `T`.
    ///
    /// Fails with a type mismatch unless the element's type is exactly
    /// `T::TYPE`; no widening or narrowing is attempted.
    pub fn get<T: TrackedScalar>(&self) -> Result<T> {
        let payload = self.payload();
        T::from_payload(&payload)
            .ok_or_else(|| TrackerError::mismatch(payload.tag(), T::TYPE.name()))
    }

    /// Store `value`, which must be of the element's type.
    pub fn set<T: TrackedScalar>(&self, value: T) -> Result<()> {
        let mut payload = self.payload_mut()?;
        if payload.tag() != T::TYPE {
            return Err(TrackerError::mismatch(payload.tag(), T::TYPE.name()));
        }
        *payload = value.into_payload();
        Ok(())
    }

    /// Store a string value.
    pub fn set_string(&self, value: impl Into<String>) -> Result<()> {
        self.set(value.into())
    }
}

macro_rules! named_accessors {
    ($($get:ident, $set:ident => $ty:ty;)*) => {
        impl TrackedElement {
            $(
                #[doc = concat!("Read the `", stringify!($ty), "` value.")]
                pub fn $get(&self) -> Result<$ty> {
                    self.get::<$ty>()
                }

                #[doc = concat!("Store a `", stringify!($ty), "` value.")]
                pub fn $set(&self, value: $ty) -> Result<()> {
                    self.set(value)
                }
            )*
        }
    };
}

named_accessors! {
    get_int8, set_int8 => i8;
    get_uint8, set_uint8 => u8;
    get_int16, set_int16 => i16;
    get_uint16, set_uint16 => u16;
    get_int32, set_int32 => i32;
    get_uint32, set_uint32 => u32;
    get_int64, set_int64 => i64;
    get_uint64, set_uint64 => u64;
    get_float, set_float => f32;
    get_double, set_double => f64;
    get_mac, set_mac => MacAddr;
    get_uuid, set_uuid => Uuid;
}

impl TrackedElement {
    /// Read the string value.
    pub fn get_string(&self) -> Result<String> {
        self.get::<String>()
    }

    /// Read view of a custom element's extension value.
    ///
    /// `Ok(None)` means the element is custom but nothing has been stored.
    pub fn custom_view(&self) -> Result<Option<Ref<'_, dyn CustomValue>>> {
        let payload = self.payload();
        match payload.tag() {
            TrackerType::Custom => Ok(Ref::filter_map(payload, |p| match p {
                Payload::Custom(Some(value)) => Some(value.as_ref()),
                _ => None,
            })
            .ok()),
            other => Err(TrackerError::mismatch(other, TrackerType::Custom.name())),
        }
    }

    /// Store an extension value in a custom element.
    pub fn set_custom(&self, value: Box<dyn CustomValue>) -> Result<()> {
        let mut payload = self.payload_mut()?;
        match &mut *payload {
            Payload::Custom(slot) => {
                *slot = Some(value);
                Ok(())
            }
            other => Err(TrackerError::mismatch(other.tag(), TrackerType::Custom.name())),
        }
    }
}
