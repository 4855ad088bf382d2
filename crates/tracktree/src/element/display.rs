//! Debug implementations for elements and payloads

use std::fmt;

use super::*;

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::String(s) => write!(f, "{:?}", s),

            Payload::Int8(n) => write!(f, "{}i8", n),
            Payload::UInt8(n) => write!(f, "{}u8", n),
            Payload::Int16(n) => write!(f, "{}i16", n),
            Payload::UInt16(n) => write!(f, "{}u16", n),
            Payload::Int32(n) => write!(f, "{}i32", n),
            Payload::UInt32(n) => write!(f, "{}u32", n),
            Payload::Int64(n) => write!(f, "{}i64", n),
            Payload::UInt64(n) => write!(f, "{}u64", n),

            Payload::Float(n) => write!(f, "{}f32", n),
            Payload::Double(n) => write!(f, "{}f64", n),

            Payload::Mac(m) => write!(f, "mac({})", m),
            Payload::Uuid(u) => write!(f, "uuid({})", u),

            // Children are summarized, not walked: a container may own
            // one of its ancestors.
            Payload::Vector(v) => write!(f, "vector[{} items]", v.len()),
            Payload::Map(m) => {
                write!(f, "map{{")?;
                for (i, k) in m.keys().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", k)?;
                }
                write!(f, "}}")
            }
            Payload::IntMap(m) => {
                write!(f, "intmap{{")?;
                for (i, k) in m.keys().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", k)?;
                }
                write!(f, "}}")
            }

            Payload::Custom(Some(c)) => write!(f, "<custom {}>", c.type_name()),
            Payload::Custom(None) => write!(f, "<custom>"),
        }
    }
}

impl fmt::Debug for TrackedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id() {
            Some(id) => write!(f, "#{} ", id)?,
            None => write!(f, "#- ")?,
        }
        match self.payload.try_borrow() {
            Ok(payload) => write!(f, "{:?}", &*payload),
            Err(_) => write!(f, "<locked>"),
        }
    }
}

impl fmt::Debug for SharedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
