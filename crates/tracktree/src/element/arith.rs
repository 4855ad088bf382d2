//! Generic numeric mutators
//!
//! Each operator applies to whichever numeric payload the element holds.
//! The operand is cast to the payload's type with `as` semantics and
//! integer arithmetic wraps.

use super::{Payload, SharedElement, TrackedElement};
use crate::error::{Result, TrackerError};

/// A numeric operand for `+=`/`-=` style mutators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Any signed integer
    Int(i64),
    /// Any unsigned integer
    UInt(u64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
}

/// An integer operand for the bitwise mutators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bits {
    /// Any signed integer
    Signed(i64),
    /// Any unsigned integer
    Unsigned(u64),
}

/// Right-hand side of [`TrackedElement::add_assign`].
///
/// Adding an element is only meaningful for vectors, where it appends.
#[derive(Debug, Clone)]
pub enum Addend {
    /// Numeric addition
    Number(Number),
    /// Append to a vector
    Element(SharedElement),
}

macro_rules! operand_from {
    ($target:ident :: $variant:ident as $wide:ty => $($ty:ty),*) => {
        $(
            impl From<$ty> for $target {
                fn from(n: $ty) -> Self {
                    $target::$variant(n as $wide)
                }
            }
        )*
    };
}

operand_from!(Number::Int as i64 => i8, i16, i32, i64);
operand_from!(Number::UInt as u64 => u8, u16, u32, u64);
operand_from!(Number::Float as f32 => f32);
operand_from!(Number::Double as f64 => f64);
operand_from!(Bits::Signed as i64 => i8, i16, i32, i64);
operand_from!(Bits::Unsigned as u64 => u8, u16, u32, u64);

macro_rules! addend_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Addend {
                fn from(n: $ty) -> Self {
                    Addend::Number(Number::from(n))
                }
            }
        )*
    };
}

addend_from!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl From<Number> for Addend {
    fn from(n: Number) -> Self {
        Addend::Number(n)
    }
}

impl From<SharedElement> for Addend {
    fn from(e: SharedElement) -> Self {
        Addend::Element(e)
    }
}

impl From<&SharedElement> for Addend {
    fn from(e: &SharedElement) -> Self {
        Addend::Element(e.acquire())
    }
}

macro_rules! number_as {
    ($n:expr, $t:ty) => {
        match $n {
            Number::Int(v) => v as $t,
            Number::UInt(v) => v as $t,
            Number::Float(v) => v as $t,
            Number::Double(v) => v as $t,
        }
    };
}

macro_rules! bits_as {
    ($b:expr, $t:ty) => {
        match $b {
            Bits::Signed(v) => v as $t,
            Bits::Unsigned(v) => v as $t,
        }
    };
}

#[derive(Debug, Clone, Copy)]
enum Arith {
    Add,
    Sub,
}

#[derive(Debug, Clone, Copy)]
enum Bitwise {
    Or,
    And,
    Xor,
}

fn apply_arith(payload: &mut Payload, rhs: Number, op: Arith) -> Result<()> {
    macro_rules! wrapping {
        ($v:ident, $t:ty) => {{
            let r = number_as!(rhs, $t);
            *$v = match op {
                Arith::Add => $v.wrapping_add(r),
                Arith::Sub => $v.wrapping_sub(r),
            };
        }};
    }

    macro_rules! float {
        ($v:ident, $t:ty) => {{
            let r = number_as!(rhs, $t);
            match op {
                Arith::Add => *$v += r,
                Arith::Sub => *$v -= r,
            }
        }};
    }

    match payload {
        Payload::Int8(v) => wrapping!(v, i8),
        Payload::UInt8(v) => wrapping!(v, u8),
        Payload::Int16(v) => wrapping!(v, i16),
        Payload::UInt16(v) => wrapping!(v, u16),
        Payload::Int32(v) => wrapping!(v, i32),
        Payload::UInt32(v) => wrapping!(v, u32),
        Payload::Int64(v) => wrapping!(v, i64),
        Payload::UInt64(v) => wrapping!(v, u64),
        Payload::Float(v) => float!(v, f32),
        Payload::Double(v) => float!(v, f64),
        other => return Err(TrackerError::mismatch(other.tag(), "numeric")),
    }
    Ok(())
}

fn apply_bitwise(payload: &mut Payload, rhs: Bits, op: Bitwise) -> Result<()> {
    macro_rules! bitwise {
        ($v:ident, $t:ty) => {{
            let r = bits_as!(rhs, $t);
            match op {
                Bitwise::Or => *$v |= r,
                Bitwise::And => *$v &= r,
                Bitwise::Xor => *$v ^= r,
            }
        }};
    }

    match payload {
        Payload::Int8(v) => bitwise!(v, i8),
        Payload::UInt8(v) => bitwise!(v, u8),
        Payload::Int16(v) => bitwise!(v, i16),
        Payload::UInt16(v) => bitwise!(v, u16),
        Payload::Int32(v) => bitwise!(v, i32),
        Payload::UInt32(v) => bitwise!(v, u32),
        Payload::Int64(v) => bitwise!(v, i64),
        Payload::UInt64(v) => bitwise!(v, u64),
        other => return Err(TrackerError::mismatch(other.tag(), "integer")),
    }
    Ok(())
}

impl TrackedElement {
    /// Add one to a numeric value.
    pub fn increment(&self) -> Result<()> {
        apply_arith(&mut *self.payload_mut()?, Number::Int(1), Arith::Add)
    }

    /// Subtract one from a numeric value.
    pub fn decrement(&self) -> Result<()> {
        apply_arith(&mut *self.payload_mut()?, Number::Int(1), Arith::Sub)
    }

    /// Compound addition.
    ///
    /// A numeric operand is added to a numeric payload. An element operand
    /// is appended when this element is a vector; no other container
    /// accepts `+=`.
    pub fn add_assign(&self, rhs: impl Into<Addend>) -> Result<()> {
        match rhs.into() {
            Addend::Number(n) => apply_arith(&mut *self.payload_mut()?, n, Arith::Add),
            Addend::Element(child) => self.vector_push(child),
        }
    }

    /// Compound subtraction.
    pub fn sub_assign(&self, rhs: impl Into<Number>) -> Result<()> {
        apply_arith(&mut *self.payload_mut()?, rhs.into(), Arith::Sub)
    }

    /// Bitwise `|=` on an integer value.
    pub fn or_assign(&self, rhs: impl Into<Bits>) -> Result<()> {
        apply_bitwise(&mut *self.payload_mut()?, rhs.into(), Bitwise::Or)
    }

    /// Bitwise `&=` on an integer value.
    pub fn and_assign(&self, rhs: impl Into<Bits>) -> Result<()> {
        apply_bitwise(&mut *self.payload_mut()?, rhs.into(), Bitwise::And)
    }

    /// Bitwise `^=` on an integer value.
    pub fn xor_assign(&self, rhs: impl Into<Bits>) -> Result<()> {
        apply_bitwise(&mut *self.payload_mut()?, rhs.into(), Bitwise::Xor)
    }
}
