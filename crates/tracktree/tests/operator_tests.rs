//! Tests for the generic arithmetic, bitwise and comparison operators

use proptest::prelude::*;
use tracktree::*;

#[test]
fn test_unsigned_counter_wraps() {
    let e = TrackedElement::scalar(u8::MAX);
    e.increment().unwrap();
    assert_eq!(e.get_uint8().unwrap(), 0);
    e.decrement().unwrap();
    assert_eq!(e.get_uint8().unwrap(), u8::MAX);
}

#[test]
fn test_operand_is_cast_to_element_type() {
    let e = TrackedElement::scalar(10u16);
    e.add_assign(-1i32).unwrap();
    assert_eq!(e.get_uint16().unwrap(), 9);

    let f = TrackedElement::scalar(1.5f64);
    f.add_assign(2u8).unwrap();
    f.sub_assign(0.25f32).unwrap();
    assert_eq!(f.get_double().unwrap(), 3.25);
}

#[test]
fn test_bitwise_on_integers_only() {
    let flags = TrackedElement::scalar(0b1010u32);
    flags.or_assign(0b0101u32).unwrap();
    assert_eq!(flags.get_uint32().unwrap(), 0b1111);
    flags.and_assign(0b0110u8).unwrap();
    assert_eq!(flags.get_uint32().unwrap(), 0b0110);
    flags.xor_assign(0b0011i64).unwrap();
    assert_eq!(flags.get_uint32().unwrap(), 0b0101);

    let d = TrackedElement::scalar(1.0f32);
    assert!(matches!(
        d.or_assign(1u8),
        Err(TrackerError::TypeMismatch {
            got: TrackerType::Float,
            ..
        })
    ));
}

#[test]
fn test_arithmetic_rejects_non_numeric() {
    for tag in [
        TrackerType::String,
        TrackerType::Mac,
        TrackerType::Uuid,
        TrackerType::Map,
        TrackerType::IntMap,
        TrackerType::Custom,
    ] {
        let e = TrackedElement::new(tag);
        assert!(e.increment().is_err(), "{}", tag);
        assert!(e.add_assign(1u8).is_err(), "{}", tag);
        assert!(e.sub_assign(1u8).is_err(), "{}", tag);
    }
}

#[test]
fn test_comparisons() {
    let rssi = TrackedElement::scalar(-50i8);
    assert!(rssi.less_than(-40i8).unwrap());
    assert!(rssi.greater_than(-60i8).unwrap());
    assert!(rssi.equals(-50i8).unwrap());
    assert!(rssi.equals(-50i16).is_err());

    let mac = TrackedElement::scalar(MacAddr::new([0, 0, 0, 0, 0, 2]));
    assert!(mac.equals(MacAddr::new([0, 0, 0, 0, 0, 2])).unwrap());
    assert!(mac.less_than(MacAddr::new([0, 0, 0, 0, 0, 3])).unwrap());

    let id = TrackedElement::scalar(Uuid::nil());
    assert!(id.equals(Uuid::nil()).unwrap());
}

proptest! {
    #[test]
    fn prop_add_matches_wrapping_add(start in any::<i32>(), delta in any::<i32>()) {
        let e = TrackedElement::scalar(start);
        e.add_assign(delta).unwrap();
        prop_assert_eq!(e.get_int32().unwrap(), start.wrapping_add(delta));
    }

    #[test]
    fn prop_sub_matches_wrapping_sub(start in any::<u16>(), delta in any::<u16>()) {
        let e = TrackedElement::scalar(start);
        e.sub_assign(delta).unwrap();
        prop_assert_eq!(e.get_uint16().unwrap(), start.wrapping_sub(delta));
    }

    #[test]
    fn prop_xor_twice_is_identity(start in any::<u64>(), mask in any::<u64>()) {
        let e = TrackedElement::scalar(start);
        e.xor_assign(mask).unwrap();
        e.xor_assign(mask).unwrap();
        prop_assert_eq!(e.get_uint64().unwrap(), start);
    }
}
