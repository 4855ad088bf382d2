//! Tests for the three container kinds

use tracktree::*;

fn text(s: &str) -> SharedElement {
    TrackedElement::scalar(s.to_string())
}

// ============================================================================
// Field-keyed maps
// ============================================================================

#[test]
fn test_map_roundtrip() {
    let map = TrackedElement::new(TrackerType::Map);
    let a = text("a");
    let b = text("b");

    map.map_insert(4, a.clone()).unwrap();
    map.map_insert(2, b.clone()).unwrap();
    assert_eq!(map.size().unwrap(), 2);
    assert!(map.map_get(4).unwrap().unwrap().ptr_eq(&a));
    assert!(map.map_get(2).unwrap().unwrap().ptr_eq(&b));
    assert!(map.map_get(3).unwrap().is_none());

    let keys: Vec<FieldId> = map.map_view().unwrap().keys().copied().collect();
    assert_eq!(keys, vec![2, 4]);

    map.map_remove(4).unwrap();
    assert!(map.map_get(4).unwrap().is_none());
    assert_eq!(a.links(), 1);
    assert_eq!(map.size().unwrap(), 1);
}

#[test]
fn test_map_replace_releases_previous() {
    let map = TrackedElement::new(TrackerType::Map);
    let old = text("old");
    let weak_old = old.downgrade();
    map.map_insert(1, old).unwrap();

    map.map_insert(1, text("new")).unwrap();
    assert!(weak_old.is_dangling());
    assert_eq!(map.size().unwrap(), 1);
    assert_eq!(map.map_get(1).unwrap().unwrap().get_string().unwrap(), "new");
}

#[test]
fn test_map_insert_element_uses_child_id() {
    let map = TrackedElement::new(TrackerType::Map);
    let named = TrackedElement::with_id(TrackerType::UInt8, 17);
    map.map_insert_element(named.clone()).unwrap();
    assert!(map.map_get(17).unwrap().unwrap().ptr_eq(&named));

    let anonymous = TrackedElement::new(TrackerType::UInt8);
    assert!(matches!(
        map.map_insert_element(anonymous),
        Err(TrackerError::MissingFieldId)
    ));
}

#[test]
fn test_map_remove_element_by_identity() {
    let map = TrackedElement::new(TrackerType::Map);
    let child = text("x");
    map.map_insert(5, child.clone()).unwrap();

    // an equal-looking but distinct element is not removed
    map.map_remove_element(&text("x")).unwrap();
    assert_eq!(map.size().unwrap(), 1);

    map.map_remove_element(&child).unwrap();
    assert_eq!(map.size().unwrap(), 0);
}

// ============================================================================
// Integer-keyed maps
// ============================================================================

#[test]
fn test_intmap_roundtrip() {
    let map = TrackedElement::new(TrackerType::IntMap);
    for key in [i64::MAX, -1, 0, i64::MIN] {
        map.intmap_insert(key, TrackedElement::scalar(key)).unwrap();
    }
    assert_eq!(map.size().unwrap(), 4);

    let keys: Vec<IntKey> = map.intmap_view().unwrap().keys().copied().collect();
    assert_eq!(keys, vec![i64::MIN, -1, 0, i64::MAX]);

    let found = map.intmap_get(-1).unwrap().unwrap();
    assert_eq!(found.get_int64().unwrap(), -1);

    map.intmap_remove(-1).unwrap();
    map.intmap_remove(-1).unwrap();
    assert!(map.intmap_get(-1).unwrap().is_none());

    let max = map.intmap_get(i64::MAX).unwrap().unwrap();
    map.intmap_remove_element(&max).unwrap();
    assert_eq!(map.size().unwrap(), 2);
}

#[test]
fn test_intmap_and_map_are_distinct_kinds() {
    let map = TrackedElement::new(TrackerType::Map);
    let intmap = TrackedElement::new(TrackerType::IntMap);
    assert!(map.intmap_insert(1, text("a")).is_err());
    assert!(intmap.map_insert(1, text("a")).is_err());
    assert!(map.intmap_view().is_err());
    assert!(intmap.map_get(1).is_err());
}

// ============================================================================
// Vectors
// ============================================================================

#[test]
fn test_vector_roundtrip() {
    let v = TrackedElement::new(TrackerType::Vector);
    for i in 0..4u32 {
        v.vector_push(TrackedElement::scalar(i)).unwrap();
    }
    assert_eq!(v.size().unwrap(), 4);

    v.vector_remove(1).unwrap();
    let remaining: Vec<u32> = v
        .vector_view()
        .unwrap()
        .iter()
        .map(|e| e.get_uint32().unwrap())
        .collect();
    assert_eq!(remaining, vec![0, 2, 3]);

    assert!(v.vector_get(3).unwrap().is_none());
    assert_eq!(v.vector_get(2).unwrap().unwrap().get_uint32().unwrap(), 3);
}

#[test]
fn test_vector_remove_out_of_range() {
    let v = TrackedElement::new(TrackerType::Vector);
    v.vector_push(text("only")).unwrap();
    assert!(matches!(
        v.vector_remove(1),
        Err(TrackerError::OutOfRange { index: 1, len: 1 })
    ));
    assert_eq!(v.size().unwrap(), 1);
}

#[test]
fn test_vector_add_assign_appends() {
    let v = TrackedElement::new(TrackerType::Vector);
    let child = text("c");
    v.add_assign(&child).unwrap();
    v.add_assign(child.clone()).unwrap();
    assert_eq!(v.size().unwrap(), 2);
    assert_eq!(child.links(), 3);

    let m = TrackedElement::new(TrackerType::Map);
    assert!(m.add_assign(&child).is_err());
}

// ============================================================================
// Sharing and views
// ============================================================================

#[test]
fn test_one_child_in_several_containers() {
    let child = text("shared");
    let weak = child.downgrade();
    let v = TrackedElement::new(TrackerType::Vector);
    let m = TrackedElement::new(TrackerType::Map);
    let im = TrackedElement::new(TrackerType::IntMap);

    v.vector_push(child.clone()).unwrap();
    m.map_insert(1, child.clone()).unwrap();
    im.intmap_insert(1, child).unwrap();
    assert_eq!(weak.upgrade().unwrap().links(), 4);

    drop(v);
    drop(m);
    assert!(!weak.is_dangling());
    drop(im);
    assert!(weak.is_dangling());
}

#[test]
fn test_mutation_refused_while_viewed() {
    let m = TrackedElement::new(TrackerType::Map);
    m.map_insert(1, text("a")).unwrap();

    let view = m.map_view().unwrap();
    assert!(matches!(m.map_insert(2, text("b")), Err(TrackerError::Borrowed)));
    assert!(matches!(m.map_remove(1), Err(TrackerError::Borrowed)));
    assert_eq!(view.len(), 1);
    drop(view);

    m.map_insert(2, text("b")).unwrap();
    assert_eq!(m.size().unwrap(), 2);
}

#[test]
fn test_size_of_scalar_is_mismatch() {
    for tag in TrackerType::ALL {
        let e = TrackedElement::new(tag);
        assert_eq!(e.size().is_ok(), tag.is_container(), "{}", tag);
    }
}
