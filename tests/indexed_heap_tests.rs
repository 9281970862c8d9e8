use classic_sssp::data_structures::{IndexedMinHeap, Key};

#[test]
fn test_new_heap_holds_every_vertex_at_the_initial_key() {
    let heap: IndexedMinHeap<Key<i64>> = IndexedMinHeap::new(5, Key::Infinite);

    assert_eq!(heap.len(), 5);
    for v in 0..5 {
        assert!(heap.contains(v));
        assert_eq!(heap.key_of(v), Some(Key::Infinite));
    }
    assert!(!heap.contains(5));
}

#[test]
fn test_extraction_follows_decreased_keys() {
    let mut heap = IndexedMinHeap::new(4, Key::Infinite);
    assert!(heap.decrease_key(2, Key::Finite(7)));
    assert!(heap.decrease_key(0, Key::Finite(3)));
    assert!(heap.decrease_key(3, Key::Finite(5)));

    assert_eq!(heap.extract_min(), Some((0, Key::Finite(3))));
    assert_eq!(heap.extract_min(), Some((3, Key::Finite(5))));
    assert_eq!(heap.extract_min(), Some((2, Key::Finite(7))));
    // The untouched vertex surfaces last, still infinite
    assert_eq!(heap.extract_min(), Some((1, Key::Infinite)));
    assert_eq!(heap.extract_min(), None);
}

#[test]
fn test_decrease_key_requires_strict_decrease() {
    let mut heap = IndexedMinHeap::new(3, Key::Infinite);
    assert!(heap.decrease_key(1, Key::Finite(10)));

    // Equal and larger keys are refused, and the stored key is unchanged
    assert!(!heap.decrease_key(1, Key::Finite(10)));
    assert!(!heap.decrease_key(1, Key::Finite(12)));
    assert!(!heap.decrease_key(1, Key::Infinite));
    assert_eq!(heap.key_of(1), Some(Key::Finite(10)));

    // Repeated strict decreases keep working
    assert!(heap.decrease_key(1, Key::Finite(4)));
    assert!(heap.decrease_key(1, Key::Finite(1)));
    assert_eq!(heap.key_of(1), Some(Key::Finite(1)));
}

#[test]
fn test_extracted_vertices_are_no_longer_members() {
    let mut heap = IndexedMinHeap::new(3, Key::Infinite);
    heap.decrease_key(1, Key::Finite(1i64));

    let (v, _) = heap.extract_min().unwrap();
    assert_eq!(v, 1);
    assert!(!heap.contains(1));
    assert_eq!(heap.key_of(1), None);
    assert!(!heap.decrease_key(1, Key::Finite(0)), "absent vertices are refused");
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_decrease_key_on_unknown_vertex_is_refused() {
    let mut heap = IndexedMinHeap::new(2, Key::Infinite);
    assert!(!heap.decrease_key(7, Key::Finite(1i64)));
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_empty_heap_extracts_none() {
    let mut heap: IndexedMinHeap<Key<i64>> = IndexedMinHeap::new(0, Key::Infinite);
    assert!(heap.is_empty());
    assert_eq!(heap.extract_min(), None);
}

#[test]
fn test_interleaved_decreases_and_extractions() {
    let mut heap = IndexedMinHeap::new(6, Key::Infinite);
    heap.decrease_key(4, Key::Finite(8));
    heap.decrease_key(1, Key::Finite(6));

    assert_eq!(heap.extract_min(), Some((1, Key::Finite(6))));

    // Decreasing below an already-queued key reorders the remaining heap
    heap.decrease_key(5, Key::Finite(2));
    heap.decrease_key(4, Key::Finite(1));

    assert_eq!(heap.extract_min(), Some((4, Key::Finite(1))));
    assert_eq!(heap.extract_min(), Some((5, Key::Finite(2))));
}

#[test]
fn test_equal_keys_extract_in_some_order() {
    let mut heap = IndexedMinHeap::new(3, Key::Infinite);
    heap.decrease_key(0, Key::Finite(5));
    heap.decrease_key(1, Key::Finite(5));
    heap.decrease_key(2, Key::Finite(5));

    // No ordering guarantee among equal keys, only that all surface
    let mut extracted: Vec<usize> = (0..3)
        .map(|_| heap.extract_min().unwrap().0)
        .collect();
    extracted.sort_unstable();
    assert_eq!(extracted, vec![0, 1, 2]);
}
