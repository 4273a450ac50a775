//! Stress tests that push the heap to its capacity limits
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use fixed_binary_heap::{FixedBinaryHeap, Heap, HeapError};

/// Fill to capacity, overflow, and drain
#[test]
fn test_massive_operations() {
    let mut heap = FixedBinaryHeap::with_capacity(1000).unwrap();

    // Insert 1000 elements in reverse so every push bubbles to the root
    for i in (0..1000).rev() {
        heap.push(i, i).unwrap();
    }

    assert_eq!(heap.len(), 1000);
    assert!(heap.is_full());
    assert_eq!(heap.push(-1, -1), Err(HeapError::Full { capacity: 1000 }));

    for i in 0..1000 {
        assert_eq!(heap.pop(), Ok((i, i)));
    }

    assert!(heap.is_empty());
    assert_eq!(heap.pop(), Err(HeapError::Empty));
}

/// Alternate insert and pop while hovering at the capacity boundary
#[test]
fn test_alternating_at_capacity() {
    let mut heap = FixedBinaryHeap::with_capacity(64).unwrap();
    let mut rejected = 0;

    for i in 0..500 {
        // Two pushes, one pop: the heap fills and then sits at capacity
        for key in [(i * 37) % 101, (i * 53) % 97] {
            if heap.push(key, i).is_err() {
                rejected += 1;
            }
        }
        assert!(heap.pop().is_ok());
        assert!(heap.is_heap_ordered());
        assert!(heap.len() <= 64);
    }

    assert!(rejected > 0);

    let mut last = i32::MIN;
    while let Ok((priority, _)) = heap.pop() {
        assert!(priority >= last);
        last = priority;
    }
}

/// Pseudo-random keys from a linear congruential sequence
#[test]
fn test_pseudo_random_keys() {
    let mut heap = FixedBinaryHeap::with_capacity(4096).unwrap();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut keys = Vec::new();

    for _ in 0..4096 {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let key = (state >> 33) % 1000;
        keys.push(key);
        heap.push(key, ()).unwrap();
    }

    assert!(heap.is_heap_ordered());
    keys.sort_unstable();

    let drained: Vec<_> = heap.into_sorted_iter().map(|(k, ())| k).collect();
    assert_eq!(drained, keys);
}

/// Many duplicate keys mixed with distinct ones
#[test]
fn test_heavy_duplicates() {
    let mut heap = FixedBinaryHeap::with_capacity(300).unwrap();

    for i in 0..300 {
        heap.push(i % 3, i).unwrap();
    }

    for expected in 0..3 {
        for _ in 0..100 {
            let (priority, item) = heap.pop().unwrap();
            assert_eq!(priority, expected);
            assert_eq!(item % 3, expected);
        }
    }
    assert!(heap.is_empty());
}

/// Repeatedly fill and drain the same heap
#[test]
fn test_repeated_fill_drain_cycles() {
    let mut heap = FixedBinaryHeap::with_capacity(33).unwrap();

    for round in 0..50 {
        for i in 0..33 {
            heap.push((i * 7 + round) % 33, round).unwrap();
        }
        assert!(heap.push(0, round).is_err());

        for expected in 0..33 {
            assert_eq!(heap.pop(), Ok((expected, round)));
        }
        assert_eq!(heap.pop(), Err(HeapError::Empty));
        assert_eq!(heap.capacity(), 33);
    }
}
