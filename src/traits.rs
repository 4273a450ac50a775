//! Common traits for fixed-capacity heaps
//!
//! This module provides the [`Heap`] trait, the operation surface shared by
//! bounded priority containers, and [`HeapError`], the failures those
//! operations report.
//!
//! Unlike `std::collections::BinaryHeap`, a bounded heap never grows: pushing
//! into a full heap and popping from an empty one are both ordinary,
//! recoverable outcomes reported through `Result`.

use thiserror::Error;

/// Error type for heap operations
///
/// A failed operation never mutates the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap already holds `capacity` elements
    #[error("heap is full (capacity {capacity})")]
    Full { capacity: usize },
    /// There is no element to remove
    #[error("heap is empty")]
    Empty,
    /// A heap was requested with zero capacity
    #[error("heap capacity must be at least 1")]
    InvalidCapacity,
    /// Storage for `capacity` nodes could not be allocated
    #[error("cannot allocate storage for {capacity} heap nodes")]
    AllocationFailed { capacity: usize },
}

/// Base trait for fixed-capacity min-heaps
///
/// Heaps store (priority, item) pairs to separate the ordering key from the
/// data. The element with the smallest priority is always at the front.
///
/// # Example
///
/// ```rust
/// use fixed_binary_heap::{FixedBinaryHeap, Heap, HeapError};
///
/// let mut heap = FixedBinaryHeap::with_capacity(2).unwrap();
/// heap.push(3, "three").unwrap();
/// heap.push(1, "one").unwrap();
/// assert_eq!(heap.push(2, "two"), Err(HeapError::Full { capacity: 2 }));
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Ok((1, "one")));
/// ```
pub trait Heap<T, P: Ord>: Sized {
    /// Creates an empty heap able to hold exactly `capacity` elements
    ///
    /// # Errors
    /// Returns `HeapError::InvalidCapacity` if `capacity` is zero, or
    /// `HeapError::AllocationFailed` if the storage cannot be reserved.
    fn with_capacity(capacity: usize) -> Result<Self, HeapError>;

    /// Returns the fixed number of elements the heap can hold
    fn capacity(&self) -> usize;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if another push would fail
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Inserts an element with the given priority
    ///
    /// # Errors
    /// Returns `HeapError::Full` if the heap is at capacity; the element is
    /// dropped and the heap is left unchanged.
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, priority: P, item: T) -> Result<(), HeapError>;

    /// Returns the minimum priority and associated item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// # Errors
    /// Returns `HeapError::Empty` if there is nothing to remove.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<(P, T), HeapError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            HeapError::Full { capacity: 4 }.to_string(),
            "heap is full (capacity 4)"
        );
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
        assert_eq!(
            HeapError::InvalidCapacity.to_string(),
            "heap capacity must be at least 1"
        );
        assert_eq!(
            HeapError::AllocationFailed { capacity: 8 }.to_string(),
            "cannot allocate storage for 8 heap nodes"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&HeapError::Empty);
    }
}
