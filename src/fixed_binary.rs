//! Fixed-capacity binary min-heap
//!
//! An array-backed binary min-heap whose storage is allocated once, at
//! construction, and never grows. Inserting into a full heap returns
//! [`HeapError::Full`]; removing from an empty heap returns
//! [`HeapError::Empty`]. Neither failure touches the stored elements.
//!
//! The tree is implicit in the array layout (see [`crate::index`]): after a
//! push the new node is bubbled up toward the root, and after a pop the node
//! moved into the root is bubbled down toward the leaves.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `pop`      | O(log n)   |
//! | `peek`     | O(1)       |
//! | `describe` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use fixed_binary_heap::{FixedBinaryHeap, Heap, HeapError};
//!
//! let mut heap = FixedBinaryHeap::with_capacity(5).unwrap();
//! for key in [5, 3, 8, 1, 9] {
//!     heap.push(key, key * 10).unwrap();
//! }
//! assert_eq!(heap.len(), 5);
//!
//! assert_eq!(heap.pop(), Ok((1, 10)));
//! assert_eq!(heap.pop(), Ok((3, 30)));
//! assert_eq!(heap.pop(), Ok((5, 50)));
//! assert_eq!(heap.pop(), Ok((8, 80)));
//! assert_eq!(heap.pop(), Ok((9, 90)));
//! assert_eq!(heap.pop(), Err(HeapError::Empty));
//! ```

use std::iter::FusedIterator;

use crate::index::{left_child, level, parent, right_child};
use crate::traits::{Heap, HeapError};

/// A (priority, item) pair stored in the heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node<P, T> {
    pub priority: P,
    pub item: T,
}

impl<P, T> Node<P, T> {
    pub fn new(priority: P, item: T) -> Self {
        Self { priority, item }
    }

    pub fn into_parts(self) -> (P, T) {
        (self.priority, self.item)
    }
}

/// One occupied slot as reported by [`FixedBinaryHeap::describe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a, P> {
    /// Depth of the slot, root at 0
    pub level: u32,
    /// Position in storage
    pub index: usize,
    /// Key of the node held in the slot
    pub key: &'a P,
}

/// A binary min-heap with a fixed capacity
///
/// This heap stores (priority, item) pairs and always returns the element
/// with the minimum priority first. Elements with equal priority come out in
/// an unspecified order.
///
/// The heap owns its storage exclusively; items leave it only by value, on
/// [`pop`](Heap::pop) or when the heap is consumed. It is not synchronized:
/// share it across threads behind a single external lock.
#[derive(Debug, Clone)]
pub struct FixedBinaryHeap<T, P: Ord> {
    /// Occupied slots `[0, len)`, allocated for `capacity` nodes up front
    data: Vec<Node<P, T>>,
    capacity: usize,
}

impl<T, P: Ord> Heap<T, P> for FixedBinaryHeap<T, P> {
    fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity);
        }
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| HeapError::AllocationFailed { capacity })?;
        Ok(Self { data, capacity })
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, priority: P, item: T) -> Result<(), HeapError> {
        if self.data.len() == self.capacity {
            return Err(HeapError::Full {
                capacity: self.capacity,
            });
        }

        self.data.push(Node::new(priority, item));
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.data.first().map(|node| (&node.priority, &node.item))
    }

    fn pop(&mut self) -> Result<(P, T), HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        // The last occupied node takes the root's slot
        let min = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(min.into_parts())
    }
}

impl<T, P: Ord> FixedBinaryHeap<T, P> {
    /// Move element at index up to maintain heap property
    ///
    /// Swaps with the parent only while strictly smaller, so an equal
    /// ancestor stops the walk.
    fn sift_up(&mut self, mut index: usize) {
        while let Some(up) = parent(index) {
            if self.data[index].priority < self.data[up].priority {
                self.data.swap(index, up);
                index = up;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// On a tie between the two children the left one is chosen.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = left_child(index);
            let right = right_child(index);
            let mut smallest = index;

            if left < len && self.data[left].priority < self.data[smallest].priority {
                smallest = left;
            }
            if right < len && self.data[right].priority < self.data[smallest].priority {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }

    /// Lists every occupied slot in storage order (not sorted by priority)
    ///
    /// Purely observational, used for printing and debugging.
    ///
    /// ```rust
    /// use fixed_binary_heap::{FixedBinaryHeap, Heap};
    ///
    /// let mut heap = FixedBinaryHeap::with_capacity(4).unwrap();
    /// heap.push(2, ()).unwrap();
    /// heap.push(1, ()).unwrap();
    ///
    /// let slots: Vec<_> = heap
    ///     .describe()
    ///     .iter()
    ///     .map(|s| (s.level, s.index, *s.key))
    ///     .collect();
    /// assert_eq!(slots, vec![(0, 0, 1), (1, 1, 2)]);
    /// ```
    pub fn describe(&self) -> Vec<Slot<'_, P>> {
        self.data
            .iter()
            .enumerate()
            .map(|(index, node)| Slot {
                level: level(index),
                index,
                key: &node.priority,
            })
            .collect()
    }

    /// Returns true if every parent's priority is `<=` its children's
    ///
    /// Holds after every public operation; exposed for tests and proofs.
    pub fn is_heap_ordered(&self) -> bool {
        (1..self.data.len()).all(|i| match parent(i) {
            Some(p) => self.data[p].priority <= self.data[i].priority,
            None => true,
        })
    }

    /// Iterates over the stored (priority, item) pairs in storage order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&P, &T)> + '_ {
        self.data.iter().map(|node| (&node.priority, &node.item))
    }

    /// Drops every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning its nodes in storage order
    pub fn into_vec(self) -> Vec<Node<P, T>> {
        self.data
    }

    /// Consumes the heap, yielding elements in non-decreasing priority order
    ///
    /// ```rust
    /// use fixed_binary_heap::{FixedBinaryHeap, Heap};
    ///
    /// let mut heap = FixedBinaryHeap::with_capacity(3).unwrap();
    /// heap.push(4, 'd').unwrap();
    /// heap.push(2, 'b').unwrap();
    /// heap.push(3, 'c').unwrap();
    ///
    /// let sorted: Vec<_> = heap.into_sorted_iter().collect();
    /// assert_eq!(sorted, vec![(2, 'b'), (3, 'c'), (4, 'd')]);
    /// ```
    pub fn into_sorted_iter(self) -> IntoIterSorted<T, P> {
        IntoIterSorted { inner: self }
    }
}

/// Iterator returned by [`FixedBinaryHeap::into_sorted_iter`]
#[derive(Debug, Clone)]
pub struct IntoIterSorted<T, P: Ord> {
    inner: FixedBinaryHeap<T, P>,
}

impl<T, P: Ord> Iterator for IntoIterSorted<T, P> {
    type Item = (P, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T, P: Ord> ExactSizeIterator for IntoIterSorted<T, P> {}

impl<T, P: Ord> FusedIterator for IntoIterSorted<T, P> {}
