//! Fixed-Capacity Binary Min-Heap
//!
//! This crate provides an array-backed binary min-heap whose capacity is fixed
//! when it is created. Storage is allocated once and never grows.
//!
//! # Features
//!
//! - **O(log n) push and pop**: bubble-up after insertion, bubble-down after
//!   removal of the minimum
//! - **Explicit failures**: pushing into a full heap and popping from an empty
//!   one return [`HeapError`] instead of silently dropping data or handing back
//!   a sentinel
//! - **Opaque payloads**: each element is a (priority, item) pair; only the
//!   priority takes part in ordering
//! - **Diagnostics**: [`FixedBinaryHeap::describe`] reports the level, index and
//!   priority of every occupied slot in storage order
//!
//! # Example
//!
//! ```rust
//! use fixed_binary_heap::{FixedBinaryHeap, Heap, HeapError};
//!
//! let mut heap = FixedBinaryHeap::with_capacity(2).unwrap();
//! heap.push(10, "ten").unwrap();
//! heap.push(20, "twenty").unwrap();
//! assert_eq!(heap.push(5, "five"), Err(HeapError::Full { capacity: 2 }));
//! assert_eq!(heap.len(), 2);
//!
//! assert_eq!(heap.pop(), Ok((10, "ten")));
//! assert_eq!(heap.pop(), Ok((20, "twenty")));
//! assert_eq!(heap.pop(), Err(HeapError::Empty));
//! ```

pub mod fixed_binary;
pub mod index;
pub mod traits;

// Re-export the main types for convenience
pub use fixed_binary::{FixedBinaryHeap, IntoIterSorted, Node, Slot};
pub use traits::{Heap, HeapError};
