//! Index arithmetic for an implicit complete binary tree.
//!
//! A binary heap stores its tree in a flat array: the root lives at index 0
//! and the children of the node at `i` live at `2i + 1` and `2i + 2`. These
//! functions are pure and are what the repair loops in
//! [`FixedBinaryHeap`](crate::FixedBinaryHeap) walk over.
//!
//! ```text
//! level 0:            0
//! level 1:      1            2
//! level 2:   3     4      5     6
//! ```

/// Index of the parent of `index`, or `None` for the root.
///
/// # Example
///
/// ```rust
/// use fixed_binary_heap::index::parent;
///
/// assert_eq!(parent(0), None);
/// assert_eq!(parent(1), Some(0));
/// assert_eq!(parent(2), Some(0));
/// assert_eq!(parent(6), Some(2));
/// ```
#[inline]
pub fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Index of the left child of `index`.
#[inline]
pub fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Index of the right child of `index`.
#[inline]
pub fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Depth of `index` in the tree, with the root at level 0.
///
/// This is `floor(log2(index + 1))`. The addition is widened so that
/// `usize::MAX` does not overflow.
///
/// # Example
///
/// ```rust
/// use fixed_binary_heap::index::level;
///
/// assert_eq!(level(0), 0);
/// assert_eq!(level(2), 1);
/// assert_eq!(level(3), 2);
/// ```
#[inline]
pub fn level(index: usize) -> u32 {
    (index as u128 + 1).ilog2()
}
