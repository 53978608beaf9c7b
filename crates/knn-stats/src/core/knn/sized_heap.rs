//! A helper struct for maintaining a max heap of a fixed size.

use std::collections::BinaryHeap;

/// The most items for which a `SizedHeap` reserves room up front.
const MAX_RESERVED: usize = 1 << 12;

/// A max heap that keeps only the `k` smallest items pushed onto it.
///
/// This is useful for maintaining the `k` nearest neighbors in a search.
#[derive(Debug, Clone)]
pub struct SizedHeap<T: Ord> {
    /// The heap of items.
    heap: BinaryHeap<T>,
    /// The maximum size of the heap.
    k: usize,
}

impl<T: Ord> SizedHeap<T> {
    /// Creates a new `SizedHeap` holding at most `k` items.
    ///
    /// `k` only bounds the size of the heap; any `k` is valid.
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(k.min(MAX_RESERVED)),
            k,
        }
    }

    /// Returns the maximum size of the heap.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Pushes an item onto the heap, maintaining the max size.
    pub fn push(&mut self, item: T) {
        if self.heap.len() < self.k {
            self.heap.push(item);
        } else if let Some(top) = self.heap.peek() {
            if item < *top {
                self.heap.pop();
                self.heap.push(item);
            }
        }
    }

    /// Peeks at the largest item in the heap.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Returns the number of items in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns whether the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns whether the heap is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.heap.len() == self.k
    }

    /// Merges two heaps into one, keeping the `k` smallest items of both.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for item in other.heap {
            self.push(item);
        }
        self
    }

    /// Consumes the heap and returns its items in ascending order.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }
}
