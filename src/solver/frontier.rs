//! Max-priority search frontier
//!
//! A `BinaryHeap` wrapper with a stable tie rule: entries of equal priority
//! pop in insertion order. The heap alone would break ties arbitrarily,
//! which makes search results depend on heap internals; the insertion
//! sequence number pins them down.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Priority queue popping highest priority first, FIFO among equals
#[derive(Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

#[derive(Debug)]
struct Entry<T> {
    priority: u32,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher priority wins; among equals the earlier insertion wins
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> Frontier<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert an item with a priority
    pub fn push(&mut self, item: T, priority: u32) {
        let entry = Entry {
            priority,
            seq: self.next_seq,
            item,
        };
        self.next_seq += 1;
        self.heap.push(entry);
    }

    /// Remove and return the best item, if any
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
