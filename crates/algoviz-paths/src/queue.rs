//! Open set for Dijkstra and A*: a min-heap keyed by cost with FIFO
//! tie-breaking.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    key: i32,
    /// Insertion counter; among equal keys the earlier entry wins.
    seq: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest key, then the
        // oldest entry.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of arena indices.
///
/// A node may be pushed again with a better key; the stale entry is left in
/// place and must be skipped by the caller when popped.
#[derive(Debug, Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl OpenSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize, key: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { key, seq, idx });
    }

    /// Pop the entry with the lowest key, returning `(idx, key)`.
    pub(crate) fn pop(&mut self) -> Option<(usize, i32)> {
        self.heap.pop().map(|e| (e.idx, e.key))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_key_first() {
        let mut q = OpenSet::new();
        q.push(1, 30);
        q.push(2, 10);
        q.push(3, 20);
        assert_eq!(q.pop(), Some((2, 10)));
        assert_eq!(q.pop(), Some((3, 20)));
        assert_eq!(q.pop(), Some((1, 30)));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn equal_keys_are_fifo() {
        let mut q = OpenSet::new();
        for idx in [7, 3, 9, 1] {
            q.push(idx, 5);
        }
        assert_eq!(q.len(), 4);
        let order: Vec<usize> = std::iter::from_fn(|| q.pop().map(|(i, _)| i)).collect();
        assert_eq!(order, vec![7, 3, 9, 1]);
    }
}
