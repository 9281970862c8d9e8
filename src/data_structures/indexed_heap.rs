use std::fmt::Debug;

/// Heap key with an explicit infinite sentinel
///
/// The derived ordering compares finite keys by value and ranks `Infinite`
/// above every `Finite`, which is exactly the "no finite distance known
/// yet" behavior Dijkstra needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key<W> {
    Finite(W),
    Infinite,
}

/// Marker in the position index for vertices no longer in the heap
const ABSENT: usize = usize::MAX;

/// Binary min-heap over vertex ids, augmented with a position index
///
/// `positions[v]` tracks the slot of vertex `v` in the backing array. That
/// index is what makes decrease-key possible in O(log n): the entry to sift
/// is found in O(1) instead of a linear search, and membership queries are
/// O(1). A run of the heap-based strategy creates one of these, drains it,
/// and drops it.
///
/// Invariant: `entries[positions[v]].0 == v` for every member vertex `v`.
#[derive(Debug)]
pub struct IndexedMinHeap<P>
where
    P: Ord + Copy + Debug,
{
    /// Backing array satisfying the min-heap property on keys
    entries: Vec<(usize, P)>,

    /// positions[v] = slot of vertex v in `entries`, or `ABSENT`
    positions: Vec<usize>,
}

impl<P> IndexedMinHeap<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a heap holding every vertex in `0..vertex_count` at `initial`
    pub fn new(vertex_count: usize, initial: P) -> Self {
        IndexedMinHeap {
            entries: (0..vertex_count).map(|v| (v, initial)).collect(),
            positions: (0..vertex_count).collect(),
        }
    }

    /// Returns the number of vertices still in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the vertex is still in the heap
    pub fn contains(&self, vertex: usize) -> bool {
        match self.positions.get(vertex) {
            Some(&slot) => slot != ABSENT,
            None => false,
        }
    }

    /// Returns the current key of a member vertex
    pub fn key_of(&self, vertex: usize) -> Option<P> {
        match self.positions.get(vertex) {
            Some(&slot) if slot != ABSENT => Some(self.entries[slot].1),
            _ => None,
        }
    }

    /// Lowers a member's key and restores heap order by sifting up
    ///
    /// Returns false without touching the heap when `vertex` is not a
    /// member or `new_key` is not strictly below its current key (the
    /// monotonic-decrease contract).
    pub fn decrease_key(&mut self, vertex: usize, new_key: P) -> bool {
        let slot = match self.positions.get(vertex) {
            Some(&slot) if slot != ABSENT => slot,
            _ => return false,
        };
        if new_key >= self.entries[slot].1 {
            return false;
        }

        self.entries[slot].1 = new_key;
        self.sift_up(slot);
        true
    }

    /// Removes and returns the entry with the smallest key
    ///
    /// Ties between equal keys are broken arbitrarily. Returns `None` on an
    /// empty heap. The last entry moves to the root and sifts down.
    pub fn extract_min(&mut self) -> Option<(usize, P)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let (vertex, key) = self.entries.pop()?;
        self.positions[vertex] = ABSENT;

        if !self.entries.is_empty() {
            self.positions[self.entries[0].0] = 0;
            self.sift_down(0);
        }

        Some((vertex, key))
    }

    /// Swap two slots, keeping the position index in sync
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions[self.entries[a].0] = a;
        self.positions[self.entries[b].0] = b;
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].1 >= self.entries[parent].1 {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < self.entries.len() && self.entries[left].1 < self.entries[smallest].1 {
                smallest = left;
            }
            if right < self.entries.len() && self.entries[right].1 < self.entries[smallest].1 {
                smallest = right;
            }
            if smallest == slot {
                break;
            }

            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }
}
