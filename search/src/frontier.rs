//! Frontier disciplines: LIFO stack, FIFO queue, and a priority queue keyed
//! by a caller-supplied evaluation function.
//!
//! No discipline supports in-place priority update. The same state may sit
//! in the frontier several times with different keys; the search loop drops
//! stale entries at pop time via the explored set.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// The open set of generated-but-not-yet-expanded items.
pub trait Frontier<T> {
    /// Add an item.
    fn push(&mut self, item: T);

    /// Remove and return the next item under this discipline.
    fn pop(&mut self) -> Option<T>;

    /// Current number of entries.
    fn len(&self) -> usize;

    /// Whether the frontier is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High-water mark of frontier size.
    fn high_water(&self) -> u64;
}

/// LIFO frontier: pop returns the most recently pushed item.
#[derive(Debug, Clone)]
pub struct StackFrontier<T> {
    items: Vec<T>,
    high_water: u64,
}

impl<T> StackFrontier<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            high_water: 0,
        }
    }
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
        self.high_water = self.high_water.max(self.items.len() as u64);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// FIFO frontier: pop returns the earliest pushed item.
#[derive(Debug, Clone)]
pub struct QueueFrontier<T> {
    items: VecDeque<T>,
    high_water: u64,
}

impl<T> QueueFrontier<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            high_water: 0,
        }
    }
}

impl<T> Default for QueueFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
        self.high_water = self.high_water.max(self.items.len() as u64);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// Ordering key of a priority entry: `(f, insertion_order)`.
///
/// Lower `f` first; equal `f` pops in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PriorityKey {
    pub f: u64,
    pub insertion_order: u64,
}

/// A heap entry wrapping an item with its key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<PriorityKey>` to get
/// min-heap behavior (lowest `f` first).
#[derive(Debug)]
struct PriorityEntry<T> {
    key: Reverse<PriorityKey>,
    item: T,
}

impl<T> PartialEq for PriorityEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for PriorityEntry<T> {}

impl<T> PartialOrd for PriorityEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for PriorityEntry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority frontier ordered by an evaluation function `f(item)`.
///
/// `f` is evaluated once, at push time. Pop returns the entry with minimum
/// `f`; ties are broken by insertion order so runs are deterministic.
pub struct PriorityFrontier<T, F> {
    heap: BinaryHeap<PriorityEntry<T>>,
    eval: F,
    next_insertion: u64,
    high_water: u64,
}

impl<T, F> PriorityFrontier<T, F>
where
    F: Fn(&T) -> u64,
{
    /// Create an empty frontier ordered by `eval`.
    #[must_use]
    pub fn new(eval: F) -> Self {
        Self {
            heap: BinaryHeap::new(),
            eval,
            next_insertion: 0,
            high_water: 0,
        }
    }

    /// Key of the entry `pop` would return next.
    #[must_use]
    pub fn peek_key(&self) -> Option<PriorityKey> {
        self.heap.peek().map(|e| e.key.0)
    }
}

impl<T, F> Frontier<T> for PriorityFrontier<T, F>
where
    F: Fn(&T) -> u64,
{
    fn push(&mut self, item: T) {
        let key = PriorityKey {
            f: (self.eval)(&item),
            insertion_order: self.next_insertion,
        };
        self.next_insertion += 1;
        self.heap.push(PriorityEntry {
            key: Reverse(key),
            item,
        });
        self.high_water = self.high_water.max(self.heap.len() as u64);
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<T, F> std::fmt::Debug for PriorityFrontier<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityFrontier")
            .field("len", &self.heap.len())
            .field("next_insertion", &self.next_insertion)
            .field("high_water", &self.high_water)
            .finish_non_exhaustive()
    }
}
