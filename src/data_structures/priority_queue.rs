use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue used as the search frontier
///
/// Entries are popped by ascending priority, then by ascending item, so equal
/// priorities come out in a fixed order. Decrease-key is done by pushing the
/// item again; callers drop stale entries on pop.
#[derive(Debug)]
pub struct FrontierQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> FrontierQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        FrontierQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a new empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        FrontierQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Inserts an item, or a better priority for an item already queued
    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the entry with the lowest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }
}

impl<V, P> Default for FrontierQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
