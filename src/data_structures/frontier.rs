use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(distance, node)` candidates backed by a binary heap.
///
/// Duplicate entries for a node are allowed; callers discard stale ones when
/// they are popped. Entries with equal distance come out smallest node first.
#[derive(Debug)]
pub struct Frontier<N, W>
where
    N: Clone + Ord + Debug,
    W: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(W, N)>>,
}

impl<N, W> Frontier<N, W>
where
    N: Clone + Ord + Debug,
    W: Copy + Ord + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a frontier holding the single entry `(distance, node)`
    pub fn starting_at(node: N, distance: W) -> Self {
        let mut frontier = Self::new();
        frontier.push(node, distance);
        frontier
    }

    /// Returns true if no entries are left
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale duplicates included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a candidate distance for a node
    pub fn push(&mut self, node: N, distance: W) {
        self.heap.push(Reverse((distance, node)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(N, W)> {
        self.heap.pop().map(|Reverse((distance, node))| (node, distance))
    }

    /// Returns the entry with the smallest distance without removing it
    pub fn peek(&self) -> Option<(&N, W)> {
        self.heap.peek().map(|Reverse((distance, node))| (node, *distance))
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<N, W> Default for Frontier<N, W>
where
    N: Clone + Ord + Debug,
    W: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn pops_in_distance_order_with_node_tie_break() {
        let mut frontier = Frontier::new();
        frontier.push("c", OrderedFloat(2.0));
        frontier.push("b", OrderedFloat(1.0));
        frontier.push("a", OrderedFloat(2.0));
        frontier.push("b", OrderedFloat(0.5));

        assert_eq!(frontier.len(), 4);
        assert_eq!(frontier.peek(), Some((&"b", OrderedFloat(0.5))));
        assert_eq!(frontier.pop(), Some(("b", OrderedFloat(0.5))));
        assert_eq!(frontier.pop(), Some(("b", OrderedFloat(1.0))));
        assert_eq!(frontier.pop(), Some(("a", OrderedFloat(2.0))));
        assert_eq!(frontier.pop(), Some(("c", OrderedFloat(2.0))));
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);

        frontier.push("d", OrderedFloat(3.0));
        frontier.clear();
        assert!(frontier.is_empty());
    }
}
