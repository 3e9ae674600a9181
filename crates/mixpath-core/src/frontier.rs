//! FIFO frontier with fingerprint dedup.
//!
//! Uses a `BTreeSet`-based visited set (not `HashSet`) to keep the core free
//! of hash-order effects.

use std::collections::{BTreeSet, VecDeque};

use crate::goal::Fingerprint;

/// Breadth-first frontier manager.
///
/// Maintains:
/// - A `VecDeque` of node indices, popped in insertion order
/// - A `BTreeSet<Fingerprint>` of every state ever enqueued
///
/// A fingerprint is marked visited when its node is pushed, not when it is
/// popped, so each state enters the queue at most once.
#[derive(Debug, Default)]
pub struct BreadthFirstFrontier {
    queue: VecDeque<usize>,
    visited: BTreeSet<Fingerprint>,
    high_water: usize,
}

impl BreadthFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a node and mark its fingerprint visited.
    ///
    /// Returns `false` if the fingerprint was already visited (node not added).
    pub fn push(&mut self, node: usize, fingerprint: Fingerprint) -> bool {
        if !self.visited.insert(fingerprint) {
            return false;
        }
        self.queue.push_back(node);
        self.high_water = self.high_water.max(self.queue.len());
        true
    }

    /// Pop the earliest-enqueued node.
    #[must_use]
    pub fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    /// Check if a fingerprint has been visited.
    #[must_use]
    pub fn is_visited(&self, fingerprint: &Fingerprint) -> bool {
        self.visited.contains(fingerprint)
    }

    /// Number of distinct fingerprints seen.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Current queue length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// High-water mark of queue length.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropertySet;
    use crate::goal::fingerprint;

    fn fp(names: &[&str]) -> Fingerprint {
        fingerprint(&PropertySet::from_names(names.iter().copied()))
    }

    #[test]
    fn pop_is_fifo() {
        let mut frontier = BreadthFirstFrontier::new();
        frontier.push(0, fp(&["A"]));
        frontier.push(1, fp(&["B"]));
        frontier.push(2, fp(&["C"]));

        assert_eq!(frontier.pop(), Some(0));
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn duplicate_fingerprint_rejected() {
        let mut frontier = BreadthFirstFrontier::new();
        assert!(frontier.push(0, fp(&["A", "B"])));
        assert!(!frontier.push(1, fp(&["B", "A"])));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.visited_count(), 1);
    }

    #[test]
    fn visited_survives_pop() {
        let mut frontier = BreadthFirstFrontier::new();
        frontier.push(0, fp(&["A"]));
        let _ = frontier.pop();
        assert!(frontier.is_empty());
        assert!(frontier.is_visited(&fp(&["A"])));
        assert!(!frontier.push(1, fp(&["A"])));
    }

    #[test]
    fn high_water_tracks_max_size() {
        let mut frontier = BreadthFirstFrontier::new();
        frontier.push(0, fp(&["A"]));
        frontier.push(1, fp(&["B"]));
        frontier.push(2, fp(&["C"]));
        assert_eq!(frontier.high_water(), 3);

        let _ = frontier.pop();
        assert_eq!(
            frontier.high_water(),
            3,
            "high water should not decrease on pop"
        );
    }
}
