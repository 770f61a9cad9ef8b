//! Exhaustive enumeration of labeled simple graphs.
//!
//! For `n` vertices there are `C(n,2)` possible edges and therefore
//! `2^(n(n-1)/2)` labeled graphs. The iterator walks a bitmask counter over
//! the edge positions, yielding every subset exactly once.
//!
//! Expected counts (informational, not enforced):
//!
//! | n | labeled graphs |
//! |---|----------------|
//! | 3 | 8              |
//! | 4 | 64             |
//! | 5 | 1 024          |
//! | 6 | 32 768         |
//! | 7 | 2 097 152      |
//! | 8 | 268 435 456    |
//!
//! Growth is exponential; callers bound cost by bounding `n`.

use crate::graph::Graph;

/// Iterator over every edge subset on `n` labeled vertices.
///
/// Yields `2^(n(n-1)/2)` graphs in bitmask order. `n = 0` and `n = 1` yield
/// exactly the edgeless graph.
#[derive(Debug)]
pub struct EdgeSubsets {
    n: usize,
    pairs: Vec<(usize, usize)>,
    next_mask: u64,
    done: bool,
}

impl EdgeSubsets {
    /// Creates the enumerator for `n` vertices.
    ///
    /// Supports up to 64 candidate edges (`n <= 11`), far beyond what is
    /// computationally reachable anyway.
    #[must_use]
    pub fn new(n: usize) -> Self {
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                pairs.push((i, j));
            }
        }
        assert!(pairs.len() <= 64, "edge set too large for bitmask enumeration");
        Self {
            n,
            pairs,
            next_mask: 0,
            done: false,
        }
    }

    /// Total number of graphs this enumerator will yield.
    #[must_use]
    pub fn cardinality(&self) -> u128 {
        1u128 << self.pairs.len()
    }
}

impl Iterator for EdgeSubsets {
    type Item = Graph;

    fn next(&mut self) -> Option<Graph> {
        if self.done {
            return None;
        }
        let mask = self.next_mask;
        let edges = self
            .pairs
            .iter()
            .enumerate()
            .filter(|(k, _)| mask & (1u64 << k) != 0)
            .map(|(_, &e)| e);
        let graph = Graph::new(self.n, edges);

        if self.pairs.is_empty() || mask == (u64::MAX >> (64 - self.pairs.len())) {
            self.done = true;
        } else {
            self.next_mask = mask + 1;
        }
        Some(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cardinality_matches_formula() {
        for n in 0usize..=5 {
            let expected = 1u128 << (n * n.saturating_sub(1) / 2);
            let count = EdgeSubsets::new(n).count() as u128;
            assert_eq!(count, expected, "n = {n}");
            assert_eq!(EdgeSubsets::new(n).cardinality(), expected);
        }
    }

    #[test]
    fn subsets_are_distinct_and_valid() {
        let mut seen = HashSet::new();
        for g in EdgeSubsets::new(4) {
            assert_eq!(g.vertex_count(), 4);
            for &(i, j) in g.edges() {
                assert!(i < j && j < 4);
            }
            assert!(seen.insert(g.edges().to_vec()), "duplicate subset");
        }
        assert_eq!(seen.len(), 64);
    }

    #[test]
    fn zero_vertices_yields_single_empty_graph() {
        let graphs: Vec<_> = EdgeSubsets::new(0).collect();
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].edge_count(), 0);
    }
}
