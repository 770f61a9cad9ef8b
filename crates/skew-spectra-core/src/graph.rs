//! Labeled simple undirected graphs.
//!
//! [`Graph`] is an immutable value: a vertex count and a normalized edge set.
//! Every downstream stage of the pipeline consumes graphs read-only.

use serde::{Deserialize, Serialize};

/// A labeled simple undirected graph on `n` vertices.
///
/// Edges are stored as `(i, j)` pairs with `i < j`, sorted lexicographically
/// and free of duplicates. Construction normalizes the input; the graph is
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Graph {
    n: usize,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Creates a graph, normalizing the edge list (orienting pairs `i < j`,
    /// sorting, removing duplicates). Endpoints must be distinct vertices
    /// below `n`.
    ///
    /// # Panics
    ///
    /// Panics if an edge is a self-loop or references a vertex `>= n`.
    /// Callers in this crate only construct edges from enumerated pairs,
    /// which satisfy the contract by construction.
    #[must_use]
    pub fn new(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut edges: Vec<(usize, usize)> = edges
            .into_iter()
            .map(|(i, j)| if i < j { (i, j) } else { (j, i) })
            .collect();
        for &(i, j) in &edges {
            assert!(i < j && j < n, "invalid edge ({i}, {j}) for n = {n}");
        }
        edges.sort_unstable();
        edges.dedup();
        Self { n, edges }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The normalized edge list.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Per-vertex neighbor lists.
    #[must_use]
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.n];
        for &(i, j) in &self.edges {
            adj[i].push(j);
            adj[j].push(i);
        }
        adj
    }

    /// Vertex degrees, indexed by vertex.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        let mut deg = vec![0usize; self.n];
        for &(i, j) in &self.edges {
            deg[i] += 1;
            deg[j] += 1;
        }
        deg
    }

    /// Whether every vertex is reachable from vertex 0.
    ///
    /// The empty graph on 0 vertices and the single-vertex graph count as
    /// connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        if self.n <= 1 {
            return true;
        }
        let adj = self.adjacency();
        let mut seen = vec![false; self.n];
        let mut stack = vec![0usize];
        seen[0] = true;
        let mut count = 1usize;
        while let Some(v) = stack.pop() {
            for &w in &adj[v] {
                if !seen[w] {
                    seen[w] = true;
                    count += 1;
                    stack.push(w);
                }
            }
        }
        count == self.n
    }

    /// Human-readable edge list, e.g. `"0-1, 1-2"`.
    #[must_use]
    pub fn edge_string(&self) -> String {
        if self.edges.is_empty() {
            return "∅ (no edges)".to_string();
        }
        self.edges
            .iter()
            .map(|(i, j)| format!("{i}-{j}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_edge_order_and_duplicates() {
        let g = Graph::new(4, vec![(2, 0), (0, 2), (3, 1)]);
        assert_eq!(g.edges(), &[(0, 2), (1, 3)]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn degrees_and_adjacency() {
        let g = Graph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(g.degrees(), vec![1, 2, 2, 1]);
        assert_eq!(g.adjacency()[1], vec![0, 2]);
    }

    #[test]
    fn connectivity() {
        let path = Graph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
        assert!(path.is_connected());
        let split = Graph::new(4, vec![(0, 1), (2, 3)]);
        assert!(!split.is_connected());
        let empty = Graph::new(3, vec![]);
        assert!(!empty.is_connected());
        assert!(Graph::new(1, vec![]).is_connected());
    }

    #[test]
    fn edge_string_rendering() {
        let g = Graph::new(3, vec![(1, 2), (0, 1)]);
        assert_eq!(g.edge_string(), "0-1, 1-2");
        assert_eq!(Graph::new(3, vec![]).edge_string(), "∅ (no edges)");
    }
}
