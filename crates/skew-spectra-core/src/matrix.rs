//! Skew-symmetric adjacency matrices.

use crate::graph::Graph;

/// The signed adjacency matrix of a graph: `A[i][j] = +1` and
/// `A[j][i] = -1` for each edge `(i, j)` with `i < j`, zero elsewhere.
///
/// Invariant: `A = -Aᵗ`, diagonal all zero. Real skew-symmetric matrices
/// have purely imaginary or zero eigenvalues, which is what makes the
/// downstream classification tractable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkewMatrix {
    n: usize,
    entries: Vec<i64>,
}

impl SkewMatrix {
    /// Builds the skew-symmetric matrix for `graph`. Pure, no failure modes.
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let mut entries = vec![0i64; n * n];
        for &(i, j) in graph.edges() {
            entries[i * n + j] = 1;
            entries[j * n + i] = -1;
        }
        Self { n, entries }
    }

    /// Matrix dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Entry at row `i`, column `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.entries[i * self.n + j]
    }

    /// Row-major copy as nested vectors, for the output document.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<i64>> {
        (0..self.n)
            .map(|i| self.entries[i * self.n..(i + 1) * self.n].to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skew_symmetry_invariant() {
        let g = Graph::new(4, vec![(0, 1), (1, 3), (2, 3)]);
        let a = SkewMatrix::from_graph(&g);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(a.get(i, j), -a.get(j, i));
            }
            assert_eq!(a.get(i, i), 0);
        }
        assert_eq!(a.get(0, 1), 1);
        assert_eq!(a.get(1, 0), -1);
        assert_eq!(a.get(0, 2), 0);
    }

    #[test]
    fn rows_roundtrip() {
        let g = Graph::new(2, vec![(0, 1)]);
        let a = SkewMatrix::from_graph(&g);
        assert_eq!(a.rows(), vec![vec![0, 1], vec![-1, 0]]);
    }
}
