//! Recognition of well-known graph families.
//!
//! Each family is a closed-form structural predicate over edge count, degree
//! sequence, and connectivity. Matching is first-win in a fixed order, from
//! most specific to least: a connected 2-regular graph is both "regular" and
//! "cycle", and must be reported as the cycle. The triangle matches both
//! "complete" and "cycle"; complete is checked first, so `K_3` wins.

use serde::Serialize;

use crate::graph::Graph;

/// A recognized graph family with its structural parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum GraphFamily {
    /// No edges at all.
    Empty,
    /// Every pair of vertices adjacent.
    Complete,
    /// Single connected cycle through every vertex.
    Cycle,
    /// Single open chain through every vertex.
    Path,
    /// One hub adjacent to every leaf.
    Star,
    /// Hub plus an outer cycle, each rim vertex of degree 3.
    Wheel,
    /// Two parallel paths joined by rungs.
    Ladder,
    /// Every vertex of equal nonzero degree.
    Regular {
        /// The common degree.
        degree: usize,
    },
    /// Connected and acyclic.
    Tree,
}

impl GraphFamily {
    /// Short machine tag, e.g. `"cycle"`.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Complete => "complete",
            Self::Cycle => "cycle",
            Self::Path => "path",
            Self::Star => "star",
            Self::Wheel => "wheel",
            Self::Ladder => "ladder",
            Self::Regular { .. } => "regular",
            Self::Tree => "tree",
        }
    }

    /// Human-readable label for a graph on `n` vertices, e.g.
    /// `"Cycle graph C_5"`.
    #[must_use]
    pub fn label(&self, n: usize) -> String {
        match self {
            Self::Empty => format!("Empty graph E_{n}"),
            Self::Complete => format!("Complete graph K_{n}"),
            Self::Cycle => format!("Cycle graph C_{n}"),
            Self::Path => format!("Path graph P_{n}"),
            Self::Star => format!("Star graph K_{{1,{}}}", n - 1),
            Self::Wheel => format!("Wheel graph W_{n}"),
            Self::Ladder => format!("Ladder graph L_{}", n / 2),
            Self::Regular { degree } => format!("{degree}-regular graph on {n} vertices"),
            Self::Tree => format!("Tree on {n} vertices"),
        }
    }
}

/// Attempts to match `graph` against the known families, first-win.
///
/// Order: empty, complete, cycle, path, star, wheel, ladder, regular, tree.
#[must_use]
pub fn identify(graph: &Graph) -> Option<GraphFamily> {
    let n = graph.vertex_count();
    let m = graph.edge_count();
    if n == 0 {
        return None;
    }
    let degrees = graph.degrees();

    if m == 0 {
        return Some(GraphFamily::Empty);
    }
    if m == n * (n - 1) / 2 {
        return Some(GraphFamily::Complete);
    }

    let connected = graph.is_connected();
    let count_of = |d: usize| degrees.iter().filter(|&&x| x == d).count();

    // Cycle: n edges, all degrees 2, one component.
    if connected && m == n && degrees.iter().all(|&d| d == 2) {
        return Some(GraphFamily::Cycle);
    }

    // Path: tree with two endpoints and a chain between them.
    if connected && m == n - 1 && n >= 2 && count_of(1) == 2 && count_of(2) == n - 2 {
        return Some(GraphFamily::Path);
    }

    // Star: one hub of full degree, every other vertex a leaf.
    if connected && m == n - 1 && n >= 3 && count_of(n - 1) == 1 && count_of(1) == n - 1 {
        return Some(GraphFamily::Star);
    }

    // Wheel: hub joined to an outer cycle of rim vertices.
    if connected && n >= 4 && m == 2 * (n - 1) && count_of(n - 1) == 1 && count_of(3) == n - 1 {
        return Some(GraphFamily::Wheel);
    }

    // Ladder: two rails of n/2 vertices plus connecting rungs.
    if connected
        && n >= 4
        && n % 2 == 0
        && m == 3 * n / 2 - 2
        && degrees.iter().all(|&d| d == 2 || d == 3)
    {
        return Some(GraphFamily::Ladder);
    }

    if degrees.iter().all(|&d| d == degrees[0]) && degrees[0] > 0 {
        return Some(GraphFamily::Regular { degree: degrees[0] });
    }

    if connected && m == n - 1 {
        return Some(GraphFamily::Tree);
    }

    None
}
