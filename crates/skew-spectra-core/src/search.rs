//! The exhaustive discovery pipeline.
//!
//! For a fixed vertex count the search enumerates every labeled graph,
//! deduplicates by isomorphism fingerprint, and computes each class
//! representative's exact characteristic polynomial. Cospectral classes
//! collapse into one [`PolynomialGroup`], and the expensive tail of the
//! chain runs once per group, not once per member: factorization,
//! solvability gate, eigenvalue classification. A group's verdict applies
//! to all of its members.
//!
//! Every unique graph lands in exactly one statistics bucket:
//!
//! - `accepted` — in a group that passed the gate with all eigenvalues in
//!   closed form;
//! - `known_family` — member of a recognized family inside an admitted
//!   group (when family inclusion is enabled);
//! - `degree_skipped` — an irreducible factor of the group's polynomial
//!   exceeded the gate threshold;
//! - `solve_failed` — analysis errored or some eigenvalue resisted a
//!   closed form.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::canonical::{CanonicalKey, Canonicalizer, ExactLabeling, RefinementHash};
use crate::config::{CanonStrategy, SearchConfig};
use crate::eigen::{classify, Classification, EigenvalueRecord};
use crate::enumerate::EdgeSubsets;
use crate::factor::{factor, Factorization};
use crate::family::{identify, GraphFamily};
use crate::gate::{self, GateDecision};
use crate::graph::Graph;
use crate::matrix::SkewMatrix;
use crate::poly::CharPoly;

/// Full analysis of one graph that survived the pipeline.
#[derive(Debug, Clone)]
pub struct GraphAnalysis {
    /// The analyzed graph.
    pub graph: Graph,
    /// Characteristic polynomial text, the grouping key.
    pub polynomial: String,
    /// Factored form of the polynomial.
    pub factored: String,
    /// Recognized family, if any.
    pub family: Option<GraphFamily>,
    /// Solved and classified eigenvalues.
    pub classification: Classification,
}

/// Pipeline verdict for one graph.
#[derive(Debug, Clone)]
pub enum GraphVerdict {
    /// All eigenvalues resolved; included in the results.
    Accepted {
        /// The full analysis.
        analysis: Box<GraphAnalysis>,
        /// Whether acceptance came through the family bypass.
        known_family: bool,
    },
    /// An irreducible factor exceeded the gate threshold.
    DegreeSkipped {
        /// Degree of the largest offending factor.
        factor_degree: usize,
    },
    /// Analysis failed or some eigenvalue has no closed form.
    SolveFailed {
        /// Human-readable cause, for logging.
        reason: String,
    },
}

/// Outcome of gating and classifying one characteristic polynomial.
enum Resolution {
    Solved(Classification),
    DegreeSkipped { factor_degree: usize },
    NotClosed,
}

/// Gate and classification stage, shared by the per-graph entry point and
/// the per-group search loop. `bypass` disables the gate and the niceness
/// requirement for recognized families.
fn resolve(factorization: &Factorization, bypass: bool, config: &SearchConfig) -> Resolution {
    if !bypass {
        if let GateDecision::Skip { factor_degree } =
            gate::evaluate(&factorization.x_factors, config)
        {
            return Resolution::DegreeSkipped { factor_degree };
        }
    }
    let classification = classify(factorization, config);
    if !bypass && !classification.all_nice {
        return Resolution::NotClosed;
    }
    Resolution::Solved(classification)
}

/// Analyzes a single graph through the full chain.
///
/// Recognized families bypass the degree gate when the configuration
/// includes them; their eigenvalues are still solved, numerically where
/// necessary. All internal failures fold into [`GraphVerdict::SolveFailed`].
#[must_use]
pub fn analyze_graph(graph: &Graph, config: &SearchConfig) -> GraphVerdict {
    let matrix = SkewMatrix::from_graph(graph);
    let charpoly = match CharPoly::compute(&matrix) {
        Ok(p) => p,
        Err(e) => return GraphVerdict::SolveFailed { reason: e.to_string() },
    };
    let factorization = match factor(&charpoly) {
        Ok(f) => f,
        Err(e) => return GraphVerdict::SolveFailed { reason: e.to_string() },
    };

    let family = identify(graph);
    let bypass = family.is_some() && config.include_known_families;

    match resolve(&factorization, bypass, config) {
        Resolution::Solved(classification) => GraphVerdict::Accepted {
            analysis: Box::new(GraphAnalysis {
                graph: graph.clone(),
                polynomial: charpoly.text(),
                factored: factorization.render(),
                family,
                classification,
            }),
            known_family: bypass,
        },
        Resolution::DegreeSkipped { factor_degree } => {
            GraphVerdict::DegreeSkipped { factor_degree }
        }
        Resolution::NotClosed => GraphVerdict::SolveFailed {
            reason: "eigenvalues lack a recognized closed form".to_string(),
        },
    }
}

/// One isomorphism class inside a polynomial group.
#[derive(Debug, Clone)]
pub struct GroupMember {
    /// The class representative, first in enumeration order.
    pub graph: Graph,
    /// Recognized family, if any.
    pub family: Option<GraphFamily>,
}

/// All isomorphism classes sharing one characteristic polynomial.
///
/// The first member is the group's representative for reporting; the
/// group's size is the number of cospectral classes it holds. The gate and
/// classifier run once per group, so every member shares one verdict.
#[derive(Debug, Clone)]
pub struct PolynomialGroup {
    /// The shared polynomial text.
    pub polynomial: String,
    /// Factored form.
    pub factored: String,
    /// Edge count, shared by every member (it is a polynomial coefficient).
    pub edge_count: usize,
    /// The shared spectrum.
    pub eigenvalues: Vec<EigenvalueRecord>,
    /// Whether every eigenvalue is a nice closed form.
    pub all_nice: bool,
    /// Whether the group was admitted through the family bypass.
    pub known_family: bool,
    /// Cospectral isomorphism classes, in enumeration order.
    pub members: Vec<GroupMember>,
}

/// Bucket counters for one run. The four outcome buckets partition the
/// unique graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Labeled graphs enumerated.
    pub total_graphs: u128,
    /// Isomorphism classes after deduplication.
    pub unique_graphs: usize,
    /// Accepted through the gate.
    pub accepted: usize,
    /// Accepted through the family bypass.
    pub known_family: usize,
    /// Rejected by the degree gate.
    pub degree_skipped: usize,
    /// Analysis failure or no closed form.
    pub solve_failed: usize,
}

/// Result of one exhaustive run.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Vertex count searched.
    pub n: usize,
    /// Bucket counters.
    pub stats: SearchStats,
    /// Accepted graphs grouped by polynomial, sorted by edge count then
    /// polynomial text.
    pub groups: Vec<PolynomialGroup>,
}

fn canonicalizer(strategy: CanonStrategy) -> Box<dyn Canonicalizer> {
    match strategy {
        CanonStrategy::RefinementHash => Box::new(RefinementHash),
        CanonStrategy::ExactLabeling => Box::new(ExactLabeling),
    }
}

/// Runs the exhaustive search over all graphs on `n` vertices.
///
/// Deterministic: identical inputs produce identical reports, including
/// ordering. Cost grows as `2^(n(n-1)/2)`; callers bound `n`.
///
/// # Panics
///
/// Panics if `n > 11` (the edge bitmask would overflow), far beyond any
/// feasible run.
#[must_use]
pub fn search(n: usize, config: &SearchConfig) -> SearchReport {
    let started = std::time::Instant::now();
    let canon = canonicalizer(config.canonicalization);
    let subsets = EdgeSubsets::new(n);
    let total_graphs = subsets.cardinality();
    info!(n, total_graphs, "starting exhaustive search");

    // Deduplicate, keeping the first representative per fingerprint.
    let mut seen: HashSet<CanonicalKey> = HashSet::new();
    let mut representatives: Vec<Graph> = Vec::new();
    for graph in subsets {
        if seen.insert(canon.key(&graph)) {
            representatives.push(graph);
        }
    }

    let mut stats = SearchStats {
        total_graphs,
        unique_graphs: representatives.len(),
        ..SearchStats::default()
    };
    info!(unique = stats.unique_graphs, "deduplication complete");

    // Collapse cospectral classes: one candidate group per polynomial text,
    // in first-appearance order.
    struct Candidate {
        charpoly: CharPoly,
        members: Vec<GroupMember>,
    }
    let mut group_index: HashMap<String, usize> = HashMap::new();
    let mut candidates: Vec<Candidate> = Vec::new();
    for graph in representatives {
        let charpoly = match CharPoly::compute(&SkewMatrix::from_graph(&graph)) {
            Ok(p) => p,
            Err(e) => {
                stats.solve_failed += 1;
                debug!(reason = %e, edges = ?graph.edges(), "polynomial failure");
                continue;
            }
        };
        let family = identify(&graph);
        let member = GroupMember { graph, family };
        match group_index.get(&charpoly.text()) {
            Some(&i) => candidates[i].members.push(member),
            None => {
                group_index.insert(charpoly.text(), candidates.len());
                candidates.push(Candidate { charpoly, members: vec![member] });
            }
        }
    }

    // Factor, gate, and classify once per polynomial; the verdict covers
    // every cospectral member.
    let mut groups: Vec<PolynomialGroup> = Vec::new();
    for candidate in candidates {
        let factorization = match factor(&candidate.charpoly) {
            Ok(f) => f,
            Err(e) => {
                stats.solve_failed += candidate.members.len();
                debug!(reason = %e, polynomial = %candidate.charpoly.text(), "factor failure");
                continue;
            }
        };
        let bypass = config.include_known_families
            && candidate.members.iter().any(|m| m.family.is_some());
        match resolve(&factorization, bypass, config) {
            Resolution::Solved(classification) => {
                for member in &candidate.members {
                    if bypass && member.family.is_some() {
                        stats.known_family += 1;
                    } else {
                        stats.accepted += 1;
                    }
                }
                groups.push(PolynomialGroup {
                    polynomial: candidate.charpoly.text(),
                    factored: factorization.render(),
                    edge_count: candidate.members[0].graph.edge_count(),
                    eigenvalues: classification.records,
                    all_nice: classification.all_nice,
                    known_family: bypass,
                    members: candidate.members,
                });
            }
            Resolution::DegreeSkipped { factor_degree } => {
                stats.degree_skipped += candidate.members.len();
                debug!(factor_degree, polynomial = %candidate.charpoly.text(), "gate skip");
            }
            Resolution::NotClosed => {
                stats.solve_failed += candidate.members.len();
                debug!(polynomial = %candidate.charpoly.text(), "no closed form");
            }
        }
    }

    groups.sort_by(|a, b| {
        (a.edge_count, &a.polynomial).cmp(&(b.edge_count, &b.polynomial))
    });

    info!(
        accepted = stats.accepted,
        known_family = stats.known_family,
        degree_skipped = stats.degree_skipped,
        solve_failed = stats.solve_failed,
        groups = groups.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "search complete"
    );
    SearchReport { n, stats, groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfigBuilder;
    use crate::eigen::RootValue;

    #[test]
    fn n3_buckets_and_groups() {
        let report = search(3, &SearchConfig::default());
        assert_eq!(report.stats.total_graphs, 8);
        assert_eq!(report.stats.unique_graphs, 4);
        // Empty, path, triangle are recognized families; the single edge
        // plus isolated vertex is not.
        assert_eq!(report.stats.known_family, 3);
        assert_eq!(report.stats.accepted, 1);
        assert_eq!(report.stats.degree_skipped, 0);
        assert_eq!(report.stats.solve_failed, 0);

        let polys: Vec<&str> = report.groups.iter().map(|g| g.polynomial.as_str()).collect();
        assert_eq!(polys, ["-x^3", "-x^3 - x", "-x^3 - 2*x", "-x^3 - 3*x"]);

        // No cospectral pair exists on 3 vertices.
        assert!(report.groups.iter().all(|g| g.members.len() == 1));
    }

    /// The star and the triangle-plus-isolated-vertex on 4 vertices are
    /// cospectral (both have polynomial `x^4 + 3*x^2`): they must collapse
    /// into a single group sharing one verdict.
    #[test]
    fn cospectral_classes_share_one_group() {
        let report = search(4, &SearchConfig::default());
        let group = report
            .groups
            .iter()
            .find(|g| g.polynomial == "x^4 + 3*x^2")
            .unwrap();
        assert_eq!(group.members.len(), 2);
        assert!(group.known_family);
        // Representative is the first class in enumeration order, the star.
        assert_eq!(group.members[0].family, Some(GraphFamily::Star));
        assert_eq!(group.members[0].graph.edges(), [(0, 1), (0, 2), (0, 3)]);
        assert_eq!(group.members[1].family, None);
        // Exactly one group carries the shared polynomial.
        let shared: usize = report
            .groups
            .iter()
            .filter(|g| g.polynomial == "x^4 + 3*x^2")
            .count();
        assert_eq!(shared, 1);
    }

    #[test]
    fn n4_has_eleven_isomorphism_classes() {
        let report = search(4, &SearchConfig::default());
        assert_eq!(report.stats.total_graphs, 64);
        assert_eq!(report.stats.unique_graphs, 11);
        assert_eq!(
            report.stats.accepted
                + report.stats.known_family
                + report.stats.degree_skipped
                + report.stats.solve_failed,
            11
        );
    }

    #[test]
    fn groups_sorted_by_edge_count_then_polynomial() {
        let report = search(4, &SearchConfig::default());
        let keys: Vec<(usize, String)> = report
            .groups
            .iter()
            .map(|g| (g.edge_count, g.polynomial.clone()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn disabling_family_bypass_moves_graphs_to_gate_path() {
        let config = SearchConfigBuilder::default()
            .include_known_families(false)
            .build();
        let report = search(3, &config);
        // Every n=3 polynomial passes the default gate on its own.
        assert_eq!(report.stats.known_family, 0);
        assert_eq!(report.stats.accepted, 4);
    }

    #[test]
    fn tight_gate_skips_ungated_quadratic() {
        let config = SearchConfigBuilder::default().max_factor_degree(1).build();
        let report = search(3, &config);
        // The lone non-family graph has factor x^2 + 1, now over threshold;
        // family members keep their bypass.
        assert_eq!(report.stats.degree_skipped, 1);
        assert_eq!(report.stats.known_family, 3);
        assert_eq!(report.stats.accepted, 0);
    }

    #[test]
    fn exact_labeling_agrees_on_small_counts() {
        let refined = search(4, &SearchConfig::default());
        let exact = search(
            4,
            &SearchConfigBuilder::default()
                .canonicalization(CanonStrategy::ExactLabeling)
                .build(),
        );
        assert_eq!(refined.stats.unique_graphs, exact.stats.unique_graphs);
        assert_eq!(refined.groups.len(), exact.groups.len());
    }

    #[test]
    fn search_is_deterministic() {
        let a = search(4, &SearchConfig::default());
        let b = search(4, &SearchConfig::default());
        let keys = |r: &SearchReport| {
            r.groups
                .iter()
                .map(|g| (g.polynomial.clone(), g.members.len()))
                .collect::<Vec<_>>()
        };
        assert_eq!(keys(&a), keys(&b));
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn five_cycle_accepted_as_family() {
        let cycle = Graph::new(5, vec![(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)]);
        match analyze_graph(&cycle, &SearchConfig::default()) {
            GraphVerdict::Accepted { analysis, known_family } => {
                assert!(known_family);
                assert_eq!(analysis.family, Some(GraphFamily::Cycle));
                assert!(analysis.classification.all_nice);
                assert!(analysis
                    .classification
                    .records
                    .iter()
                    .any(|r| matches!(r.value, RootValue::Zero)));
            }
            other => panic!("unexpected verdict {other:?}"),
        }
    }
}
