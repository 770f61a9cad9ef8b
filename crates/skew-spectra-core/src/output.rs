//! Serializable result documents.
//!
//! The persisted output is a flat JSON array with one object per
//! polynomial group, taken from the in-memory
//! [`SearchReport`](crate::search::SearchReport) in its deterministic
//! order. Cospectral graphs are reported through the group's first member
//! with the group's size recorded. The schema is stable and consumed by
//! the bundled web viewer: each eigenvalue carries, besides its exact
//! text, a `js` descriptor with a numeric value and (when exact) a
//! JavaScript expression reproducing the magnitude.

use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::eigen::{ClosedForm, EigenvalueRecord, RootValue, TrigKind};
use crate::matrix::SkewMatrix;
use crate::search::SearchReport;

/// Conventional output filename for a run at vertex count `n`.
#[must_use]
pub fn output_filename(n: usize) -> String {
    format!("analytic_graphs_n{n}.json")
}

/// One polynomial group in the output array, reported through its
/// representative graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Vertex count.
    pub n: usize,
    /// Representative's edge list, endpoints ascending.
    pub edges: Vec<(usize, usize)>,
    /// Human-readable edge list.
    pub edge_string: String,
    /// Number of edges.
    pub edge_count: usize,
    /// The representative's skew-symmetric `±1` adjacency matrix.
    pub adjacency_matrix: Vec<Vec<i64>>,
    /// Characteristic polynomial text, the group key.
    pub polynomial: String,
    /// Representative's family label, `null` when unrecognized.
    pub family: Option<String>,
    /// Present (and `true`) only when accepted through the family bypass.
    #[serde(default, skip_serializing_if = "is_false")]
    pub known_family: bool,
    /// Number of isomorphism classes sharing this polynomial.
    pub isomorphism_class_size: usize,
    /// The spectrum with multiplicities.
    pub eigenvalues: Vec<EigenvalueDocument>,
}

/// One eigenvalue of a graph's spectrum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EigenvalueDocument {
    /// Exact plain text, e.g. `sqrt(3)*I`.
    pub raw: String,
    /// Display text, e.g. `±√3·i`.
    pub display: String,
    /// Algebraic multiplicity.
    pub multiplicity: u32,
    /// Root category: `zero`, `pure_imaginary`, `real`, `complex`,
    /// `unknown`.
    pub category: String,
    /// Whether this root counts as a nice closed form.
    pub is_nice: bool,
    /// Viewer-side descriptor.
    pub js: JsDescriptor,
}

/// Numeric/formula descriptor for the web viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsDescriptor {
    /// Signed value of the imaginary (or real) part; a placeholder string
    /// for unresolved roots.
    pub value: JsValue,
    /// JavaScript expression reproducing the magnitude exactly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    /// Closed-form kind tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Angle numerator for trigonometric forms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<u32>,
    /// Angle denominator for trigonometric forms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
}

/// A JSON number-or-string value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsValue {
    /// Numeric value.
    Number(f64),
    /// Placeholder text for unresolved roots.
    Text(String),
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(v: &bool) -> bool {
    !v
}

/// Renders a report as the output array, one document per polynomial
/// group in the report's deterministic order.
#[must_use]
pub fn documents(report: &SearchReport, config: &SearchConfig) -> Vec<GraphDocument> {
    let mut out = Vec::new();
    for group in &report.groups {
        let Some(representative) = group.members.first() else {
            continue;
        };
        let eigenvalues: Vec<EigenvalueDocument> = group
            .eigenvalues
            .iter()
            .map(|r| EigenvalueDocument::from_record(r, config))
            .collect();
        let matrix = SkewMatrix::from_graph(&representative.graph);
        out.push(GraphDocument {
            n: representative.graph.vertex_count(),
            edges: representative.graph.edges().to_vec(),
            edge_string: representative.graph.edge_string(),
            edge_count: group.edge_count,
            adjacency_matrix: matrix.rows(),
            polynomial: group.polynomial.clone(),
            family: representative
                .family
                .as_ref()
                .map(|f| f.label(representative.graph.vertex_count())),
            known_family: group.known_family,
            isomorphism_class_size: group.members.len(),
            eigenvalues,
        });
    }
    out
}

impl EigenvalueDocument {
    fn from_record(record: &EigenvalueRecord, config: &SearchConfig) -> Self {
        Self {
            raw: record.raw(),
            display: record.display(),
            multiplicity: record.multiplicity,
            category: record.value.category().to_string(),
            is_nice: record.is_nice(config),
            js: JsDescriptor::from_value(&record.value),
        }
    }
}

impl JsDescriptor {
    fn from_value(value: &RootValue) -> Self {
        match value {
            RootValue::Zero => Self {
                value: JsValue::Number(0.0),
                formula: None,
                kind: "zero".to_string(),
                k: None,
                n: None,
            },
            RootValue::Imaginary { magnitude, .. } | RootValue::Real { magnitude, .. } => {
                let (k, n) = match magnitude {
                    ClosedForm::Trig { k, den, .. } => (Some(*k), Some(*den)),
                    _ => (None, None),
                };
                Self {
                    value: JsValue::Number(value.approx().unwrap_or(f64::NAN)),
                    formula: js_formula(magnitude),
                    kind: magnitude.type_tag().to_string(),
                    k,
                    n,
                }
            }
            RootValue::Complex => Self {
                value: JsValue::Text("unresolved".to_string()),
                formula: None,
                kind: "complex".to_string(),
                k: None,
                n: None,
            },
            RootValue::Unknown => Self {
                value: JsValue::Text("unresolved".to_string()),
                formula: None,
                kind: "unknown".to_string(),
                k: None,
                n: None,
            },
        }
    }
}

/// JavaScript expression for an exact magnitude; `None` for approximations.
fn js_formula(form: &ClosedForm) -> Option<String> {
    match form {
        ClosedForm::Integer(v) => Some(v.to_string()),
        ClosedForm::Sqrt(r) => {
            let core = if r.radicand == 1 {
                r.num.to_string()
            } else if r.num == 1 {
                format!("Math.sqrt({})", r.radicand)
            } else {
                format!("{}*Math.sqrt({})", r.num, r.radicand)
            };
            Some(if r.den == 1 {
                core
            } else {
                format!("{core}/{}", r.den)
            })
        }
        ClosedForm::Trig { kind, k, den } => {
            let func = match kind {
                TrigKind::Cos => "Math.cos",
                TrigKind::Sin => "Math.sin",
            };
            let angle = if *k == 1 {
                format!("Math.PI/{den}")
            } else {
                format!("{k}*Math.PI/{den}")
            };
            Some(format!("2*{func}({angle})"))
        }
        ClosedForm::SqrtSum { a, b, minus } => {
            let term =
                |r: &crate::eigen::Radical| js_formula(&ClosedForm::Sqrt(*r)).unwrap_or_default();
            let op = if *minus { "-" } else { "+" };
            Some(format!("({} {op} {})", term(a), term(b)))
        }
        ClosedForm::Nested { base, disc, plus } => {
            let op = if *plus { "+" } else { "-" };
            Some(format!("Math.sqrt(({base} {op} Math.sqrt({disc}))/2)"))
        }
        ClosedForm::Approximate(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search;

    #[test]
    fn filename_convention() {
        assert_eq!(output_filename(5), "analytic_graphs_n5.json");
    }

    #[test]
    fn n3_documents_round_trip() {
        let config = SearchConfig::default();
        let report = search(3, &config);
        let docs = documents(&report, &config);
        assert_eq!(docs.len(), 4);
        assert!(docs.iter().all(|d| d.n == 3));

        let json = serde_json::to_string_pretty(&docs).unwrap();
        let back: Vec<GraphDocument> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), docs.len());
        assert_eq!(back[0].polynomial, docs[0].polynomial);
    }

    #[test]
    fn triangle_document_shape() {
        let config = SearchConfig::default();
        let report = search(3, &config);
        let docs = documents(&report, &config);
        let triangle = docs.iter().find(|d| d.polynomial == "-x^3 - 3*x").unwrap();
        assert!(triangle.known_family);
        assert_eq!(triangle.edge_count, 3);
        assert_eq!(triangle.family.as_deref(), Some("Complete graph K_3"));
        assert_eq!(
            triangle.adjacency_matrix,
            vec![vec![0, 1, 1], vec![-1, 0, 1], vec![-1, -1, 0]]
        );
        let sqrt3 = triangle
            .eigenvalues
            .iter()
            .find(|e| e.raw == "sqrt(3)*I")
            .unwrap();
        assert_eq!(sqrt3.category, "pure_imaginary");
        assert!(sqrt3.is_nice);
        assert_eq!(sqrt3.js.formula.as_deref(), Some("Math.sqrt(3)"));
        assert_eq!(sqrt3.js.kind, "sqrt");
    }

    #[test]
    fn empty_graph_document_eigenvalue_is_zero_kind() {
        let config = SearchConfig::default();
        let report = search(3, &config);
        let docs = documents(&report, &config);
        let empty = docs.iter().find(|d| d.polynomial == "-x^3").unwrap();
        assert_eq!(empty.eigenvalues.len(), 1);
        assert_eq!(empty.eigenvalues[0].multiplicity, 3);
        assert_eq!(empty.eigenvalues[0].js.kind, "zero");
        assert_eq!(empty.eigenvalues[0].js.value, JsValue::Number(0.0));
        assert_eq!(empty.edge_string, "∅ (no edges)");
        assert_eq!(empty.family.as_deref(), Some("Empty graph E_3"));
    }

    /// The star and the triangle-plus-isolated-vertex on 4 vertices share
    /// the polynomial `x^4 + 3*x^2`: the output carries one representative
    /// document with the group size, not one document per graph.
    #[test]
    fn cospectral_group_emits_one_representative_document() {
        let config = SearchConfig::default();
        let report = search(4, &config);
        let docs = documents(&report, &config);
        let shared: Vec<_> = docs
            .iter()
            .filter(|d| d.polynomial == "x^4 + 3*x^2")
            .collect();
        assert_eq!(shared.len(), 1, "expected a single representative");
        let doc = shared[0];
        assert_eq!(doc.isomorphism_class_size, 2);
        assert!(doc.known_family);
        assert_eq!(doc.family.as_deref(), Some("Star graph K_{1,3}"));
        assert_eq!(doc.edges, vec![(0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn unrecognized_family_serializes_as_null() {
        let config = SearchConfig::default();
        let report = search(3, &config);
        let docs = documents(&report, &config);
        let single = docs.iter().find(|d| d.polynomial == "-x^3 - x").unwrap();
        assert!(single.family.is_none());
        let json = serde_json::to_string(single).unwrap();
        assert!(json.contains("\"family\":null"), "{json}");
        assert!(!json.contains("known_family"), "{json}");
    }
}
