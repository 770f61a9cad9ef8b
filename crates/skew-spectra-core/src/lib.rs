//! # Skew-Spectra Core
//!
//! Exact spectral analysis of skew-symmetric graph matrices.
//!
//! Given a simple undirected graph on labeled vertices, orienting every
//! edge from its lower to its higher endpoint yields a skew-symmetric
//! `±1` adjacency matrix whose eigenvalues are purely imaginary. This
//! crate exhaustively searches all graphs at a fixed vertex count for
//! spectra expressible in exact closed form, including:
//!
//! - **Enumeration and deduplication**: [`EdgeSubsets`] walks every
//!   labeled graph; the [`canonical`] module collapses isomorphic
//!   duplicates via a pluggable [`Canonicalizer`].
//!
//! - **Exact algebra**: [`CharPoly`] computes integer characteristic
//!   polynomials with the Faddeev–LeVerrier recurrence; the [`factor`]
//!   module splits them into irreducible factors over the integers.
//!
//! - **Solvability gating**: the [`gate`] module rejects polynomials with
//!   an irreducible factor beyond the configured degree, where general
//!   radical solutions stop existing.
//!
//! - **Closed-form classification**: the [`eigen`] module turns surviving
//!   roots into integers, radicals, trigonometric values `2·cos(kπ/n)`,
//!   or denested radical sums.
//!
//! - **Family recognition**: the [`family`] module labels complete
//!   graphs, cycles, paths, stars, wheels, ladders, and friends, which
//!   may bypass the gate.
//!
//! ## Example
//!
//! ```rust
//! use skew_spectra_core::{search, SearchConfig};
//!
//! let report = search(4, &SearchConfig::default());
//! assert_eq!(report.stats.unique_graphs, 11);
//! assert!(report.groups.iter().all(|g| g.all_nice));
//! ```

#![forbid(unsafe_code)]

pub mod canonical;
pub mod config;
pub mod eigen;
pub mod enumerate;
pub mod error;
pub mod factor;
pub mod family;
pub mod gate;
pub mod graph;
pub mod matrix;
pub mod output;
pub mod poly;
pub mod search;

// Re-export the main entry points at the crate root
pub use canonical::{CanonicalKey, Canonicalizer, ExactLabeling, RefinementHash};
pub use config::{CanonStrategy, SearchConfig, SearchConfigBuilder};
pub use eigen::{classify, Classification, ClosedForm, EigenvalueRecord, RootValue};
pub use enumerate::EdgeSubsets;
pub use error::{AnalysisError, AnalysisResult};
pub use factor::{factor, Factorization};
pub use family::{identify, GraphFamily};
pub use gate::GateDecision;
pub use graph::Graph;
pub use matrix::SkewMatrix;
pub use output::{documents, output_filename, GraphDocument};
pub use poly::{CharPoly, IntPoly};
pub use search::{analyze_graph, search, GraphVerdict, SearchReport, SearchStats};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest vertex count the edge-bitmask enumerator supports
pub const MAX_VERTICES: usize = 11;

/// Default solvability-gate threshold (quartics are the last degree with a
/// general radical formula)
pub const DEFAULT_MAX_FACTOR_DEGREE: usize = 4;
