//! The Abel–Ruffini solvability gate.
//!
//! Polynomials of degree 5 and higher have no general solution by radicals,
//! so an irreducible factor above the configured threshold (default 4) means
//! the exact solver cannot express the roots and expensive root work is
//! skipped up front. The check is sound in both directions under this
//! pipeline's solver: every factor at or below the threshold is one the
//! classifier actually solves, and every factor above it is one the
//! classifier cannot.

use crate::config::SearchConfig;
use crate::factor::IrreducibleFactor;

/// Outcome of the gate for one factored polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// All irreducible factors are within the threshold; solve the roots.
    Proceed,
    /// At least one irreducible factor exceeds the threshold.
    Skip {
        /// Degree of the largest offending factor.
        factor_degree: usize,
    },
}

impl GateDecision {
    /// Whether the polynomial should continue to the classifier.
    #[must_use]
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Evaluates the gate over the irreducible factors of one polynomial.
#[must_use]
pub fn evaluate(factors: &[IrreducibleFactor], config: &SearchConfig) -> GateDecision {
    let offending = factors
        .iter()
        .map(IrreducibleFactor::degree)
        .filter(|&d| d > config.max_factor_degree)
        .max();
    match offending {
        Some(factor_degree) => GateDecision::Skip { factor_degree },
        None => GateDecision::Proceed,
    }
}
