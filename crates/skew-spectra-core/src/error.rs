//! Error types for the discovery pipeline.
//!
//! Every error here is a *per-graph* failure: the search recovers by
//! skipping the affected graph and recording it in the run statistics,
//! never by aborting the whole run.

use thiserror::Error;

/// A specialized `Result` type for pipeline analysis steps.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Failures while analyzing a single graph's matrix or polynomial.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnalysisError {
    /// The characteristic polynomial carried odd-power terms relative to its
    /// degree, which a skew-symmetric matrix cannot produce.
    #[error("polynomial is not skew-symmetric structured: unexpected term at degree {degree}")]
    NotSkewStructured {
        /// Degree of the offending term.
        degree: usize,
    },

    /// Integer arithmetic overflowed during exact computation.
    #[error("coefficient overflow during {operation} for a {n}x{n} matrix")]
    CoefficientOverflow {
        /// The computation stage that overflowed.
        operation: &'static str,
        /// Matrix dimension.
        n: usize,
    },

    /// A trace division in the characteristic-polynomial recurrence was not
    /// exact, which indicates a corrupted matrix rather than a user error.
    #[error("inexact trace division at step {step} of the characteristic polynomial recurrence")]
    InexactDivision {
        /// Recurrence step index.
        step: usize,
    },

    /// Factorization could not certify irreducibility of a high-degree
    /// remainder (trial division covers factor degrees up to 3, certifying
    /// polynomials of degree up to 7).
    #[error("cannot certify irreducibility of a degree {degree} factor")]
    FactorizationIncomplete {
        /// Degree of the uncertified remainder.
        degree: usize,
    },
}
