//! Search configuration.
//!
//! All tunables travel in one immutable [`SearchConfig`] value passed into
//! the pipeline entry point; there is no process-wide mutable state.

use serde::{Deserialize, Serialize};

/// Which canonicalization strategy deduplicates isomorphic graphs.
///
/// A run uses exactly one strategy; results from different strategies are
/// never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CanonStrategy {
    /// Fast neighborhood-refinement hash (heuristic, default).
    #[default]
    RefinementHash,
    /// Exhaustive minimum-labeling search (certified, factorial cost).
    ExactLabeling,
}

/// Immutable configuration for one search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum admissible degree for an irreducible factor of the
    /// characteristic polynomial. Defaults to 4: by Abel–Ruffini there is no
    /// general solution by radicals from degree 5 upward.
    pub max_factor_degree: usize,
    /// Whether recognized graph families are always accepted into the
    /// result set, bypassing the solvability gate.
    pub include_known_families: bool,
    /// Deduplication strategy.
    pub canonicalization: CanonStrategy,
    /// Largest denominator tried when matching a magnitude against
    /// `2·cos(kπ/n)` / `2·sin(kπ/n)`.
    pub trig_denominator_limit: u32,
    /// Absolute tolerance for numeric closed-form matching.
    pub match_tolerance: f64,
    /// Anti-pathology backstop: a rendered eigenvalue display longer than
    /// this is never considered nice.
    pub display_length_guard: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_factor_degree: 4,
            include_known_families: true,
            canonicalization: CanonStrategy::default(),
            trig_denominator_limit: 30,
            match_tolerance: 1e-10,
            display_length_guard: 256,
        }
    }
}

impl SearchConfig {
    /// Starts a builder with the default values.
    #[must_use]
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }
}

/// Fluent builder for [`SearchConfig`].
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Sets the solvability-gate degree threshold.
    #[must_use]
    pub fn max_factor_degree(mut self, degree: usize) -> Self {
        self.config.max_factor_degree = degree;
        self
    }

    /// Sets whether known families bypass the gate.
    #[must_use]
    pub fn include_known_families(mut self, include: bool) -> Self {
        self.config.include_known_families = include;
        self
    }

    /// Sets the canonicalization strategy.
    #[must_use]
    pub fn canonicalization(mut self, strategy: CanonStrategy) -> Self {
        self.config.canonicalization = strategy;
        self
    }

    /// Sets the trigonometric matching denominator limit.
    #[must_use]
    pub fn trig_denominator_limit(mut self, limit: u32) -> Self {
        self.config.trig_denominator_limit = limit;
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> SearchConfig {
        self.config
    }
}
