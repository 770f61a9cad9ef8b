//! Skew-Spectra CLI
//!
//! Command-line interface for the analytic-spectrum discovery pipeline.
//!
//! # Usage
//!
//! ```bash
//! # Exhaustive search on 5 vertices, console report + JSON file
//! skew-spectra search 5
//!
//! # Machine-readable output only
//! skew-spectra export 5 --output results/analytic_graphs_n5.json
//!
//! # Check exported visualization positions
//! skew-spectra verify universe_export.txt
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use skew_spectra_core::{CanonStrategy, SearchConfig};

pub mod report;
pub mod verify;

/// Skew-Spectra Command Line Interface
#[derive(Parser, Debug)]
#[command(name = "skew-spectra")]
#[command(author, version, about = "Discover graphs with analytic skew spectra")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the exhaustive search, print a report, and write the JSON file
    Search(SearchArgs),

    /// Run the search and write the JSON file only (no console report)
    Export(SearchArgs),

    /// Verify exported visualization positions against the layout formula
    Verify(VerifyArgs),

    /// Display version information
    Version,
}

/// Arguments shared by `search` and `export`
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Number of vertices (cost grows as 2^(n(n-1)/2))
    pub n: usize,

    /// Output file path (defaults to analytic_graphs_n<N>.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum admissible irreducible-factor degree
    #[arg(long, default_value = "4")]
    pub max_factor_degree: usize,

    /// Do not bypass the solvability gate for recognized families
    #[arg(long)]
    pub no_known_families: bool,

    /// Isomorphism deduplication backend
    #[arg(long, value_enum, default_value = "hash")]
    pub canon: CanonArg,
}

/// Canonicalization backend argument
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum CanonArg {
    /// Neighborhood-refinement hash (fast, heuristic)
    Hash,
    /// Exhaustive minimum labeling (certified, factorial cost)
    Exact,
}

impl From<CanonArg> for CanonStrategy {
    fn from(val: CanonArg) -> Self {
        match val {
            CanonArg::Hash => CanonStrategy::RefinementHash,
            CanonArg::Exact => CanonStrategy::ExactLabeling,
        }
    }
}

impl SearchArgs {
    /// Builds the pipeline configuration from the parsed flags.
    #[must_use]
    pub fn config(&self) -> SearchConfig {
        SearchConfig::builder()
            .max_factor_degree(self.max_factor_degree)
            .include_known_families(!self.no_known_families)
            .canonicalization(self.canon.into())
            .build()
    }
}

/// Arguments for the verify command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Text export containing a CSV block, or a raw CSV file
    pub file: PathBuf,

    /// Euclidean distance tolerance for a position match
    #[arg(short, long, default_value = "0.1")]
    pub tolerance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_declaration_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_args_build_config() {
        let cli = Cli::parse_from(["skew-spectra", "search", "5", "--max-factor-degree", "6"]);
        match cli.command {
            Commands::Search(args) => {
                let config = args.config();
                assert_eq!(config.max_factor_degree, 6);
                assert!(config.include_known_families);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn non_integer_vertex_count_is_rejected() {
        assert!(Cli::try_parse_from(["skew-spectra", "search", "five"]).is_err());
    }
}
