//! Search execution and console reporting.
//!
//! `search` prints a human-readable summary of every polynomial group and
//! writes the JSON document; `export` writes the document only.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use skew_spectra_core::{documents, output_filename, search, SearchReport};
use tracing::info;

use crate::SearchArgs;

/// Runs the search, prints the console report, and writes the JSON file.
pub fn run_search(args: &SearchArgs) -> Result<()> {
    let config = args.config();
    let report = search(args.n, &config);
    print_report(&report);
    let path = write_output(args, &report)?;
    println!("\nResults written to {}", path.display().to_string().cyan());
    Ok(())
}

/// Runs the search and writes the JSON file without a console report.
pub fn run_export(args: &SearchArgs) -> Result<()> {
    let config = args.config();
    let report = search(args.n, &config);
    let path = write_output(args, &report)?;
    info!(path = %path.display(), "export complete");
    Ok(())
}

fn write_output(args: &SearchArgs, report: &SearchReport) -> Result<PathBuf> {
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(output_filename(args.n)));
    let docs = documents(report, &args.config());
    let json = serde_json::to_string_pretty(&docs)
        .context("failed to serialize the result document")?;
    fs::write(&path, json)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

fn print_report(report: &SearchReport) {
    let bar = "=".repeat(70);
    println!("{}", bar.cyan());
    println!(
        "{}",
        format!("ANALYTIC SPECTRUM SEARCH: n = {}", report.n).bold()
    );
    println!("{}", bar.cyan());
    println!(
        "Enumerated {} labeled graphs, {} isomorphism classes",
        report.stats.total_graphs, report.stats.unique_graphs
    );

    for group in &report.groups {
        println!();
        println!(
            "{} {}",
            "Polynomial:".bold(),
            group.polynomial.as_str().green()
        );
        println!("  Factored:    {}", group.factored);
        let spectrum: Vec<String> = group
            .eigenvalues
            .iter()
            .map(|e| {
                if e.multiplicity > 1 {
                    format!("{} (x{})", e.display(), e.multiplicity)
                } else {
                    e.display()
                }
            })
            .collect();
        println!("  Eigenvalues: {}", spectrum.join(", "));
        if !group.all_nice {
            println!("  {}", "note: spectrum not fully in closed form".yellow());
        }
        if group.members.len() > 1 {
            println!("  Cospectral classes: {}", group.members.len());
        }
        for member in &group.members {
            let family = member
                .family
                .as_ref()
                .map(|f| format!("  [{}]", f.label(member.graph.vertex_count())))
                .unwrap_or_default();
            println!(
                "  {} edges: {}{}",
                member.graph.edge_count(),
                member.graph.edge_string(),
                family.blue()
            );
        }
    }

    println!();
    println!("{}", bar.cyan());
    println!(
        "{} {} accepted, {} known-family, {} degree-skipped, {} solve-failed",
        "Summary:".bold(),
        report.stats.accepted.to_string().green(),
        report.stats.known_family.to_string().green(),
        report.stats.degree_skipped.to_string().yellow(),
        report.stats.solve_failed.to_string().yellow()
    );
    println!("{} polynomial groups in total", report.groups.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CanonArg;
    use skew_spectra_core::GraphDocument;

    fn args(n: usize, output: PathBuf) -> SearchArgs {
        SearchArgs {
            n,
            output: Some(output),
            max_factor_degree: 4,
            no_known_families: false,
            canon: CanonArg::Hash,
        }
    }

    #[test]
    fn export_writes_a_parseable_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        run_export(&args(3, path.clone())).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let docs: Vec<GraphDocument> = serde_json::from_str(&text).unwrap();
        assert_eq!(docs.len(), 4);
        assert!(docs.iter().all(|d| d.n == 3));
    }

    #[test]
    fn export_to_unwritable_path_fails_with_context() {
        let path = PathBuf::from("/nonexistent-dir/out.json");
        let err = run_export(&args(3, path)).unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }
}
