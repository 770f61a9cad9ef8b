//! Position verification for visualization exports.
//!
//! The web viewer lays each graph out at `(n·8, ρ·15, (E−8)·8)` where `ρ`
//! is the spectral radius and `E` the graph energy. This command re-checks
//! the positions recorded in an export against that formula and reports
//! every row that drifted beyond the tolerance.
//!
//! Input is either a raw CSV file or a text export containing a CSV block
//! introduced by a literal `--- CSV FORMAT` marker line.

use std::fs;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde::Deserialize;
use tracing::warn;

use crate::VerifyArgs;

/// Marker line introducing the CSV block inside a text export.
pub const CSV_MARKER: &str = "--- CSV FORMAT";

const N_SCALE: f64 = 8.0;
const RHO_SCALE: f64 = 15.0;
const ENERGY_SCALE: f64 = 8.0;
const ENERGY_CENTER: f64 = 8.0;

/// How many discrepancies are printed in full before summarizing.
const SHOWN_LIMIT: usize = 20;

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Family")]
    family: String,
    #[serde(rename = "n")]
    n: f64,
    #[serde(rename = "Edges")]
    edges: f64,
    #[serde(rename = "SpectralRadius")]
    spectral_radius: f64,
    #[serde(rename = "Energy")]
    energy: f64,
    #[serde(rename = "X")]
    x: f64,
    #[serde(rename = "Y")]
    y: f64,
    #[serde(rename = "Z")]
    z: f64,
}

/// One row whose recorded position misses the formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Discrepancy {
    /// Graph name from the export.
    pub name: String,
    /// Family column.
    pub family: String,
    /// Vertex count.
    pub n: f64,
    /// Edge count.
    pub edges: f64,
    /// Position the formula demands.
    pub expected: [f64; 3],
    /// Position the export recorded.
    pub actual: [f64; 3],
    /// Euclidean distance between them.
    pub distance: f64,
}

/// Outcome of checking one export.
#[derive(Debug, Clone, Default)]
pub struct VerifyOutcome {
    /// Rows successfully parsed and checked.
    pub rows_checked: usize,
    /// Rows that failed to parse.
    pub rows_skipped: usize,
    /// Rows beyond tolerance.
    pub discrepancies: Vec<Discrepancy>,
}

impl VerifyOutcome {
    /// Whether every checked row satisfied the formula.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.discrepancies.is_empty()
    }
}

/// Extracts the CSV portion: everything after the marker line when present,
/// the whole input otherwise.
#[must_use]
pub fn csv_block(input: &str) -> &str {
    match input.find(CSV_MARKER) {
        Some(pos) => {
            let rest = &input[pos..];
            match rest.find('\n') {
                Some(nl) => rest[nl + 1..].trim_start_matches('\n'),
                None => "",
            }
        }
        None => input,
    }
}

/// Expected position for one row under the layout formula.
#[must_use]
pub fn expected_position(n: f64, spectral_radius: f64, energy: f64) -> [f64; 3] {
    [
        n * N_SCALE,
        spectral_radius * RHO_SCALE,
        (energy - ENERGY_CENTER) * ENERGY_SCALE,
    ]
}

/// Checks every row of a CSV export against the layout formula.
pub fn verify_text(input: &str, tolerance: f64) -> Result<VerifyOutcome> {
    let block = csv_block(input);
    if block.trim().is_empty() {
        bail!("no CSV content found in input");
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(block.as_bytes());

    let mut outcome = VerifyOutcome::default();
    for (index, record) in reader.deserialize::<Row>().enumerate() {
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                warn!(row = index + 1, error = %e, "skipping unparseable row");
                outcome.rows_skipped += 1;
                continue;
            }
        };
        outcome.rows_checked += 1;

        let expected = expected_position(row.n, row.spectral_radius, row.energy);
        let actual = [row.x, row.y, row.z];
        let distance = expected
            .iter()
            .zip(&actual)
            .map(|(e, a)| (e - a) * (e - a))
            .sum::<f64>()
            .sqrt();
        if distance >= tolerance {
            outcome.discrepancies.push(Discrepancy {
                name: row.name,
                family: row.family,
                n: row.n,
                edges: row.edges,
                expected,
                actual,
                distance,
            });
        }
    }
    Ok(outcome)
}

/// Runs the verify command against a file on disk.
pub fn run(args: &VerifyArgs) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let outcome = verify_text(&input, args.tolerance)?;
    print_outcome(&outcome, args.tolerance);
    if outcome.is_clean() {
        Ok(())
    } else {
        bail!("{} position(s) outside tolerance", outcome.discrepancies.len())
    }
}

fn print_outcome(outcome: &VerifyOutcome, tolerance: f64) {
    println!(
        "Checked {} rows ({} skipped), tolerance {}",
        outcome.rows_checked, outcome.rows_skipped, tolerance
    );
    if outcome.is_clean() {
        println!("{}", "All positions match the layout formula".green());
        return;
    }
    for d in outcome.discrepancies.iter().take(SHOWN_LIMIT) {
        println!(
            "{} {} [{}] n={} edges={}",
            "MISMATCH".red().bold(),
            d.name,
            d.family,
            d.n,
            d.edges
        );
        println!(
            "  expected ({:.3}, {:.3}, {:.3})  actual ({:.3}, {:.3}, {:.3})  distance {:.3}",
            d.expected[0], d.expected[1], d.expected[2], d.actual[0], d.actual[1], d.actual[2],
            d.distance
        );
    }
    if outcome.discrepancies.len() > SHOWN_LIMIT {
        println!(
            "... and {} more",
            outcome.discrepancies.len() - SHOWN_LIMIT
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Name,Family,n,Edges,SpectralRadius,Energy,X,Y,Z";

    fn row(name: &str, n: f64, rho: f64, energy: f64, pos: [f64; 3]) -> String {
        format!(
            "{name},Test family,{n},3,{rho},{energy},{},{},{}",
            pos[0], pos[1], pos[2]
        )
    }

    #[test]
    fn expected_position_formula() {
        assert_eq!(expected_position(3.0, 2.0, 8.0), [24.0, 30.0, 0.0]);
        assert_eq!(expected_position(4.0, 1.0, 10.0), [32.0, 15.0, 16.0]);
    }

    #[test]
    fn raw_csv_with_correct_positions_is_clean() {
        let input = format!("{HEADER}\n{}", row("K_3", 3.0, 2.0, 8.0, [24.0, 30.0, 0.0]));
        let outcome = verify_text(&input, 0.1).unwrap();
        assert_eq!(outcome.rows_checked, 1);
        assert!(outcome.is_clean());
    }

    #[test]
    fn marker_delimited_block_is_extracted() {
        let input = format!(
            "Universe export\nsome preamble text\n{CSV_MARKER}\n{HEADER}\n{}",
            row("K_3", 3.0, 2.0, 8.0, [24.0, 30.0, 0.0])
        );
        let outcome = verify_text(&input, 0.1).unwrap();
        assert_eq!(outcome.rows_checked, 1);
        assert!(outcome.is_clean());
    }

    #[test]
    fn drifted_position_is_reported_with_distance() {
        let input = format!("{HEADER}\n{}", row("C_4", 4.0, 1.0, 10.0, [32.0, 15.5, 16.0]));
        let outcome = verify_text(&input, 0.1).unwrap();
        assert_eq!(outcome.discrepancies.len(), 1);
        let d = &outcome.discrepancies[0];
        assert_eq!(d.name, "C_4");
        assert!((d.distance - 0.5).abs() < 1e-12);
        assert_eq!(d.expected, [32.0, 15.0, 16.0]);
    }

    #[test]
    fn deviation_below_tolerance_passes() {
        let input = format!("{HEADER}\n{}", row("C_4", 4.0, 1.0, 10.0, [32.0, 15.05, 16.0]));
        let outcome = verify_text(&input, 0.1).unwrap();
        assert!(outcome.is_clean());
    }

    #[test]
    fn unparseable_rows_are_skipped_and_counted() {
        let input = format!(
            "{HEADER}\nBroken,row,not,numeric,at,all,x,y,z\n{}",
            row("K_3", 3.0, 2.0, 8.0, [24.0, 30.0, 0.0])
        );
        let outcome = verify_text(&input, 0.1).unwrap();
        assert_eq!(outcome.rows_skipped, 1);
        assert_eq!(outcome.rows_checked, 1);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(verify_text("", 0.1).is_err());
        assert!(verify_text(&format!("preamble\n{CSV_MARKER}\n"), 0.1).is_err());
    }
}
