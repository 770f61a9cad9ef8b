//! Skew-Spectra CLI Entry Point
//!
//! Main entry point for the skew-spectra command-line tool.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skew_spectra_cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => {
            skew_spectra_cli::report::run_search(&args)?;
        }
        Commands::Export(args) => {
            skew_spectra_cli::report::run_export(&args)?;
        }
        Commands::Verify(args) => {
            skew_spectra_cli::verify::run(&args)?;
        }
        Commands::Version => {
            println!("skew-spectra {}", env!("CARGO_PKG_VERSION"));
            println!("core module version: {}", skew_spectra_core::VERSION);
        }
    }

    Ok(())
}
