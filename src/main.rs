//! Paper Explorer - metadata summaries as an interactive viewer or a batch report.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use paper_explorer::data::load_dataset;
use paper_explorer::gui::run_explorer;
use paper_explorer::report::{run_report, ReportOptions};
use paper_explorer::stats::DEFAULT_TOP_N;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Research-paper metadata explorer", long_about = None)]
struct Cli {
    /// Metadata CSV to load
    #[arg(long, default_value = "metadata.csv")]
    input: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive explorer with a year-range filter
    Explore,
    /// Print summaries and save the charts as PNG files
    Report {
        /// Directory the chart images are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Number of journals in the top-journals summary
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
        /// Also print the summaries as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let dataset = load_dataset(&cli.input)
        .with_context(|| format!("loading {}", cli.input.display()))?;

    match cli.command {
        Command::Explore => {
            info!(papers = dataset.table.len(), "starting explorer");
            run_explorer(&dataset.table)
                .map_err(|e| anyhow::anyhow!("explorer window failed: {e}"))?;
        }
        Command::Report { out_dir, top, json } => {
            let outcome = run_report(
                dataset,
                &ReportOptions {
                    out_dir,
                    top_n: top,
                    json,
                },
            )?;
            if !outcome.failed.is_empty() {
                warn!(failed = outcome.failed.len(), "some charts were not written");
            }
        }
    }

    Ok(())
}
