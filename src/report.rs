//! Batch Report Module
//! Prints dataset overview and the three summaries to stdout, then saves one
//! PNG per chart.

use crate::charts::{truncate_label, ChartKind, StaticChartRenderer};
use crate::data::{CleaningReport, Dataset, PaperTable};
use crate::stats::{RawOverview, Summary, WordCountStats};
use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Rows of each yearly series printed to the console.
const CONSOLE_SERIES_ROWS: usize = 10;
/// Rows of the cleaned table printed as a preview.
const CONSOLE_PREVIEW_ROWS: usize = 5;

/// Batch run settings.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub out_dir: PathBuf,
    pub top_n: usize,
    pub json: bool,
}

/// Outcome of writing the chart images.
#[derive(Debug, Default)]
pub struct ReportOutcome {
    pub written: Vec<PathBuf>,
    pub failed: Vec<ChartKind>,
}

/// Run the batch report over the full cleaned table.
///
/// Chart and output-directory failures are logged and collected; they do
/// not fail the run.
pub fn run_report(dataset: &Dataset, options: &ReportOptions) -> Result<ReportOutcome> {
    let summary = Summary::compute(&dataset.table, options.top_n);

    println!("{}", overview_table(&dataset.raw_overview));
    println!("{}", cleaning_table(&dataset.cleaning, &dataset.table));
    println!("{}", preview_table(&dataset.table, CONSOLE_PREVIEW_ROWS));
    if let Some(stats) = WordCountStats::compute(&dataset.table) {
        println!("{}", word_count_table(&stats));
    }

    println!("Publication counts per year:");
    println!("{}", yearly_counts_table(&summary));
    println!("Top {} journals:", options.top_n);
    println!("{}", journals_table(&summary));
    println!("Average abstract word count per year:");
    println!("{}", yearly_means_table(&summary));

    if options.json {
        let json = serde_json::to_string_pretty(&summary).context("serializing summary")?;
        println!("{json}");
    }

    if let Err(e) = std::fs::create_dir_all(&options.out_dir) {
        error!(dir = %options.out_dir.display(), error = %e, "cannot create output directory");
        return Ok(ReportOutcome {
            written: Vec::new(),
            failed: ChartKind::ALL.to_vec(),
        });
    }

    Ok(save_charts(&summary, &options.out_dir))
}

/// Write every chart, one after another.
pub fn save_charts(summary: &Summary, dir: &Path) -> ReportOutcome {
    let mut outcome = ReportOutcome::default();
    for kind in ChartKind::ALL {
        match StaticChartRenderer::save_chart(kind, summary, dir) {
            Ok(path) => {
                println!("Saved plot to {}", path.display());
                outcome.written.push(path);
            }
            Err(e) => {
                error!(chart = kind.file_name(), error = %e, "failed to save chart");
                outcome.failed.push(kind);
            }
        }
    }
    info!(
        written = outcome.written.len(),
        failed = outcome.failed.len(),
        "batch report finished"
    );
    outcome
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.iter().map(|h| Cell::new(h)));
    table
}

fn overview_table(overview: &RawOverview) -> Table {
    let mut table = new_table(&["Raw column", "Missing values"]);
    for (column, missing) in &overview.missing {
        table.add_row(vec![column.clone(), missing.to_string()]);
    }
    table.add_row(vec![
        "(shape)".to_string(),
        format!("{} rows x {} columns", overview.rows, overview.columns.len()),
    ]);
    table
}

fn cleaning_table(report: &CleaningReport, cleaned: &PaperTable) -> Table {
    let mut table = new_table(&["Cleaning step", "Rows"]);
    table.add_row(vec!["Rows read".to_string(), report.rows_in.to_string()]);
    table.add_row(vec![
        "Dropped: missing title or publish_time".to_string(),
        report.dropped_missing.to_string(),
    ]);
    table.add_row(vec![
        "Dropped: unparseable publish_time".to_string(),
        report.dropped_unparseable_date.to_string(),
    ]);
    table.add_row(vec!["Rows kept".to_string(), report.rows_out.to_string()]);
    for (field, missing) in cleaned.missing_counts() {
        table.add_row(vec![format!("Missing after cleaning: {field}"), missing.to_string()]);
    }
    table
}

fn preview_table(cleaned: &PaperTable, rows: usize) -> Table {
    let mut table = new_table(&["title", "publish_time", "journal", "year", "abstract_word_count"]);
    for paper in cleaned.head(rows) {
        table.add_row(vec![
            truncate_label(&paper.title, 50),
            paper.publish_time.to_string(),
            truncate_label(&paper.journal, 30),
            paper.year.to_string(),
            paper.abstract_word_count.to_string(),
        ]);
    }
    table
}

fn word_count_table(stats: &WordCountStats) -> Table {
    let mut table = new_table(&["abstract_word_count", "value"]);
    table.add_row(vec!["count".to_string(), stats.count.to_string()]);
    for (name, value) in [
        ("mean", stats.mean),
        ("std", stats.std),
        ("min", stats.min),
        ("25%", stats.q1),
        ("50%", stats.median),
        ("75%", stats.q3),
        ("max", stats.max),
    ] {
        table.add_row(vec![name.to_string(), format!("{value:.2}")]);
    }
    table
}

fn yearly_counts_table(summary: &Summary) -> Table {
    let mut table = new_table(&["year", "papers"]);
    for c in summary.yearly_counts.iter().take(CONSOLE_SERIES_ROWS) {
        table.add_row(vec![c.year.to_string(), c.count.to_string()]);
    }
    table
}

fn journals_table(summary: &Summary) -> Table {
    let mut table = new_table(&["journal", "papers"]);
    for j in &summary.top_journals {
        table.add_row(vec![j.journal.clone(), j.count.to_string()]);
    }
    table
}

fn yearly_means_table(summary: &Summary) -> Table {
    let mut table = new_table(&["year", "mean words"]);
    for m in summary.yearly_mean_word_count.iter().take(CONSOLE_SERIES_ROWS) {
        table.add_row(vec![m.year.to_string(), format!("{:.2}", m.mean)]);
    }
    table
}
