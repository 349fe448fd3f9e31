//! Data Cleaner Module
//! Turns the raw metadata DataFrame into typed, validated paper records.

use crate::data::record::{parse_publish_time, Paper, PaperTable, UNKNOWN_JOURNAL};
use polars::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

/// Columns kept from the raw table, everything else is discarded.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "title",
    "abstract",
    "publish_time",
    "authors",
    "journal",
    "source_x",
];

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Row accounting for one cleaning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleaningReport {
    pub rows_in: usize,
    pub dropped_missing: usize,
    pub dropped_unparseable_date: usize,
    pub rows_out: usize,
}

/// Handles the missing-value policy, date coercion and derived fields.
pub struct DataCleaner;

impl DataCleaner {
    /// Clean a raw table.
    ///
    /// Rows missing a title or publish_time are dropped first; the remaining
    /// rows have their defaults filled, and rows whose publish_time does not
    /// parse are dropped afterwards. Row order is preserved.
    pub fn clean(df: &DataFrame) -> Result<(PaperTable, CleaningReport), CleanError> {
        let projected = Self::project(df)?;

        let titles = Self::string_column(&projected, "title")?;
        let abstracts = Self::string_column(&projected, "abstract")?;
        let publish_times = Self::string_column(&projected, "publish_time")?;
        let authors = Self::string_column(&projected, "authors")?;
        let journals = Self::string_column(&projected, "journal")?;
        let sources = Self::string_column(&projected, "source_x")?;

        let mut report = CleaningReport {
            rows_in: projected.height(),
            ..Default::default()
        };
        let mut records = Vec::with_capacity(projected.height());

        for i in 0..projected.height() {
            let (Some(title), Some(raw_time)) =
                (non_blank(titles.get(i)), non_blank(publish_times.get(i)))
            else {
                report.dropped_missing += 1;
                continue;
            };

            let abstract_text = abstracts.get(i).unwrap_or_default().to_string();
            let journal = non_blank(journals.get(i))
                .unwrap_or(UNKNOWN_JOURNAL)
                .to_string();

            let Some(publish_time) = parse_publish_time(raw_time) else {
                report.dropped_unparseable_date += 1;
                continue;
            };

            records.push(Paper::new(
                title.to_string(),
                abstract_text,
                publish_time,
                optional(authors.get(i)),
                journal,
                optional(sources.get(i)),
            ));
        }

        report.rows_out = records.len();

        if report.dropped_unparseable_date > 0 {
            warn!(
                rows = report.dropped_unparseable_date,
                "dropped rows with unparseable publish_time"
            );
        }
        info!(
            rows_in = report.rows_in,
            dropped_missing = report.dropped_missing,
            rows_out = report.rows_out,
            "cleaned dataset"
        );

        Ok((PaperTable::new(records), report))
    }

    /// Keep only the required columns.
    fn project(df: &DataFrame) -> Result<DataFrame, CleanError> {
        let names = df.get_column_names();
        for required in REQUIRED_COLUMNS {
            if !names.iter().any(|n| n.as_str() == required) {
                return Err(CleanError::MissingColumn(required.to_string()));
            }
        }
        Ok(df.select(REQUIRED_COLUMNS)?)
    }

    fn string_column(df: &DataFrame, name: &str) -> Result<StringChunked, CleanError> {
        let column = df.column(name)?.cast(&DataType::String)?;
        Ok(column.str()?.clone())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn optional(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
