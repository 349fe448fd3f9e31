//! Dataset Overview Module
//! Descriptive numbers about the raw input and the cleaned word counts.

use crate::data::{DataLoader, PaperTable};
use polars::prelude::*;
use serde::Serialize;
use statrs::statistics::Statistics;

/// Shape and missing values of the raw CSV, before cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawOverview {
    pub rows: usize,
    pub columns: Vec<String>,
    /// (column, null count) in column order.
    pub missing: Vec<(String, usize)>,
}

impl RawOverview {
    pub fn from_frame(df: &DataFrame) -> Self {
        let missing = df
            .get_columns()
            .iter()
            .map(|col| (col.name().to_string(), col.null_count()))
            .collect();

        Self {
            rows: df.height(),
            columns: DataLoader::get_columns(df),
            missing,
        }
    }
}

/// `describe()`-style numbers for abstract_word_count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WordCountStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl WordCountStats {
    /// `None` for an empty table.
    pub fn compute(table: &PaperTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        let values: Vec<f64> = table
            .records()
            .iter()
            .map(|p| p.abstract_word_count as f64)
            .collect();

        let std = if values.len() > 1 {
            values.iter().std_dev()
        } else {
            0.0
        };

        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Some(Self {
            count: values.len(),
            mean: values.iter().mean(),
            std,
            min: Statistics::min(values.iter()),
            q1: percentile(&sorted, 25.0),
            median: percentile(&sorted, 50.0),
            q3: percentile(&sorted, 75.0),
            max: Statistics::max(values.iter()),
        })
    }
}

/// Percentile of sorted values using linear interpolation between closest
/// ranks (the NumPy / pandas default).
fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Paper;
    use chrono::NaiveDate;

    #[test]
    fn raw_overview_counts_nulls_per_column() {
        let df = df!(
            "title" => &[Some("A"), None, Some("C")],
            "journal" => &[None, None, Some("J")]
        )
        .unwrap();

        let overview = RawOverview::from_frame(&df);
        assert_eq!(overview.rows, 3);
        assert_eq!(overview.columns, vec!["title", "journal"]);
        assert_eq!(
            overview.missing,
            vec![("title".to_string(), 1), ("journal".to_string(), 2)]
        );
    }

    #[test]
    fn word_count_stats_describe_the_table() {
        let table = PaperTable::new(
            ["a", "a b", "a b c", "a b c d", "a b c d e"]
                .iter()
                .map(|text| {
                    Paper::new(
                        "t".to_string(),
                        text.to_string(),
                        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                        None,
                        "J".to_string(),
                        None,
                    )
                })
                .collect(),
        );

        let stats = WordCountStats::compute(&table).unwrap();
        assert_eq!(stats.count, 5);
        assert!((stats.mean - 3.0).abs() < 1e-12);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.q3, 4.0);
        assert!((stats.std - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn percentile_interpolates_between_ranks() {
        let sorted = [0.0, 10.0, 20.0, 30.0];
        assert_eq!(percentile(&sorted, 0.0), 0.0);
        assert_eq!(percentile(&sorted, 100.0), 30.0);
        assert!((percentile(&sorted, 25.0) - 7.5).abs() < 1e-12);
        assert!((percentile(&sorted, 50.0) - 15.0).abs() < 1e-12);
        assert!((percentile(&sorted, 75.0) - 22.5).abs() < 1e-12);
        assert_eq!(percentile(&[4.0], 75.0), 4.0);
    }

    #[test]
    fn empty_table_has_no_stats() {
        assert!(WordCountStats::compute(&PaperTable::default()).is_none());
    }
}
