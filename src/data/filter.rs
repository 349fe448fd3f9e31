//! Year Filter Module

use crate::data::record::PaperTable;
use tracing::debug;

/// Sub-range preselected in interactive mode.
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (2015, 2021);

/// Inclusive range of publication years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub lo: i32,
    pub hi: i32,
}

impl YearRange {
    /// Create a range; reversed bounds are swapped so that `lo <= hi` holds.
    pub fn new(lo: i32, hi: i32) -> Self {
        Self {
            lo: lo.min(hi),
            hi: lo.max(hi),
        }
    }

    /// The default 2015-2021 range clamped into the data bounds.
    pub fn default_within(bounds: (i32, i32)) -> Self {
        let (min, max) = (bounds.0.min(bounds.1), bounds.0.max(bounds.1));
        let (lo, hi) = DEFAULT_YEAR_RANGE;
        Self::new(lo.clamp(min, max), hi.clamp(min, max))
    }

    pub fn contains(&self, year: i32) -> bool {
        self.lo <= year && year <= self.hi
    }
}

/// Rows whose year lies in `range`, in their original order.
pub fn filter_by_year(table: &PaperTable, range: YearRange) -> PaperTable {
    let records: Vec<_> = table
        .records()
        .iter()
        .filter(|p| range.contains(p.year))
        .cloned()
        .collect();

    debug!(lo = range.lo, hi = range.hi, rows = records.len(), "filtered by year");
    PaperTable::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::Paper;
    use chrono::NaiveDate;

    fn table_with_years(years: &[i32]) -> PaperTable {
        PaperTable::new(
            years
                .iter()
                .enumerate()
                .map(|(i, &y)| {
                    Paper::new(
                        format!("paper {i}"),
                        String::new(),
                        NaiveDate::from_ymd_opt(y, 1, 1).unwrap(),
                        None,
                        "J".to_string(),
                        None,
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn keeps_rows_inside_inclusive_range() {
        let table = table_with_years(&[2018, 2019, 2019, 2020]);
        let filtered = filter_by_year(&table, YearRange::new(2019, 2019));
        let titles: Vec<&str> = filtered.records().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["paper 1", "paper 2"]);

        let edges = filter_by_year(&table, YearRange::new(2018, 2020));
        assert_eq!(edges.len(), 4);
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = table_with_years(&[2010, 2016, 2021, 2022, 2017]);
        let range = YearRange::new(2015, 2021);
        let once = filter_by_year(&table, range);
        let twice = filter_by_year(&once, range);
        assert_eq!(once, twice);
        assert_eq!(once.len(), 3);
    }

    #[test]
    fn empty_result_is_valid() {
        let table = table_with_years(&[2001, 2002]);
        let filtered = filter_by_year(&table, YearRange::new(2015, 2021));
        assert!(filtered.is_empty());
    }

    #[test]
    fn default_range_clamps_to_data() {
        assert_eq!(
            YearRange::default_within((1990, 2023)),
            YearRange::new(2015, 2021)
        );
        assert_eq!(
            YearRange::default_within((2017, 2019)),
            YearRange::new(2017, 2019)
        );
        assert_eq!(
            YearRange::default_within((2000, 2005)),
            YearRange::new(2005, 2005)
        );
        assert_eq!(YearRange::new(2021, 2015), YearRange::new(2015, 2021));
    }
}
