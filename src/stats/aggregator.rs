//! Aggregation Module
//! The three summaries shown in both presentation modes.

use crate::data::PaperTable;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Number of journals shown by default.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalCount {
    pub journal: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearMean {
    pub year: i32,
    pub mean: f64,
}

/// Papers per year, ascending by year. Only years present in the table appear.
pub fn yearly_counts(table: &PaperTable) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for paper in table.records() {
        *counts.entry(paper.year).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// The `n` journals with the most papers, descending by count.
///
/// Equal counts keep the order in which the journals first appear in the table.
pub fn top_journals(table: &PaperTable, n: usize) -> Vec<JournalCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<JournalCount> = Vec::new();

    for paper in table.records() {
        let slot = *index.entry(paper.journal.as_str()).or_insert_with(|| {
            counts.push(JournalCount {
                journal: paper.journal.clone(),
                count: 0,
            });
            counts.len() - 1
        });
        counts[slot].count += 1;
    }

    // Stable sort, so first-seen order survives among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

/// Mean abstract word count per year, ascending by year.
pub fn yearly_mean_word_count(table: &PaperTable) -> Vec<YearMean> {
    let mut totals: BTreeMap<i32, (usize, usize)> = BTreeMap::new();
    for paper in table.records() {
        let entry = totals.entry(paper.year).or_default();
        entry.0 += paper.abstract_word_count;
        entry.1 += 1;
    }
    totals
        .into_iter()
        .map(|(year, (sum, n))| YearMean {
            year,
            mean: sum as f64 / n as f64,
        })
        .collect()
}

/// All three summaries over one table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub papers: usize,
    pub yearly_counts: Vec<YearCount>,
    pub top_journals: Vec<JournalCount>,
    pub yearly_mean_word_count: Vec<YearMean>,
}

impl Summary {
    pub fn compute(table: &PaperTable, top_n: usize) -> Self {
        Self {
            papers: table.len(),
            yearly_counts: yearly_counts(table),
            top_journals: top_journals(table, top_n),
            yearly_mean_word_count: yearly_mean_word_count(table),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.papers == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Paper;
    use chrono::NaiveDate;

    fn paper(year: i32, journal: &str, abstract_text: &str) -> Paper {
        Paper::new(
            format!("{journal} {year}"),
            abstract_text.to_string(),
            NaiveDate::from_ymd_opt(year, 3, 1).unwrap(),
            None,
            journal.to_string(),
            None,
        )
    }

    #[test]
    fn yearly_counts_are_sorted_and_sum_to_len() {
        let table = PaperTable::new(vec![
            paper(2020, "X", ""),
            paper(2018, "X", ""),
            paper(2020, "Y", ""),
            paper(2019, "Y", ""),
            paper(2020, "Z", ""),
        ]);

        let counts = yearly_counts(&table);
        assert_eq!(
            counts,
            vec![
                YearCount { year: 2018, count: 1 },
                YearCount { year: 2019, count: 1 },
                YearCount { year: 2020, count: 3 },
            ]
        );
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), table.len());
    }

    #[test]
    fn gaps_between_years_are_not_filled() {
        let table = PaperTable::new(vec![paper(2015, "X", ""), paper(2021, "X", "")]);
        let years: Vec<i32> = yearly_counts(&table).iter().map(|c| c.year).collect();
        assert_eq!(years, vec![2015, 2021]);
    }

    #[test]
    fn top_journal_picks_highest_count() {
        let table = PaperTable::new(vec![
            paper(2020, "X", ""),
            paper(2020, "X", ""),
            paper(2020, "Y", ""),
        ]);
        assert_eq!(
            top_journals(&table, 1),
            vec![JournalCount {
                journal: "X".to_string(),
                count: 2
            }]
        );
    }

    #[test]
    fn top_journals_ties_keep_first_seen_order() {
        let table = PaperTable::new(vec![
            paper(2020, "B", ""),
            paper(2020, "A", ""),
            paper(2020, "C", ""),
            paper(2020, "C", ""),
            paper(2020, "A", ""),
            paper(2020, "B", ""),
            paper(2020, "D", ""),
        ]);
        let names: Vec<String> = top_journals(&table, DEFAULT_TOP_N)
            .into_iter()
            .map(|j| j.journal)
            .collect();
        assert_eq!(names, vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn top_journals_length_is_bounded() {
        let table = PaperTable::new(vec![
            paper(2020, "X", ""),
            paper(2020, "Y", ""),
            paper(2020, "Z", ""),
        ]);
        assert_eq!(top_journals(&table, 2).len(), 2);
        assert_eq!(top_journals(&table, 10).len(), 3);
        let result = top_journals(&table, 10);
        assert!(result.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn yearly_mean_averages_word_counts() {
        let table = PaperTable::new(vec![
            paper(2019, "X", "a b c d"),
            paper(2019, "X", "a b"),
            paper(2020, "X", ""),
            paper(2020, "X", "one"),
        ]);
        let means = yearly_mean_word_count(&table);
        assert_eq!(means.len(), 2);
        assert_eq!(means[0].year, 2019);
        assert!((means[0].mean - 3.0).abs() < 1e-12);
        assert_eq!(means[1].year, 2020);
        assert!((means[1].mean - 0.5).abs() < 1e-12);
    }

    #[test]
    fn empty_table_gives_empty_series() {
        let summary = Summary::compute(&PaperTable::default(), DEFAULT_TOP_N);
        assert!(summary.is_empty());
        assert!(summary.yearly_counts.is_empty());
        assert!(summary.top_journals.is_empty());
        assert!(summary.yearly_mean_word_count.is_empty());
    }
}
