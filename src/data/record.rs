//! Paper Record Module
//! Typed rows of the cleaned table plus the field-level parsing helpers.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Journal name used when the source row has none.
pub const UNKNOWN_JOURNAL: &str = "Unknown";

/// One cleaned row of paper metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Paper {
    pub title: String,
    pub abstract_text: String,
    pub publish_time: NaiveDate,
    pub authors: Option<String>,
    pub journal: String,
    pub source_x: Option<String>,
    pub year: i32,
    pub abstract_word_count: usize,
}

impl Paper {
    /// Build a record from already-validated fields, deriving `year` and
    /// `abstract_word_count`.
    pub fn new(
        title: String,
        abstract_text: String,
        publish_time: NaiveDate,
        authors: Option<String>,
        journal: String,
        source_x: Option<String>,
    ) -> Self {
        let year = publish_time.year();
        let abstract_word_count = count_words(&abstract_text);
        Self {
            title,
            abstract_text,
            publish_time,
            authors,
            journal,
            source_x,
            year,
            abstract_word_count,
        }
    }
}

/// Immutable, ordered set of cleaned papers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaperTable {
    records: Vec<Paper>,
}

impl PaperTable {
    pub fn new(records: Vec<Paper>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Paper] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First `n` rows, in table order.
    pub fn head(&self, n: usize) -> &[Paper] {
        &self.records[..n.min(self.records.len())]
    }

    /// Smallest and largest year in the table, `None` when empty.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|p| p.year).min()?;
        let max = self.records.iter().map(|p| p.year).max()?;
        Some((min, max))
    }

    /// Missing-value count per optional field. Only authors and source_x can
    /// be missing once a row has been cleaned.
    pub fn missing_counts(&self) -> Vec<(&'static str, usize)> {
        let authors = self.records.iter().filter(|p| p.authors.is_none()).count();
        let source_x = self.records.iter().filter(|p| p.source_x.is_none()).count();
        vec![
            ("title", 0),
            ("abstract", 0),
            ("publish_time", 0),
            ("authors", authors),
            ("journal", 0),
            ("source_x", source_x),
        ]
    }
}

/// Number of whitespace-separated tokens, 0 for an empty string.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y %b %d",
    "%d %B %Y",
    "%d %b %Y",
    "%m/%d/%Y",
];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a publish_time cell into a calendar date.
///
/// Returns `None` for anything that is not a recognised date, so a bad cell
/// only drops its own row.
pub fn parse_publish_time(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    // Partial dates resolve to the first day of the period
    for (fmt, suffix) in [("%Y-%m-%d", "-01"), ("%Y %b %d", " 01")] {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{value}{suffix}"), fmt) {
            return Some(date);
        }
    }

    if value.len() == 4 && value.chars().all(|c| c.is_ascii_digit()) {
        let year: i32 = value.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    None
}
