//! Stats module - Summaries over the cleaned table

mod aggregator;
mod overview;

pub use aggregator::{
    top_journals, yearly_counts, yearly_mean_word_count, JournalCount, Summary, YearCount,
    YearMean, DEFAULT_TOP_N,
};
pub use overview::{RawOverview, WordCountStats};
