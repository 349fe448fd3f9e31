//! Data module - CSV loading, cleaning and filtering

mod cache;
mod cleaner;
mod filter;
mod loader;
mod record;

pub use cache::{load_dataset, Dataset, DatasetError};
pub use cleaner::{CleanError, CleaningReport, DataCleaner, REQUIRED_COLUMNS};
pub use filter::{filter_by_year, YearRange, DEFAULT_YEAR_RANGE};
pub use loader::{DataLoader, LoaderError};
pub use record::{count_words, parse_publish_time, Paper, PaperTable, UNKNOWN_JOURNAL};
