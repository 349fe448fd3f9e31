//! Process-wide memoized dataset.
//! The CSV is loaded and cleaned once; every later caller shares the result.

use crate::data::cleaner::{CleanError, CleaningReport, DataCleaner};
use crate::data::loader::{DataLoader, LoaderError};
use crate::data::record::PaperTable;
use crate::stats::RawOverview;
use once_cell::sync::OnceCell;
use std::path::Path;
use thiserror::Error;

static DATASET: OnceCell<Dataset> = OnceCell::new();

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Clean(#[from] CleanError),
}

/// Cleaned table plus what was learned while building it.
#[derive(Debug)]
pub struct Dataset {
    pub table: PaperTable,
    pub raw_overview: RawOverview,
    pub cleaning: CleaningReport,
}

impl Dataset {
    /// Load and clean `path` without touching the process-wide cache.
    pub fn build(path: &Path) -> Result<Self, DatasetError> {
        let raw = DataLoader::load_csv(path)?;
        let raw_overview = RawOverview::from_frame(&raw);
        let (table, cleaning) = DataCleaner::clean(&raw)?;
        Ok(Self {
            table,
            raw_overview,
            cleaning,
        })
    }
}

/// Shared dataset, built from `path` on first access.
///
/// The input file is treated as immutable for the life of the process, so
/// later calls return the first result regardless of `path`. A failed load is
/// not cached.
pub fn load_dataset(path: &Path) -> Result<&'static Dataset, DatasetError> {
    DATASET.get_or_try_init(|| Dataset::build(path))
}
