//! CSV Data Loader Module
//! Handles CSV file loading using Polars. Every column is read as text; typing
//! happens later in the cleaner.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Reads the metadata CSV into a raw DataFrame.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file with all original columns and rows intact.
    pub fn load_csv(file_path: &Path) -> Result<DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::FileNotFound(file_path.to_path_buf()));
        }

        debug!(path = %file_path.display(), "reading CSV");

        // Schema inference length 0 keeps every column as String
        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        info!(
            path = %file_path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded CSV"
        );
        Ok(df)
    }

    /// Get list of column names from a DataFrame.
    pub fn get_columns(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}
