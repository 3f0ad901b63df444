//! CSV loader for input reviews.
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// Errors encountered when reading the input table
#[derive(Debug, Error)]
pub enum ReviewsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Input CSV must have a `{column}` column")]
    MissingColumn { column: String },
}

/// Eagerly-loaded review table.
///
/// The whole file is read at open time; the only validation performed is
/// that the configured column exists in the header. Every other column is
/// ignored, and cell contents are kept as-is apart from whitespace
/// trimming.
#[derive(Debug)]
pub struct ReviewsReader {
    path: PathBuf,
    reviews: Vec<String>,
}

impl ReviewsReader {
    /// Open `path` and collect the `column` cell of every row, in file
    /// order. Fails with `MissingColumn` before reading any row when the
    /// header lacks `column`.
    pub fn open(path: &Path, column: &str) -> Result<Self, ReviewsError> {
        let mut reader = csv::Reader::from_path(path)?;

        let headers = reader.headers()?;
        let review_idx = headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| ReviewsError::MissingColumn {
                column: column.to_string(),
            })?;

        let mut reviews = Vec::new();
        for record in reader.records() {
            let record = record?;
            let cell = record.get(review_idx).unwrap_or_default();
            reviews.push(cell.trim().to_string());
        }

        info!("Loaded {} reviews from {:?}", reviews.len(), path);

        Ok(Self {
            path: path.to_path_buf(),
            reviews,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Review texts in input order.
    pub fn reviews(&self) -> &[String] {
        &self.reviews
    }

    pub fn into_reviews(self) -> Vec<String> {
        self.reviews
    }
}
