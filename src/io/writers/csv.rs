//! CSV writer for classified reviews.
use std::path::Path;

use tracing::info;

use crate::types::ClassifiedReview;

/// Fixed output column order.
pub const OUTPUT_COLUMNS: [&str; 6] = [
    "review",
    "category",
    "sentiment",
    "severity",
    "summary",
    "raw_ai_response",
];

/// Serialize `rows` to `path`, overwriting any existing file. The file is
/// written in one pass at the end of a run; there is no partial-write
/// recovery.
pub fn write_classified_csv(path: &Path, rows: &[ClassifiedReview]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        let record = [
            row.review.clone(),
            row.outcome.category(),
            row.outcome.sentiment(),
            row.outcome.severity(),
            row.outcome.summary(),
            row.raw_response.clone(),
        ];
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!("Wrote {} classified reviews to {:?}", rows.len(), path);
    Ok(())
}
