//! High-level, ergonomic library API: classify a review CSV to an output
//! file, or classify texts in memory. Prefer these entrypoints over the
//! low-level `core` modules when embedding REVTRIAGE.
use std::path::Path;

use crate::cohere::ChatModel;
use crate::core::classify::pipeline::{RunReport, classify_reviews};
use crate::core::params::ClassifyParams;
use crate::error::{Error, Result};
use crate::io::reviews::ReviewsReader;
use crate::io::writers::write_classified_csv;
use crate::types::ClassifiedReview;

/// Classify every review in `input` and write the annotated table to
/// `output`, overwriting it. The input column check happens before any
/// network call, and nothing is written until every row has been
/// classified; the first transport or API error aborts the run with no
/// output file produced.
pub fn classify_file_to_path(
    input: &Path,
    output: &Path,
    params: &ClassifyParams,
    model: &dyn ChatModel,
) -> Result<RunReport> {
    let reader = ReviewsReader::open(input, &params.review_column)?;
    let reviews = reader.into_reviews();

    let (results, report) = classify_reviews(model, params, &reviews)?;

    write_classified_csv(output, &results).map_err(Error::from)?;

    Ok(report)
}

/// Classify texts already in memory (no file I/O).
pub fn classify_texts(
    texts: &[String],
    params: &ClassifyParams,
    model: &dyn ChatModel,
) -> Result<(Vec<ClassifiedReview>, RunReport)> {
    classify_reviews(model, params, texts)
}
