//! Sequential per-review pipeline over a `ChatModel`.
use std::thread;

use tracing::{debug, info, warn};

use crate::cohere::ChatModel;
use crate::core::classify::parse::parse_model_output;
use crate::core::classify::prompt::build_prompt;
use crate::core::params::ClassifyParams;
use crate::error::Result;
use crate::types::ClassifiedReview;

/// Outcome counts for one full run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub total: usize,
    pub parsed: usize,
    pub fallback: usize,
}

/// Classify one review: one network call, one strict parse, then the
/// unconditional fixed pause. The pause applies even when the response
/// fell back, matching the self-imposed rate limit of one call per
/// `sleep_between_calls`.
pub fn classify_review(
    model: &dyn ChatModel,
    params: &ClassifyParams,
    review_text: &str,
) -> Result<ClassifiedReview> {
    let prompt = build_prompt(review_text);
    let raw_response = model.generate(&prompt, params.max_tokens, params.temperature)?;
    let outcome = parse_model_output(&raw_response);

    if outcome.is_fallback() {
        warn!("Model response was not valid JSON; using fallback record");
        debug!("Unparsed response: {}", raw_response);
    }

    if !params.sleep_between_calls.is_zero() {
        thread::sleep(params.sleep_between_calls);
    }

    Ok(ClassifiedReview {
        review: review_text.to_string(),
        outcome,
        raw_response,
    })
}

/// Classify every review in order, appending to an in-memory list.
///
/// Any transport or API error aborts the whole run; rows classified
/// before the failure are discarded with it, since nothing is written
/// until the caller serializes the returned list.
pub fn classify_reviews(
    model: &dyn ChatModel,
    params: &ClassifyParams,
    reviews: &[String],
) -> Result<(Vec<ClassifiedReview>, RunReport)> {
    let total = reviews.len();
    let mut results = Vec::with_capacity(total);
    let mut report = RunReport {
        total,
        ..RunReport::default()
    };

    for (idx, review_text) in reviews.iter().enumerate() {
        info!("[{}/{}] Processing: {}", idx + 1, total, preview(review_text));

        let classified = classify_review(model, params, review_text)?;
        if classified.outcome.is_fallback() {
            report.fallback += 1;
        } else {
            report.parsed += 1;
        }
        results.push(classified);
    }

    Ok((results, report))
}

/// First 80 characters of the review for progress logging.
fn preview(text: &str) -> String {
    let mut short: String = text.chars().take(80).collect();
    if short.len() < text.len() {
        short.push_str("...");
    }
    short
}
