//! Single-turn instruction sent to the model for every review.
use std::fmt::Write;

use crate::types::{Category, Sentiment};

/// Build the classification instruction with `review_text` embedded
/// verbatim. The prompt enumerates the allowed categories and sentiments,
/// fixes the 1-5 severity scale, and demands a strict JSON answer with the
/// four expected keys.
pub fn build_prompt(review_text: &str) -> String {
    let mut categories = String::new();
    for category in Category::ALL {
        let _ = writeln!(categories, "   - {}", category);
    }
    let sentiments = Sentiment::ALL
        .map(|s| s.to_string())
        .join(", ");

    format!(
        r#"You are an expert Product Manager assistant. Analyze the following App Store review and produce:

1. Category (choose one):
{categories}
2. Sentiment: {sentiments}.

3. Severity (1-5):
   1 = trivial
   3 = moderate
   5 = critical issue requiring immediate attention.

4. Summary for a PM (1-2 clear sentences).

Respond strictly in valid JSON with keys:
category, sentiment, severity, summary

Review:
"""{review_text}"""
"#
    )
}
