//! Shared types used across REVTRIAGE.
//! Includes the classification vocabulary (`Category`, `Sentiment`), the
//! tagged per-review outcome (`ClassificationOutcome`), and the output
//! record (`ClassifiedReview`).
use serde::{Deserialize, Serialize};

/// Feedback categories offered to the model. The model's answer is kept
/// verbatim in the output; this vocabulary drives the prompt and the
/// fallback default.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Category {
    Praise,
    BugCrash,
    SubscriptionPrice,
    FeatureRequest,
    Usability,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Praise,
        Category::BugCrash,
        Category::SubscriptionPrice,
        Category::FeatureRequest,
        Category::Usability,
        Category::Other,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Category::Praise => "Praise",
            Category::BugCrash => "Bug/Crash",
            Category::SubscriptionPrice => "Subscription/Price",
            Category::FeatureRequest => "Feature Request",
            Category::Usability => "Usability",
            Category::Other => "Other",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        };
        write!(f, "{}", s)
    }
}

/// Severity assigned when the model response could not be parsed: the
/// middle of the 1-5 scale.
pub const FALLBACK_SEVERITY: i64 = 3;

/// The four model-produced fields. Every field is optional: a valid JSON
/// object missing keys, or carrying the wrong value type for a key, is
/// accepted with those fields absent. Values are never range-checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Option<String>,
    pub sentiment: Option<String>,
    pub severity: Option<i64>,
    pub summary: Option<String>,
}

/// Outcome of parsing one model response.
///
/// `Parsed` means the response was valid JSON and its fields are taken
/// verbatim. `Fallback` means it was not, and the row renders with the
/// default vocabulary values and the raw text as its summary. Keeping the
/// two cases distinct lets callers tell structured output from a guess.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationOutcome {
    Parsed(Classification),
    Fallback { raw: String },
}

impl ClassificationOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ClassificationOutcome::Fallback { .. })
    }

    /// Category cell for the output table.
    pub fn category(&self) -> String {
        match self {
            ClassificationOutcome::Parsed(c) => c.category.clone().unwrap_or_default(),
            ClassificationOutcome::Fallback { .. } => Category::Other.to_string(),
        }
    }

    /// Sentiment cell for the output table.
    pub fn sentiment(&self) -> String {
        match self {
            ClassificationOutcome::Parsed(c) => c.sentiment.clone().unwrap_or_default(),
            ClassificationOutcome::Fallback { .. } => Sentiment::Neutral.to_string(),
        }
    }

    /// Severity cell for the output table; empty when the model omitted it.
    pub fn severity(&self) -> String {
        match self {
            ClassificationOutcome::Parsed(c) => {
                c.severity.map(|s| s.to_string()).unwrap_or_default()
            }
            ClassificationOutcome::Fallback { .. } => FALLBACK_SEVERITY.to_string(),
        }
    }

    /// Summary cell for the output table. For fallbacks this is the raw
    /// response text, which is the only trace of what the model said.
    pub fn summary(&self) -> String {
        match self {
            ClassificationOutcome::Parsed(c) => c.summary.clone().unwrap_or_default(),
            ClassificationOutcome::Fallback { raw } => raw.clone(),
        }
    }
}

/// One fully processed review: the source text, the parse outcome, and the
/// model's response text exactly as returned (auditability column).
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedReview {
    pub review: String,
    pub outcome: ClassificationOutcome,
    pub raw_response: String,
}
