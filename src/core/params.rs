use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cohere::DEFAULT_MODEL;

/// Column expected to hold the review text when none is configured.
pub const DEFAULT_REVIEW_COLUMN: &str = "review";

/// Classification parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyParams {
    /// Model identifier sent with every request
    pub model: String,
    /// Upper bound on generated tokens per response
    pub max_tokens: u32,
    /// Sampling temperature; low values keep the output near-deterministic
    pub temperature: f32,
    /// Unconditional pause after every call, the only throttling applied
    pub sleep_between_calls: Duration,
    /// Input column holding the review text
    pub review_column: String,
}

impl Default for ClassifyParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 300,
            temperature: 0.2,
            sleep_between_calls: Duration::from_millis(200),
            review_column: DEFAULT_REVIEW_COLUMN.to_string(),
        }
    }
}
