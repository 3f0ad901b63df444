//! Per-review classification: prompt template (`prompt`), strict JSON
//! parsing with tagged fallback (`parse`), and the sequential pipeline
//! over a `ChatModel` (`pipeline`).
pub mod parse;
pub mod pipeline;
pub mod prompt;

pub use parse::parse_model_output;
pub use pipeline::{RunReport, classify_review, classify_reviews};
pub use prompt::build_prompt;
