use clap::Parser;
use std::path::PathBuf;

use revtriage::cohere::DEFAULT_MODEL;

#[derive(Parser)]
#[command(name = "revtriage", version, about = "REVTRIAGE CLI")]
pub struct CliArgs {
    /// Input CSV containing the reviews to classify
    #[arg(short, long, default_value = "reviews.csv")]
    pub input: PathBuf,

    /// Output CSV for the annotated reviews (overwritten if present)
    #[arg(short, long, default_value = "classified_reviews.csv")]
    pub output: PathBuf,

    /// Model identifier sent with every request
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Input column holding the review text
    #[arg(long, default_value = "review")]
    pub column: String,

    /// Maximum generated tokens per response
    #[arg(long, default_value_t = 300)]
    pub max_tokens: u32,

    /// Sampling temperature (low values keep output near-deterministic)
    #[arg(long, default_value_t = 0.2)]
    pub temperature: f32,

    /// Fixed pause after every model call, in milliseconds
    #[arg(long, default_value_t = 200)]
    pub sleep_ms: u64,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
