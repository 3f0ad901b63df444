#![doc = r#"
REVTRIAGE — classify App Store reviews with a hosted language model.

This crate reads customer reviews from a CSV file, sends each review to the
Cohere v2 chat endpoint for classification (category, sentiment, severity,
summary), and writes the annotated results to an output CSV. It powers the
REVTRIAGE CLI and can be embedded in your own Rust applications.

Requirements
------------
- A `COHERE_API_KEY` environment variable; a missing key aborts before any
  file or network I/O.
- An input CSV with a column holding the review text (`review` by default).

Quick start: classify a CSV to a file
-------------------------------------
```rust,no_run
use std::path::Path;
use revtriage::{ClassifyParams, CohereClient, classify_file_to_path};

fn main() -> revtriage::Result<()> {
    let params = ClassifyParams::default();
    let client = CohereClient::from_env(params.model.as_str())
        .map_err(revtriage::Error::from)?;

    let report = classify_file_to_path(
        Path::new("reviews.csv"),
        Path::new("classified_reviews.csv"),
        &params,
        &client,
    )?;

    println!("total={} parsed={} fallback={}", report.total, report.parsed, report.fallback);
    Ok(())
}
```

Classify in-memory texts
------------------------
```rust,no_run
use revtriage::{ClassifyParams, CohereClient, classify_texts};

fn main() -> revtriage::Result<()> {
    let params = ClassifyParams::default();
    let client = CohereClient::from_env(params.model.as_str())
        .map_err(revtriage::Error::from)?;

    let texts = vec!["Great app but crashes on launch".to_string()];
    let (rows, _report) = classify_texts(&texts, &params, &client)?;

    for row in rows {
        println!("{} -> {}", row.review, row.outcome.category());
    }
    Ok(())
}
```

Outcome handling
----------------
Every model response is parsed strictly as JSON. A response that is not
valid JSON becomes a tagged [`ClassificationOutcome::Fallback`] rendering
as category="Other", sentiment="Neutral", severity=3, and the raw response
text as the summary, so callers can still tell structured output from a
guess. Valid JSON is taken verbatim, including out-of-range severities and
missing keys.

Error handling
--------------
All public functions return `revtriage::Result<T>`; match on
`revtriage::Error` to handle specific cases, e.g. reader or Cohere errors.
Transport and API errors are never retried: the first one aborts the run
and no output file is written.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — the classification vocabulary and outcome types.
- [`cohere`] — the blocking Cohere chat client and the `ChatModel` seam.
- [`io`] — CSV reader and writer.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod cohere;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::ClassifyParams;
pub use error::{Error, Result};
pub use types::{
    Category, Classification, ClassificationOutcome, ClassifiedReview, FALLBACK_SEVERITY,
    Sentiment,
};

// Remote model client
pub use cohere::{ChatModel, CohereClient, CohereError, DEFAULT_MODEL};

// Readers and writers
pub use io::reviews::{ReviewsError, ReviewsReader};
pub use io::writers::{OUTPUT_COLUMNS, write_classified_csv};

// High-level API re-exports
pub use api::{classify_file_to_path, classify_texts};
pub use core::classify::pipeline::RunReport;
