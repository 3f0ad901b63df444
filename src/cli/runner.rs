use std::time::Duration;

use tracing::info;

use revtriage::api::classify_file_to_path;
use revtriage::cohere::CohereClient;
use revtriage::core::params::ClassifyParams;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    // Credential check comes first: a missing key must abort before any
    // file or network I/O.
    let client = CohereClient::from_env(args.model.as_str()).map_err(AppError::from)?;

    let params = ClassifyParams {
        model: args.model,
        max_tokens: args.max_tokens,
        temperature: args.temperature,
        sleep_between_calls: Duration::from_millis(args.sleep_ms),
        review_column: args.column,
    };

    info!("Classifying reviews from {:?}", args.input);

    let report = classify_file_to_path(&args.input, &args.output, &params, &client)?;

    info!(
        "Done! Classified {} reviews ({} parsed, {} fallback) -> {:?}",
        report.total, report.parsed, report.fallback, args.output
    );

    Ok(())
}
