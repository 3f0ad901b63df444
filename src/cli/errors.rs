use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reviews reader error: {0}")]
    Reviews(#[from] revtriage::io::ReviewsError),

    #[error("Cohere API error: {0}")]
    Cohere(#[from] revtriage::cohere::CohereError),
}
