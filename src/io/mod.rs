//! I/O layer for reading review tables and writing classified output.
//! Provides the `reviews` CSV loader and `writers` for the annotated
//! output table.
pub mod reviews;
pub use reviews::{ReviewsError, ReviewsReader};

pub mod writers;
